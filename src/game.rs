use crate::error::GameError;
use serde::{Deserialize, Serialize};

pub use self::action::{Action, CardAction};
pub use self::card::Card;
pub use self::player::{Player, Role, Secret};

mod action;
mod card;
mod effect;
mod json;
mod player;
mod round;
mod test;
mod turn;

/// The round on which the investigators run out of time.
pub const LAST_ROUND: usize = 4;

/// A game in progress, as handed to the rules engine by whoever dealt it.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    id: String,
    state: GameState,
    round: usize,
    #[serde(rename = "playerList")]
    players: Vec<Player>,
    #[serde(rename = "currentInvestigatorId")]
    current_investigator: String,
    #[serde(rename = "paranoidPlayerId", default)]
    paranoid_player: Option<String>,
    #[serde(default)]
    visible_cards: Vec<Card>,
    #[serde(default)]
    discards: Vec<Card>,
    #[serde(default)]
    history: Vec<Action>,
}

/// Represents the current phase in the game loop.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// A prescient vision was played; the next action must reveal a card.
    WaitingPrescient,
    InProgress,
    /// Between rounds, waiting for the cards to be dealt again.
    Paused,
    CultistsWon,
    InvestigatorsWon,
}

impl ToString for GameState {
    fn to_string(&self) -> String {
        match self {
            GameState::WaitingPrescient => "WAITING_PRESCIENT",
            GameState::InProgress => "IN_PROGRESS",
            GameState::Paused => "PAUSED",
            GameState::CultistsWon => "CULTISTS_WON",
            GameState::InvestigatorsWon => "INVESTIGATORS_WON",
        }
        .to_string()
    }
}

impl Game {
    /// Creates a game at the start of the first round, with `investigator` holding the flashlight.
    pub fn new(id: impl Into<String>, players: Vec<Player>, investigator: &str) -> Result<Self, GameError> {
        if !players.iter().any(|p| p.id == investigator) {
            return Err(GameError::PlayerNotFound);
        }
        Ok(Game {
            id: id.into(),
            state: GameState::InProgress,
            round: 1,
            players,
            current_investigator: investigator.to_string(),
            paranoid_player: None,
            visible_cards: vec![],
            discards: vec![],
            history: vec![],
        })
    }

    /// Gets the unique game ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn round(&self) -> usize {
        self.round
    }

    /// Gets the player whose turn it is to choose a target.
    pub fn current_investigator(&self) -> &str {
        &self.current_investigator
    }

    pub fn paranoid_player(&self) -> Option<&str> {
        self.paranoid_player.as_deref()
    }

    pub fn visible_cards(&self) -> &[Card] {
        &self.visible_cards
    }

    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Every action resolved so far, oldest first.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Gets the number of players in the game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Finds the index of the player with the given id.
    pub fn find_player(&self, id: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::PlayerNotFound)
    }

    /// Gets the player with the given id.
    pub fn player(&self, id: &str) -> Result<&Player, GameError> {
        self.find_player(id).map(|idx| &self.players[idx])
    }

    /// Returns true if the game is over.
    pub fn game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Gets the team that won the game, if it is over.
    pub fn outcome(&self) -> Option<Role> {
        match self.state {
            GameState::CultistsWon => Some(Role::Cultist),
            GameState::InvestigatorsWon => Some(Role::Investigator),
            _ => None,
        }
    }

    /// Returns whether a particular player has won.
    pub fn player_has_won(&self, player: &str) -> Result<bool, GameError> {
        let player = self.player(player)?;
        Ok(self.outcome() == Some(player.role))
    }

    /// Gets the secrets the given player has learnt so far.
    pub fn secrets(&self, player: &str) -> Result<&[Secret], GameError> {
        self.player(player).map(|p| &p.secrets[..])
    }

    /// Checks a game that was loaded from elsewhere before any action is resolved against it.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=LAST_ROUND).contains(&self.round) {
            return Err(GameError::InvalidRound);
        }
        self.find_player(&self.current_investigator)?;
        if let Some(paranoid) = &self.paranoid_player {
            self.find_player(paranoid)?;
        }
        Ok(())
    }

    /// Returns `Ok` if `game_id` names this game, and an `Err` otherwise.
    fn check_game_id(&self, game_id: &str) -> Result<(), GameError> {
        if self.id == game_id {
            Ok(())
        } else {
            Err(GameError::GameNotFound)
        }
    }
}
