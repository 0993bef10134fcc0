use super::{Game, GameState};
use crate::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An investigator pointing at a card in another player's hand.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    pub game_id: String,
    pub source_player: String,
    pub target_player: String,
    /// 1-based position in the target's hand.
    pub card_number: usize,
}

/// An action proposed by a player.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Take a card from the target's hand and turn it face up.
    PlayCard(CardAction),
    /// Show everyone a card from the target's hand, leaving it there.
    RevealCard(CardAction),
}

impl Action {
    /// Gets the ID of the game this action is meant for.
    pub fn game_id(&self) -> &str {
        match self {
            Action::PlayCard(action) | Action::RevealCard(action) => &action.game_id,
        }
    }
}

impl ToString for Action {
    fn to_string(&self) -> String {
        match self {
            Action::PlayCard(_) => "playCard",
            Action::RevealCard(_) => "revealCard",
        }
        .to_string()
    }
}

impl Game {
    /// Validates and resolves an action, recording it in the game history.
    pub fn resolve(&mut self, action: Action, rng: &mut impl Rng) -> Result<(), GameError> {
        match action {
            Action::PlayCard(action) => self.resolve_play_card(action, rng),
            Action::RevealCard(action) => self.resolve_reveal_card(action, rng),
        }
    }

    /// Called when the investigator takes a card from another player's hand.
    pub fn resolve_play_card(&mut self, action: CardAction, rng: &mut impl Rng) -> Result<(), GameError> {
        self.check_game_id(&action.game_id)?;
        if self.state != GameState::InProgress {
            return Err(GameError::InvalidPhase);
        }
        self.check_card_number(&action.target_player, action.card_number)?;
        self.check_investigator(&action.source_player)?;
        if action.source_player == action.target_player {
            return Err(GameError::InvalidTarget);
        }

        self.play_card(&action.source_player, &action.target_player, action.card_number, rng)?;
        self.history.push(Action::PlayCard(action));
        Ok(())
    }

    /// Called when the investigator reveals a card after a prescient vision.
    /// The card is picked at random; the requested position is ignored.
    pub fn resolve_reveal_card(&mut self, mut action: CardAction, rng: &mut impl Rng) -> Result<(), GameError> {
        self.check_game_id(&action.game_id)?;
        if self.state != GameState::WaitingPrescient {
            return Err(GameError::InvalidPhase);
        }
        let hand_size = self.check_card_number(&action.target_player, action.card_number)?;
        self.check_investigator(&action.source_player)?;

        action.card_number = rng.gen_range(1..=hand_size);
        self.reveal_card(&action.target_player, action.card_number)?;
        self.history.push(Action::RevealCard(action));
        Ok(())
    }

    /// Checks that `card_number` names a card in the target's hand, returning the hand size.
    fn check_card_number(&self, target: &str, card_number: usize) -> Result<usize, GameError> {
        let hand_size = self.player(target)?.hand.len();
        if card_number < 1 || card_number > hand_size {
            return Err(GameError::CardOutOfRange);
        }
        Ok(hand_size)
    }

    fn check_investigator(&self, player: &str) -> Result<(), GameError> {
        if player == self.current_investigator {
            Ok(())
        } else {
            Err(GameError::NotYourTurn)
        }
    }
}
