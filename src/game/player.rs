use super::card::Card;
use serde::{Deserialize, Serialize};

/// A game player.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    /// Face-down cards; positions are 1-based when named by an action.
    pub hand: Vec<Card>,
    pub role: Role,
    #[serde(default)]
    pub secrets: Vec<Secret>,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Investigator,
    Cultist,
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Role::Investigator => "Investigator",
            Role::Cultist => "Cultist",
        }
        .to_string()
    }
}

/// Something a player has learnt about the game. Secrets are never forgotten.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Secret {
    /// The card at position `card_number` of `player`'s hand.
    #[serde(rename_all = "camelCase")]
    Card {
        player: String,
        card: Card,
        card_number: usize,
    },
    /// The role of `player`.
    Role { player: String, role: Role },
}

impl Player {
    pub fn new(id: impl Into<String>, role: Role, hand: Vec<Card>) -> Self {
        Self {
            id: id.into(),
            hand,
            role,
            secrets: vec![],
        }
    }

    /// Returns whether this player knows which card sits at `card_number` in `target`'s hand.
    pub fn knows_card(&self, target: &str, card_number: usize) -> bool {
        self.secrets.iter().any(|secret| {
            matches!(secret, Secret::Card { player, card_number: n, .. } if player == target && *n == card_number)
        })
    }

    /// Returns whether this player holds the given card.
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}
