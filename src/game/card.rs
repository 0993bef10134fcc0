use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// A card that can be dealt into a player's hand.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Card {
    /// Wins the game for the cultists once no other copy is left to find.
    Cthulhu,
    /// Enough of these on the table wins the game for the investigators.
    ElderSign,
    FutileInvestigation,
    InsanitysGrasp,
    /// The rest of the target's hand is discarded.
    EvilPresence,
    /// Replaces the most recently revealed elder sign.
    Mirage,
    /// The target must keep the flashlight for the rest of the round.
    Paranoia,
    /// The investigator learns the target's role.
    PrivateEye,
    /// The next action must reveal a card from a hand without playing it.
    PrescientVision,
}

impl Card {
    pub fn as_str(&self) -> &'static str {
        match self {
            Card::Cthulhu => "CTHULHU",
            Card::ElderSign => "ELDER_SIGN",
            Card::FutileInvestigation => "FUTILE_INVESTIGATION",
            Card::InsanitysGrasp => "INSANITYS_GRASP",
            Card::EvilPresence => "EVIL_PRESENCE",
            Card::Mirage => "MIRAGE",
            Card::Paranoia => "PARANOIA",
            Card::PrivateEye => "PRIVATE_EYE",
            Card::PrescientVision => "PRESCIENT_VISION",
        }
    }
}

impl ToString for Card {
    fn to_string(&self) -> String {
        self.as_str().to_string()
    }
}

impl From<Card> for &'static str {
    fn from(card: Card) -> Self {
        card.as_str()
    }
}

impl TryFrom<&str> for Card {
    type Error = GameError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "CTHULHU" => Ok(Card::Cthulhu),
            "ELDER_SIGN" => Ok(Card::ElderSign),
            "FUTILE_INVESTIGATION" => Ok(Card::FutileInvestigation),
            "INSANITYS_GRASP" => Ok(Card::InsanitysGrasp),
            "EVIL_PRESENCE" => Ok(Card::EvilPresence),
            "MIRAGE" => Ok(Card::Mirage),
            "PARANOIA" => Ok(Card::Paranoia),
            "PRIVATE_EYE" => Ok(Card::PrivateEye),
            "PRESCIENT_VISION" => Ok(Card::PrescientVision),
            _ => Err(GameError::InvalidCard),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = GameError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Card::try_from(tag.as_str())
    }
}
