use super::Game;
use crate::error::GameError;
use serde_json::{json, Value};

impl Game {
    /// Gets what everyone at the table can see.
    pub fn get_board_json(&self) -> Value {
        json!({
            "id": self.id,
            "state": self.state,
            "round": self.round,
            "players": self.get_players_json(),
            "currentInvestigatorId": self.current_investigator,
            "paranoidPlayerId": self.paranoid_player,
            "visibleCards": self.visible_cards,
            "numDiscards": self.discards.len(),
            "outcome": self.outcome(),
        })
    }

    /// Gets what a single player can see: the table, plus their own role and secrets.
    pub fn get_player_json(&self, player: &str) -> Result<Value, GameError> {
        let player = self.player(player)?;

        let mut board = self.get_board_json();
        board["player"] = json!({
            "id": player.id,
            "role": player.role,
            "handSize": player.hand.len(),
            "secrets": player.secrets,
            "isInvestigator": player.id == self.current_investigator,
            "hasWon": self.outcome() == Some(player.role),
        });
        Ok(board)
    }

    fn get_players_json(&self) -> Value {
        self.players
            .iter()
            .map(|player| {
                json!({
                    "id": player.id,
                    "handSize": player.hand.len(),
                    "isParanoid": self.paranoid_player.as_deref() == Some(player.id.as_str()),
                })
            })
            .collect()
    }
}
