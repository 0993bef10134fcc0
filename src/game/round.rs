use super::{Game, GameState, LAST_ROUND};

impl Game {
    /// Ends the round once every player has had a card turned face up for each round played,
    /// returning `true` if the round ended.
    pub(super) fn check_round_end(&mut self) -> bool {
        if self.state != GameState::InProgress {
            return false;
        }
        if self.num_players().checked_mul(self.round) != Some(self.visible_cards.len()) {
            return false;
        }

        if self.round == LAST_ROUND {
            self.end_game(GameState::CultistsWon);
        } else {
            log::info!("game {}: round {} is over", self.id, self.round);
            self.state = GameState::Paused;
            self.paranoid_player = None;
        }
        true
    }
}
