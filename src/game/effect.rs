use super::{card::Card, player::Secret, Game, GameState, LAST_ROUND};

impl Game {
    /// Applies the effect of a card that was just turned face up.
    pub(super) fn apply_effect(&mut self, card: Card, source: usize, target: usize) {
        use Card::*;

        match card {
            Cthulhu => {
                if !self.cthulhu_remains() {
                    self.end_game(GameState::CultistsWon);
                }
            }
            ElderSign => {
                let elder_signs = self.visible_cards.iter().filter(|c| **c == ElderSign).count();
                if elder_signs >= self.num_players() {
                    self.end_game(GameState::InvestigatorsWon);
                }
            }
            FutileInvestigation | InsanitysGrasp => {}
            EvilPresence => {
                let hand = std::mem::take(&mut self.players[target].hand);
                self.discards.extend(hand);
            }
            Mirage => {
                // The mirage takes the place of the last elder sign on the table
                if let Some(idx) = self.visible_cards.iter().rposition(|c| *c == ElderSign) {
                    self.discards.push(ElderSign);
                    self.visible_cards[idx] = Mirage;
                    self.visible_cards.pop();
                }
                if self.round == LAST_ROUND {
                    self.end_game(GameState::CultistsWon);
                }
            }
            Paranoia => {
                self.paranoid_player = Some(self.players[target].id.clone());
            }
            PrivateEye => {
                let target = &self.players[target];
                let secret = Secret::Role {
                    player: target.id.clone(),
                    role: target.role,
                };
                self.players[source].secrets.push(secret);
            }
            PrescientVision => {
                self.state = GameState::WaitingPrescient;
            }
        }
    }

    /// Returns whether a copy of Cthulhu is still in someone's hand or the discard pile.
    fn cthulhu_remains(&self) -> bool {
        self.discards.contains(&Card::Cthulhu) || self.players.iter().any(|p| p.holds(Card::Cthulhu))
    }

    pub(super) fn end_game(&mut self, outcome: GameState) {
        log::info!("game {} is over: {}", self.id, outcome.to_string());
        self.state = outcome;
    }
}
