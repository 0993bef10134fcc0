use super::{player::Secret, Game, GameState};
use crate::error::GameError;
use rand::Rng;

impl Game {
    /// Moves a card from the target's hand onto the table and applies its effect.
    ///
    /// The requested position only counts if the investigator has seen that card through a
    /// prescient vision; otherwise the card is drawn blind.
    pub(super) fn play_card(
        &mut self,
        source: &str,
        target: &str,
        card_number: usize,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        let target_idx = self.find_player(target)?;
        let source_idx = self.find_player(source)?;

        let hand_size = self.players[target_idx].hand.len();
        let pinned = self.players[source_idx].knows_card(target, card_number);
        let card_number = match (pinned, hand_size) {
            (true, _) | (_, 0) => card_number,
            _ => rng.gen_range(1..=hand_size),
        };

        let Some(index) = card_number.checked_sub(1).filter(|i| *i < hand_size) else {
            return Ok(());
        };

        let card = self.players[target_idx].hand.remove(index);
        self.visible_cards.push(card);
        log::debug!(
            "game {}: {} played {} from {} (card {}{})",
            self.id,
            source,
            card.as_str(),
            target,
            card_number,
            if pinned { ", pinned" } else { "" }
        );

        self.apply_effect(card, source_idx, target_idx);
        let round_ended = self.check_round_end();

        self.current_investigator = match &self.paranoid_player {
            Some(paranoid) if !round_ended && self.state != GameState::WaitingPrescient => paranoid.clone(),
            _ => target.to_string(),
        };
        Ok(())
    }

    /// Shows every player the card at `card_number` in the target's hand, leaving it in place.
    pub(super) fn reveal_card(&mut self, target: &str, card_number: usize) -> Result<(), GameError> {
        let target_idx = self.find_player(target)?;
        let hand = &self.players[target_idx].hand;
        let Some(card) = card_number.checked_sub(1).and_then(|i| hand.get(i)).copied() else {
            return Ok(());
        };

        // The card stays face up for the rest of the round
        let secret = Secret::Card {
            player: target.to_string(),
            card,
            card_number,
        };
        for player in self.players.iter_mut() {
            player.secrets.push(secret.clone());
        }
        log::debug!("game {}: revealed {} at card {} of {}", self.id, card.as_str(), card_number, target);

        self.state = GameState::InProgress;
        let round_ended = self.check_round_end();

        // The investigator keeps the flashlight unless someone is paranoid
        if let (Some(paranoid), false) = (&self.paranoid_player, round_ended) {
            self.current_investigator = paranoid.clone();
        }
        Ok(())
    }
}
