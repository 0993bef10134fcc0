//! Card effect tests

use super::test_utils::*;
use crate::error::GameError;
use crate::game::{Card::*, GameState, Role, Secret};

#[test]
fn test_last_cthulhu_wins_for_cultists() {
    let mut game = create_test_game(vec![blanks(3), vec![Cthulhu], blanks(3)]);
    play(&mut game, "B", 1);

    assert_eq!(game.state(), GameState::CultistsWon);
    assert_eq!(game.outcome(), Some(Role::Cultist));
    assert!(game.player_has_won("B").unwrap());
    assert!(!game.player_has_won("A").unwrap());
}

#[test]
fn test_cthulhu_in_another_hand_does_nothing() {
    let mut game = create_test_game(vec![blanks(3), vec![Cthulhu], vec![Cthulhu, FutileInvestigation]]);
    play(&mut game, "B", 1);

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.visible_cards(), &[Cthulhu]);
    assert!(!game.game_over());
}

#[test]
fn test_cthulhu_in_discards_does_nothing() {
    let mut game = create_test_game(vec![blanks(3), vec![Cthulhu], blanks(3)]);
    game.discards.push(Cthulhu);
    play(&mut game, "B", 1);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn test_enough_elder_signs_win_for_investigators() {
    let mut game = create_test_game(vec![blanks(3), vec![ElderSign], blanks(3)]);
    game.round = 2;
    game.visible_cards = vec![ElderSign, FutileInvestigation, ElderSign];
    play(&mut game, "B", 1);

    assert_eq!(game.state(), GameState::InvestigatorsWon);
    assert!(game.player_has_won("A").unwrap());
    assert!(!game.player_has_won("B").unwrap());

    // Nothing more can be played once the game is over
    let result = game.resolve_play_card(action("B", "C", 1), &mut rng());
    assert_eq!(result, Err(GameError::InvalidPhase));
    assert_eq!(game.state(), GameState::InvestigatorsWon);
}

#[test]
fn test_too_few_elder_signs_do_nothing() {
    let mut game = create_test_game(vec![blanks(3), vec![ElderSign], blanks(3)]);
    game.visible_cards = vec![ElderSign];
    play(&mut game, "B", 1);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn test_elder_sign_win_beats_round_end() {
    let mut game = create_test_game(vec![blanks(3), vec![ElderSign], blanks(3)]);
    game.visible_cards = vec![ElderSign, ElderSign];
    play(&mut game, "B", 1);
    assert_eq!(game.state(), GameState::InvestigatorsWon);
}

#[test]
fn test_blank_cards_only_become_visible() {
    let mut game = create_test_game(vec![blanks(3), vec![InsanitysGrasp], blanks(3)]);
    play(&mut game, "B", 1);
    assert_eq!(game.visible_cards(), &[InsanitysGrasp]);
    assert!(game.discards().is_empty());
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn test_evil_presence_discards_target_hand() {
    let mut game = create_test_game(vec![
        blanks(3),
        vec![EvilPresence, ElderSign, InsanitysGrasp],
        blanks(3),
    ]);
    pin_card(&mut game, "A", "B", 1);
    play(&mut game, "B", 1);

    assert_eq!(game.visible_cards(), &[EvilPresence]);
    assert!(hand(&game, "B").is_empty());
    assert_eq!(game.discards(), &[ElderSign, InsanitysGrasp]);
    assert_eq!(hand(&game, "C").len(), 3);
}

#[test]
fn test_mirage_replaces_last_elder_sign() {
    let mut game = create_test_game(vec![blanks(3), vec![Mirage], blanks(3)]);
    game.round = 2;
    game.visible_cards = vec![ElderSign, FutileInvestigation, ElderSign, InsanitysGrasp];
    play(&mut game, "B", 1);

    assert_eq!(
        game.visible_cards(),
        &[ElderSign, FutileInvestigation, Mirage, InsanitysGrasp]
    );
    assert_eq!(game.discards(), &[ElderSign]);
    assert!(hand(&game, "B").is_empty());
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn test_mirage_without_elder_sign_stays_visible() {
    let mut game = create_test_game(vec![blanks(3), vec![Mirage], blanks(3)]);
    game.visible_cards = vec![FutileInvestigation];
    play(&mut game, "B", 1);

    assert_eq!(game.visible_cards(), &[FutileInvestigation, Mirage]);
    assert!(game.discards().is_empty());
}

#[test]
fn test_mirage_on_last_round_wins_for_cultists() {
    let mut game = create_test_game(vec![blanks(3), vec![Mirage], blanks(3)]);
    game.round = 4;
    game.visible_cards = vec![FutileInvestigation; 9];
    game.visible_cards.push(ElderSign);
    play(&mut game, "B", 1);

    assert_eq!(game.state(), GameState::CultistsWon);
    assert_eq!(game.visible_cards().len(), 10);
}

#[test]
fn test_paranoia_marks_target() {
    let mut game = create_test_game(vec![blanks(3), vec![Paranoia, Paranoia], blanks(3)]);
    play(&mut game, "B", 1);

    assert_eq!(game.paranoid_player(), Some("B"));
    assert_eq!(game.current_investigator(), "B");
}

#[test]
fn test_private_eye_reveals_role_to_source_only() {
    let mut game = create_test_game(vec![blanks(3), vec![PrivateEye], blanks(3)]);
    play(&mut game, "B", 1);

    assert_eq!(
        game.secrets("A").unwrap(),
        &[Secret::Role {
            player: "B".to_string(),
            role: Role::Cultist
        }]
    );
    assert!(game.secrets("B").unwrap().is_empty());
    assert!(game.secrets("C").unwrap().is_empty());
}

#[test]
fn test_prescient_vision_waits_for_reveal() {
    let mut game = create_test_game(vec![blanks(3), vec![PrescientVision], blanks(3)]);
    play(&mut game, "B", 1);

    assert_eq!(game.state(), GameState::WaitingPrescient);
    assert_eq!(game.current_investigator(), "B");

    let result = game.resolve_play_card(action("B", "C", 1), &mut rng());
    assert_eq!(result, Err(GameError::InvalidPhase));
}
