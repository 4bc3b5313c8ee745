//! Invariants of guess application and status projection.

use std::collections::BTreeSet;

use hangman::engine::{compute_status, Difficulty, GameSession, PLACEHOLDER};
use proptest::prelude::*;

fn secret() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Mostly single letters, with words and junk mixed in.
fn guess() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-zA-Z]",
        2 => "[a-z]{2,8}",
        1 => "[ a-z0-9!?-]{0,4}",
    ]
}

proptest! {
    #[test]
    fn lives_never_increase_and_guesses_never_shrink(
        secret in secret(),
        lives in 0u32..12,
        guesses in prop::collection::vec(guess(), 0..40),
    ) {
        let mut session = GameSession::new(Difficulty::Normal, &secret).unwrap().with_lives(lives);
        for raw in guesses {
            let lives_before = session.lives();
            let guessed_before = session.guessed().clone();
            let status_before = session.status();

            match session.apply_guess(&raw) {
                Ok(status) => {
                    prop_assert_eq!(status, session.status());
                    prop_assert!(session.lives() <= lives_before);
                    prop_assert!(session.guessed().is_superset(&guessed_before));
                }
                Err(_) => prop_assert_eq!(session.status(), status_before),
            }
        }
    }

    #[test]
    fn repeated_letter_is_idempotent(secret in secret(), letter in "[a-z]") {
        let mut session = GameSession::new(Difficulty::Easy, &secret).unwrap();
        let first = session.apply_guess(&letter).unwrap();
        let second = session.apply_guess(&letter).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn finished_games_are_frozen(
        secret in secret(),
        guesses in prop::collection::vec(guess(), 0..10),
    ) {
        let mut session = GameSession::new(Difficulty::Hard, &secret).unwrap().with_lives(0);
        let frozen = session.status();
        for raw in guesses {
            if let Ok(status) = session.apply_guess(&raw) {
                prop_assert_eq!(&status, &frozen);
            }
        }
        prop_assert_eq!(session.status(), frozen);
    }

    #[test]
    fn masked_reveals_exactly_the_guessed_positions(
        secret in secret(),
        guessed in prop::collection::btree_set(prop::char::range('a', 'z'), 0..26),
    ) {
        let status = compute_status(&secret, &guessed, 3);
        let cells: Vec<&str> = status.masked.split(' ').collect();
        prop_assert_eq!(cells.len(), secret.chars().count());
        for (cell, c) in cells.iter().zip(secret.chars()) {
            if guessed.contains(&c) {
                prop_assert_eq!(*cell, c.to_string());
            } else {
                prop_assert_eq!(*cell, PLACEHOLDER.to_string());
            }
        }
        prop_assert_eq!(status.won, !status.masked.contains(PLACEHOLDER));
    }

    #[test]
    fn wrong_letters_are_sorted_and_absent(
        secret in secret(),
        guessed in prop::collection::btree_set(prop::char::range('a', 'z'), 0..26),
    ) {
        let status = compute_status(&secret, &guessed, 3);
        prop_assert!(status.wrong.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(status.wrong.iter().all(|c| guessed.contains(c) && !secret.contains(*c)));
    }
}

#[test]
fn cat_is_won_with_every_letter() {
    let guessed: BTreeSet<char> = "cat".chars().collect();
    assert!(compute_status("cat", &guessed, 1).won);
}

#[test]
fn cat_is_lost_with_no_lives() {
    assert!(compute_status("cat", &BTreeSet::new(), 0).lost);
}
