/*
matching.rs

Copyright 2025 Hervé Quatremain

This file is part of Flagcap.

Flagcap is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Flagcap is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Flagcap. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! The flags-and-capitals matching game.
//!
//! The player selects a flag, then the capital they believe belongs to it.
//! A correct pairing removes both items from the board and records a
//! [`MatchLink`] for the presentation layer. Clearing every pair of a stage
//! advances to the next stage and resets the lives; clearing the last stage
//! wins the session. A wrong pairing costs one life, and reaching zero
//! lives ends the whole session in failure. The session is not retried:
//! this is the designed behavior, not a bug.
//!
//! Stage progression is an explicit index kept by the engine, so the
//! current stage is always inspectable.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::game::{AnswerOutcome, Outcome};
use crate::stages::{Stage, StageError};

/// Number of lives the player gets at the start of each stage.
pub const STAGE_LIVES: u32 = 2;

/// A resolved pairing, kept so that the presentation layer can draw the
/// connecting line between the two endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchLink {
    /// Country side of the pairing.
    pub country: String,

    /// Capital side of the pairing.
    pub capital: String,
}

/// Manage the status of a matching session in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct MatchingGame {
    /// Stage data, in play order.
    stages: Vec<Stage>,

    /// Index of the stage being played.
    stage_index: usize,

    /// Countries still displayed on the flag side, in stage order.
    remaining_flags: Vec<String>,

    /// Capitals still displayed on the capital side, shuffled at stage
    /// start.
    remaining_capitals: Vec<String>,

    /// Country of the selected flag. At most one selection is pending at a
    /// time.
    selected: Option<String>,

    /// Pairings resolved in the current stage.
    links: Vec<MatchLink>,

    /// Remaining mistakes before the session fails.
    lives: u32,

    /// Number of correct pairings over the whole session.
    score: u32,

    /// Session outcome.
    outcome: Outcome,
}

impl MatchingGame {
    /// Create a [`MatchingGame`] object and start its first stage.
    ///
    /// # Errors
    ///
    /// The method returns an error when the stage list is empty.
    pub fn new<R>(stages: &[Stage], rng: &mut R) -> Result<Self, StageError>
    where
        R: Rng + ?Sized,
    {
        let mut game: Self = Self {
            stages: stages.to_vec(),
            stage_index: 0,
            remaining_flags: Vec::new(),
            remaining_capitals: Vec::new(),
            selected: None,
            links: Vec::new(),
            lives: STAGE_LIVES,
            score: 0,
            outcome: Outcome::InProgress,
        };
        game.start_stage(0, rng)?;
        Ok(game)
    }

    /// Set up the board for the given stage and reset the lives.
    ///
    /// # Errors
    ///
    /// The method returns [`StageError::UnknownStage`] when the index is out
    /// of range. This is a programming or data-authoring bug, and the caller
    /// reports it instead of ignoring it.
    pub fn start_stage<R>(&mut self, stage_index: usize, rng: &mut R) -> Result<(), StageError>
    where
        R: Rng + ?Sized,
    {
        let stage: &Stage = self
            .stages
            .get(stage_index)
            .ok_or(StageError::UnknownStage(stage_index))?;

        self.stage_index = stage_index;
        self.remaining_flags = stage.entries.iter().map(|e| e.country.clone()).collect();
        self.remaining_capitals = stage.entries.iter().map(|e| e.capital.clone()).collect();
        self.remaining_capitals.shuffle(rng);
        self.selected = None;
        self.links.clear();
        self.lives = STAGE_LIVES;
        debug!(
            "Stage {} ({}): {} pairs",
            stage_index + 1,
            stage.name,
            stage.len()
        );
        Ok(())
    }

    /// Select the given flag. Clicking a flag that is not on the board
    /// anymore is ignored; clicking another flag moves the selection.
    ///
    /// Return whether the selection changed.
    pub fn select_flag(&mut self, country: &str) -> bool {
        if self.outcome.is_terminal() || !self.remaining_flags.iter().any(|c| c == country) {
            return false;
        }
        self.selected = Some(country.to_string());
        true
    }

    /// Resolve a capital click against the pending flag selection.
    ///
    /// With no pending selection the click is ignored, like in the original
    /// game where capitals only react once a flag is highlighted.
    pub fn submit_capital<R>(&mut self, capital: &str, rng: &mut R) -> AnswerOutcome
    where
        R: Rng + ?Sized,
    {
        if self.outcome.is_terminal() {
            return AnswerOutcome {
                terminal: true,
                ..AnswerOutcome::ignored()
            };
        }
        let Some(country) = self.selected.clone() else {
            return AnswerOutcome::ignored();
        };
        if !self.remaining_capitals.iter().any(|c| c == capital) {
            return AnswerOutcome::ignored();
        }

        let expected: Option<&str> = self.current_stage().capital_of(&country);
        if expected == Some(capital) {
            self.resolve_pair(&country, capital, rng)
        } else {
            self.resolve_mistake(&country, capital)
        }
    }

    /// Remove a correctly paired flag and capital, and advance the stage or
    /// the session when the board is empty.
    fn resolve_pair<R>(&mut self, country: &str, capital: &str, rng: &mut R) -> AnswerOutcome
    where
        R: Rng + ?Sized,
    {
        self.remaining_flags.retain(|c| c != country);
        self.remaining_capitals.retain(|c| c != capital);
        self.links.push(MatchLink {
            country: country.to_string(),
            capital: capital.to_string(),
        });
        self.selected = None;
        self.score += 1;

        let mut terminal: bool = false;
        if self.remaining_flags.is_empty() {
            if self.stage_index + 1 < self.stages.len() {
                // The stage list was validated at startup, so the next index
                // is always known here.
                if self.start_stage(self.stage_index + 1, rng).is_err() {
                    self.outcome = Outcome::Lost;
                    terminal = true;
                }
            } else {
                debug!("Last stage cleared: session won");
                self.outcome = Outcome::Won;
                terminal = true;
            }
        }
        AnswerOutcome {
            correct: true,
            score_delta: 1,
            lives_delta: 0,
            terminal,
        }
    }

    /// Account for a wrong pairing and fail the session at zero lives.
    fn resolve_mistake(&mut self, country: &str, capital: &str) -> AnswerOutcome {
        debug!("Wrong pairing: {country} / {capital}");
        self.lives = self.lives.saturating_sub(1);
        self.selected = None;

        let terminal: bool = self.lives == 0;
        if terminal {
            self.outcome = Outcome::Lost;
        }
        AnswerOutcome {
            correct: false,
            score_delta: 0,
            lives_delta: 1,
            terminal,
        }
    }

    /// Return the stage being played.
    pub fn current_stage(&self) -> &Stage {
        // stage_index is only ever set by start_stage, which validates it.
        &self.stages[self.stage_index]
    }

    /// Return the index of the stage being played.
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    /// Return the total number of stages.
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Countries still displayed on the flag side.
    pub fn remaining_flags(&self) -> &[String] {
        &self.remaining_flags
    }

    /// Capitals still displayed on the capital side.
    pub fn remaining_capitals(&self) -> &[String] {
        &self.remaining_capitals
    }

    /// Country of the selected flag, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Pairings resolved in the current stage.
    pub fn links(&self) -> &[MatchLink] {
        &self.links
    }

    /// Remaining mistakes before the session fails.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Number of correct pairings over the whole session.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Session outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{self, Entry};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn one_stage() -> Vec<Stage> {
        vec![Stage {
            name: "Test".to_string(),
            entries: vec![
                Entry::new("France", "Paris", "Eiffel Tower"),
                Entry::new("Germany", "Berlin", "Brandenburg Gate"),
                Entry::new("Italy", "Rome", "Colosseum"),
                Entry::new("Spain", "Madrid", "Sagrada Família"),
                Entry::new("UK", "London", "Big Ben"),
            ],
        }]
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn five_correct_pairs_clear_the_stage_without_losing_lives() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");

        // Resolve the pairs in board order, which is "any order" as far as
        // the engine is concerned.
        for _ in 0..5 {
            let country: String = game.remaining_flags()[0].clone();
            let capital: String = game
                .current_stage()
                .capital_of(&country)
                .expect("capital")
                .to_string();
            assert!(game.select_flag(&country));
            let outcome: AnswerOutcome = game.submit_capital(&capital, &mut rng);
            assert!(outcome.correct);
            assert_eq!(outcome.score_delta, 1);
            assert_eq!(outcome.lives_delta, 0);
        }
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.lives(), STAGE_LIVES);
        assert_eq!(game.score(), 5);
        assert_eq!(game.links().len(), 5);
    }

    #[test]
    fn two_mistakes_end_the_session_before_completion() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");

        game.select_flag("France");
        let first: AnswerOutcome = game.submit_capital("Berlin", &mut rng);
        assert!(!first.correct);
        assert!(!first.terminal);
        assert_eq!(game.lives(), 1);

        game.select_flag("Italy");
        let second: AnswerOutcome = game.submit_capital("Madrid", &mut rng);
        assert!(!second.correct);
        assert!(second.terminal);
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.lives(), 0);
        assert!(!game.remaining_flags().is_empty());
    }

    #[test]
    fn lives_never_go_below_zero() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");

        for _ in 0..4 {
            game.select_flag("France");
            game.submit_capital("Berlin", &mut rng);
        }
        assert_eq!(game.lives(), 0);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn capital_click_without_selection_is_ignored() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");

        let outcome: AnswerOutcome = game.submit_capital("Paris", &mut rng);
        assert_eq!(outcome, AnswerOutcome::ignored());
        assert_eq!(game.lives(), STAGE_LIVES);
        assert_eq!(game.remaining_flags().len(), 5);
    }

    #[test]
    fn wrong_pairing_clears_the_selection() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");

        game.select_flag("France");
        game.submit_capital("Rome", &mut rng);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn clearing_a_stage_advances_and_resets_lives() {
        let mut rng: StdRng = rng();
        let stages: Vec<Stage> = stages::builtin_stages();
        let mut game: MatchingGame = MatchingGame::new(&stages, &mut rng).expect("new game");

        // Burn one life, then clear stage 1.
        game.select_flag("Palestine");
        game.submit_capital("Amman", &mut rng);
        assert_eq!(game.lives(), STAGE_LIVES - 1);

        for _ in 0..5 {
            let country: String = game.remaining_flags()[0].clone();
            let capital: String = game
                .current_stage()
                .capital_of(&country)
                .expect("capital")
                .to_string();
            game.select_flag(&country);
            game.submit_capital(&capital, &mut rng);
        }
        assert_eq!(game.stage_index(), 1);
        assert_eq!(game.lives(), STAGE_LIVES);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.links().is_empty());
    }

    #[test]
    fn selecting_a_removed_flag_is_ignored() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");

        game.select_flag("France");
        game.submit_capital("Paris", &mut rng);
        assert!(!game.select_flag("France"));
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn unknown_stage_index_fails_fast() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");
        assert_eq!(
            game.start_stage(7, &mut rng),
            Err(StageError::UnknownStage(7))
        );
    }

    #[test]
    fn submissions_after_the_session_ends_are_inert() {
        let mut rng: StdRng = rng();
        let mut game: MatchingGame = MatchingGame::new(&one_stage(), &mut rng).expect("new game");

        game.select_flag("France");
        game.submit_capital("Berlin", &mut rng);
        game.select_flag("France");
        game.submit_capital("Rome", &mut rng);
        assert_eq!(game.outcome(), Outcome::Lost);

        let after: AnswerOutcome = game.submit_capital("Paris", &mut rng);
        assert!(after.terminal);
        assert!(!after.correct);
        assert_eq!(game.lives(), 0);
        assert_eq!(game.score(), 0);
    }
}
