/*
choice.rs

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

//! The multiple-choice mini-games.
//!
//! The flag-guessing and monuments games share the same engine: a session
//! is a fixed number of rounds, each round shows one country and
//! [`NUM_CHOICES`] candidates with exactly one correct answer, and a round
//! ends on the first answer whether it is right or wrong. Wrong answers are
//! tallied, they do not cost lives. After the last round the session is won
//! when the correct answers hold the majority.
//!
//! The engine is generic over the candidate type: monument names are
//! strings, flag renderings are [`SegmentOrder`] values.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::{AnswerOutcome, GameError, Outcome};
use crate::generator::options::{self, OptionsError};
use crate::generator::segments::{self, SegmentOrder};
use crate::stages::Stage;

/// Number of rounds in a session.
pub const ROUNDS_PER_SESSION: usize = 5;

/// Number of candidates per round.
pub const NUM_CHOICES: usize = 3;

/// One question: a prompt country and its shuffled candidate answers.
#[derive(Debug, Clone)]
pub struct ChoiceRound<T> {
    /// Prompted country.
    pub prompt: String,

    /// Shuffled candidates, exactly one of which is correct.
    pub options: Vec<T>,

    /// Position of the correct candidate in [`ChoiceRound::options`].
    correct_index: usize,
}

impl<T> ChoiceRound<T>
where
    T: Clone + PartialEq,
{
    /// Build a round for the given prompt and correct answer, with decoys
    /// taken from the pool.
    ///
    /// # Errors
    ///
    /// The method returns an error when the pool cannot provide enough
    /// distinct decoys.
    pub fn new<R>(prompt: &str, correct: &T, pool: &[T], rng: &mut R) -> Result<Self, OptionsError>
    where
        R: Rng + ?Sized,
    {
        let options: Vec<T> = options::generate_options(correct, pool, NUM_CHOICES, rng)?;
        let correct_index: usize = options
            .iter()
            .position(|o| o == correct)
            // generate_options guarantees the correct answer is present.
            .unwrap_or(0);
        Ok(Self {
            prompt: prompt.to_string(),
            options,
            correct_index,
        })
    }

    /// Whether the candidate at the given position is the correct answer.
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

/// Manage the status of a multiple-choice session in progress.
#[derive(Debug)]
pub struct ChoiceSession<T> {
    /// The session questions, generated up front.
    rounds: Vec<ChoiceRound<T>>,

    /// Index of the round being played.
    round_index: usize,

    /// Number of correct answers so far.
    score: u32,

    /// Session outcome.
    outcome: Outcome,
}

impl<T> ChoiceSession<T>
where
    T: Clone + PartialEq,
{
    /// Create a [`ChoiceSession`] object over pre-generated rounds.
    pub fn new(rounds: Vec<ChoiceRound<T>>) -> Self {
        // An empty session cannot be won.
        let outcome: Outcome = if rounds.is_empty() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        Self {
            rounds,
            round_index: 0,
            score: 0,
            outcome,
        }
    }

    /// Resolve an answer for the current round.
    ///
    /// The round ends whatever the answer is: a correct candidate scores
    /// one point, anything else (including an out-of-range index) scores
    /// nothing. The last round decides the session by majority.
    pub fn submit(&mut self, option_index: usize) -> AnswerOutcome {
        if self.outcome.is_terminal() {
            return AnswerOutcome {
                terminal: true,
                ..AnswerOutcome::ignored()
            };
        }

        // round_index < rounds.len() as long as the session is in progress.
        let correct: bool = self.rounds[self.round_index].is_correct(option_index);
        if correct {
            self.score += 1;
        }
        self.round_index += 1;

        let terminal: bool = self.round_index == self.rounds.len();
        if terminal {
            self.outcome = if self.majority_reached() {
                Outcome::Won
            } else {
                Outcome::Lost
            };
            debug!(
                "Session over: {}/{} correct, outcome {:?}",
                self.score,
                self.rounds.len(),
                self.outcome
            );
        }
        AnswerOutcome {
            correct,
            score_delta: u32::from(correct),
            lives_delta: 0,
            terminal,
        }
    }

    /// Whether more than half of the rounds were answered correctly.
    fn majority_reached(&self) -> bool {
        self.score as usize * 2 > self.rounds.len()
    }

    /// Return the round being played, or None when the session is over.
    pub fn current_round(&self) -> Option<&ChoiceRound<T>> {
        if self.outcome.is_terminal() {
            None
        } else {
            self.rounds.get(self.round_index)
        }
    }

    /// Return the index of the round being played.
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Return the total number of rounds.
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Number of correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Session outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Pick the prompted countries for a session: distinct countries drawn from
/// the whole stage pool, in random order.
fn session_prompts<R>(stages: &[Stage], rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut countries: Vec<String> = Vec::new();
    for stage in stages {
        for entry in &stage.entries {
            if !countries.contains(&entry.country) {
                countries.push(entry.country.clone());
            }
        }
    }
    countries.shuffle(rng);
    countries.truncate(ROUNDS_PER_SESSION);
    countries
}

/// Build the rounds of a flag-guessing session.
///
/// Each round shows the prompted country with three flag renderings: the
/// real flag and two scrambled decoys.
///
/// # Errors
///
/// The method returns an error when the stage pool is empty or when the
/// decoys cannot be generated.
pub fn flag_rounds<R>(stages: &[Stage], rng: &mut R) -> Result<Vec<ChoiceRound<SegmentOrder>>, GameError>
where
    R: Rng + ?Sized,
{
    let mut rounds: Vec<ChoiceRound<SegmentOrder>> = Vec::with_capacity(ROUNDS_PER_SESSION);
    for country in session_prompts(stages, rng) {
        let options: Vec<SegmentOrder> = segments::flag_options(NUM_CHOICES, rng)?;
        let correct_index: usize = options
            .iter()
            .position(|o| *o == segments::IDENTITY)
            .unwrap_or(0);
        rounds.push(ChoiceRound {
            prompt: country,
            options,
            correct_index,
        });
    }
    Ok(rounds)
}

/// Build the rounds of a monuments session.
///
/// Each round shows the prompted country with three monument names: its
/// monument and two monuments of other countries.
///
/// # Errors
///
/// The method returns an error when a country has no monument or when the
/// pool cannot provide enough distinct decoys.
pub fn monument_rounds<R>(stages: &[Stage], rng: &mut R) -> Result<Vec<ChoiceRound<String>>, GameError>
where
    R: Rng + ?Sized,
{
    let mut monuments_of: Vec<(String, String)> = Vec::new();
    for stage in stages {
        for entry in &stage.entries {
            if !monuments_of.iter().any(|(c, _)| *c == entry.country) {
                monuments_of.push((entry.country.clone(), entry.monument.clone()));
            }
        }
    }
    let pool: Vec<String> = monuments_of.iter().map(|(_, m)| m.clone()).collect();

    let mut rounds: Vec<ChoiceRound<String>> = Vec::with_capacity(ROUNDS_PER_SESSION);
    for country in session_prompts(stages, rng) {
        let correct: String = monuments_of
            .iter()
            .find(|(c, _)| *c == country)
            .map(|(_, m)| m.clone())
            // session_prompts only returns countries from the same pool.
            .unwrap_or_default();
        rounds.push(ChoiceRound::new(&country, &correct, &pool, rng)?);
    }
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    fn monument_session(rng: &mut StdRng) -> ChoiceSession<String> {
        let rounds: Vec<ChoiceRound<String>> =
            monument_rounds(&stages::builtin_stages(), rng).expect("rounds");
        ChoiceSession::new(rounds)
    }

    fn correct_index<T: Clone + PartialEq>(session: &ChoiceSession<T>) -> usize {
        let round: &ChoiceRound<T> = session.current_round().expect("current round");
        (0..round.options.len())
            .find(|i| round.is_correct(*i))
            .expect("correct index")
    }

    #[test]
    fn correct_answer_scores_one_point() {
        let mut rng: StdRng = rng();
        let mut session: ChoiceSession<String> = monument_session(&mut rng);

        let i: usize = correct_index(&session);
        let outcome: AnswerOutcome = session.submit(i);
        assert!(outcome.correct);
        assert_eq!(outcome.score_delta, 1);
        assert_eq!(outcome.lives_delta, 0);
        assert_eq!(session.score(), 1);
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn wrong_answer_still_ends_the_round() {
        let mut rng: StdRng = rng();
        let mut session: ChoiceSession<String> = monument_session(&mut rng);

        let wrong: usize = (correct_index(&session) + 1) % NUM_CHOICES;
        let outcome: AnswerOutcome = session.submit(wrong);
        assert!(!outcome.correct);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn out_of_range_answer_counts_as_wrong() {
        let mut rng: StdRng = rng();
        let mut session: ChoiceSession<String> = monument_session(&mut rng);

        let outcome: AnswerOutcome = session.submit(17);
        assert!(!outcome.correct);
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn session_ends_after_five_rounds() {
        let mut rng: StdRng = rng();
        let mut session: ChoiceSession<String> = monument_session(&mut rng);

        for round in 0..ROUNDS_PER_SESSION {
            assert_eq!(session.outcome(), Outcome::InProgress);
            let outcome: AnswerOutcome = session.submit(0);
            assert_eq!(outcome.terminal, round == ROUNDS_PER_SESSION - 1);
        }
        assert!(session.outcome().is_terminal());
        assert_eq!(session.current_round().map(|r| r.prompt.clone()), None);
    }

    #[test]
    fn majority_of_correct_answers_wins() {
        let mut rng: StdRng = rng();
        let mut session: ChoiceSession<String> = monument_session(&mut rng);

        // 3 correct, 2 wrong out of 5.
        for round in 0..ROUNDS_PER_SESSION {
            let i: usize = correct_index(&session);
            if round < 3 {
                session.submit(i);
            } else {
                session.submit((i + 1) % NUM_CHOICES);
            }
        }
        assert_eq!(session.outcome(), Outcome::Won);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn half_or_less_loses() {
        let mut rng: StdRng = rng();
        let mut session: ChoiceSession<String> = monument_session(&mut rng);

        // 2 correct, 3 wrong out of 5: 2 is not a majority.
        for round in 0..ROUNDS_PER_SESSION {
            let i: usize = correct_index(&session);
            if round < 2 {
                session.submit(i);
            } else {
                session.submit((i + 1) % NUM_CHOICES);
            }
        }
        assert_eq!(session.outcome(), Outcome::Lost);
    }

    #[test]
    fn submit_after_the_session_ends_is_inert() {
        let mut rng: StdRng = rng();
        let mut session: ChoiceSession<String> = monument_session(&mut rng);

        for _ in 0..ROUNDS_PER_SESSION {
            session.submit(0);
        }
        let score: u32 = session.score();
        let after: AnswerOutcome = session.submit(0);
        assert!(after.terminal);
        assert!(!after.correct);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn monument_rounds_prompt_matches_correct_option() {
        let mut rng: StdRng = rng();
        let all: Vec<crate::stages::Stage> = stages::builtin_stages();
        let rounds: Vec<ChoiceRound<String>> = monument_rounds(&all, &mut rng).expect("rounds");

        assert_eq!(rounds.len(), ROUNDS_PER_SESSION);
        for round in rounds {
            let monument: &str = all
                .iter()
                .find_map(|s| s.monument_of(&round.prompt))
                .expect("monument");
            let correct: usize = (0..round.options.len())
                .find(|i| round.is_correct(*i))
                .expect("correct index");
            assert_eq!(round.options[correct], monument);
        }
    }

    #[test]
    fn flag_rounds_offer_the_real_flag_once() {
        let mut rng: StdRng = rng();
        let rounds: Vec<ChoiceRound<SegmentOrder>> =
            flag_rounds(&stages::builtin_stages(), &mut rng).expect("rounds");

        assert_eq!(rounds.len(), ROUNDS_PER_SESSION);
        for round in rounds {
            assert_eq!(round.options.len(), NUM_CHOICES);
            assert_eq!(
                round
                    .options
                    .iter()
                    .filter(|o| **o == segments::IDENTITY)
                    .count(),
                1
            );
            let correct: usize = (0..round.options.len())
                .find(|i| round.is_correct(*i))
                .expect("correct index");
            assert_eq!(round.options[correct], segments::IDENTITY);
        }
    }
}
