/*
game.rs

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

//! Shared game-state model.
//!
//! The session state is owned by the mini-game engines and is mutated only
//! by answer-resolution events:
//!
//! * [`crate::matching::MatchingGame`] for the flags-and-capitals matching
//!   game, which progresses through the stages.
//! * [`crate::choice::ChoiceSession`] for the flag-guessing and monuments
//!   multiple-choice games, which run a fixed number of rounds.
//!
//! Both engines resolve an answer through a method that returns an
//! [`AnswerOutcome`], and both are pure state machines: they perform no I/O
//! and can be driven entirely from tests. The [`crate::draw`] adapter only
//! reads their state.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::generator::options::OptionsError;
use crate::stages::StageError;

/// The three mini-games.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[repr(usize)]
pub enum GameMode {
    /// Match each flag with its capital.
    #[default]
    Matching,

    /// Pick the real flag among scrambled renderings.
    Flags,

    /// Pick the monument located in the prompted country.
    Monuments,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameMode::Matching => write!(f, "Match Flags with Capitals"),
            GameMode::Flags => write!(f, "Guess the Flag"),
            GameMode::Monuments => write!(f, "Guess the Monument"),
        }
    }
}

/// Session outcome.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// The session is still running.
    #[default]
    InProgress,

    /// The player won the session.
    Won,

    /// The player lost the session.
    Lost,
}

impl Outcome {
    /// Whether the session is over.
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

/// Result of resolving one answer.
///
/// Deltas are reported instead of absolute values so that the presentation
/// layer can react to the event (play a sound, flash the lives bar) without
/// tracking the previous state itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the answer was correct.
    pub correct: bool,

    /// Points gained by the answer. The score never decreases.
    pub score_delta: u32,

    /// Lives lost by the answer. Lives never go below zero.
    pub lives_delta: u32,

    /// Whether the answer ended the session.
    pub terminal: bool,
}

impl AnswerOutcome {
    /// An answer event that did not change the game state, such as a click
    /// with no pending selection.
    pub fn ignored() -> Self {
        Self {
            correct: false,
            score_delta: 0,
            lives_delta: 0,
            terminal: false,
        }
    }
}

/// Type of errors when setting up a session.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// The stage data is invalid or the stage index does not exist.
    Stage(StageError),

    /// A round could not get enough decoys.
    Options(OptionsError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Stage(e) => write!(f, "stage data: {e}"),
            GameError::Options(e) => write!(f, "option generator: {e}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<StageError> for GameError {
    fn from(e: StageError) -> Self {
        GameError::Stage(e)
    }
}

impl From<OptionsError> for GameError {
    fn from(e: OptionsError) -> Self {
        GameError::Options(e)
    }
}
