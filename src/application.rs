/*
application.rs

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

//! Application loop.
//!
//! The loop is single-threaded and synchronous: poll a selection from
//! standard input, resolve it through the engine, and repaint. Quitting
//! (the `q` command or end of input) leaves the loop immediately; there is
//! no recoverable quit state.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::assets::SoundCue;
use crate::choice::{self, ChoiceRound, ChoiceSession};
use crate::context::GameContext;
use crate::draw;
use crate::game::{AnswerOutcome, GameError, GameMode, Outcome};
use crate::generator::segments::SegmentOrder;
use crate::matching::MatchingGame;

/// Type of errors while running the application.
#[derive(Debug)]
pub enum AppError {
    /// Reading the player input failed.
    Io(io::Error),

    /// A session could not be set up from the stage data.
    Game(GameError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "input error: {e}"),
            AppError::Game(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        AppError::Game(e)
    }
}

/// Poll the player for a selection between 1 and `max`.
///
/// Return the zero-based selection, or None when the player quits (`q` or
/// end of input). Anything else is rejected and polled again.
fn poll_selection(max: usize) -> Result<Option<usize>, io::Error> {
    let stdin: io::Stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line: String = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let input: &str = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= max => return Ok(Some(n - 1)),
            _ => println!("Enter a number between 1 and {max}, or q to quit."),
        }
    }
}

/// The application: owns the game context and runs the menu and game loops.
pub struct Application {
    /// Shared game resources.
    ctx: GameContext,
}

impl Application {
    /// Create an [`Application`] object.
    pub fn new(ctx: GameContext) -> Self {
        Self { ctx }
    }

    /// Run the application: either jump straight into the mini-game given
    /// on the command line, or loop on the main menu.
    ///
    /// # Errors
    ///
    /// The method returns an error when the player input cannot be read or
    /// when a session cannot be set up from the stage data.
    pub fn run(&mut self, mode: Option<GameMode>) -> Result<(), AppError> {
        draw::banner();
        match mode {
            Some(m) => self.run_mode(m),
            None => self.main_menu(),
        }
    }

    /// Loop on the main menu until the player quits.
    fn main_menu(&mut self) -> Result<(), AppError> {
        loop {
            draw::main_menu();
            let Some(selection) = poll_selection(3)? else {
                return Ok(());
            };
            // The menu entries are numbered in GameMode declaration order.
            let Some(mode) = GameMode::from_repr(selection) else {
                continue;
            };
            self.ctx.assets.play(SoundCue::Click);
            self.run_mode(mode)?;
        }
    }

    /// Run one session of the given mini-game.
    fn run_mode(&mut self, mode: GameMode) -> Result<(), AppError> {
        match mode {
            GameMode::Matching => self.run_matching(),
            GameMode::Flags => {
                let rounds: Vec<ChoiceRound<SegmentOrder>> =
                    choice::flag_rounds(&self.ctx.stages, &mut self.ctx.rng)
                        .map_err(AppError::from)?;
                self.run_choice(rounds, |round, index, total, app| {
                    draw::flag_round(round, index, total, &app.ctx.assets);
                })
            }
            GameMode::Monuments => {
                let rounds: Vec<ChoiceRound<String>> =
                    choice::monument_rounds(&self.ctx.stages, &mut self.ctx.rng)
                        .map_err(AppError::from)?;
                self.run_choice(rounds, |round, index, total, _| {
                    draw::monument_round(round, index, total);
                })
            }
        }
    }

    /// Run the matching game until the session ends or the player quits.
    fn run_matching(&mut self) -> Result<(), AppError> {
        let mut game: MatchingGame = MatchingGame::new(&self.ctx.stages, &mut self.ctx.rng)
            .map_err(GameError::from)?;

        while !game.outcome().is_terminal() {
            draw::matching_board(&game, &self.ctx.assets);

            println!("Select a flag:");
            let Some(fi) = poll_selection(game.remaining_flags().len())? else {
                return Ok(());
            };
            let country: String = game.remaining_flags()[fi].clone();
            game.select_flag(&country);
            self.ctx.assets.play(SoundCue::Click);

            println!("Select its capital:");
            let Some(ci) = poll_selection(game.remaining_capitals().len())? else {
                return Ok(());
            };
            let capital: String = game.remaining_capitals()[ci].clone();
            let outcome: AnswerOutcome = game.submit_capital(&capital, &mut self.ctx.rng);
            self.answer_feedback(&outcome);
        }

        draw::matching_result(game.outcome(), game.score());
        self.session_cue(game.outcome());
        Ok(())
    }

    /// Run a multiple-choice session until it ends or the player quits.
    fn run_choice<T, F>(&mut self, rounds: Vec<ChoiceRound<T>>, render: F) -> Result<(), AppError>
    where
        T: Clone + PartialEq,
        F: Fn(&ChoiceRound<T>, usize, usize, &Self),
    {
        let mut session: ChoiceSession<T> = ChoiceSession::new(rounds);

        loop {
            let num_options: usize = {
                let Some(round) = session.current_round() else {
                    break;
                };
                render(round, session.round_index(), session.num_rounds(), self);
                round.options.len()
            };
            let Some(i) = poll_selection(num_options)? else {
                return Ok(());
            };
            let outcome: AnswerOutcome = session.submit(i);
            self.answer_feedback(&outcome);
        }

        draw::session_result(session.outcome(), session.score(), session.num_rounds());
        self.session_cue(session.outcome());
        Ok(())
    }

    /// Paint and play the feedback for one answer.
    fn answer_feedback(&self, outcome: &AnswerOutcome) {
        draw::answer_feedback(outcome.correct);
        self.ctx.assets.play(if outcome.correct {
            SoundCue::Correct
        } else {
            SoundCue::Incorrect
        });
    }

    /// Play the end-of-session sound.
    fn session_cue(&self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.ctx.assets.play(SoundCue::Victory),
            Outcome::Lost => self.ctx.assets.play(SoundCue::Lose),
            Outcome::InProgress => (),
        }
    }
}
