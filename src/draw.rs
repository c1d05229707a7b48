/*
draw.rs

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

//! Terminal rendering adapter.
//!
//! All the functions of this module only read engine state and paint it to
//! standard output. No game state lives here and no state transition
//! happens here, so the engines stay testable without a display.

use crate::assets::{AssetStore, FlagHandle};
use crate::choice::ChoiceRound;
use crate::config;
use crate::game::{GameMode, Outcome};
use crate::generator::segments::SegmentOrder;
use crate::matching::{MatchingGame, STAGE_LIVES};

/// Paint the application banner.
pub fn banner() {
    println!("=== {} {} ===", config::APP_NAME, config::VERSION);
}

/// Paint the main menu: one numbered line per mini-game.
pub fn main_menu() {
    println!();
    println!("Pick a game (q to quit):");
    for (i, mode) in [GameMode::Matching, GameMode::Flags, GameMode::Monuments]
        .iter()
        .enumerate()
    {
        println!("  {}. {mode}", i + 1);
    }
}

/// Paint the lives bar, filled proportionally like the original health bar.
fn lives_bar(lives: u32) {
    let filled: usize = lives as usize;
    let empty: usize = (STAGE_LIVES.saturating_sub(lives)) as usize;
    println!(
        "Lives: {lives}/{STAGE_LIVES} [{}{}]",
        "#".repeat(filled),
        "-".repeat(empty)
    );
}

/// Label of a flag handle: the image name, or the placeholder marker.
fn flag_label(handle: &FlagHandle) -> String {
    match handle {
        FlagHandle::Image(name) => format!("[{name}]"),
        FlagHandle::Placeholder => "[missing flag art]".to_string(),
    }
}

/// Label of a segment order, with one-based segment numbers.
fn segment_label(order: &SegmentOrder) -> String {
    let parts: Vec<String> = order.iter().map(|s| (s + 1).to_string()).collect();
    parts.join("|")
}

/// Paint the matching board: the stage banner, the lives bar, both columns,
/// and the already-resolved pairings.
pub fn matching_board(game: &MatchingGame, assets: &AssetStore) {
    println!();
    println!(
        "Stage {}/{}: {} — {}",
        game.stage_index() + 1,
        game.num_stages(),
        game.current_stage().name,
        GameMode::Matching
    );
    println!("Click a flag, then click its correct capital.");
    lives_bar(game.lives());
    println!("Score: {}", game.score());

    println!("Flags:");
    for (i, country) in game.remaining_flags().iter().enumerate() {
        let marker: &str = if game.selected() == Some(country.as_str()) {
            " <== selected"
        } else {
            ""
        };
        println!(
            "  {}. {country} {}{marker}",
            i + 1,
            flag_label(&assets.flag_of(country))
        );
    }
    println!("Capitals:");
    for (i, capital) in game.remaining_capitals().iter().enumerate() {
        println!("  {}. {capital}", i + 1);
    }

    if !game.links().is_empty() {
        println!("Matched:");
        for link in game.links() {
            println!("  {} ---- {}", link.country, link.capital);
        }
    }
}

/// Paint a flag-guessing round: the prompt country and its three candidate
/// flag renderings, each described by the order of its vertical panels.
pub fn flag_round(
    round: &ChoiceRound<SegmentOrder>,
    index: usize,
    total: usize,
    assets: &AssetStore,
) {
    println!();
    println!("Round {}/{total}: which is the flag of {}?", index + 1, round.prompt);
    let label: String = flag_label(&assets.flag_of(&round.prompt));
    for (i, order) in round.options.iter().enumerate() {
        println!("  {}. {label} panels {}", i + 1, segment_label(order));
    }
}

/// Paint a monuments round: the prompt country and its three candidate
/// monument names.
pub fn monument_round(round: &ChoiceRound<String>, index: usize, total: usize) {
    println!();
    println!(
        "Round {}/{total}: which monument is located in {}?",
        index + 1,
        round.prompt
    );
    for (i, monument) in round.options.iter().enumerate() {
        println!("  {}. {monument}", i + 1);
    }
}

/// Paint the feedback line for one answer.
pub fn answer_feedback(correct: bool) {
    if correct {
        println!("Correct!");
    } else {
        println!("Wrong!");
    }
}

/// Paint the end-of-session message for the matching game.
pub fn matching_result(outcome: Outcome, score: u32) {
    println!();
    match outcome {
        Outcome::Won => println!("You Win! ({score} pairs matched)"),
        Outcome::Lost => println!("Game Over! ({score} pairs matched)"),
        Outcome::InProgress => (),
    }
}

/// Paint the end-of-session message for the multiple-choice games.
pub fn session_result(outcome: Outcome, score: u32, rounds: usize) {
    println!();
    match outcome {
        Outcome::Won => println!("You Win! ({score}/{rounds} correct)"),
        Outcome::Lost => println!("Game Over! ({score}/{rounds} correct)"),
        Outcome::InProgress => (),
    }
}
