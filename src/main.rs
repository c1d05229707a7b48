/*
main.rs

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

mod application;
mod assets;
mod choice;
mod cli_options;
mod config;
mod context;
mod draw;
mod game;
mod generator;
mod loader;
mod matching;
mod stages;

use std::process::ExitCode;

use self::application::Application;
use self::cli_options::Launch;
use self::context::GameContext;

fn main() -> ExitCode {
    // Process the command line first: the author tooling options (--ls,
    // --check) exit before the game starts.
    let launch: Launch = match cli_options::parse() {
        Ok(launch) => launch,
        Err(code) => return ExitCode::from(code),
    };

    // Build the game context. An invalid stage list is a data-authoring
    // bug: report it and exit instead of playing a broken quiz.
    let ctx: GameContext = match GameContext::new(launch.stages, launch.seed) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let mut app: Application = Application::new(ctx);
    match app.run(launch.mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
