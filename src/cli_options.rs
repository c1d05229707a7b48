/*
cli_options.rs

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

//! Process command-line options.
//!
//! Besides launching the game, the options are intended for quiz authors
//! working on stage files.
//!
//! # Examples
//!
//! List the builtin stages:
//!
//! ```text
//! $ flagcap --ls
//! Stage 1: Middle East (5 pairs)
//! Stage 2: Europe (5 pairs)
//! Stage 3: Asia (5 pairs)
//! Stage 4: Americas (5 pairs)
//! Stage 5: Africa (5 pairs)
//! ```
//!
//! Validate a custom stage file without playing it:
//!
//! ```text
//! $ flagcap --stages my_stages.json --check
//! my_stages.json: OK (3 stages)
//! ```
//!
//! Play the monuments game with a fixed shuffle, to reproduce a reported
//! question:
//!
//! ```text
//! $ flagcap --mode monuments --seed 7
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;
use crate::game::GameMode;
use crate::loader;
use crate::stages::{self, Stage};

/// An educational flags, capitals, and monuments quiz game.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the stages
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Validate the stage data and exit
    #[arg(short, long, default_value_t = false)]
    check: bool,

    /// Load the stages from a JSON file instead of the builtin ones
    #[arg(long, value_name = "FILE")]
    stages: Option<PathBuf>,

    /// Start directly in the given mini-game
    #[arg(value_enum, short, long)]
    mode: Option<GameMode>,

    /// Seed the random generator, for reproducible sessions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options the game is launched with.
pub struct Launch {
    /// Stage data, builtin or loaded from the `--stages` file.
    pub stages: Vec<Stage>,

    /// Mini-game to start directly into, bypassing the main menu.
    pub mode: Option<GameMode>,

    /// Seed for the random generator.
    pub seed: Option<u64>,
}

/// Parse and process command-line options.
///
/// # Errors
///
/// The function returns an exit code when the command line was fully
/// handled (`--ls`, `--check`) or when it is invalid, and the process
/// should exit with that code.
pub fn parse() -> Result<Launch, u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let stage_list: Vec<Stage> = match &args.stages {
        Some(path) => match loader::load_stages(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return Err(1);
            }
        },
        None => stages::builtin_stages(),
    };
    debug!("{} stages loaded", stage_list.len());

    //
    // List the stages
    //
    if args.ls {
        for (i, stage) in stage_list.iter().enumerate() {
            println!("Stage {}: {} ({} pairs)", i + 1, stage.name, stage.len());
        }
        return Err(0);
    }

    //
    // Validate the stage data for quiz authors
    //
    if args.check {
        let origin: String = match &args.stages {
            Some(path) => path.display().to_string(),
            None => "builtin stages".to_string(),
        };
        match stages::validate(&stage_list) {
            Ok(()) => {
                println!("{origin}: OK ({} stages)", stage_list.len());
                return Err(0);
            }
            Err(e) => {
                eprintln!("{origin}: {e}");
                return Err(1);
            }
        }
    }

    Ok(Launch {
        stages: stage_list,
        mode: args.mode,
        seed: args.seed,
    })
}
