/*
context.rs

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

//! Game context.
//!
//! The [`GameContext`] object holds everything the engines and the
//! presentation adapter need: the validated stage data, the resolved asset
//! handles, and the random generator. It is constructed once in `main` and
//! passed down explicitly, so there is no module-level mutable state.
//!
//! The random generator is seedable through the `--seed` command-line
//! option, which makes a reported question reproducible.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::AssetStore;
use crate::stages::{self, Stage, StageError};

/// Shared game resources.
#[derive(Debug)]
pub struct GameContext {
    /// Validated stage data, in play order.
    pub stages: Vec<Stage>,

    /// Resolved flag and sound handles.
    pub assets: AssetStore,

    /// Random generator used for every shuffle in the session.
    pub rng: StdRng,
}

impl GameContext {
    /// Validate the stage data and build the context.
    ///
    /// # Errors
    ///
    /// The method returns an error when the stage data is invalid. The data
    /// is authored, not user-provided, so the caller reports the error and
    /// exits.
    pub fn new(stages: Vec<Stage>, seed: Option<u64>) -> Result<Self, StageError> {
        stages::validate(&stages)?;
        let rng: StdRng = match seed {
            Some(s) => {
                debug!("Seeding the random generator with {s}");
                StdRng::seed_from_u64(s)
            }
            None => StdRng::from_os_rng(),
        };
        let assets: AssetStore = AssetStore::load(&stages);
        Ok(Self {
            stages,
            assets,
            rng,
        })
    }
}
