/*
stages.rs

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

//! Quiz data store.
//!
//! A [`Stage`] object is an ordered, immutable set of [`Entry`] objects.
//! Each entry associates a country with its capital and one of its monuments.
//! The builtin stages are provided at build time, one source module per
//! stage, and are collected by the [`builtin_stages`] function.
//!
//! Quiz authors can replace the builtin stages with their own JSON file.
//! See the [`crate::loader`] module.
//!
//! Stage data is validated once at startup with the [`validate`] function.
//! A validation failure is a data-authoring bug, not a runtime condition, so
//! the program reports the error and exits instead of ignoring the stage.

// For quiz authors: add your new stage to this list of modules.
pub mod africa_5;
pub mod americas_5;
pub mod asia_5;
pub mod europe_5;
pub mod middle_east_5;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::choice::NUM_CHOICES;

/// One quiz item: a country with its correct answers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Country name, which is also the prompt in every mini-game.
    pub country: String,

    /// Capital city of the country.
    pub capital: String,

    /// Well-known monument located in the country.
    pub monument: String,
}

impl Entry {
    /// Create an [`Entry`] object.
    pub fn new(country: &str, capital: &str, monument: &str) -> Self {
        Self {
            country: country.to_string(),
            capital: capital.to_string(),
            monument: monument.to_string(),
        }
    }
}

/// A themed set of quiz items that the player must fully resolve to advance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Stage name, displayed in the stage banner.
    pub name: String,

    /// Ordered list of the stage items.
    pub entries: Vec<Entry>,
}

impl Stage {
    /// Return the capital of the given country, or None if the country is
    /// not part of the stage.
    pub fn capital_of(&self, country: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.country == country)
            .map(|e| e.capital.as_str())
    }

    /// Return the monument of the given country, or None if the country is
    /// not part of the stage.
    pub fn monument_of(&self, country: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.country == country)
            .map(|e| e.monument.as_str())
    }

    /// Number of items in the stage, which is also the number of correct
    /// matches required to clear the stage.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stage has no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Return the name of the flag image asset for the given country.
///
/// The asset name follows the layout of the `assets` directory that ships
/// with the game. The [`crate::assets`] module resolves the name to a
/// handle, and substitutes a placeholder when the image is missing.
pub fn flag_asset_of(country: &str) -> String {
    format!("Flags/{country}.png")
}

/// Stage data errors.
///
/// All these errors point to a mistake in the stage data itself and are
/// reported at startup.
#[derive(Debug, PartialEq, Eq)]
pub enum StageError {
    /// The stage list is empty.
    NoStages,

    /// A stage has no items.
    EmptyStage(usize),

    /// The same country appears twice in one stage.
    DuplicateCountry(usize, String),

    /// Two countries of one stage share the same capital. Capitals are
    /// matched by value, so duplicates would make one of the pairs
    /// unresolvable.
    DuplicateCapital(usize, String),

    /// A country has an empty capital or monument.
    MissingAnswer(usize, String),

    /// A stage has fewer items than the number of multiple-choice options.
    PoolTooSmall {
        /// Stage index.
        stage: usize,

        /// Number of items required.
        needed: usize,

        /// Number of items in the stage.
        available: usize,
    },

    /// The requested stage index does not exist.
    UnknownStage(usize),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StageError::NoStages => write!(f, "no stage defined"),
            StageError::EmptyStage(i) => write!(f, "stage {}: no entries", i + 1),
            StageError::DuplicateCountry(i, c) => {
                write!(f, "stage {}: duplicated country {c}", i + 1)
            }
            StageError::DuplicateCapital(i, c) => {
                write!(f, "stage {}: duplicated capital {c}", i + 1)
            }
            StageError::MissingAnswer(i, c) => {
                write!(f, "stage {}: {c}: empty capital or monument", i + 1)
            }
            StageError::PoolTooSmall {
                stage,
                needed,
                available,
            } => write!(
                f,
                "stage {}: {available} entries but at least {needed} are required",
                stage + 1
            ),
            StageError::UnknownStage(i) => write!(f, "stage {} does not exist", i + 1),
        }
    }
}

impl std::error::Error for StageError {}

/// Verify the stage data.
///
/// # Errors
///
/// The function returns a [`StageError`] that identifies the first invalid
/// stage. A failed validation indicates a bug in the stage data, and the
/// caller is expected to report the error and exit.
pub fn validate(stages: &[Stage]) -> Result<(), StageError> {
    if stages.is_empty() {
        return Err(StageError::NoStages);
    }
    for (i, stage) in stages.iter().enumerate() {
        if stage.is_empty() {
            return Err(StageError::EmptyStage(i));
        }
        if stage.len() < NUM_CHOICES {
            return Err(StageError::PoolTooSmall {
                stage: i,
                needed: NUM_CHOICES,
                available: stage.len(),
            });
        }
        let mut countries: HashSet<&str> = HashSet::with_capacity(stage.len());
        let mut capitals: HashSet<&str> = HashSet::with_capacity(stage.len());
        for entry in &stage.entries {
            if entry.capital.is_empty() || entry.monument.is_empty() {
                return Err(StageError::MissingAnswer(i, entry.country.clone()));
            }
            if !countries.insert(&entry.country) {
                return Err(StageError::DuplicateCountry(i, entry.country.clone()));
            }
            if !capitals.insert(&entry.capital) {
                return Err(StageError::DuplicateCapital(i, entry.capital.clone()));
            }
        }
    }
    Ok(())
}

/// Return the builtin stages, in play order.
pub fn builtin_stages() -> Vec<Stage> {
    vec![
        middle_east_5::stage(),
        europe_5::stage(),
        asia_5::stage(),
        americas_5::stage(),
        africa_5::stage(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_stage(entries: Vec<Entry>) -> Vec<Stage> {
        vec![Stage {
            name: "Test".to_string(),
            entries,
        }]
    }

    #[test]
    fn builtin_stages_are_valid() {
        let stages: Vec<Stage> = builtin_stages();
        assert_eq!(validate(&stages), Ok(()));
    }

    #[test]
    fn builtin_stages_fully_matchable() {
        // Every entry must have exactly one resolvable capital: the number
        // of correct matches possible equals the stage size.
        for stage in builtin_stages() {
            let matchable: usize = stage
                .entries
                .iter()
                .filter(|e| stage.capital_of(&e.country) == Some(e.capital.as_str()))
                .count();
            assert_eq!(matchable, stage.len());
        }
    }

    #[test]
    fn lookups() {
        let stage: Stage = europe_5::stage();
        assert_eq!(stage.capital_of("France"), Some("Paris"));
        assert_eq!(stage.monument_of("Italy"), Some("Colosseum"));
        assert_eq!(stage.capital_of("Atlantis"), None);
        assert_eq!(stage.monument_of("Atlantis"), None);
    }

    #[test]
    fn flag_asset_name() {
        assert_eq!(flag_asset_of("France"), "Flags/France.png");
    }

    #[test]
    fn rejects_empty_stage_list() {
        assert_eq!(validate(&[]), Err(StageError::NoStages));
    }

    #[test]
    fn rejects_duplicate_capital() {
        let stages: Vec<Stage> = small_stage(vec![
            Entry::new("A", "Same", "M1"),
            Entry::new("B", "Same", "M2"),
            Entry::new("C", "Other", "M3"),
        ]);
        assert_eq!(
            validate(&stages),
            Err(StageError::DuplicateCapital(0, "Same".to_string()))
        );
    }

    #[test]
    fn rejects_duplicate_country() {
        let stages: Vec<Stage> = small_stage(vec![
            Entry::new("A", "C1", "M1"),
            Entry::new("A", "C2", "M2"),
            Entry::new("B", "C3", "M3"),
        ]);
        assert_eq!(
            validate(&stages),
            Err(StageError::DuplicateCountry(0, "A".to_string()))
        );
    }

    #[test]
    fn rejects_missing_monument() {
        let stages: Vec<Stage> = small_stage(vec![
            Entry::new("A", "C1", ""),
            Entry::new("B", "C2", "M2"),
            Entry::new("C", "C3", "M3"),
        ]);
        assert_eq!(
            validate(&stages),
            Err(StageError::MissingAnswer(0, "A".to_string()))
        );
    }

    #[test]
    fn rejects_pool_smaller_than_choices() {
        let stages: Vec<Stage> =
            small_stage(vec![Entry::new("A", "C1", "M1"), Entry::new("B", "C2", "M2")]);
        assert_eq!(
            validate(&stages),
            Err(StageError::PoolTooSmall {
                stage: 0,
                needed: NUM_CHOICES,
                available: 2
            })
        );
    }

    #[test]
    fn stage_data_round_trips_through_json() {
        // Custom stage files use the same serde representation as the
        // builtin data.
        let stages: Vec<Stage> = builtin_stages();
        let json: String = serde_json::to_string(&stages).expect("serialize stages");
        let parsed: Vec<Stage> = serde_json::from_str(&json).expect("parse stages");
        assert_eq!(parsed, stages);
    }
}
