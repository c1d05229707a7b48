/*
assets.rs

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

//! Resolve countries and sound cues to asset handles.
//!
//! Missing assets never abort the session: a country without flag art gets
//! a [`FlagHandle::Placeholder`] (a solid-color surface in the original
//! game), and a missing sound degrades to [`SoundHandle::Silent`]. Both
//! substitutions are logged.

use log::{debug, warn};
use std::collections::HashMap;

use crate::stages::{self, Stage};

/// Flag art that ships with the game, one image per builtin country.
const FLAG_ASSETS: [&str; 24] = [
    "Palestine",
    "Jordan",
    "Syria",
    "Egypt",
    "USA",
    "France",
    "Germany",
    "Italy",
    "Spain",
    "UK",
    "India",
    "China",
    "Japan",
    "South Korea",
    "Russia",
    "Canada",
    "Brazil",
    "Mexico",
    "Argentina",
    "Australia",
    "South Africa",
    "Nigeria",
    "Kenya",
    "Morocco",
];

/// Handle to the flag art of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagHandle {
    /// Name of the shipped image.
    Image(String),

    /// Fallback surface used when the image is missing.
    Placeholder,
}

/// Sound effects played by the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A pairing or an answer was correct.
    Correct,

    /// A pairing or an answer was wrong.
    Incorrect,

    /// A button or an item was clicked.
    Click,

    /// The session was won.
    Victory,

    /// The session was lost.
    Lose,
}

impl SoundCue {
    /// Name of the shipped sound clip for the cue.
    fn clip_name(&self) -> &'static str {
        match self {
            SoundCue::Correct => "sounds/CorrectAnswer.mp3",
            SoundCue::Incorrect => "sounds/incorrect.mp3",
            SoundCue::Click => "sounds/Click.mp3",
            SoundCue::Victory => "sounds/Victory.mp3",
            SoundCue::Lose => "sounds/Sad.mp3",
        }
    }
}

/// Handle to a sound clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundHandle {
    /// Name of the shipped clip.
    Clip(String),

    /// No-op sound used when the clip is missing.
    Silent,
}

/// Resolved asset handles for the loaded stages.
#[derive(Debug)]
pub struct AssetStore {
    /// Flag handles indexed by country.
    flags: HashMap<String, FlagHandle>,

    /// Sound handles indexed by cue.
    sounds: HashMap<SoundCue, SoundHandle>,
}

impl AssetStore {
    /// Resolve the assets for every country of the given stages.
    ///
    /// Countries without flag art (custom stage files can reference any
    /// country) get a placeholder handle.
    pub fn load(stages: &[Stage]) -> Self {
        let mut flags: HashMap<String, FlagHandle> = HashMap::new();
        for stage in stages {
            for entry in &stage.entries {
                if flags.contains_key(&entry.country) {
                    continue;
                }
                let handle: FlagHandle = if FLAG_ASSETS.contains(&entry.country.as_str()) {
                    FlagHandle::Image(stages::flag_asset_of(&entry.country))
                } else {
                    warn!(
                        "No flag image for {}: using a placeholder",
                        entry.country
                    );
                    FlagHandle::Placeholder
                };
                flags.insert(entry.country.clone(), handle);
            }
        }

        let sounds: HashMap<SoundCue, SoundHandle> = [
            SoundCue::Correct,
            SoundCue::Incorrect,
            SoundCue::Click,
            SoundCue::Victory,
            SoundCue::Lose,
        ]
        .into_iter()
        .map(|cue| (cue, SoundHandle::Clip(cue.clip_name().to_string())))
        .collect();

        Self { flags, sounds }
    }

    /// Return the flag handle of the given country, falling back to the
    /// placeholder for unknown countries.
    pub fn flag_of(&self, country: &str) -> FlagHandle {
        self.flags
            .get(country)
            .cloned()
            .unwrap_or(FlagHandle::Placeholder)
    }

    /// Play the sound of the given cue. A missing clip is a silent no-op.
    pub fn play(&self, cue: SoundCue) {
        match self.sounds.get(&cue) {
            Some(SoundHandle::Clip(name)) => debug!("Playing {name}"),
            Some(SoundHandle::Silent) | None => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{self, Entry};

    #[test]
    fn builtin_countries_have_flag_art() {
        let all: Vec<Stage> = stages::builtin_stages();
        let store: AssetStore = AssetStore::load(&all);
        for stage in &all {
            for entry in &stage.entries {
                assert_eq!(
                    store.flag_of(&entry.country),
                    FlagHandle::Image(stages::flag_asset_of(&entry.country))
                );
            }
        }
    }

    #[test]
    fn unknown_country_gets_a_placeholder() {
        let custom: Vec<Stage> = vec![Stage {
            name: "Custom".to_string(),
            entries: vec![
                Entry::new("Atlantis", "Poseidonis", "Sunken Palace"),
                Entry::new("France", "Paris", "Eiffel Tower"),
                Entry::new("UK", "London", "Big Ben"),
            ],
        }];
        let store: AssetStore = AssetStore::load(&custom);
        assert_eq!(store.flag_of("Atlantis"), FlagHandle::Placeholder);
        assert_eq!(
            store.flag_of("France"),
            FlagHandle::Image("Flags/France.png".to_string())
        );
    }

    #[test]
    fn country_outside_the_stages_gets_a_placeholder() {
        let store: AssetStore = AssetStore::load(&stages::builtin_stages());
        assert_eq!(store.flag_of("Narnia"), FlagHandle::Placeholder);
    }
}
