/*
loader.rs

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

//! Load custom stage files.
//!
//! Quiz authors can play their own stage list with the `--stages` option.
//! The file is a JSON serialization of a list of [`Stage`] objects, the
//! same representation that [`serde`] derives for the builtin data:
//!
//! ```json
//! [
//!   {
//!     "name": "Nordics",
//!     "entries": [
//!       { "country": "Sweden", "capital": "Stockholm", "monument": "Vasa Museum" },
//!       { "country": "Norway", "capital": "Oslo", "monument": "Nidaros Cathedral" },
//!       { "country": "Denmark", "capital": "Copenhagen", "monument": "The Little Mermaid" }
//!     ]
//!   }
//! ]
//! ```
//!
//! A file that cannot be read or parsed is a data-authoring error: the
//! loader fails fast and the program exits with the reported error.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::stages::Stage;

/// Type of errors when loading a stage file.
#[derive(Debug)]
pub enum LoadError {
    /// The file cannot be opened or read.
    Io(std::io::Error),

    /// The file is not a valid stage list.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read the stage file: {e}"),
            LoadError::Parse(e) => write!(f, "invalid stage file: {e}"),
        }
    }
}

impl Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

/// Load a stage list from the given JSON file.
///
/// The returned stages still go through [`crate::stages::validate`] when
/// the game context is built.
///
/// # Errors
///
/// The function returns an error when the file cannot be read or does not
/// contain a valid stage list.
pub fn load_stages(path: &Path) -> Result<Vec<Stage>, LoadError> {
    debug!("Loading stages from {}", path.display());
    let file: File = File::open(path)?;
    let stages: Vec<Stage> = serde_json::from_reader(BufReader::new(file))?;
    debug!("Loaded {} stages", stages.len());
    Ok(stages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err: LoadError =
            load_stages(Path::new("/nonexistent/stages.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn stage_list_parses_from_json() {
        let json: &str = r#"[
            {
                "name": "Nordics",
                "entries": [
                    { "country": "Sweden", "capital": "Stockholm", "monument": "Vasa Museum" },
                    { "country": "Norway", "capital": "Oslo", "monument": "Nidaros Cathedral" },
                    { "country": "Denmark", "capital": "Copenhagen", "monument": "The Little Mermaid" }
                ]
            }
        ]"#;
        let stages: Vec<Stage> = serde_json::from_str(json).expect("parse stages");
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].capital_of("Norway"), Some("Oslo"));
    }
}
