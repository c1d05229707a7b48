/*
americas_5.rs

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

//! Stage 4: Americas and Oceania, five countries.

use super::{Entry, Stage};

/// Return the stage data.
pub fn stage() -> Stage {
    Stage {
        name: "Americas".to_string(),
        entries: vec![
            Entry::new("Canada", "Ottawa", "CN Tower"),
            Entry::new("Brazil", "Brasília", "Christ the Redeemer"),
            Entry::new("Mexico", "Mexico City", "Chichén Itzá"),
            Entry::new("Argentina", "Buenos Aires", "Obelisco de Buenos Aires"),
            Entry::new("Australia", "Canberra", "Sydney Opera House"),
        ],
    }
}
