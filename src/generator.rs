/*
generator.rs

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

//! Generate random candidate answers for the multiple-choice mini-games.
//!
//! Each multiple-choice round presents one correct answer among decoys:
//!
//! * The [`options::generate_options`] function builds the candidate set for
//!   a round. Decoys are selected without replacement from a pool, and the
//!   resulting set is shuffled so that the correct answer does not always
//!   appear in the same position.
//!   If the pool cannot provide the requested number of decoys, then the
//!   function returns an error. This indicates a stage-authoring bug, and
//!   the startup validation in [`crate::stages`] rules it out for the
//!   builtin data.
//!
//! * The [`segments`] module builds the decoys for the flag-guessing game.
//!   A flag image is partitioned into three equal vertical segments, and a
//!   decoy is the same flag with its segments reordered. The identity order
//!   (the real flag) is never used as a decoy.

pub mod options;
pub mod segments;
