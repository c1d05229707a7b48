/*
segments.rs

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

//! Flag segment permutations for the flag-guessing game.
//!
//! A flag image is partitioned into [`NUM_SEGMENTS`] equal vertical
//! segments. A [`SegmentOrder`] value describes in which order the segments
//! are painted: [`IDENTITY`] is the real flag, and any other order is a
//! scrambled rendering used as a decoy.
//!
//! With three distinct segments there are six orders, so five decoys are
//! always available and round generation cannot run out of them. The
//! arithmetic still goes through [`crate::generator::options`], which
//! reports pools that are too small instead of silently reusing a decoy.

use rand::Rng;

use super::options::{self, OptionsError};

/// Number of vertical segments a flag is partitioned into.
pub const NUM_SEGMENTS: usize = 3;

/// Painting order of the flag segments.
///
/// The value at position `i` is the index of the source segment painted in
/// slot `i`.
pub type SegmentOrder = [usize; NUM_SEGMENTS];

/// The unscrambled order: the real flag.
pub const IDENTITY: SegmentOrder = [0, 1, 2];

/// Return all the segment orders, identity included.
pub fn all_orders() -> Vec<SegmentOrder> {
    let mut orders: Vec<SegmentOrder> = Vec::new();
    for a in 0..NUM_SEGMENTS {
        for b in 0..NUM_SEGMENTS {
            for c in 0..NUM_SEGMENTS {
                if a != b && a != c && b != c {
                    orders.push([a, b, c]);
                }
            }
        }
    }
    orders
}

/// Return all the non-identity segment orders, which are the candidate
/// decoys for one flag.
pub fn decoy_orders() -> Vec<SegmentOrder> {
    all_orders().into_iter().filter(|o| *o != IDENTITY).collect()
}

/// Build the candidate set for one flag-guessing round: the real flag and
/// `n - 1` scrambled decoys, in a random order.
///
/// # Errors
///
/// The function returns [`OptionsError::PoolExhausted`] if more decoys are
/// requested than there are non-identity orders. With three segments this
/// requires `n > 6` and never happens with the default option count.
pub fn flag_options<R>(n: usize, rng: &mut R) -> Result<Vec<SegmentOrder>, OptionsError>
where
    R: Rng + ?Sized,
{
    options::generate_options(&IDENTITY, &decoy_orders(), n, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn six_orders_five_decoys() {
        assert_eq!(all_orders().len(), 6);
        assert_eq!(decoy_orders().len(), 5);
    }

    #[test]
    fn decoys_never_identity() {
        for order in decoy_orders() {
            assert_ne!(order, IDENTITY);
        }
    }

    #[test]
    fn flag_options_contain_identity_once() {
        let mut rng: StdRng = StdRng::seed_from_u64(23);
        for _ in 0..50 {
            let opts: Vec<SegmentOrder> = flag_options(3, &mut rng).expect("flag options");
            assert_eq!(opts.len(), 3);
            assert_eq!(opts.iter().filter(|o| **o == IDENTITY).count(), 1);
        }
    }

    #[test]
    fn flag_decoys_are_distinct() {
        let mut rng: StdRng = StdRng::seed_from_u64(29);
        for _ in 0..50 {
            let opts: Vec<SegmentOrder> = flag_options(3, &mut rng).expect("flag options");
            assert_ne!(opts[0], opts[1]);
            assert_ne!(opts[0], opts[2]);
            assert_ne!(opts[1], opts[2]);
        }
    }

    #[test]
    fn too_many_decoys_requested() {
        let mut rng: StdRng = StdRng::seed_from_u64(31);
        assert_eq!(
            flag_options(7, &mut rng),
            Err(OptionsError::PoolExhausted {
                needed: 6,
                available: 5
            })
        );
    }
}
