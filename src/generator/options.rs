/*
options.rs

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

//! Build the candidate set for a multiple-choice round.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum OptionsError {
    /// The pool does not provide enough distinct decoys.
    PoolExhausted {
        /// Number of decoys requested.
        needed: usize,

        /// Number of distinct decoys in the pool.
        available: usize,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionsError::PoolExhausted { needed, available } => write!(
                f,
                "cannot pick {needed} decoys from a pool of {available} candidates"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Build an ordered set of `n` candidates that contains the correct answer
/// exactly once, in a random position.
///
/// The `n - 1` decoys are selected without replacement from `pool`.
/// Duplicates of the correct answer and duplicates within the pool are
/// excluded, so the returned set never contains the same candidate twice.
///
/// # Errors
///
/// The function returns [`OptionsError::PoolExhausted`] if the pool holds
/// fewer than `n - 1` distinct decoys. This indicates a bug in the stage
/// data, not a runtime condition.
pub fn generate_options<T, R>(
    correct: &T,
    pool: &[T],
    n: usize,
    rng: &mut R,
) -> Result<Vec<T>, OptionsError>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let mut decoys: Vec<T> = Vec::with_capacity(pool.len());
    for candidate in pool {
        if candidate != correct && !decoys.contains(candidate) {
            decoys.push(candidate.clone());
        }
    }

    let needed: usize = n.saturating_sub(1);
    if decoys.len() < needed {
        return Err(OptionsError::PoolExhausted {
            needed,
            available: decoys.len(),
        });
    }

    decoys.shuffle(rng);
    decoys.truncate(needed);
    decoys.push(correct.clone());
    decoys.shuffle(rng);
    Ok(decoys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> Vec<String> {
        ["Paris", "Berlin", "Rome", "Madrid", "London"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn contains_correct_exactly_once() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let correct: String = "Paris".to_string();
            let opts: Vec<String> =
                generate_options(&correct, &pool(), 3, &mut rng).expect("generate options");
            assert_eq!(opts.len(), 3);
            assert_eq!(opts.iter().filter(|o| **o == correct).count(), 1);
        }
    }

    #[test]
    fn no_duplicate_candidates() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let opts: Vec<String> =
                generate_options(&"Rome".to_string(), &pool(), 4, &mut rng).expect("options");
            for (i, a) in opts.iter().enumerate() {
                for b in opts.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn duplicates_in_pool_are_ignored() {
        let mut rng: StdRng = StdRng::seed_from_u64(13);
        let noisy: Vec<String> = ["Berlin", "Berlin", "Rome", "Rome"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let opts: Vec<String> =
            generate_options(&"Paris".to_string(), &noisy, 3, &mut rng).expect("options");
        assert!(opts.contains(&"Berlin".to_string()));
        assert!(opts.contains(&"Rome".to_string()));
        assert!(opts.contains(&"Paris".to_string()));
    }

    #[test]
    fn pool_exhausted() {
        let mut rng: StdRng = StdRng::seed_from_u64(17);
        let small: Vec<String> = vec!["Paris".to_string(), "Berlin".to_string()];
        // "Paris" duplicates the correct answer, so only one decoy remains.
        let err = generate_options(&"Paris".to_string(), &small, 3, &mut rng).unwrap_err();
        assert_eq!(
            err,
            OptionsError::PoolExhausted {
                needed: 2,
                available: 1
            }
        );
    }
}
