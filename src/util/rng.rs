// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use rand::RngCore;

/// an endless stream of random bytes
pub fn random_bytes<'r>(mut rng: impl RngCore + 'r) -> impl Iterator<Item = u8> + 'r {
    std::iter::repeat_with(move || rng.next_u64()).flat_map(u64::to_le_bytes)
}

/// uniformly picks a value in `0..=bound`
///
/// draws masked values until one is in range, so at least every second draw hits.
/// Gives up after `max_tries` draws, if a limit is given
pub fn next_bound(
    bound: usize,
    mut rng: impl RngCore,
    max_tries: impl Into<Option<usize>>,
) -> usize {
    if bound == 0 {
        return 0;
    }
    let mask = usize::MAX >> bound.leading_zeros();
    let max_tries = max_tries.into();
    let mut tries = 0;
    loop {
        // usize has at most 64 bits on every supported target
        let pick = rng.next_u64() as usize & mask;
        if pick <= bound {
            return pick;
        }
        tries += 1;
        assert!(
            max_tries.map_or(true, |max| tries < max),
            "no value <= {bound} found in {tries} tries"
        );
    }
}

/// a reproducible rng, the seed is returned so failing tests can report it
#[cfg(test)]
pub fn seeded_rng() -> ([u8; 32], rand::rngs::StdRng) {
    use rand::{rngs::OsRng, SeedableRng};
    let mut seed = [0; 32];
    OsRng.fill_bytes(&mut seed);
    (seed, rand::rngs::StdRng::from_seed(seed))
}
