//! Tile scrambling.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly random permutation of `0..len` that is not the
/// identity, so a freshly scrambled board is never already solved.
///
/// Fisher-Yates via [`SliceRandom::shuffle`], re-drawn while the draw lands
/// on the identity. For `len < 2` the identity is the only permutation and
/// is returned as-is.
pub fn scrambled_permutation<R: Rng>(rng: &mut R, len: usize) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..len).collect();
    if len < 2 {
        return positions;
    }

    while positions.iter().enumerate().all(|(home, &p)| home == p) {
        positions.shuffle(rng);
    }
    positions
}

/// Checks that `positions` contains every index in `0..positions.len()`
/// exactly once.
pub fn is_permutation(positions: &[usize]) -> bool {
    let mut seen = vec![false; positions.len()];
    for &p in positions {
        if p >= positions.len() || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_is_a_permutation_across_seeds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let positions = scrambled_permutation(&mut rng, 16);
            assert!(is_permutation(&positions), "seed {seed} broke bijection");
        }
    }

    #[test]
    fn scramble_never_returns_identity() {
        // len 2 has exactly one non-identity permutation, the worst case
        // for the redraw loop.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let positions = scrambled_permutation(&mut rng, 2);
            assert_eq!(positions, vec![1, 0], "seed {seed}");
        }
    }

    #[test]
    fn degenerate_lengths_return_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scrambled_permutation(&mut rng, 0), Vec::<usize>::new());
        assert_eq!(scrambled_permutation(&mut rng, 1), vec![0]);
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[0]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[0, 0, 2]), "duplicate");
        assert!(!is_permutation(&[0, 1, 3]), "out of range");
    }
}
