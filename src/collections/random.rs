//! Randomness helpers shared by the randomized list and map operations.

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::{SliceRandom, index};

/// Returns the thread-local generator, initialized lazily on first use and
/// reused afterwards.
pub(crate) fn default_rng() -> ThreadRng {
    tracing::trace!("drawing from the thread-local generator");
    rand::rng()
}

/// Returns `values` in a uniformly random order.
pub(crate) fn shuffled<T, R>(mut values: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    values.shuffle(rng);
    values
}

/// Picks `count` distinct positions out of `0..len`, in ascending order.
///
/// The caller guarantees `count <= len`.
pub(crate) fn ordered_sample<R>(len: usize, count: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut positions = index::sample(rng, len, count).into_vec();
    positions.sort_unstable();
    positions
}

/// Picks one position out of `0..len`, or `None` when `len` is zero.
pub(crate) fn position<R>(len: usize, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    (len > 0).then(|| rng.random_range(0..len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    fn test_ordered_sample_is_sorted_and_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let positions = ordered_sample(20, 8, &mut rng);
        assert_eq!(positions.len(), 8);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(positions.iter().all(|position| *position < 20));
    }

    #[rstest]
    fn test_position_on_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(position(0, &mut rng), None);
    }
}
