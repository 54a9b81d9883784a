use rand::Rng;

use crate::error::{Error, Result};

/// Draws `count` indices uniformly from `0..len`, independently and with
/// replacement, so the same index may appear more than once.
///
/// Returns `Error::EmptyDataset` when `len == 0`.
pub fn sample_indices<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Result<Vec<usize>> {
    if len == 0 {
        return Err(Error::EmptyDataset);
    }
    Ok((0..count).map(|_| rng.gen_range(0..len)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn indices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [1usize, 2, 9, 50] {
            let picked = sample_indices(len, 9, &mut rng).unwrap();
            assert_eq!(picked.len(), 9);
            assert!(picked.iter().all(|&i| i < len));
        }
    }

    #[test]
    fn single_sample_is_repeated() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample_indices(1, 9, &mut rng).unwrap(), vec![0; 9]);
    }

    #[test]
    fn fewer_samples_than_cells_forces_repeats() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample_indices(4, 9, &mut rng).unwrap();
        let mut unique = picked.clone();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() < picked.len());
    }

    #[test]
    fn empty_dataset_cannot_be_sampled() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(sample_indices(0, 9, &mut rng), Err(Error::EmptyDataset)));
    }

    #[test]
    fn same_seed_same_picks() {
        let a = sample_indices(1000, 9, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = sample_indices(1000, 9, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
