/*!
Weight generators for [`EdgeListReader::try_read_graph_with`](crate::io::EdgeListReader::try_read_graph_with).

Each function returns a closure that is invoked once per ingested edge.
*/

use std::ops::RangeInclusive;

use rand::Rng;

use super::*;

/// Returns `+1` with probability `p` and `-1` otherwise.
/// ** Panics if `p` is not in `[0, 1]` **
///
/// # Examples
/// ```
/// use netgraphs::{prelude::*, gens::*, io::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let graph: WeightedSparseGraph = EdgeListReader::new()
///     .try_read_graph_with("1 2\n2 1\n".as_bytes(), random_sign(rng, 0.5))
///     .unwrap();
/// assert!(graph.weighted_edges().all(|(_, w)| w == 1 || w == -1));
/// ```
pub fn random_sign<R: Rng>(rng: &mut R, p: f64) -> impl FnMut() -> Weight {
    assert!((0.0..=1.0).contains(&p));
    move || if rng.random_bool(p) { 1 } else { -1 }
}

/// Returns weights drawn uniformly from `range`.
/// ** Panics if `range` is empty **
pub fn uniform_weight<R: Rng>(rng: &mut R, range: RangeInclusive<Weight>) -> impl FnMut() -> Weight {
    assert!(!range.is_empty());
    move || rng.random_range(range.clone())
}

/// Returns `weight` on every call
pub fn constant_weight(weight: Weight) -> impl FnMut() -> Weight {
    move || weight
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn signs_follow_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        {
            let mut always = random_sign(rng, 1.0);
            assert!((0..100).all(|_| always() == 1));
        }
        {
            let mut never = random_sign(rng, 0.0);
            assert!((0..100).all(|_| never() == -1));
        }

        let mut fair = random_sign(rng, 0.5);
        let positives = (0..10_000).filter(|_| fair() > 0).count();
        assert!((4_000..6_000).contains(&positives));
    }

    #[test]
    fn uniform_stays_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let mut weight = uniform_weight(rng, -3..=5);
        let drawn = (0..1000).map(|_| weight()).collect::<Vec<_>>();

        assert!(drawn.iter().all(|w| (-3..=5).contains(w)));
        assert!(drawn.contains(&-3));
        assert!(drawn.contains(&5));

        let mut seven = constant_weight(7);
        assert_eq!((seven(), seven()), (7, 7));
    }
}
