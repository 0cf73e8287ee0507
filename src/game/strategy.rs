use super::spot::Spot;
use crate::Probability;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// A mixed strategy: one weight per board cell in flattened order.
///
/// Strategies arrive from the equilibrium service as probability vectors and
/// leave as sampled moves. Sampling is weighted draw over flat indices,
/// unflattened back into spots with the board width.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy(Vec<Probability>);

impl Strategy {
    /// Equal weight on every one of `cells` cells.
    pub fn uniform(cells: usize) -> Self {
        assert!(cells > 0, "strategy over no cells");
        Self(vec![1. / cells as Probability; cells])
    }

    pub fn weights(&self) -> &[Probability] {
        &self.0
    }

    pub fn cells(&self) -> usize {
        self.0.len()
    }

    /// Whether the weights form a probability distribution.
    pub fn normalized(&self) -> bool {
        self.0.iter().all(|p| *p >= 0.) && (self.0.iter().sum::<Probability>() - 1.).abs() < 1e-4
    }

    /// One weighted draw, as a spot on a board `cols` wide.
    pub fn sample(&self, cols: usize, rng: &mut SmallRng) -> Spot {
        Spot::unflatten(self.index().sample(rng), cols)
    }

    /// A move list of `num` independent weighted draws.
    pub fn sample_many(&self, cols: usize, num: usize, rng: &mut SmallRng) -> Vec<Spot> {
        let index = self.index();
        (0..num)
            .map(|_| index.sample(rng))
            .map(|i| Spot::unflatten(i, cols))
            .collect()
    }

    fn index(&self) -> WeightedIndex<Probability> {
        WeightedIndex::new(self.0.iter()).expect("at least one weight > 0")
    }
}

impl From<Vec<Probability>> for Strategy {
    fn from(weights: Vec<Probability>) -> Self {
        assert!(!weights.is_empty(), "strategy over no cells");
        Self(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn uniform_is_normalized() {
        for cells in [1, 4, 12, 100] {
            let strategy = Strategy::uniform(cells);
            assert_eq!(strategy.cells(), cells);
            assert!(strategy.normalized());
        }
    }

    #[test]
    fn point_mass_always_lands_there() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let strategy = Strategy::from(vec![0., 0., 0., 0., 1., 0.]);
        for _ in 0..50 {
            assert_eq!(strategy.sample(3, rng), Spot::from((1, 1)));
        }
    }

    #[test]
    fn sampling_is_seeded() {
        let strategy = Strategy::uniform(9);
        let a = strategy.sample_many(3, 50, &mut SmallRng::seed_from_u64(7));
        let b = strategy.sample_many(3, 50, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn samples_stay_on_the_board() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let strategy = Strategy::uniform(6);
        for spot in strategy.sample_many(3, 200, rng) {
            assert!(spot.row < 2);
            assert!(spot.col < 3);
        }
    }

    #[test]
    fn unnormalized_weights_flagged() {
        assert!(!Strategy::from(vec![0.5, 0.4]).normalized());
        assert!(!Strategy::from(vec![0.5, -0.5, 1.0]).normalized());
    }
}
