//! Ranking and sampling of scored candidates.
//!
//! The top `top_pool` candidates by score form a pool; `count` of them
//! are drawn uniformly without replacement so repeated runs over the
//! same wardrobe do not return the same outfits every time. The draw is
//! seedable for reproducible tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use wardrobe_core::Outfit;

/// Selection parameters.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Size of the top-ranked pool sampled from.
    pub top_pool: usize,
    /// Fixed seed for the sampling draw. None seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            top_pool: 150,
            seed: None,
        }
    }
}

/// Sort candidates best-first with a deterministic tie-break on the
/// required slot ids.
pub fn rank(candidates: &mut [Outfit]) {
    candidates.sort_by(|a, b| {
        let score_a = a.score.unwrap_or(0.0);
        let score_b = b.score.unwrap_or(0.0);
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.shoes.cmp(&b.shoes))
            .then_with(|| a.bottom.cmp(&b.bottom))
            .then_with(|| a.base_top.cmp(&b.base_top))
            .then_with(|| a.mid_top.cmp(&b.mid_top))
            .then_with(|| a.outerwear.cmp(&b.outerwear))
    });
}

/// Rank, pool, and sample. When fewer candidates than `count` exist,
/// all of them come back (still scored, best-first).
pub fn select(mut candidates: Vec<Outfit>, count: usize, config: &SelectorConfig) -> Vec<Outfit> {
    rank(&mut candidates);
    if candidates.len() <= count {
        return candidates;
    }

    let pool_size = config.top_pool.min(candidates.len());
    let pool = &candidates[..pool_size];

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    pool.choose_multiple(&mut rng, count.min(pool_size))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(shoes: i64, score: f64) -> Outfit {
        let mut outfit = Outfit::new(shoes, 100, 200, None, None);
        outfit.score = Some(score);
        outfit
    }

    #[test]
    fn test_rank_descending_by_score() {
        let mut outfits = vec![scored(1, 0.4), scored(2, 0.9), scored(3, 0.7)];
        rank(&mut outfits);
        let order: Vec<i64> = outfits.iter().map(|o| o.shoes).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_tie_break_is_deterministic() {
        let mut outfits = vec![scored(5, 0.5), scored(1, 0.5), scored(3, 0.5)];
        rank(&mut outfits);
        let order: Vec<i64> = outfits.iter().map(|o| o.shoes).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn test_fewer_candidates_than_count_returns_all() {
        let outfits = vec![scored(1, 0.4), scored(2, 0.9)];
        let selected = select(outfits, 5, &SelectorConfig::default());
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].shoes, 2);
    }

    #[test]
    fn test_sample_comes_from_top_pool() {
        let mut outfits: Vec<Outfit> = (0..50).map(|i| scored(i, i as f64 / 50.0)).collect();
        outfits.reverse();
        let config = SelectorConfig {
            top_pool: 10,
            seed: Some(7),
        };
        let selected = select(outfits, 3, &config);
        assert_eq!(selected.len(), 3);
        // Top 10 by score are shoes ids 40..=49.
        for outfit in &selected {
            assert!(outfit.shoes >= 40, "sampled outside the top pool");
        }
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let outfits: Vec<Outfit> = (0..30).map(|i| scored(i, i as f64 / 30.0)).collect();
        let config = SelectorConfig {
            top_pool: 20,
            seed: Some(42),
        };
        let first = select(outfits.clone(), 5, &config);
        let second = select(outfits, 5, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_duplicates_in_sample() {
        let outfits: Vec<Outfit> = (0..30).map(|i| scored(i, 0.5)).collect();
        let config = SelectorConfig {
            top_pool: 30,
            seed: Some(3),
        };
        let selected = select(outfits, 10, &config);
        let mut ids: Vec<i64> = selected.iter().map(|o| o.shoes).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_zero_candidates_returns_empty() {
        assert!(select(Vec::new(), 3, &SelectorConfig::default()).is_empty());
    }
}
