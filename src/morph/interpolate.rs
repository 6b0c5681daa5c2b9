use std::sync::Arc;

use crate::{
    foundation::{
        core::near,
        error::{MorphError, MorphResult},
    },
    morph::normalize::{NormalizedPair, align},
    path::model::ParsedPath,
};

/// Result of sampling a blend at one offset.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame<'a> {
    /// The offset hit a keyframe exactly; its original input should be used verbatim.
    Exact(&'a ParsedPath),
    /// Blended point lists, one per sub-path.
    Blended(Vec<Vec<f64>>),
}

/// Pure offset to frame mapping.
///
/// Implementations hold only immutable data, so sampling is restartable and can run from several
/// threads at once.
pub trait BlendFunction: Send + Sync {
    /// Sample the blend at `offset`, nominally in `[0, 1]`.
    fn sample(&self, offset: f64) -> Frame<'_>;
}

/// Blend between two adjacent keyframes.
#[derive(Clone, Debug)]
pub struct PairBlend {
    left: Arc<ParsedPath>,
    right: Arc<ParsedPath>,
    pair: NormalizedPair,
}

impl PairBlend {
    /// Align two keyframes and wrap them for sampling.
    pub fn build(left: Arc<ParsedPath>, right: Arc<ParsedPath>) -> Self {
        let pair = align(&left, &right);
        Self::from_pair(left, right, pair)
    }

    /// Wrap an already aligned pair.
    pub fn from_pair(left: Arc<ParsedPath>, right: Arc<ParsedPath>, pair: NormalizedPair) -> Self {
        debug_assert!(pair.is_aligned(), "blend built from an unaligned pair");
        Self { left, right, pair }
    }

    /// Aligned point data this blend mixes.
    pub fn pair(&self) -> &NormalizedPair {
        &self.pair
    }
}

impl BlendFunction for PairBlend {
    fn sample(&self, offset: f64) -> Frame<'_> {
        if near(offset, 0.0) {
            return Frame::Exact(&self.left);
        }
        if near(offset, 1.0) {
            return Frame::Exact(&self.right);
        }
        Frame::Blended(
            self.pair
                .left
                .iter()
                .zip(&self.pair.right)
                .map(|(a, b)| mix_points(&a.points, &b.points, offset))
                .collect(),
        )
    }
}

/// Element-wise `a + (b - a) * offset`.
pub fn mix_points(a: &[f64], b: &[f64], offset: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(a, b)| a + (b - a) * offset).collect()
}

/// Blend across a chain of two or more keyframes.
#[derive(Clone, Debug)]
pub struct ChainBlend {
    pairs: Vec<PairBlend>,
}

impl ChainBlend {
    /// Build one pairwise blend per adjacent keyframe pair.
    ///
    /// Fails with [`MorphError::InvalidArgument`] for fewer than two keyframes.
    #[tracing::instrument(skip_all, fields(keyframes = keyframes.len()))]
    pub fn build(keyframes: Vec<ParsedPath>) -> MorphResult<Self> {
        if keyframes.len() < 2 {
            return Err(MorphError::invalid_argument(format!(
                "interpolation needs at least two keyframes, got {}",
                keyframes.len()
            )));
        }
        let keyframes: Vec<Arc<ParsedPath>> = keyframes.into_iter().map(Arc::new).collect();
        let pairs = keyframes
            .windows(2)
            .map(|w| PairBlend::build(Arc::clone(&w[0]), Arc::clone(&w[1])))
            .collect();
        Ok(Self { pairs })
    }

    /// Pairwise blends in keyframe order.
    pub fn pairs(&self) -> &[PairBlend] {
        &self.pairs
    }

    /// Map a global offset to `(pair index, local offset)`.
    ///
    /// With `N` keyframes: `d = (N - 1) * offset`, `i = min(floor(d), N - 2)` and the local offset
    /// is `(d - i) / (i + 1)`. The divisor makes pacing non-uniform past the first pair; callers
    /// depend on this mapping as is.
    pub fn locate(&self, offset: f64) -> (usize, f64) {
        let last = self.pairs.len() - 1;
        let d = self.pairs.len() as f64 * offset;
        let i = (d.floor().max(0.0) as usize).min(last);
        let local = (d - i as f64) / (i as f64 + 1.0);
        (i, local)
    }

    fn first(&self) -> &ParsedPath {
        &self.pairs[0].left
    }

    fn last(&self) -> &ParsedPath {
        &self.pairs[self.pairs.len() - 1].right
    }
}

impl BlendFunction for ChainBlend {
    fn sample(&self, offset: f64) -> Frame<'_> {
        if near(offset, 0.0) {
            return Frame::Exact(self.first());
        }
        if near(offset, 1.0) {
            return Frame::Exact(self.last());
        }
        let (i, local) = self.locate(offset);
        self.pairs[i].sample(local)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolate.rs"]
mod tests;
