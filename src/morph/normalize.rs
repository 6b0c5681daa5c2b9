//! Pairwise alignment of two parsed shapes.
//!
//! After [`align`], both sides have the same number of sub-paths and every pair of sub-paths has
//! the same number of points, so blending is a plain element-wise mix.

use crate::{
    foundation::core::{Point, group_count},
    path::model::{ParsedPath, SubPath},
};

/// Two sub-path lists with matching shape, ready for blending.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPair {
    /// Sub-paths of the left keyframe.
    pub left: Vec<SubPath>,
    /// Sub-paths of the right keyframe.
    pub right: Vec<SubPath>,
}

impl NormalizedPair {
    /// True when counts and per-index point lengths match.
    pub fn is_aligned(&self) -> bool {
        self.left.len() == self.right.len()
            && self
                .left
                .iter()
                .zip(&self.right)
                .all(|(a, b)| a.points.len() == b.points.len())
    }
}

/// Align two shapes for blending.
///
/// 1. Sort sub-paths by descending size, so the dominant contours pair up.
/// 2. Reverse a shape whose leading sub-path has negative size.
/// 3. Pad the shorter sub-path list with contours collapsed onto the partner's centroid.
/// 4. Rotate closed sub-paths to start at the endpoint nearest the origin.
/// 5. Pad the shorter point list of each pair with zero-length curves.
#[tracing::instrument(skip_all, fields(left = left.sub_paths.len(), right = right.sub_paths.len()))]
pub fn align(left: &ParsedPath, right: &ParsedPath) -> NormalizedPair {
    let mut l = sorted_by_size(&left.sub_paths);
    let mut r = sorted_by_size(&right.sub_paths);

    normalize_winding(&mut l);
    normalize_winding(&mut r);

    if l.len() != r.len() {
        tracing::debug!(left = l.len(), right = r.len(), "padding sub-path count");
        fill_sub_paths(&mut l, &mut r);
    }

    for sub in l.iter_mut().chain(r.iter_mut()) {
        rotate_to_origin(&mut sub.points);
    }

    for (a, b) in l.iter_mut().zip(r.iter_mut()) {
        fill_points(&mut a.points, &mut b.points);
    }

    let pair = NormalizedPair { left: l, right: r };
    debug_assert!(pair.is_aligned(), "normalizer produced mismatched shapes");
    pair
}

fn sorted_by_size(subs: &[SubPath]) -> Vec<SubPath> {
    let mut out = subs.to_vec();
    out.sort_by(|a, b| b.metrics.size.total_cmp(&a.metrics.size));
    out
}

// `size` is a sum of distances, so this never fires today. It stays for a signed-area measure.
fn normalize_winding(subs: &mut [SubPath]) {
    if subs.first().is_some_and(|s| s.metrics.size < 0.0) {
        tracing::debug!(count = subs.len(), "reversing winding");
        for sub in subs.iter_mut() {
            sub.points = reverse_points(&sub.points);
        }
    }
}

/// Walk a point list backwards, swapping each group's control points.
pub(crate) fn reverse_points(points: &[f64]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(n);
    out.extend_from_slice(&points[n - 2..]);
    for k in (0..group_count(n)).rev() {
        let g = 2 + k * 6;
        out.extend_from_slice(&[
            points[g + 2],
            points[g + 3],
            points[g],
            points[g + 1],
            points[g - 2],
            points[g - 1],
        ]);
    }
    out
}

fn fill_sub_paths(left: &mut Vec<SubPath>, right: &mut Vec<SubPath>) {
    let (larger, smaller) = if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    };

    for template in &larger[smaller.len()..] {
        smaller.push(collapsed(template));
    }
}

/// A sub-path with the template's point count, every point on the template's centroid.
fn collapsed(template: &SubPath) -> SubPath {
    let c = template.metrics.centroid();
    let points = template
        .points
        .chunks_exact(2)
        .flat_map(|_| [c.x, c.y])
        .collect();
    SubPath::new(points)
}

/// Rotate a closed point list so it starts at the endpoint nearest the origin.
pub(crate) fn rotate_to_origin(points: &mut Vec<f64>) {
    let n = points.len();
    if n < 8 || points[n - 2] != points[0] || points[n - 1] != points[1] {
        return;
    }

    let mut groups = points.split_off(2);
    let mut best: Option<(usize, f64)> = None;
    for (i, g) in groups.chunks_exact(6).enumerate() {
        let d = Point::new(g[4], g[5]).to_vec2().hypot();
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    let Some((i, _)) = best else {
        return;
    };

    let count = groups.len() / 6;
    groups.rotate_left(((i + 1) % count) * 6);

    // The last group now ends at the chosen endpoint, which becomes the start.
    let end = groups.len();
    points.clear();
    points.extend_from_slice(&groups[end - 2..]);
    points.extend_from_slice(&groups);
}

fn fill_points(a: &mut Vec<f64>, b: &mut Vec<f64>) {
    if a.len() < b.len() {
        pad_groups(b.len(), a);
    } else if b.len() < a.len() {
        pad_groups(a.len(), b);
    }
}

/// Insert zero-length groups into `smaller` until it has as many points as `target_len`.
///
/// Insertions are spread evenly over the longer list's groups; each one repeats the point just
/// before the insertion position.
pub(crate) fn pad_groups(target_len: usize, smaller: &mut Vec<f64>) {
    if smaller.len() < 2 {
        return;
    }
    let larger = group_count(target_len);
    let to_insert = larger.saturating_sub(group_count(smaller.len()));
    if to_insert == 0 {
        return;
    }

    tracing::debug!(to_insert, larger, "padding curve groups");
    let spacing = to_insert as f64 / larger as f64;
    for i in 0..to_insert {
        // Positions count whole groups, so an insertion never lands inside a group.
        let pos = ((i as f64 / spacing).floor() as usize).min(group_count(smaller.len()));
        let index = 2 + pos * 6;
        let (x, y) = (smaller[index - 2], smaller[index - 1]);
        smaller.splice(index..index, [x, y, x, y, x, y]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/normalize.rs"]
mod tests;
