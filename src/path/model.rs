use crate::{
    foundation::core::{BezPath, CubicBez, Point, group_count},
    path::{
        alt::AltCommand,
        metrics::{Metrics, measure},
    },
};

/// Where a parsed keyframe came from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOrigin {
    /// Parsed from a path-data string; the identifier is that string.
    PathData,
    /// Adapted from an alt layer; keeps the original commands for exact-endpoint output.
    AltLayer(Vec<AltCommand>),
}

/// A shape as an ordered list of sub-paths made only of cubic curve groups.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParsedPath {
    /// Original path data (or alt layer id), returned verbatim at exact keyframe offsets.
    pub identifier: String,
    /// Input representation the shape was built from.
    pub origin: PathOrigin,
    /// Sub-paths in source order.
    pub sub_paths: Vec<SubPath>,
}

impl ParsedPath {
    /// Flat point lists of every sub-path, in order.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.sub_paths.iter().map(|s| s.points.clone()).collect()
    }

    /// Build a kurbo path with one open figure per sub-path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        for sub in &self.sub_paths {
            sub.append_to(&mut out);
        }
        out
    }
}

/// One move-to started curve polyline with its metrics.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SubPath {
    /// `[x0, y0]` followed by `(cx1, cy1, cx2, cy2, x, y)` per curve.
    pub points: Vec<f64>,
    /// Measures computed from `points` at construction.
    #[serde(flatten)]
    pub metrics: Metrics,
}

impl SubPath {
    /// Wrap a flat point list and measure it.
    pub fn new(points: Vec<f64>) -> Self {
        let metrics = measure(&points);
        Self { points, metrics }
    }

    /// Start point, if the list is non-empty.
    pub fn start(&self) -> Option<Point> {
        match self.points.as_slice() {
            [x, y, ..] => Some(Point::new(*x, *y)),
            _ => None,
        }
    }

    /// Number of cubic curve groups after the start point.
    pub fn group_count(&self) -> usize {
        group_count(self.points.len())
    }

    /// True when the last endpoint is exactly the start point.
    pub fn is_closed(&self) -> bool {
        let n = self.points.len();
        n >= 8 && self.points[n - 2] == self.points[0] && self.points[n - 1] == self.points[1]
    }

    /// Iterate the curve groups as kurbo cubic segments.
    pub fn curves(&self) -> impl Iterator<Item = CubicBez> + '_ {
        let mut from = self.start().unwrap_or(Point::ZERO);
        self.points
            .get(2..)
            .unwrap_or(&[])
            .chunks_exact(6)
            .map(move |g| {
                let to = Point::new(g[4], g[5]);
                let c = CubicBez::new(from, Point::new(g[0], g[1]), Point::new(g[2], g[3]), to);
                from = to;
                c
            })
    }

    fn append_to(&self, out: &mut BezPath) {
        let Some(start) = self.start() else {
            return;
        };
        out.move_to(start);
        for c in self.curves() {
            out.curve_to(c.p1, c.p2, c.p3);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
