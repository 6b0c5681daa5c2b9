use crate::foundation::core::{Point, Rect};

/// Size and bounding-box measures of one sub-path.
///
/// `size` is a ranking key for pairing contours between shapes, not a rendered value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Metrics {
    /// Floored length of the polyline through the start point and every curve endpoint,
    /// including the closing edge back to the start.
    pub size: f64,
    /// Horizontal midpoint of the endpoint bounding box.
    pub centroid_x: f64,
    /// Vertical midpoint of the endpoint bounding box.
    pub centroid_y: f64,
    /// Width of the endpoint bounding box.
    pub width: f64,
    /// Height of the endpoint bounding box.
    pub height: f64,
}

impl Metrics {
    /// Bounding-box midpoint as a point.
    pub fn centroid(&self) -> Point {
        Point::new(self.centroid_x, self.centroid_y)
    }
}

/// Measure a flat `[x0, y0, (cx1, cy1, cx2, cy2, x, y)*]` point list.
///
/// Control points are excluded from the bounding box. An empty list measures as all zeros.
pub fn measure(points: &[f64]) -> Metrics {
    let ends: Vec<Point> = endpoints(points).collect();
    let (Some(&first), Some(&last)) = (ends.first(), ends.last()) else {
        return Metrics::default();
    };

    let bounds = ends
        .iter()
        .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p));

    let mut prev = last;
    let mut size = 0.0;
    for &p in &ends {
        size += p.distance(prev);
        prev = p;
    }

    let center = bounds.center();
    Metrics {
        size: size.floor(),
        centroid_x: center.x,
        centroid_y: center.y,
        width: bounds.width(),
        height: bounds.height(),
    }
}

/// The start point followed by each curve group's endpoint.
pub(crate) fn endpoints(points: &[f64]) -> impl Iterator<Item = Point> + '_ {
    // Pairs 0, 3, 6, ... are the start point and the group endpoints.
    points
        .chunks_exact(2)
        .step_by(3)
        .map(|p| Point::new(p[0], p[1]))
}

#[cfg(test)]
#[path = "../../tests/unit/path/metrics.rs"]
mod tests;
