use crate::render::{format::Formatter, visible_groups};

/// Serialize point lists as `M x y C ...` path data, one figure per sub-path.
pub fn render_path_data(matrix: &[Vec<f64>], formatter: &Formatter) -> String {
    let mut parts: Vec<String> = Vec::new();
    for points in matrix {
        let [x, y, ..] = points.as_slice() else {
            continue;
        };
        parts.push("M".to_string());
        parts.push(formatter.apply(*x).to_string());
        parts.push(formatter.apply(*y).to_string());
        parts.push("C".to_string());
        for g in visible_groups(points, formatter) {
            parts.extend(g.iter().map(ToString::to_string));
        }
    }
    parts.join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/render/path_data.rs"]
mod tests;
