pub(crate) mod alt;
pub(crate) mod format;
pub(crate) mod path_data;

use format::{Formatted, Formatter};

/// Formatted curve groups of one point list, skipping repeated zero-length groups.
///
/// Comparisons use the printed text of each formatted value. A group is dropped when both its
/// control points print like its endpoint and its six values print like the previous emitted
/// group's.
pub(crate) fn visible_groups<'a>(
    points: &'a [f64],
    formatter: &'a Formatter,
) -> impl Iterator<Item = [Formatted; 6]> + 'a {
    let mut last: Option<[String; 6]> = None;
    points
        .get(2..)
        .unwrap_or(&[])
        .chunks_exact(6)
        .filter_map(move |g| {
            let v: [Formatted; 6] = std::array::from_fn(|i| formatter.apply(g[i]));
            let text: [String; 6] = std::array::from_fn(|i| v[i].to_string());
            let is_point =
                text[0] == text[4] && text[2] == text[4] && text[1] == text[5] && text[3] == text[5];
            if is_point && last.as_ref() == Some(&text) {
                return None;
            }
            last = Some(text);
            Some(v)
        })
}
