use crate::{
    path::alt::AltCommand,
    render::{format::Formatter, visible_groups},
};

/// Serialize point lists as alt layer commands: a move per sub-path, then one curve per group.
///
/// Text from a custom formatter contributes its leading number.
pub fn render_alt(matrix: &[Vec<f64>], formatter: &Formatter) -> Vec<AltCommand> {
    let mut out = Vec::new();
    for points in matrix {
        let [x, y, ..] = points.as_slice() else {
            continue;
        };
        out.push(AltCommand::move_to(
            formatter.apply(*x).as_number(),
            formatter.apply(*y).as_number(),
        ));
        out.extend(
            visible_groups(points, formatter).map(|g| AltCommand::curve(g.map(|v| v.as_number()))),
        );
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/alt.rs"]
mod tests;
