//! Adapter for the alt layer point-list format.
//!
//! An alt layer is `{ "id": ..., "path": [[tag, x1, y1, x2, y2, x3, y3], ...] }`. Tag `1` moves,
//! tag `7` terminates the list, and every other tag is a curve whose missing trailing
//! coordinates fall back to `x1, y1`.

use crate::{
    foundation::error::{MorphError, MorphResult},
    path::model::{ParsedPath, PathOrigin, SubPath},
};

/// Tag of a move command.
pub const ALT_MOVE: f64 = 1.0;
/// Tag emitted for rendered curve commands.
pub const ALT_CURVE: f64 = 4.0;
/// Tag that terminates a command list.
pub const ALT_CLOSE: f64 = 7.0;

/// One command tuple: the tag followed by its coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AltCommand(pub Vec<f64>);

impl AltCommand {
    /// Move command to `(x, y)`.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self(vec![ALT_MOVE, x, y])
    }

    /// Curve command from a six-value group.
    pub fn curve(g: [f64; 6]) -> Self {
        let mut v = Vec::with_capacity(7);
        v.push(ALT_CURVE);
        v.extend_from_slice(&g);
        Self(v)
    }

    /// Leading tag, if any.
    pub fn tag(&self) -> Option<f64> {
        self.0.first().copied()
    }
}

/// Alt layer record: an id plus its command list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AltLayer {
    /// Layer id, used as the keyframe identifier.
    pub id: String,
    /// Command tuples in drawing order.
    pub path: Vec<AltCommand>,
}

/// Decoded curve command with explicit optional trailing coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
struct AltPoint {
    x1: f64,
    y1: f64,
    x2: Option<f64>,
    y2: Option<f64>,
    x3: Option<f64>,
    y3: Option<f64>,
}

impl AltPoint {
    fn decode(index: usize, cmd: &AltCommand) -> MorphResult<Self> {
        let field = |i: usize| cmd.0.get(i).copied().filter(|v| !v.is_nan());
        let (Some(x1), Some(y1)) = (field(1), field(2)) else {
            return Err(MorphError::syntax(format!(
                "alt command {index} is missing its first coordinate pair"
            )));
        };
        Ok(Self {
            x1,
            y1,
            x2: field(3),
            y2: field(4),
            x3: field(5),
            y3: field(6),
        })
    }

    fn group(self) -> [f64; 6] {
        [
            self.x1,
            self.y1,
            self.x2.unwrap_or(self.x1),
            self.y2.unwrap_or(self.y1),
            self.x3.unwrap_or(self.x1),
            self.y3.unwrap_or(self.y1),
        ]
    }
}

/// Convert an alt layer into the canonical parsed model.
///
/// Each move starts a new sub-path. A curve before the first move is a syntax error.
#[tracing::instrument(skip(layer), fields(id = %layer.id, commands = layer.path.len()))]
pub fn parse_alt(layer: &AltLayer) -> MorphResult<ParsedPath> {
    let mut sub_paths = Vec::new();
    let mut current: Option<Vec<f64>> = None;

    for (index, cmd) in layer.path.iter().enumerate() {
        let Some(tag) = cmd.tag() else {
            return Err(MorphError::syntax(format!("alt command {index} is empty")));
        };
        if tag == ALT_CLOSE {
            break;
        }

        let point = AltPoint::decode(index, cmd)?;
        if tag == ALT_MOVE {
            if let Some(done) = current.replace(vec![point.x1, point.y1]) {
                sub_paths.push(SubPath::new(done));
            }
            continue;
        }

        let Some(points) = current.as_mut() else {
            return Err(MorphError::syntax(format!(
                "alt command {index} draws before any move"
            )));
        };
        points.extend_from_slice(&point.group());
    }
    if let Some(done) = current {
        sub_paths.push(SubPath::new(done));
    }

    Ok(ParsedPath {
        identifier: layer.id.clone(),
        origin: PathOrigin::AltLayer(layer.path.clone()),
        sub_paths,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/path/alt.rs"]
mod tests;
