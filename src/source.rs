//! Keyframe sources: raw path data, alt layers, or a path element inside an SVG document.

use usvg::tiny_skia_path::PathSegment;

use crate::{
    foundation::error::{MorphError, MorphResult},
    path::{
        alt::{AltLayer, parse_alt},
        model::ParsedPath,
        parse::parse,
    },
};

/// Where a keyframe shape comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum PathSource {
    /// Raw path data.
    Data(String),
    /// An alt layer record.
    Alt(AltLayer),
    /// The element with `id` inside an SVG `document`. A leading `#` on the id is ignored.
    SvgElement {
        /// SVG document text.
        document: String,
        /// Element id.
        id: String,
    },
}

impl PathSource {
    /// Resolve and parse the source into the canonical model.
    pub fn parse(&self) -> MorphResult<ParsedPath> {
        match self {
            Self::Data(d) => parse(d),
            Self::Alt(layer) => parse_alt(layer),
            Self::SvgElement { document, id } => parse(&resolve_svg_element(document, id)?),
        }
    }
}

impl From<&str> for PathSource {
    fn from(d: &str) -> Self {
        Self::Data(d.to_string())
    }
}

impl From<String> for PathSource {
    fn from(d: String) -> Self {
        Self::Data(d)
    }
}

impl From<AltLayer> for PathSource {
    fn from(layer: AltLayer) -> Self {
        Self::Alt(layer)
    }
}

/// Look up a shape element by id and serialize its geometry as absolute path data.
///
/// Any element usvg turns into a path works (`path`, `rect`, `circle`, ...). Geometry is
/// returned in the element's own coordinates; transforms are not applied.
#[tracing::instrument(skip(document), fields(len = document.len()))]
pub fn resolve_svg_element(document: &str, id: &str) -> MorphResult<String> {
    let id = id.strip_prefix('#').unwrap_or(id);
    let tree = usvg::Tree::from_str(document, &usvg::Options::default())
        .map_err(|e| MorphError::path_source(format!("invalid svg document: {e}")))?;
    let node = tree
        .node_by_id(id)
        .ok_or_else(|| MorphError::path_source(format!("no element with id '{id}'")))?;
    let usvg::Node::Path(path) = node else {
        return Err(MorphError::path_source(format!(
            "element '{id}' is not a shape"
        )));
    };
    Ok(path_data_from_segments(path.data().segments()))
}

fn path_data_from_segments(segments: impl Iterator<Item = PathSegment>) -> String {
    let mut parts: Vec<String> = Vec::new();
    for seg in segments {
        match seg {
            PathSegment::MoveTo(p) => parts.push(format!("M{} {}", p.x, p.y)),
            PathSegment::LineTo(p) => parts.push(format!("L{} {}", p.x, p.y)),
            PathSegment::QuadTo(c, p) => parts.push(format!("Q{} {} {} {}", c.x, c.y, p.x, p.y)),
            PathSegment::CubicTo(c1, c2, p) => parts.push(format!(
                "C{} {} {} {} {} {}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            )),
            PathSegment::Close => parts.push("Z".to_string()),
        }
    }
    parts.join(" ")
}

#[cfg(test)]
#[path = "../tests/unit/source.rs"]
mod tests;
