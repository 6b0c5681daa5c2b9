//! pathmorph blends between SVG path shapes.
//!
//! Give it two or more keyframe shapes and it returns a function from an offset in `[0, 1]` to
//! an intermediate shape, ready to draw.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: path data (or an alt layer) becomes a [`ParsedPath`], a list of sub-paths made of
//!    cubic curve groups, each measured for size and centroid.
//! 2. **Align**: every adjacent keyframe pair is normalized into a [`NormalizedPair`] with equal
//!    sub-path counts, equal point counts, and closed contours starting near the origin.
//! 3. **Blend**: a [`ChainBlend`] maps an offset to a pair and mixes coordinates linearly.
//!    Offsets on a keyframe return that keyframe's original input untouched.
//! 4. **Render**: blended points are written back as `M x y C ...` path data or as alt layer
//!    commands through a [`Formatter`].
//!
//! ```
//! let blend = pathmorph::interpolate(&["M0 0 L10 0 L10 10 Z", "M0 0 L20 0 L20 20 L0 20 Z"])?;
//! assert_eq!(blend(0.0), "M0 0 L10 0 L10 10 Z");
//! assert!(blend(0.5).starts_with("M "));
//! # Ok::<(), pathmorph::MorphError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod morph;
mod path;
mod render;
mod source;

pub use foundation::core::{BezPath, CubicBez, OFFSET_EPSILON, Point};
pub use foundation::error::{MorphError, MorphResult};
pub use morph::interpolate::{BlendFunction, ChainBlend, Frame, PairBlend, mix_points};
pub use morph::normalize::{NormalizedPair, align};
pub use morph::session::{InterpolateOptions, Morph, Rendered, alt_interpolate, interpolate};
pub use path::alt::{ALT_CLOSE, ALT_CURVE, ALT_MOVE, AltCommand, AltLayer, parse_alt};
pub use path::metrics::{Metrics, measure};
pub use path::model::{ParsedPath, PathOrigin, SubPath};
pub use path::parse::parse;
pub use render::alt::render_alt;
pub use render::format::{Formatted, Formatter};
pub use render::path_data::render_path_data;
pub use source::{PathSource, resolve_svg_element};
