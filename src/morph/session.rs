use std::sync::Arc;

use crate::{
    foundation::error::{MorphError, MorphResult},
    morph::interpolate::{BlendFunction, ChainBlend, Frame},
    path::{
        alt::{AltCommand, AltLayer},
        model::{ParsedPath, PathOrigin},
    },
    render::{alt::render_alt, format::Formatter, path_data::render_path_data},
    source::PathSource,
};

/// Interpolation settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolateOptions {
    /// Render frames as alt layer commands instead of path data.
    pub render_as_alt_layer: bool,
    /// Decimal digits kept by the default formatter.
    pub decimals: u32,
}

impl Default for InterpolateOptions {
    fn default() -> Self {
        Self {
            render_as_alt_layer: false,
            decimals: 2,
        }
    }
}

/// One rendered frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// Path-data string.
    PathData(String),
    /// Alt layer command list.
    AltLayer(Vec<AltCommand>),
}

/// A ready-to-sample interpolation across two or more keyframes.
///
/// All validation happens in [`Morph::new`]; [`Morph::frame`] never fails. Cloning is cheap and
/// clones share the aligned data.
#[derive(Clone, Debug)]
pub struct Morph {
    blend: Arc<ChainBlend>,
    options: InterpolateOptions,
    formatter: Formatter,
}

impl Morph {
    /// Resolve and parse every source, then align adjacent keyframes.
    #[tracing::instrument(skip(sources), fields(keyframes = sources.len()))]
    pub fn new(sources: &[PathSource], options: InterpolateOptions) -> MorphResult<Self> {
        let keyframes = sources
            .iter()
            .map(PathSource::parse)
            .collect::<MorphResult<Vec<_>>>()?;
        Self::from_parsed(keyframes, options)
    }

    /// Build from already parsed keyframes.
    ///
    /// Fails with [`MorphError::InvalidArgument`] for fewer than two keyframes, an empty
    /// keyframe, or path-data output from alt layer keyframes, and with
    /// [`MorphError::Unsupported`] for alt output from path-data keyframes.
    pub fn from_parsed(keyframes: Vec<ParsedPath>, options: InterpolateOptions) -> MorphResult<Self> {
        if keyframes.len() < 2 {
            return Err(MorphError::invalid_argument(format!(
                "interpolation needs at least two keyframes, got {}",
                keyframes.len()
            )));
        }
        for (i, kf) in keyframes.iter().enumerate() {
            if kf.sub_paths.is_empty() {
                return Err(MorphError::invalid_argument(format!(
                    "keyframe {i} has no sub-paths"
                )));
            }
            match (&kf.origin, options.render_as_alt_layer) {
                (PathOrigin::PathData, true) => {
                    return Err(MorphError::unsupported(format!(
                        "alt layer rendering needs alt layer keyframes; keyframe {i} is path data"
                    )));
                }
                (PathOrigin::AltLayer(_), false) => {
                    return Err(MorphError::invalid_argument(format!(
                        "keyframe {i} is an alt layer; enable render_as_alt_layer to render it"
                    )));
                }
                _ => {}
            }
        }

        let formatter = Formatter::truncate(options.decimals);
        Ok(Self {
            blend: Arc::new(ChainBlend::build(keyframes)?),
            options,
            formatter,
        })
    }

    /// Replace the numeric formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Options this morph was built with.
    pub fn options(&self) -> &InterpolateOptions {
        &self.options
    }

    /// Number of keyframes.
    pub fn keyframes(&self) -> usize {
        self.blend.pairs().len() + 1
    }

    /// Underlying blend, for callers that render themselves.
    pub fn blend(&self) -> &ChainBlend {
        &self.blend
    }

    /// Render the frame at `offset` in the configured output form.
    pub fn frame(&self, offset: f64) -> Rendered {
        if self.options.render_as_alt_layer {
            Rendered::AltLayer(self.frame_alt(offset))
        } else {
            Rendered::PathData(self.frame_path_data(offset))
        }
    }

    fn frame_path_data(&self, offset: f64) -> String {
        match self.blend.sample(offset) {
            Frame::Exact(kf) => kf.identifier.clone(),
            Frame::Blended(m) => render_path_data(&m, &self.formatter),
        }
    }

    fn frame_alt(&self, offset: f64) -> Vec<AltCommand> {
        match self.blend.sample(offset) {
            Frame::Exact(kf) => match &kf.origin {
                PathOrigin::AltLayer(commands) => commands.clone(),
                PathOrigin::PathData => render_alt(&kf.to_matrix(), &self.formatter),
            },
            Frame::Blended(m) => render_alt(&m, &self.formatter),
        }
    }
}

/// Interpolate between path-data keyframes; returns `offset -> path data`.
pub fn interpolate(paths: &[&str]) -> MorphResult<impl Fn(f64) -> String + Send + Sync + use<>> {
    let sources: Vec<PathSource> = paths.iter().map(|&d| PathSource::from(d)).collect();
    let morph = Morph::new(&sources, InterpolateOptions::default())?;
    Ok(move |offset| morph.frame_path_data(offset))
}

/// Interpolate between two alt layers; returns `offset -> alt commands`.
pub fn alt_interpolate(
    left: AltLayer,
    right: AltLayer,
    mut options: InterpolateOptions,
) -> MorphResult<impl Fn(f64) -> Vec<AltCommand> + Send + Sync + use<>> {
    options.render_as_alt_layer = true;
    let morph = Morph::new(&[PathSource::Alt(left), PathSource::Alt(right)], options)?;
    Ok(move |offset| morph.frame_alt(offset))
}

#[cfg(test)]
#[path = "../../tests/unit/morph/session.rs"]
mod tests;
