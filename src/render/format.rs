use std::{fmt, sync::Arc};

use crate::path::parse::scan_number;

/// One formatted coordinate: a number, or text such as `"12.5px"`.
#[derive(Clone, Debug, PartialEq)]
pub enum Formatted {
    /// Numeric value, printed with `f64`'s `Display`.
    Number(f64),
    /// Caller-built text, printed verbatim.
    Text(String),
}

impl Formatted {
    /// Numeric value for alt layer output.
    ///
    /// Text yields its leading number (`"12.5px"` is `12.5`), or NaN when it has none.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let s = s.trim_start();
                let end = scan_number(s.as_bytes(), 0);
                s[..end].parse().unwrap_or(f64::NAN)
            }
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Formatted {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for Formatted {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Formatted {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Transform applied to every coordinate before output.
///
/// The default truncates toward negative infinity at two decimals, so `1.239` prints as `1.23`.
#[derive(Clone)]
pub struct Formatter(Arc<dyn Fn(f64) -> Formatted + Send + Sync>);

impl Formatter {
    /// Keep `decimals` digits after the point, flooring the rest.
    pub fn truncate(decimals: u32) -> Self {
        let scale = 10f64.powi(decimals.min(15) as i32);
        // Adding 0.0 folds -0.0 into 0.0 so it never prints as "-0".
        Self(Arc::new(move |n| {
            Formatted::Number((n * scale).floor() / scale + 0.0)
        }))
    }

    /// Pass values through unchanged.
    pub fn identity() -> Self {
        Self(Arc::new(Formatted::Number))
    }

    /// Wrap a caller-supplied transform returning a number or text.
    ///
    /// ```
    /// use pathmorph::Formatter;
    ///
    /// let px = Formatter::custom(|n| format!("{n}px"));
    /// assert_eq!(px.apply(2.5).to_string(), "2.5px");
    /// ```
    pub fn custom<T: Into<Formatted>>(f: impl Fn(f64) -> T + Send + Sync + 'static) -> Self {
        Self(Arc::new(move |n| f(n).into()))
    }

    /// Format one value.
    pub fn apply(&self, n: f64) -> Formatted {
        (self.0)(n)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::truncate(2)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/format.rs"]
mod tests;
