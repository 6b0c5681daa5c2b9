pub(crate) mod interpolate;
pub(crate) mod normalize;
pub(crate) mod session;
