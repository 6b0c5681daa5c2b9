pub(crate) mod alt;
pub(crate) mod metrics;
pub(crate) mod model;
pub(crate) mod parse;
