pub(crate) mod compile;
pub(crate) mod model;
pub(crate) mod presets;
