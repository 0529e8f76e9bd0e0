//! Animation engine: easing, descriptors, per-kind interpolation and the three-phase state
//! calculator.

pub(crate) mod calc;
pub(crate) mod descriptor;
pub(crate) mod ease;
pub(crate) mod interp;
pub(crate) mod kind;
pub(crate) mod state;
