// Domain layer: core models and ports. No dependencies beyond std and the
// crate's own error type.

pub mod model;
pub mod ports;
