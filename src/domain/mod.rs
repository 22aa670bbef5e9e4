// Domain layer: value model and the helper port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
