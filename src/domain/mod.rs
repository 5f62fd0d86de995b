// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde/reqwest types that appear on the wire.

pub mod model;
pub mod ports;
