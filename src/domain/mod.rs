// Domain layer: core models and ports (interfaces).

pub mod clock;
pub mod model;
pub mod ports;
