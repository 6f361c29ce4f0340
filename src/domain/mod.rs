// Domain layer: core models and ports (interfaces). No dependency on adapters or config.

pub mod model;
pub mod ports;
