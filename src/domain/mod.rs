// Domain layer: game rules, value types and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod rules;
