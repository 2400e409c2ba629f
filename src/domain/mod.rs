// Domain layer: code tables, models and ports. No I/O here.

pub mod codes;
pub mod model;
pub mod ports;
