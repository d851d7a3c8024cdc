// Domain layer: inquiry records, flow outcomes and the input port.

pub mod model;
pub mod ports;
