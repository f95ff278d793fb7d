// Domain layer: the gallery model and the ports (interfaces) a host shell
// plugs into. No dependencies beyond std/serde and the error types.

pub mod model;
pub mod ports;
