// Domain layer: the call description and the ports the client is built on.

pub mod model;
pub mod ports;
