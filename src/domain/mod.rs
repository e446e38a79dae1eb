// Domain layer: models and ports. Concrete adapters live under config/ and adapters/.

pub mod model;
pub mod ports;
