// Domain layer: core models and ports (interfaces). No I/O here; concrete
// bindings live under `adapters`.

pub mod model;
pub mod ports;
