//! Motor de ejecución del grafo de artifacts.

pub mod builder;
pub mod core;

pub use self::builder::EngineBuilder;
pub use self::core::{GraphEngine, RunRequest};
