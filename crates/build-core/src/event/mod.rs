//! Eventos observables de un run y el stream que los entrega al caller.

pub mod stream;
pub mod types;

pub use stream::RunStream;
pub use types::{ProgressEvent, RunEvent, RunEventKind};
