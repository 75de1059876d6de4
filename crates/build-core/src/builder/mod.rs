//! Definiciones relacionadas a Builders.
//!
//! Un Builder es una unidad de trabajo con nombre que consume 0..n artifacts
//! declarados y produce 1..n artifacts declarados. Este módulo define:
//! - `BuilderDefinition`: interfaz neutral usada por el engine.
//! - `BuildYield`: unión etiquetada de lo que un builder puede emitir.
//! - `BuildSink`: canal de emisión perezosa hacia el engine.
//! - macros `typed_artifact!` / `builder!` para reducir boilerplate.

pub mod definition;
pub mod emission;
pub mod macros;
pub mod sink;

pub use definition::BuilderDefinition;
pub use emission::BuildYield;
pub use sink::BuildSink;
