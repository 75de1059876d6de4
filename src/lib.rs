//! BuildFlow Rust Library
//!
//! Este crate actúa como el punto de armado de BuildFlow:
//! - Expone `config` con la configuración de la aplicación demo.
//! - Expone `standard_graph` para construir el grafo de redacción completo
//!   (builders + condición de calidad) sobre el motor neutro.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;

use build_adapters::builders::{BriefBuilder, DraftBuilder, OutlineBuilder, ResearchBuilder,
                               SummaryBuilder};
use build_adapters::conditions::research_quality_gate;
use build_core::{GraphEngine, GraphEngineError};

/// Construye el grafo estándar de redacción. `min_findings` regula el veto
/// de calidad sobre la etapa de borrador.
pub fn standard_graph(min_findings: usize) -> Result<GraphEngine, GraphEngineError> {
    GraphEngine::builder().register(BriefBuilder::new())
                          .register(ResearchBuilder::new())
                          .register(OutlineBuilder::new())
                          .register(DraftBuilder::new("periodistico".to_string()))
                          .register(SummaryBuilder::new())
                          .condition(research_quality_gate(min_findings))
                          .build()
}
