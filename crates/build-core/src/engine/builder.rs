//! Builder para `GraphEngine`.
//!
//! Acumula los builders registrados (el índice de registro fija el desempate
//! determinista dentro de cada lote) y las condiciones, y ejecuta la
//! validación estructural al construir:
//! - productor duplicado → `DuplicateProducer`
//! - conjunto inalcanzable no vacío → `UnreachableArtifacts`
//!
//! Ambas fallan antes de cualquier run; un grafo que construye es un grafo
//! completamente producible.

use std::sync::Arc;

use crate::builder::BuilderDefinition;
use crate::condition::Condition;
use crate::errors::GraphEngineError;

use super::core::GraphEngine;

#[derive(Default)]
pub struct EngineBuilder {
    builders: Vec<Arc<dyn BuilderDefinition>>,
    conditions: Vec<Condition>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un builder; el orden de registro es significativo (desempate
    /// estable dentro de un lote).
    pub fn register<B>(mut self, builder: B) -> Self
        where B: BuilderDefinition + 'static
    {
        self.builders.push(Arc::new(builder));
        self
    }

    /// Variante para builders ya compartidos.
    pub fn register_arc(mut self, builder: Arc<dyn BuilderDefinition>) -> Self {
        self.builders.push(builder);
        self
    }

    /// Registra una condición que veta builders opcionales.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Construye el engine validando la estructura del grafo.
    pub fn build(self) -> Result<GraphEngine, GraphEngineError> {
        GraphEngine::try_new(self.builders, self.conditions)
    }
}
