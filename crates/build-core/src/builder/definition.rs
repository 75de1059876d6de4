use async_trait::async_trait;

use crate::errors::GraphEngineError;
use crate::model::{ArtifactId, BuildContext};

use super::sink::BuildSink;

/// Trait que define un Builder. Implementaciones deben ser puras respecto a
/// (task, history, inputs): sin estado local entre runs.
#[async_trait]
pub trait BuilderDefinition: Send + Sync {
    /// Nombre estable y único dentro del grafo (logging y membresía del
    /// conjunto de saltos).
    fn name(&self) -> &str;

    /// Ids de artifacts que este builder requiere, en orden declarado.
    fn inputs(&self) -> Vec<ArtifactId>;

    /// Ids de artifacts que este builder promete producir, en orden
    /// declarado. Cada id tiene a lo sumo un productor en todo el grafo.
    fn outputs(&self) -> Vec<ArtifactId>;

    /// Ejecución del builder. Puede suspender entre emisiones (p.ej. mientras
    /// espera una llamada a modelo); cada valor emitido por el sink viaja al
    /// engine de forma independiente, sin asumir que la secuencia completa
    /// está disponible de forma síncrona.
    async fn build(&self, ctx: BuildContext, sink: BuildSink) -> Result<(), GraphEngineError>;
}
