//! Canal de emisión de un builder hacia el engine.

use tokio::sync::mpsc;

use crate::errors::GraphEngineError;
use crate::event::ProgressEvent;
use crate::model::{ArtifactSpec, ProducedArtifact};

use super::emission::BuildYield;

/// Extremo de escritura entregado a cada builder. Cada envío cruza el canal
/// de forma independiente; si el run fue cancelado (receptor cerrado) el
/// envío falla con `RunCanceled` y el builder debe propagar el error.
#[derive(Clone)]
pub struct BuildSink {
    tx: mpsc::Sender<BuildYield>,
}

impl BuildSink {
    pub(crate) fn new(tx: mpsc::Sender<BuildYield>) -> Self {
        Self { tx }
    }

    /// Emite un evento de progreso legible; se reenvía literal al caller.
    pub async fn progress(&self, message: impl Into<String>) -> Result<(), GraphEngineError> {
        self.send(BuildYield::Progress(ProgressEvent::new(message))).await
    }

    /// Emite un artifact producido con su id declarado.
    pub async fn produce(&self, artifact: ProducedArtifact) -> Result<(), GraphEngineError> {
        self.send(BuildYield::Artifact(artifact)).await
    }

    /// Emite un artifact tipado (azúcar sobre `produce`).
    pub async fn produce_spec<T: ArtifactSpec>(&self, value: T) -> Result<(), GraphEngineError> {
        self.produce(value.into_produced()).await
    }

    async fn send(&self, y: BuildYield) -> Result<(), GraphEngineError> {
        self.tx.send(y).await.map_err(|_| GraphEngineError::RunCanceled)
    }
}
