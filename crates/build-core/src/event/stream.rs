//! Stream perezoso de eventos de un run.
//!
//! `RunStream` envuelve el receptor del canal que alimenta la tarea
//! conductora del run. Soltar el stream cierra el canal: la conductora
//! observa el cierre en su siguiente envío y el run se cancela
//! cooperativamente.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::ReceiverStream;

use crate::errors::GraphEngineError;
use crate::model::Artifact;

use super::{RunEvent, RunEventKind};

pub struct RunStream {
    inner: ReceiverStream<Result<RunEvent, GraphEngineError>>,
}

impl RunStream {
    pub(crate) fn new(rx: tokio::sync::mpsc::Receiver<Result<RunEvent, GraphEngineError>>) -> Self {
        Self { inner: ReceiverStream::new(rx) }
    }

    /// Consume el stream completo y devuelve los artifacts materializados en
    /// orden de emisión. El primer error aborta y se propaga.
    pub async fn collect_artifacts(mut self) -> Result<Vec<Artifact>, GraphEngineError> {
        let mut artifacts = Vec::new();
        while let Some(ev) = self.inner.next().await {
            if let RunEventKind::Artifact(a) = ev?.kind {
                artifacts.push(a);
            }
        }
        Ok(artifacts)
    }

    /// Consume el stream completo y devuelve todos los eventos en orden.
    pub async fn collect_events(mut self) -> Result<Vec<RunEvent>, GraphEngineError> {
        let mut events = Vec::new();
        while let Some(ev) = self.inner.next().await {
            events.push(ev?);
        }
        Ok(events)
    }
}

impl Stream for RunStream {
    type Item = Result<RunEvent, GraphEngineError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}
