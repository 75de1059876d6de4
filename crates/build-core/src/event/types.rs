//! Tipos de evento de un run y estructura `RunEvent`.
//!
//! Rol en el flujo:
//! - Cada run del `GraphEngine` emite una secuencia perezosa de eventos hacia
//!   el caller: texto de progreso intercalado con artifacts materializados.
//! - `RunEventKind` es una unión etiquetada resuelta por pattern matching; el
//!   caller nunca inspecciona tipos dinámicamente.
//! - `seq` y `ts` son metadatos de observabilidad; no participan en el
//!   control de flujo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Artifact;

/// Evento de progreso legible por humanos. Los builders lo emiten para
/// reportar estado; el engine lo reenvía literal. En modo verbose el engine
/// añade los suyos (plan, saltos, resumen final).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub message: String,
}

impl ProgressEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Tipos de eventos emitidos durante un run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Texto de progreso/estado (de un builder o del propio engine).
    Progress(ProgressEvent),
    /// Artifact materializado, ya etiquetado y hasheado por el engine.
    Artifact(Artifact),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el engine (orden de emisión)
    pub ts: DateTime<Utc>,
    pub kind: RunEventKind,
}
