//! Errores específicos del core.
//!
//! Taxonomía:
//! - construcción: `DuplicateProducer`, `UnreachableArtifacts`
//! - planificación (por run): `CycleDetected`
//! - runtime (abortan el run): `MissingConditionInput`, `MissingInput`,
//!   `BuilderFailed`
//! Los saltos por outputs pre-existentes o por condición no satisfecha NO son
//! errores; se observan como eventos de progreso.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum GraphEngineError {
    #[error("duplicate producer for artifact '{0}'")]
    DuplicateProducer(String),
    #[error("unreachable artifacts: [{}]", .0.join(", "))]
    UnreachableArtifacts(Vec<String>),
    #[error("cycle detected among builders: [{}]", .0.join(", "))]
    CycleDetected(Vec<String>),
    #[error("builder '{builder}' requires condition input '{artifact}' which is not present")]
    MissingConditionInput { builder: String, artifact: String },
    #[error("builder '{builder}' declared input '{artifact}' is not present in the artifact table")]
    MissingInput { builder: String, artifact: String },
    #[error("builder '{builder}' failed: {message}")]
    BuilderFailed { builder: String, message: String },
    #[error("run canceled: the event stream was dropped by the consumer")]
    RunCanceled,
    #[error("internal: {0}")]
    Internal(String),
}

impl From<crate::model::ArtifactDecodeError> for GraphEngineError {
    fn from(e: crate::model::ArtifactDecodeError) -> Self {
        GraphEngineError::Internal(e.to_string())
    }
}
