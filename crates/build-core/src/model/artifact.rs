//! Artifact neutral del grafo.
//!
//! Un `Artifact` es la unidad de datos intercambiada entre builders. Es
//! neutral:
//! - `payload` es JSON genérico; el motor no interpreta su semántica.
//! - `hash` es calculado por el engine sobre el JSON canonicalizado (ver
//!   `hashing::to_canonical_json`). Sirve como identidad para trazabilidad.
//! - `metadata` lleva, bajo la clave `ARTIFACT_ID_KEY`, el identificador con
//!   el que el engine reconoce el artifact. Un artifact sin esa clave no es
//!   utilizable como entrada pre-existente de un run.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::ARTIFACT_ID_KEY;
use crate::hashing::hash_value;

/// Identificador de artifact, tomado de un conjunto cerrado fijado al
/// definir el grafo. La validación estructural de construcción (productores
/// duplicados + alcanzabilidad) recorre todos los ids que cualquier builder
/// menciona.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtifactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ArtifactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lo que un builder entrega al sink: id declarado + payload opaco. El
/// engine lo convierte en `Artifact` etiquetado (hash + metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducedArtifact {
    pub id: ArtifactId,
    pub payload: Value,
}

impl ProducedArtifact {
    pub fn new(id: impl Into<ArtifactId>, payload: Value) -> Self {
        Self { id: id.into(),
               payload }
    }
}

/// Artifact neutral producido en un run o suministrado al inicio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub hash: String,
    pub payload: Value,
    pub metadata: Option<Value>,
}

impl Artifact {
    /// Construye un artifact etiquetado a partir de lo producido por un
    /// builder. El hash se calcula aquí sobre el payload canónico.
    pub fn tagged(produced: ProducedArtifact) -> Self {
        let hash = hash_value(&produced.payload);
        Self { hash,
               payload: produced.payload,
               metadata: Some(json!({ ARTIFACT_ID_KEY: produced.id.as_str() })) }
    }

    /// Id del grafo bajo el que este artifact es reconocible, si la etiqueta
    /// de metadata está presente.
    pub fn graph_id(&self) -> Option<ArtifactId> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(ARTIFACT_ID_KEY))
            .and_then(|v| v.as_str())
            .map(ArtifactId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_artifact_carries_graph_id_and_hash() {
        let art = Artifact::tagged(ProducedArtifact::new("step1", json!({"v": 1})));
        assert_eq!(art.graph_id(), Some(ArtifactId::from("step1")));
        assert_eq!(art.hash, hash_value(&json!({"v": 1})));
    }

    #[test]
    fn untagged_artifact_has_no_graph_id() {
        let art = Artifact { hash: String::new(),
                             payload: json!({"v": 1}),
                             metadata: None };
        assert_eq!(art.graph_id(), None);
    }
}
