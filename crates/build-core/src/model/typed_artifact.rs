//! Infraestructura opcional de tipado fuerte para `Artifact` manteniendo el
//! núcleo agnóstico. Permite describir payloads con un tipo de datos concreto
//! (T) ligado a exactamente un id del conjunto cerrado del grafo. No
//! introduce semántica de dominio; se basa en generics y serde.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{Artifact, ArtifactId, ProducedArtifact};

/// Errores posibles al decodificar un artifact tipado.
#[derive(Debug)]
pub enum ArtifactDecodeError {
    NotPresent { id: ArtifactId },
    IdMismatch { expected: ArtifactId, found: Option<ArtifactId> },
    VersionMismatch { expected: u32, found: Option<u32> },
    Deserialize(String),
    Validation(String),
}

impl std::fmt::Display for ArtifactDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactDecodeError::NotPresent { id } => write!(f, "artifact '{id}' not present"),
            ArtifactDecodeError::IdMismatch { expected, found } => {
                write!(f, "artifact id mismatch: expected '{expected}', found {found:?}")
            }
            ArtifactDecodeError::VersionMismatch { expected, found } => {
                write!(f, "schema version mismatch: expected {expected}, found {found:?}")
            }
            ArtifactDecodeError::Deserialize(e) => write!(f, "deserialize: {e}"),
            ArtifactDecodeError::Validation(e) => write!(f, "validation: {e}"),
        }
    }
}

/// Especificación abstracta de un artifact tipado.
/// Implementado por tipos de datos que quieren exponerse como payloads
/// seguros de un id concreto del grafo.
pub trait ArtifactSpec: Sized + Serialize + DeserializeOwned + Clone {
    /// Id del grafo al que este tipo queda ligado.
    const ID: &'static str;
    /// Versión de esquema (incrementar en cambios incompatibles).
    const SCHEMA_VERSION: u32 = 1;

    /// Validación semántica ligera (sin efectos secundarios). Opcional.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Nombre de campo que llevará la versión dentro del payload.
    fn version_field_name() -> &'static str {
        "schema_version"
    }

    fn artifact_id() -> ArtifactId {
        ArtifactId::from(Self::ID)
    }

    /// Serializa a `ProducedArtifact` (el engine añadirá hash y etiqueta).
    fn into_produced(self) -> ProducedArtifact {
        let mut value = serde_json::to_value(&self).expect("serialize artifact spec");
        if let Value::Object(map) = &mut value {
            map.entry(Self::version_field_name().to_string())
               .or_insert(Value::from(Self::SCHEMA_VERSION));
        }
        ProducedArtifact::new(Self::ID, value)
    }

    /// Decodifica desde artifact neutro verificando etiqueta, versión y
    /// validación.
    fn from_artifact(a: &Artifact) -> Result<Self, ArtifactDecodeError> {
        let found = a.graph_id();
        if found.as_ref().map(|id| id.as_str()) != Some(Self::ID) {
            return Err(ArtifactDecodeError::IdMismatch { expected: Self::artifact_id(),
                                                         found });
        }
        let found_version = a.payload
                             .get(Self::version_field_name())
                             .and_then(|v| v.as_u64())
                             .map(|v| v as u32);
        match found_version {
            Some(v) if v == Self::SCHEMA_VERSION => {}
            other => {
                return Err(ArtifactDecodeError::VersionMismatch { expected: Self::SCHEMA_VERSION,
                                                                  found: other })
            }
        }
        let decoded: Self = serde_json::from_value(a.payload.clone())
            .map_err(|e| ArtifactDecodeError::Deserialize(e.to_string()))?;
        decoded.validate().map_err(ArtifactDecodeError::Validation)?;
        Ok(decoded)
    }
}
