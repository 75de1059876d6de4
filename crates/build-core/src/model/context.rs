//! Contexto de ejecución entregado a `BuilderDefinition::build`.

use indexmap::IndexMap;

use super::typed_artifact::{ArtifactDecodeError, ArtifactSpec};
use super::{Artifact, ArtifactId, Message, TaskDescriptor};

/// Contexto de un builder: tarea ambiental, historial opcional y el mapa de
/// inputs restringido exactamente a los ids declarados por el builder.
pub struct BuildContext {
    pub task: TaskDescriptor,
    pub history: Vec<Message>,
    pub inputs: IndexMap<ArtifactId, Artifact>,
}

impl BuildContext {
    /// Acceso neutro a un input declarado.
    pub fn input(&self, id: &ArtifactId) -> Option<&Artifact> {
        self.inputs.get(id)
    }

    /// Decodifica el input asociado al id de `T` hacia su forma tipada.
    pub fn input_as<T: ArtifactSpec>(&self) -> Result<T, ArtifactDecodeError> {
        let id = T::artifact_id();
        let art = self.inputs
                      .get(&id)
                      .ok_or_else(|| ArtifactDecodeError::NotPresent { id: id.clone() })?;
        T::from_artifact(art)
    }
}
