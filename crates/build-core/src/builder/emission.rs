use crate::event::ProgressEvent;
use crate::model::ProducedArtifact;

/// Unión etiquetada de lo que un builder puede emitir durante `build`.
/// El engine la resuelve por pattern matching: el progreso se reenvía
/// literal; los artifacts se hashean, etiquetan y escriben en la tabla antes
/// de reenviarse.
#[derive(Debug, Clone)]
pub enum BuildYield {
    Progress(ProgressEvent),
    Artifact(ProducedArtifact),
}
