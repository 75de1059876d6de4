//! Modelos neutrales (ArtifactId, Artifact, BuildContext, tarea/mensajes).

pub mod artifact;
pub mod context;
pub mod task;
pub mod typed_artifact;

pub use artifact::{Artifact, ArtifactId, ProducedArtifact};
pub use context::BuildContext;
pub use task::{Message, TaskDescriptor};
pub use typed_artifact::{ArtifactDecodeError, ArtifactSpec};
