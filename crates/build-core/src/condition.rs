//! Condiciones que habilitan builders opcionales.
//!
//! Una condición lee un conjunto de inputs ya materializados y decide con un
//! predicado puro si los builders alcanzados por `then` deben ejecutarse.
//! `then` se intersecta contra los inputs Y los outputs declarados del
//! builder evaluado: una condición sobre el propio output de un builder
//! también lo veta.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::builder::BuilderDefinition;
use crate::model::{Artifact, ArtifactId};

/// Predicado puro sobre los inputs resueltos de la condición.
pub type ConditionPredicate = Arc<dyn Fn(&IndexMap<ArtifactId, Artifact>) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct Condition {
    /// Ids que el predicado lee. Deben estar resolubles en la tabla en el
    /// momento en que cualquier builder vetado está por ejecutarse; si no,
    /// es error de runtime, nunca un salto silencioso.
    pub inputs: Vec<ArtifactId>,
    /// Ids cuyos builders asociados quedan vetados por esta condición.
    pub then: Vec<ArtifactId>,
    predicate: ConditionPredicate,
}

impl Condition {
    pub fn new<F>(inputs: Vec<ArtifactId>, then: Vec<ArtifactId>, predicate: F) -> Self
        where F: Fn(&IndexMap<ArtifactId, Artifact>) -> bool + Send + Sync + 'static
    {
        Self { inputs,
               then,
               predicate: Arc::new(predicate) }
    }

    /// ¿Esta condición aplica al builder? Cierto si `then` intersecta sus
    /// inputs o sus outputs declarados.
    pub fn gates(&self, builder: &dyn BuilderDefinition) -> bool {
        let inputs = builder.inputs();
        let outputs = builder.outputs();
        self.then.iter().any(|id| inputs.contains(id) || outputs.contains(id))
    }

    /// Evalúa el predicado sobre los inputs ya resueltos.
    pub fn evaluate(&self, resolved: &IndexMap<ArtifactId, Artifact>) -> bool {
        (self.predicate)(resolved)
    }
}

impl std::fmt::Debug for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Condition")
         .field("inputs", &self.inputs)
         .field("then", &self.then)
         .finish_non_exhaustive()
    }
}
