//! Frontera con el protocolo de agente: descriptor de tarea e historial.
//!
//! El core no conoce el transporte; sólo recibe estos tipos ya materializados
//! y los entrega a cada builder dentro de su `BuildContext`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Tarea ambiental que motiva el run. `params` es JSON libre del caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub id: Uuid,
    pub instruction: String,
    pub params: Option<Value>,
}

impl TaskDescriptor {
    pub fn new(instruction: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(),
               instruction: instruction.into(),
               params: None }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Mensaje previo del historial de la conversación, en orden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(),
               content: content.into() }
    }
}
