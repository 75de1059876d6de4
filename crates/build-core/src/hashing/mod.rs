//! Hashing de payloads de artifacts.
//!
//! El engine calcula un hash estable sobre la representación canónica del
//! payload JSON. El hash no participa en el control de flujo; es identidad
//! para trazabilidad de outputs entre runs.

mod canonical_json;
mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
