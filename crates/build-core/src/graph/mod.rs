//! Resolución estructural del grafo de builders.
//!
//! Dos cómputos puros sobre los ids declarados (nunca ejecutan builders):
//! - `resolver::compute_batches`: agrupa builders en lotes paralelos máximos
//!   respetando dependencias productor→consumidor.
//! - `reachability::find_unreachable`: ids mencionados que ningún encadenado
//!   de builders puede producir partiendo del conjunto vacío.

pub mod reachability;
pub mod resolver;

pub use reachability::find_unreachable;
pub use resolver::compute_batches;
