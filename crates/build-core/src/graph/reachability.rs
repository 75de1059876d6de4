//! Validación de alcanzabilidad del conjunto de builders.
//!
//! Chequeo estructural de construcción: se ejecuta una sola vez, sobre los
//! ids declarados, independiente de los artifacts pre-suministrados de
//! cualquier run concreto. Un id inalcanzable nunca podrá materializarse
//! componiendo builders desde los que no requieren inputs.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::builder::BuilderDefinition;
use crate::model::ArtifactId;

/// Ids mencionados (como input u output de algún builder) que no pertenecen
/// a la clausura producible partiendo del conjunto vacío. Incluye ids que
/// nadie produce y los ids cuyo único productor depende (transitivamente) de
/// uno de esos. Orden: primera mención, estable para mensajes de error.
pub fn find_unreachable(builders: &[Arc<dyn BuilderDefinition>]) -> Vec<ArtifactId> {
    let universe = universe(builders);

    let mut reachable: IndexSet<ArtifactId> = IndexSet::new();
    let mut fired = vec![false; builders.len()];
    loop {
        let mut progress = false;
        for (idx, b) in builders.iter().enumerate() {
            if fired[idx] {
                continue;
            }
            if b.inputs().iter().all(|id| reachable.contains(id)) {
                fired[idx] = true;
                reachable.extend(b.outputs());
                progress = true;
            }
        }
        if !progress {
            break;
        }
    }

    universe.into_iter().filter(|id| !reachable.contains(id)).collect()
}

/// Todos los ids mencionados por el conjunto de builders, en orden de
/// primera mención.
pub(crate) fn universe(builders: &[Arc<dyn BuilderDefinition>]) -> IndexSet<ArtifactId> {
    let mut universe: IndexSet<ArtifactId> = IndexSet::new();
    for b in builders {
        universe.extend(b.inputs());
        universe.extend(b.outputs());
    }
    universe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::stub;

    fn ids(raw: &[&str]) -> Vec<ArtifactId> {
        raw.iter().map(|s| ArtifactId::from(*s)).collect()
    }

    #[test]
    fn fully_producible_graph_has_no_unreachable_ids() {
        let builders = vec![stub("b1", &[], &["A", "B"]),
                            stub("b2", &["A"], &["C"]),
                            stub("b3", &["B", "C"], &["D"])];
        assert!(find_unreachable(&builders).is_empty());
    }

    #[test]
    fn missing_producer_poisons_the_dependent_output() {
        // B1(X)->{Y} sin productor de X: ambos inalcanzables.
        let builders = vec![stub("b1", &["X"], &["Y"])];
        assert_eq!(find_unreachable(&builders), ids(&["X", "Y"]));
    }

    #[test]
    fn transitive_dependency_on_a_missing_id_is_unreachable() {
        let builders = vec![stub("b1", &[], &["A"]),
                            stub("b2", &["A", "M"], &["B"]),
                            stub("b3", &["B"], &["C"])];
        assert_eq!(find_unreachable(&builders), ids(&["M", "B", "C"]));
    }

    #[test]
    fn empty_builder_set_is_trivially_reachable() {
        assert!(find_unreachable(&[]).is_empty());
    }
}
