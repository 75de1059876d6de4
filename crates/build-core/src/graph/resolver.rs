//! Agrupamiento de builders en lotes ejecutables en paralelo.
//!
//! Contrato:
//! - mapa de productores sobre los outputs declarados; dos builders
//!   declarando el mismo output id es error de construcción.
//! - predecesores directos desde los inputs declarados; un builder nunca
//!   depende de sí mismo; un input sin productor registrado se considera
//!   suministrado externamente (sin arista, validado aparte por
//!   `reachability`).
//! - agrupamiento estilo Kahn: cada ronda toma todos los builders cuyo
//!   conjunto de predecesores ya fue agendado; una ronda sin progreso con
//!   builders pendientes es un ciclo.
//! - desempate: dentro de un lote, orden por índice de registro original
//!   (estable y reproducible para logs y tests).

use std::collections::BTreeSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::builder::BuilderDefinition;
use crate::errors::GraphEngineError;
use crate::model::ArtifactId;

/// Calcula la secuencia ordenada de lotes. Cada lote contiene índices (sobre
/// `builders`) sin dependencias entre sí; el orden entre lotes respeta
/// estrictamente productor→consumidor.
pub fn compute_batches(builders: &[Arc<dyn BuilderDefinition>])
                       -> Result<Vec<Vec<usize>>, GraphEngineError> {
    let producers = producer_map(builders)?;

    // Predecesores directos por builder (índices, sin duplicados).
    let mut preds: Vec<BTreeSet<usize>> = Vec::with_capacity(builders.len());
    for (idx, b) in builders.iter().enumerate() {
        let mut set = BTreeSet::new();
        for input in b.inputs() {
            match producers.get(&input) {
                Some(&p) if p != idx => {
                    set.insert(p);
                }
                // Sin productor: input externo. Productor == idx: un builder
                // nunca depende de sí mismo.
                _ => {}
            }
        }
        preds.push(set);
    }

    let mut scheduled = vec![false; builders.len()];
    let mut remaining = builders.len();
    let mut batches = Vec::new();
    while remaining > 0 {
        let batch: Vec<usize> = (0..builders.len()).filter(|&i| !scheduled[i] && preds[i].iter().all(|&p| scheduled[p]))
                                                   .collect();
        if batch.is_empty() {
            let stuck: Vec<String> = (0..builders.len()).filter(|&i| !scheduled[i])
                                                        .map(|i| builders[i].name().to_string())
                                                        .collect();
            return Err(GraphEngineError::CycleDetected(stuck));
        }
        for &i in &batch {
            scheduled[i] = true;
        }
        remaining -= batch.len();
        batches.push(batch);
    }
    Ok(batches)
}

/// Mapa output-id → índice del builder productor. Falla nombrando el id en
/// conflicto si dos builders distintos declaran el mismo output.
pub(crate) fn producer_map(builders: &[Arc<dyn BuilderDefinition>])
                           -> Result<IndexMap<ArtifactId, usize>, GraphEngineError> {
    let mut producers: IndexMap<ArtifactId, usize> = IndexMap::new();
    for (idx, b) in builders.iter().enumerate() {
        for output in b.outputs() {
            match producers.get(&output) {
                Some(&prev) if prev != idx => {
                    return Err(GraphEngineError::DuplicateProducer(output.to_string()))
                }
                _ => {
                    producers.insert(output, idx);
                }
            }
        }
    }
    Ok(producers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::stub;

    #[test]
    fn diamond_graph_batches_by_dependency_depth() {
        // B1()->{A,B}, B2(A)->{C,D}, B3(B)->{E}, B4(A,B,C)->{F}
        let builders = vec![stub("b1", &[], &["A", "B"]),
                            stub("b2", &["A"], &["C", "D"]),
                            stub("b3", &["B"], &["E"]),
                            stub("b4", &["A", "B", "C"], &["F"])];
        let batches = compute_batches(&builders).expect("acyclic graph");
        assert_eq!(batches, vec![vec![0], vec![1, 2], vec![3]]);
    }

    #[test]
    fn batch_order_follows_registration_index() {
        // Dos builders independientes: el lote los ordena por registro, no
        // por nombre.
        let builders = vec![stub("zeta", &[], &["Z"]), stub("alfa", &[], &["A"])];
        let batches = compute_batches(&builders).expect("acyclic graph");
        assert_eq!(batches, vec![vec![0, 1]]);
    }

    #[test]
    fn unproduced_input_is_external_not_an_edge() {
        let builders = vec![stub("b1", &["X"], &["Y"])];
        let batches = compute_batches(&builders).expect("external inputs are not errors here");
        assert_eq!(batches, vec![vec![0]]);
    }

    #[test]
    fn self_referential_ids_do_not_create_a_self_edge() {
        let builders = vec![stub("b1", &["A"], &["A", "B"])];
        let batches = compute_batches(&builders).expect("no self dependency");
        assert_eq!(batches, vec![vec![0]]);
    }

    #[test]
    fn duplicate_producer_is_a_construction_error_naming_the_id() {
        let builders = vec![stub("b1", &[], &["A"]), stub("b2", &[], &["A"])];
        let err = compute_batches(&builders).unwrap_err();
        assert_eq!(err, GraphEngineError::DuplicateProducer("A".to_string()));
    }

    #[test]
    fn cycle_is_detected_and_names_the_stuck_builders() {
        let builders = vec![stub("b1", &["B"], &["A"]), stub("b2", &["A"], &["B"])];
        let err = compute_batches(&builders).unwrap_err();
        assert_eq!(err,
                   GraphEngineError::CycleDetected(vec!["b1".to_string(), "b2".to_string()]));
    }

    #[test]
    fn batches_partition_every_builder_exactly_once() {
        let builders = vec![stub("b1", &[], &["A"]),
                            stub("b2", &["A"], &["B"]),
                            stub("b3", &["A"], &["C"]),
                            stub("b4", &["B", "C"], &["D"]),
                            stub("b5", &[], &["E"])];
        let batches = compute_batches(&builders).expect("acyclic graph");
        let mut seen: Vec<usize> = batches.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);

        // Todo productor de un input aparece en un lote estrictamente
        // anterior al de su consumidor.
        let batch_of = |i: usize| batches.iter().position(|b| b.contains(&i)).unwrap();
        assert!(batch_of(0) < batch_of(1));
        assert!(batch_of(0) < batch_of(2));
        assert!(batch_of(1) < batch_of(3));
        assert!(batch_of(2) < batch_of(3));
    }
}
