//! build-core: Motor de grafos de artifacts
//!
//! Orquesta builders declarativos (inputs/outputs por id) sobre un DAG:
//! valida la estructura al construir, agrupa en lotes paralelos máximos,
//! salta trabajo cuyos outputs ya existen, veta builders opcionales con
//! condiciones y reenvía al caller la secuencia perezosa de progreso y
//! artifacts materializados.

pub mod builder;
pub mod condition;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod graph;
pub mod hashing;
pub mod model;

pub use builder::{BuildSink, BuildYield, BuilderDefinition};
pub use condition::Condition;
pub use engine::{EngineBuilder, GraphEngine, RunRequest};
pub use errors::GraphEngineError;
pub use event::{ProgressEvent, RunEvent, RunEventKind, RunStream};
pub use graph::{compute_batches, find_unreachable};
pub use model::{Artifact, ArtifactId, ArtifactSpec, BuildContext, Message, ProducedArtifact,
                TaskDescriptor};

// Los macros `typed_artifact!` y `builder!` se exportan vía #[macro_export];
// el caller necesita serde y async-trait entre sus dependencias.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtifactSpec;

    // Grafo mínimo declarado con los macros: una fuente y un transformador.
    typed_artifact!(Seed["seed"] { value: String });
    typed_artifact!(Upper["upper"] { value: String });

    builder! {
        SeedBuilder {
            name: "seed",
            inputs: [],
            outputs: [Seed],
            run(_me, ctx, sink) {
                sink.progress("seeding").await?;
                sink.produce_spec(Seed { value: ctx.task.instruction.clone() }).await?;
                Ok(())
            }
        }
    }

    builder! {
        UpperBuilder {
            name: "upper",
            inputs: [Seed],
            outputs: [Upper],
            run(_me, ctx, sink) {
                let seed: Seed = ctx.input_as()?;
                sink.produce_spec(Upper { value: seed.value.to_uppercase() }).await?;
                Ok(())
            }
        }
    }

    fn engine() -> GraphEngine {
        GraphEngine::builder().register(SeedBuilder::new())
                              .register(UpperBuilder::new())
                              .build()
                              .expect("valid graph")
    }

    #[tokio::test]
    async fn macro_graph_runs_in_dependency_order() {
        let request = RunRequest::new(TaskDescriptor::new("hola"));
        let events = engine().run(request).collect_events().await.expect("run completes");

        // seq estrictamente creciente
        for pair in events.windows(2) {
            assert!(pair[0].seq < pair[1].seq);
        }

        let artifacts: Vec<Artifact> = events.into_iter()
                                             .filter_map(|e| match e.kind {
                                                 RunEventKind::Artifact(a) => Some(a),
                                                 _ => None,
                                             })
                                             .collect();
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].graph_id(), Some(ArtifactId::from("seed")));
        assert_eq!(artifacts[1].graph_id(), Some(ArtifactId::from("upper")));

        let upper = Upper::from_artifact(&artifacts[1]).expect("typed decode");
        assert_eq!(upper.value, "HOLA");
    }

    #[tokio::test]
    async fn pre_supplied_output_skips_the_producer() {
        let seed = Artifact::tagged(Seed { value: "ya".into() }.into_produced());
        let request = RunRequest::new(TaskDescriptor::new("ignorado")).with_artifacts(vec![seed]);
        let artifacts = engine().run_to_completion(request).await.expect("run completes");

        // Sólo `upper` se materializa; el valor pre-existente de `seed`
        // sigue visible para el consumidor.
        assert_eq!(artifacts.len(), 1);
        let upper = Upper::from_artifact(&artifacts[0]).expect("typed decode");
        assert_eq!(upper.value, "YA");
    }
}
