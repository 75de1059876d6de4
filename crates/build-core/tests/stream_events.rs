//! Contrato observable del stream de un run: orden de emisión, diagnóstico
//! verbose y propagación de errores de planificación y construcción.

use async_trait::async_trait;
use serde_json::json;

use build_core::{
    ArtifactId, BuildContext, BuildSink, BuilderDefinition, GraphEngine, GraphEngineError,
    ProducedArtifact, RunEventKind, RunRequest, TaskDescriptor,
};

struct Chatty {
    name: &'static str,
    inputs: Vec<&'static str>,
    outputs: Vec<&'static str>,
}

#[async_trait]
impl BuilderDefinition for Chatty {
    fn name(&self) -> &str {
        self.name
    }

    fn inputs(&self) -> Vec<ArtifactId> {
        self.inputs.iter().map(|s| ArtifactId::from(*s)).collect()
    }

    fn outputs(&self) -> Vec<ArtifactId> {
        self.outputs.iter().map(|s| ArtifactId::from(*s)).collect()
    }

    async fn build(&self, _ctx: BuildContext, sink: BuildSink) -> Result<(), GraphEngineError> {
        sink.progress(format!("{} working", self.name)).await?;
        for id in &self.outputs {
            sink.produce(ProducedArtifact::new(*id, json!({ "by": self.name }))).await?;
        }
        Ok(())
    }
}

fn chatty(name: &'static str, inputs: &[&'static str], outputs: &[&'static str]) -> Chatty {
    Chatty { name,
             inputs: inputs.to_vec(),
             outputs: outputs.to_vec() }
}

#[tokio::test]
async fn producer_artifacts_are_visible_before_consumers_start() {
    // Grafo rombo: b1 -> {b2, b3} -> b4; el orden de eventos respeta lotes.
    let engine = GraphEngine::builder()
        .register(chatty("b1", &[], &["A", "B"]))
        .register(chatty("b2", &["A"], &["C", "D"]))
        .register(chatty("b3", &["B"], &["E"]))
        .register(chatty("b4", &["A", "B", "C"], &["F"]))
        .build()
        .expect("valid graph");

    let events = engine.run(RunRequest::new(TaskDescriptor::new("t")))
                       .collect_events()
                       .await
                       .expect("run completes");

    let order: Vec<String> = events.iter()
                                   .filter_map(|e| match &e.kind {
                                       RunEventKind::Artifact(a) => Some(a.graph_id().unwrap().to_string()),
                                       _ => None,
                                   })
                                   .collect();
    assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
}

#[tokio::test]
async fn builder_progress_is_forwarded_verbatim_interleaved() {
    let engine = GraphEngine::builder()
        .register(chatty("solo", &[], &["only"]))
        .build()
        .expect("valid graph");

    let events = engine.run(RunRequest::new(TaskDescriptor::new("t")))
                       .collect_events()
                       .await
                       .expect("run completes");

    let kinds: Vec<&str> = events.iter()
                                 .map(|e| match &e.kind {
                                     RunEventKind::Progress(p) => p.message.as_str(),
                                     RunEventKind::Artifact(_) => "<artifact>",
                                 })
                                 .collect();
    assert_eq!(kinds, vec!["solo working", "<artifact>"]);
}

#[tokio::test]
async fn verbose_mode_emits_plan_and_completion_summary() {
    let engine = GraphEngine::builder()
        .register(chatty("first", &[], &["a"]))
        .register(chatty("second", &["a"], &["b"]))
        .build()
        .expect("valid graph");

    let request = RunRequest::new(TaskDescriptor::new("t")).verbose(true);
    let events = engine.run(request).collect_events().await.expect("run completes");

    let progress: Vec<String> = events.into_iter()
                                      .filter_map(|e| match e.kind {
                                          RunEventKind::Progress(p) => Some(p.message),
                                          _ => None,
                                      })
                                      .collect();
    assert!(progress.iter().any(|m| m.starts_with("plan: 2 batch(es) [first] -> [second]")),
            "plan summary missing: {progress:?}");
    assert!(progress.iter().any(|m| m.contains("calculated=[a, b]") && m.contains("missing=[]")),
            "completion summary missing: {progress:?}");
}

#[tokio::test]
async fn cycle_among_non_skipped_builders_is_a_planning_error() {
    // La estructura es alcanzable gracias a `seed`, pero b1/b2 se consumen
    // mutuamente: el ciclo recién aparece al planificar.
    let engine = GraphEngine::builder()
        .register(chatty("seed", &[], &["s"]))
        .register(chatty("b1", &["s", "B"], &["A"]))
        .register(chatty("b2", &["A"], &["B"]));

    // Construcción falla por inalcanzabilidad (A y B se bloquean entre sí).
    let err = engine.build().unwrap_err();
    assert_eq!(err,
               GraphEngineError::UnreachableArtifacts(vec!["B".into(), "A".into()]));
}

#[tokio::test]
async fn fully_pre_supplied_run_plans_an_empty_batch_sequence() {
    // Un ciclo puro nunca sobrevive a la validación de construcción (sus
    // outputs son inalcanzables), así que el error de planificación sólo es
    // observable a nivel de `compute_batches`. Aquí cubrimos el otro borde
    // del plan: todos los builders saltados.
    let engine = GraphEngine::builder()
        .register(chatty("b1", &[], &["A"]))
        .register(chatty("b2", &["A"], &["B"]))
        .build()
        .expect("valid graph");

    // Con A y B pre-suministrados ambos builders se saltan: el plan queda
    // vacío y el run termina sin invocar nada.
    let pre = vec![build_core::Artifact::tagged(ProducedArtifact::new("A", json!({}))),
                   build_core::Artifact::tagged(ProducedArtifact::new("B", json!({})))];
    let artifacts = engine.run_to_completion(RunRequest::new(TaskDescriptor::new("t")).with_artifacts(pre))
                          .await
                          .expect("empty plan completes");
    assert!(artifacts.is_empty());
}

#[tokio::test]
async fn duplicate_producer_fails_construction() {
    let err = GraphEngine::builder()
        .register(chatty("b1", &[], &["A"]))
        .register(chatty("b2", &[], &["A"]))
        .build()
        .unwrap_err();
    assert_eq!(err, GraphEngineError::DuplicateProducer("A".to_string()));
}
