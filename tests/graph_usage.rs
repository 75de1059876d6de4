//! Uso del workspace completo a través de `standard_graph`: run completo,
//! reanudación y diagnóstico verbose.

use futures_util::StreamExt;

use build_core::{RunEventKind, RunRequest, TaskDescriptor};
use buildflow_rust::standard_graph;

#[tokio::test]
async fn full_run_then_resume_produces_nothing_new() {
    let engine = standard_graph(1).expect("valid graph");
    let task = TaskDescriptor::new("corredores verdes para fauna urbana");

    let artifacts = engine.run_to_completion(RunRequest::new(task.clone()))
                          .await
                          .expect("first run completes");
    assert_eq!(artifacts.len(), 6);

    // Re-suministrar todo: ningún builder vuelve a correr, no hay artifacts
    // nuevos y el resumen final reporta el universo completo calculado.
    let request = RunRequest::new(task).with_artifacts(artifacts).verbose(true);
    let mut stream = engine.run(request);

    let mut new_artifacts = 0;
    let mut skip_notices = 0;
    let mut summary = String::new();
    while let Some(ev) = stream.next().await {
        match ev.expect("no run error").kind {
            RunEventKind::Artifact(_) => new_artifacts += 1,
            RunEventKind::Progress(p) => {
                if p.message.contains("outputs already present") {
                    skip_notices += 1;
                } else if p.message.starts_with("run complete") {
                    summary = p.message;
                }
            }
        }
    }

    assert_eq!(new_artifacts, 0);
    assert_eq!(skip_notices, 5, "every builder must report its skip in verbose mode");
    assert!(summary.contains("missing=[]"), "summary was: {summary}");
}
