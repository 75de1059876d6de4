//! Demo de BuildFlow: corre el grafo de redacción completo imprimiendo la
//! secuencia de eventos, y luego re-invoca con los artifacts ya producidos
//! para mostrar la reanudación por saltos.

use futures_util::StreamExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use build_core::{Artifact, RunEventKind, RunRequest, TaskDescriptor};
use buildflow_rust::config::CONFIG;
use buildflow_rust::standard_graph;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Cargar variables de entorno desde .env si existe (antes de leer CONFIG)
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(CONFIG.log_filter.clone()))
                             .init();

    let instruction = std::env::args().nth(1)
                                      .unwrap_or_else(|| "impacto del arbolado urbano en ciudades densas".to_string());
    let task = TaskDescriptor::new(instruction.clone())
        .with_params(serde_json::json!({ "audience": "lectores generales" }));

    let engine = standard_graph(CONFIG.min_findings)?;
    info!(task = %task.id, "primer run");

    // Primer run: consumir el stream perezoso evento a evento.
    let mut produced: Vec<Artifact> = Vec::new();
    let mut stream = engine.run(RunRequest::new(task.clone()).verbose(CONFIG.verbose));
    while let Some(ev) = stream.next().await {
        let ev = ev?;
        match ev.kind {
            RunEventKind::Progress(p) => println!("[{}] {}", ev.seq, p.message),
            RunEventKind::Artifact(a) => {
                println!("[{}] artifact {} (hash {})",
                         ev.seq,
                         a.graph_id().map(|id| id.to_string()).unwrap_or_default(),
                         &a.hash[..12]);
                produced.push(a);
            }
        }
    }

    // Segundo run con todo lo producido re-suministrado: el plan queda vacío
    // y el engine sólo reporta los saltos.
    info!(artifacts = produced.len(), "segundo run (reanudación)");
    let request = RunRequest::new(task).with_artifacts(produced).verbose(true);
    let mut stream = engine.run(request);
    while let Some(ev) = stream.next().await {
        let ev = ev?;
        if let RunEventKind::Progress(p) = ev.kind {
            println!("[resume {}] {}", ev.seq, p.message);
        }
    }

    Ok(())
}
