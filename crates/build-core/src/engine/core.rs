//! Core GraphEngine implementation
//!
//! Responsable de orquestar un run completo: cargar artifacts
//! pre-existentes, determinar el conjunto de saltos, planificar lotes sobre
//! los builders restantes y ejecutarlos en orden de dependencia mientras
//! reenvía cada valor emitido al caller.
//!
//! Estados por run: Initializing → Planning → Executing(lote i) → Completed;
//! terminal al completar o ante el primer error no recuperado (sin retry
//! interno: la reanudación se logra re-invocando con los artifacts ya
//! emitidos, apoyándose en el salto por outputs presentes).

use std::sync::Arc;

use chrono::Utc;
use indexmap::{IndexMap, IndexSet};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::builder::{BuildSink, BuildYield, BuilderDefinition};
use crate::condition::Condition;
use crate::errors::GraphEngineError;
use crate::event::{ProgressEvent, RunEvent, RunEventKind, RunStream};
use crate::graph::reachability::universe;
use crate::graph::{compute_batches, find_unreachable, resolver};
use crate::model::{Artifact, ArtifactId, BuildContext, Message, TaskDescriptor};

/// Parámetros de un run: tarea ambiental, historial opcional, artifacts
/// pre-existentes (reconocidos por su etiqueta de metadata) y el flag de
/// diagnóstico verbose (observabilidad pura, nunca control de flujo).
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub task: TaskDescriptor,
    pub history: Vec<Message>,
    pub artifacts: Vec<Artifact>,
    pub verbose: bool,
}

impl RunRequest {
    pub fn new(task: TaskDescriptor) -> Self {
        Self { task,
               history: Vec::new(),
               artifacts: Vec::new(),
               verbose: false }
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    pub fn with_artifacts(mut self, artifacts: Vec<Artifact>) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Motor de ejecución de grafos de artifacts.
///
/// Inmutable tras la construcción: los builders y condiciones registrados se
/// comparten entre runs; la tabla de artifacts vive dentro de cada run y se
/// descarta al terminar.
pub struct GraphEngine {
    builders: Vec<Arc<dyn BuilderDefinition>>,
    conditions: Vec<Condition>,
}

impl std::fmt::Debug for GraphEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphEngine")
            .field("builders", &self.builders.len())
            .field("conditions", &self.conditions.len())
            .finish()
    }
}

impl GraphEngine {
    /// Crea un nuevo builder para configurar el engine.
    #[inline]
    pub fn builder() -> super::EngineBuilder {
        super::EngineBuilder::new()
    }

    /// Validación estructural de construcción: productores duplicados y
    /// alcanzabilidad del universo de ids. Ambas fallan aquí, antes de
    /// cualquier run.
    pub(crate) fn try_new(builders: Vec<Arc<dyn BuilderDefinition>>,
                          conditions: Vec<Condition>)
                          -> Result<Self, GraphEngineError> {
        resolver::producer_map(&builders)?;
        let unreachable = find_unreachable(&builders);
        if !unreachable.is_empty() {
            let ids = unreachable.iter().map(|id| id.to_string()).collect();
            return Err(GraphEngineError::UnreachableArtifacts(ids));
        }
        Ok(Self { builders, conditions })
    }

    /// Todos los ids que el grafo menciona, en orden de primera mención.
    pub fn known_ids(&self) -> IndexSet<ArtifactId> {
        universe(&self.builders)
    }

    /// Lanza un run y devuelve la secuencia perezosa de eventos. El run se
    /// conduce en una tarea propia; soltar el stream lo cancela
    /// cooperativamente.
    pub fn run(&self, request: RunRequest) -> RunStream {
        let (tx, rx) = mpsc::channel(32);
        let builders = self.builders.clone();
        let conditions = self.conditions.clone();
        tokio::spawn(async move {
            let mut emitter = RunEmitter { tx, seq: 0 };
            if let Err(e) = drive(builders, conditions, request, &mut emitter).await {
                // Cancelación: el consumidor soltó el stream; no hay a quién
                // reportar. Cualquier otro error viaja como último item.
                if e != GraphEngineError::RunCanceled {
                    emitter.error(e).await;
                }
            }
        });
        RunStream::new(rx)
    }

    /// Ejecuta el run completo y devuelve los artifacts materializados.
    pub async fn run_to_completion(&self, request: RunRequest) -> Result<Vec<Artifact>, GraphEngineError> {
        self.run(request).collect_artifacts().await
    }
}

/// Emisor hacia el caller: numera eventos y convierte el cierre del canal en
/// `RunCanceled`.
struct RunEmitter {
    tx: mpsc::Sender<Result<RunEvent, GraphEngineError>>,
    seq: u64,
}

impl RunEmitter {
    async fn emit(&mut self, kind: RunEventKind) -> Result<(), GraphEngineError> {
        let ev = RunEvent { seq: self.seq,
                            ts: Utc::now(),
                            kind };
        self.seq += 1;
        self.tx.send(Ok(ev)).await.map_err(|_| GraphEngineError::RunCanceled)
    }

    async fn progress(&mut self, message: String) -> Result<(), GraphEngineError> {
        self.emit(RunEventKind::Progress(ProgressEvent::new(message))).await
    }

    async fn error(&mut self, e: GraphEngineError) {
        let _ = self.tx.send(Err(e)).await;
    }
}

/// Conduce un run completo contra una tabla de artifacts propia.
async fn drive(builders: Vec<Arc<dyn BuilderDefinition>>,
               conditions: Vec<Condition>,
               request: RunRequest,
               emitter: &mut RunEmitter)
               -> Result<(), GraphEngineError> {
    // Initializing: cargar artifacts pre-existentes reconocibles por su
    // etiqueta; un valor sin etiqueta se ignora.
    let mut table: IndexMap<ArtifactId, Artifact> = IndexMap::new();
    for art in request.artifacts {
        if let Some(id) = art.graph_id() {
            table.insert(id, art);
        }
    }

    // Salto por outputs presentes: mecanismo de reanudación. Un builder cuyo
    // conjunto completo de outputs ya está en la tabla no se invoca.
    let mut skipped: Vec<usize> = Vec::new();
    let mut active: Vec<usize> = Vec::new();
    for (idx, b) in builders.iter().enumerate() {
        if b.outputs().iter().all(|id| table.contains_key(id)) {
            skipped.push(idx);
        } else {
            active.push(idx);
        }
    }

    // Planning: lotes sólo sobre los builders no saltados.
    let active_builders: Vec<Arc<dyn BuilderDefinition>> =
        active.iter().map(|&i| builders[i].clone()).collect();
    let sub_batches = compute_batches(&active_builders)?;
    let plan: Vec<Vec<usize>> = sub_batches.into_iter()
                                           .map(|batch| batch.into_iter().map(|j| active[j]).collect())
                                           .collect();
    debug!(skipped = skipped.len(), batches = plan.len(), "run planned");

    if request.verbose {
        for &idx in &skipped {
            emitter.progress(format!("builder '{}' skipped: outputs already present", builders[idx].name()))
                   .await?;
        }
        emitter.progress(plan_summary(&builders, &plan)).await?;
    }

    // Executing: lotes en orden; dentro de un lote, orden resuelto
    // (secuencial: sin dependencias internas, el orden de emisión queda
    // reproducible).
    for batch in &plan {
        'builders: for &idx in batch {
            let builder = &builders[idx];
            let name = builder.name().to_string();

            // Veto por condiciones cuyos `then` tocan los inputs u outputs
            // declarados de este builder.
            for cond in conditions.iter().filter(|c| c.gates(builder.as_ref())) {
                let mut resolved: IndexMap<ArtifactId, Artifact> = IndexMap::new();
                for id in &cond.inputs {
                    match table.get(id) {
                        Some(a) => {
                            resolved.insert(id.clone(), a.clone());
                        }
                        None => {
                            return Err(GraphEngineError::MissingConditionInput { builder: name,
                                                                                 artifact: id.to_string() })
                        }
                    }
                }
                if !cond.evaluate(&resolved) {
                    info!(builder = %name, "condition not satisfied, skipping");
                    if request.verbose {
                        emitter.progress(format!("builder '{name}' skipped: condition not satisfied"))
                               .await?;
                    }
                    continue 'builders;
                }
            }

            // Resolución de inputs declarados. Un faltante aquí es violación
            // de invariante interna: el plan garantizaba visibilidad.
            let mut inputs: IndexMap<ArtifactId, Artifact> = IndexMap::new();
            for id in builder.inputs() {
                match table.get(&id) {
                    Some(a) => {
                        inputs.insert(id, a.clone());
                    }
                    None => {
                        return Err(GraphEngineError::MissingInput { builder: name,
                                                                    artifact: id.to_string() })
                    }
                }
            }

            debug!(builder = %name, "invoking builder");
            let ctx = BuildContext { task: request.task.clone(),
                                     history: request.history.clone(),
                                     inputs };
            let (yield_tx, mut yield_rx) = mpsc::channel(16);
            let sink = BuildSink::new(yield_tx);
            let handle = {
                let b = builder.clone();
                tokio::spawn(async move { b.build(ctx, sink).await })
            };

            // Cada valor emitido se procesa de forma independiente, a medida
            // que llega: el progreso se reenvía literal; cada artifact se
            // etiqueta, entra a la tabla (pisando un valor previo del mismo
            // id) y recién entonces se reenvía.
            while let Some(y) = yield_rx.recv().await {
                match y {
                    BuildYield::Progress(p) => emitter.emit(RunEventKind::Progress(p)).await?,
                    BuildYield::Artifact(produced) => {
                        let id = produced.id.clone();
                        let art = Artifact::tagged(produced);
                        table.insert(id, art.clone());
                        emitter.emit(RunEventKind::Artifact(art)).await?;
                    }
                }
            }

            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e @ GraphEngineError::RunCanceled)) => return Err(e),
                Ok(Err(e)) => {
                    return Err(GraphEngineError::BuilderFailed { builder: name,
                                                                 message: e.to_string() })
                }
                Err(join_err) => {
                    return Err(GraphEngineError::BuilderFailed { builder: name,
                                                                 message: join_err.to_string() })
                }
            }
        }
    }

    // Completed
    if request.verbose {
        emitter.progress(completion_summary(&builders, &table)).await?;
    }
    Ok(())
}

fn plan_summary(builders: &[Arc<dyn BuilderDefinition>], plan: &[Vec<usize>]) -> String {
    let rendered: Vec<String> = plan.iter()
                                    .map(|batch| {
                                        let names: Vec<&str> =
                                            batch.iter().map(|&i| builders[i].name()).collect();
                                        format!("[{}]", names.join(", "))
                                    })
                                    .collect();
    format!("plan: {} batch(es) {}", plan.len(), rendered.join(" -> "))
}

fn completion_summary(builders: &[Arc<dyn BuilderDefinition>],
                      table: &IndexMap<ArtifactId, Artifact>)
                      -> String {
    let mut calculated: Vec<&str> = Vec::new();
    let mut missing: Vec<&str> = Vec::new();
    let known = universe(builders);
    for id in known.iter() {
        if table.contains_key(id) {
            calculated.push(id.as_str());
        } else {
            missing.push(id.as_str());
        }
    }
    format!("run complete: calculated=[{}] missing=[{}]",
            calculated.join(", "),
            missing.join(", "))
}
