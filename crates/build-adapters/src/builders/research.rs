//! ResearchBuilder (multi-output)
//!
//! Consume el brief y produce, en la misma pasada, el digest de hallazgos y
//! los términos clave. `gather_findings` es la costura async donde iría una
//! llamada a modelo; aquí es una síntesis determinista a partir del tema.

use async_trait::async_trait;

use build_core::model::{ArtifactId, ArtifactSpec, BuildContext};
use build_core::{BuildSink, BuilderDefinition, GraphEngineError};

use crate::artifacts::{ResearchDigest, ResearchKeywords, TopicBrief};

#[derive(Clone, Debug, Default)]
pub struct ResearchBuilder;

impl ResearchBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Punto de suspensión del builder: el engine no asume que la secuencia
    /// de emisiones está disponible de forma síncrona.
    async fn gather_findings(&self, topic: &str) -> Vec<String> {
        tokio::task::yield_now().await;
        topic.split_whitespace()
             .filter(|w| w.len() > 3)
             .map(|w| format!("nota sobre '{}'", w.to_lowercase()))
             .collect()
    }
}

#[async_trait]
impl BuilderDefinition for ResearchBuilder {
    fn name(&self) -> &str {
        "research"
    }

    fn inputs(&self) -> Vec<ArtifactId> {
        vec![TopicBrief::artifact_id()]
    }

    fn outputs(&self) -> Vec<ArtifactId> {
        vec![ResearchDigest::artifact_id(), ResearchKeywords::artifact_id()]
    }

    async fn build(&self, ctx: BuildContext, sink: BuildSink) -> Result<(), GraphEngineError> {
        let brief: TopicBrief = ctx.input_as()?;
        sink.progress(format!("researching '{}'", brief.topic)).await?;

        let findings = self.gather_findings(&brief.topic).await;
        let terms: Vec<String> = brief.topic
                                      .split_whitespace()
                                      .map(|w| w.to_lowercase())
                                      .collect();

        sink.produce_spec(ResearchDigest { topic: brief.topic.clone(),
                                           findings }).await?;
        sink.produce_spec(ResearchKeywords { terms }).await?;
        Ok(())
    }
}
