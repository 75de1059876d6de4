//! Condiciones de calidad del grafo de redacción.

use build_core::model::ArtifactSpec;
use build_core::{ArtifactId, Condition};

use crate::artifacts::{ReportDraft, ResearchDigest};

/// Veta la etapa de borrador cuando la investigación quedó corta.
///
/// `then` nombra el id del borrador, de modo que la condición alcanza tanto
/// a `draft` (lo produce) como a `summary` (lo consume): si no hay material
/// suficiente, ninguno de los dos se ejecuta y el run termina igual sin
/// error.
pub fn research_quality_gate(min_findings: usize) -> Condition {
    let digest_id: ArtifactId = ResearchDigest::artifact_id();
    Condition::new(vec![digest_id.clone()],
                   vec![ReportDraft::artifact_id()],
                   move |resolved| {
                       // Un payload indecodificable cuenta como material
                       // insuficiente: el veto es conservador, nunca panic.
                       resolved.get(&digest_id)
                               .and_then(|a| ResearchDigest::from_artifact(a).ok())
                               .map(|d| d.findings.len() >= min_findings)
                               .unwrap_or(false)
                   })
}
