//! Artifacts tipados del grafo de redacción.
//!
//! Estos tipos sólo definen la forma del `payload` JSON que se serializa a
//! `build_core::Artifact` bajo el id declarado. El hash lo calcula el engine
//! sobre el payload canónico; el `schema_version` lo gestiona `ArtifactSpec`.

use build_core::typed_artifact;

// Encargo inicial derivado de la tarea del caller.
typed_artifact!(TopicBrief["topic.brief"] { topic: String,
                                            audience: String });

// Hallazgos de investigación sobre el tema (orden estable).
typed_artifact!(ResearchDigest["research.digest"] {
    topic: String,
    findings: Vec<String>,
});

// Términos clave extraídos en la misma pasada de investigación.
typed_artifact!(ResearchKeywords["research.keywords"] {
    terms: Vec<String>,
});

// Esquema del documento: título y secciones ordenadas.
typed_artifact!(ReportOutline["report.outline"] {
    title: String,
    sections: Vec<String>,
});

// Borrador completo ensamblado sección a sección.
typed_artifact!(ReportDraft["report.draft"] {
    title: String,
    body: String,
    word_count: usize,
});

// Resumen final de una línea.
typed_artifact!(ReportSummary["report.summary"] {
    text: String,
});
