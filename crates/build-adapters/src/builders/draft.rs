//! DraftBuilder (emisiones de progreso intercaladas)
//!
//! Ensambla el borrador sección a sección reportando progreso entre medio:
//! el caller ve cada aviso a medida que llega, no al final del builder.

use build_core::builder;

use crate::artifacts::{ReportDraft, ReportOutline, ResearchDigest};

builder! {
    DraftBuilder {
        name: "draft",
        inputs: [ReportOutline, ResearchDigest],
        outputs: [ReportDraft],
        fields { style: String }
        , run(me, ctx, sink) {
            let outline: ReportOutline = ctx.input_as()?;
            let digest: ResearchDigest = ctx.input_as()?;

            let mut body = String::new();
            for (i, section) in outline.sections.iter().enumerate() {
                sink.progress(format!("drafting section '{section}'")).await?;
                let material = if i == 0 {
                    format!("presentamos el tema '{}'", digest.topic)
                } else {
                    digest.findings.get(i - 1).cloned().unwrap_or_default()
                };
                body.push_str(&format!("[{section}] ({}) {material}\n", me.style));
            }

            let word_count = body.split_whitespace().count();
            sink.produce_spec(ReportDraft { title: outline.title.clone(),
                                            body,
                                            word_count }).await?;
            Ok(())
        }
    }
}
