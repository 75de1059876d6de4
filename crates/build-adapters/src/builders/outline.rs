//! OutlineBuilder (join de dos inputs)

use build_core::builder;

use crate::artifacts::{ReportOutline, ResearchDigest, TopicBrief};

builder! {
    OutlineBuilder {
        name: "outline",
        inputs: [TopicBrief, ResearchDigest],
        outputs: [ReportOutline],
        run(_me, ctx, sink) {
            let brief: TopicBrief = ctx.input_as()?;
            let digest: ResearchDigest = ctx.input_as()?;

            // Una sección introductoria más una por hallazgo.
            let mut sections = vec!["introduccion".to_string()];
            sections.extend((1..=digest.findings.len()).map(|n| format!("seccion {n}")));

            sink.produce_spec(ReportOutline {
                title: format!("{} (para {})", brief.topic, brief.audience),
                sections,
            }).await?;
            Ok(())
        }
    }
}
