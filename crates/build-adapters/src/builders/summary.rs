//! SummaryBuilder (consumidor final)

use build_core::builder;

use crate::artifacts::{ReportDraft, ReportSummary};

builder! {
    SummaryBuilder {
        name: "summary",
        inputs: [ReportDraft],
        outputs: [ReportSummary],
        run(_me, ctx, sink) {
            let draft: ReportDraft = ctx.input_as()?;
            sink.produce_spec(ReportSummary {
                text: format!("'{}': {} palabras en {} lineas",
                              draft.title,
                              draft.word_count,
                              draft.body.lines().count()),
            }).await?;
            Ok(())
        }
    }
}
