//! BriefBuilder (fuente sin inputs)
//!
//! Deriva el encargo inicial de la tarea ambiental: el tema sale de la
//! instrucción y la audiencia de `params.audience` si el caller la fijó.

use build_core::builder;

use crate::artifacts::TopicBrief;

builder! {
    BriefBuilder {
        name: "brief",
        inputs: [],
        outputs: [TopicBrief],
        run(_me, ctx, sink) {
            let audience = ctx.task
                              .params
                              .as_ref()
                              .and_then(|p| p.get("audience"))
                              .and_then(|v| v.as_str())
                              .unwrap_or("general")
                              .to_string();
            sink.produce_spec(TopicBrief { topic: ctx.task.instruction.trim().to_string(),
                                           audience }).await?;
            Ok(())
        }
    }
}
