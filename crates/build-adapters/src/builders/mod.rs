//! Builders concretos del grafo de redacción.

pub mod brief;
pub mod draft;
pub mod outline;
pub mod research;
pub mod summary;

pub use brief::BriefBuilder;
pub use draft::DraftBuilder;
pub use outline::OutlineBuilder;
pub use research::ResearchBuilder;
pub use summary::SummaryBuilder;
