//! File translation pipeline: one file at a time, and the full sweep.

mod orchestrator;
mod transformer;

pub use orchestrator::{Orchestrator, Progress, SweepSummary};
pub use transformer::{FileOutcome, FileTranslator, TranslationStats, ValueFailure};
