pub mod collector;
pub mod report;
pub mod scorer;

pub use collector::{AnswerCollector, LineSource, ScriptedLineSource, StdinLineSource};
pub use report::{render_result, type_description, ReportWriter};
pub use scorer::{aggregate_totals, compute_percentages, derive_type, score_responses};
