pub mod dimension;
pub mod loaders;
pub mod question;

pub use dimension::{Dichotomy, Dimension};
pub use loaders::{load_questions_from_yaml, parse_questions};
pub use question::{Likert, Percentages, Question, ScoreResult, Totals, LIKERT_MAX, LIKERT_MIN};
