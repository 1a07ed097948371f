pub mod yaml_loader;

pub use yaml_loader::{load_questions_from_yaml, parse_questions};
