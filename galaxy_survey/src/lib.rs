// galaxy_survey: headless surveyor for the Sector Galaxy generator.
//
// Module overview:
// - `config.rs`: `SurveyConfig` (JSON, all fields defaulted) and `OutputFormat`.
// - `error.rs`:  `SurveyError` / `SurveyResult`.
// - `survey.rs`: The `system`, `peek`, and `scan` commands rendered to text
//                or JSON.
//
// The `galaxy-survey` binary (`main.rs`) wraps this library with a clap
// command line. Nothing is written to disk.

pub mod config;
pub mod error;
pub mod survey;

pub use config::{OutputFormat, SurveyConfig};
pub use error::{SurveyError, SurveyResult};
