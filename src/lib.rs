pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{OutputFormat, TomlConfig};

pub use adapters::{JsonPresenter, TextPresenter};
pub use app::{PlotScene, Visualizer};
pub use crate::core::{evaluate, lookup, operations, DisplayOptions, Evaluator, Operation};
pub use domain::model::{
    ComplexNumber, EvaluationOutcome, FailureReason, OperationValue, ResultKind,
};
pub use utils::error::{CalcError, Result};
