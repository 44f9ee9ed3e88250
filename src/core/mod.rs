pub mod evaluator;
pub mod format;
pub mod registry;

pub use crate::domain::model::{ComplexNumber, EvaluationOutcome, FailureReason, OperationValue};
pub use evaluator::{evaluate, DisplayOptions, Evaluator};
pub use registry::{lookup, operations, Operation, OperationSpec};
