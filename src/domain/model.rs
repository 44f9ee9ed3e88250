use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Argand 平面上的一點 (re, im)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexNumber {
    pub re: f64,
    pub im: f64,
}

impl ComplexNumber {
    pub const ZERO: ComplexNumber = ComplexNumber { re: 0.0, im: 0.0 };
    pub const ONE: ComplexNumber = ComplexNumber { re: 1.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl From<Complex64> for ComplexNumber {
    fn from(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<ComplexNumber> for Complex64 {
    fn from(z: ComplexNumber) -> Self {
        Complex64::new(z.re, z.im)
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(crate::core::format::DEFAULT_VECTOR_PRECISION);
        f.write_str(&crate::core::format::format_complex(*self, precision))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// 只使用 z1
    Unary,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// 從原點畫出的向量
    Vector,
    /// 標註在 z1 旁的文字
    Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationValue {
    Complex(ComplexNumber),
    Scalar(f64),
}

impl OperationValue {
    pub fn as_complex(&self) -> Option<ComplexNumber> {
        match self {
            OperationValue::Complex(z) => Some(*z),
            OperationValue::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            OperationValue::Scalar(x) => Some(*x),
            OperationValue::Complex(_) => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            OperationValue::Complex(z) => z.re.is_finite() && z.im.is_finite(),
            OperationValue::Scalar(x) => x.is_finite(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum FailureReason {
    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    #[error("Division by zero is undefined.")]
    DivisionByZero,

    #[error("Logarithm of zero is undefined.")]
    LogarithmOfZero,

    /// 運算結果超出 f64 可表示範圍
    #[error("Result is out of the representable range.")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Success {
        result_kind: ResultKind,
        value: OperationValue,
        display_label: String,
    },
    Failure {
        reason: FailureReason,
    },
}

impl EvaluationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationOutcome::Success { .. })
    }

    pub fn value(&self) -> Option<OperationValue> {
        match self {
            EvaluationOutcome::Success { value, .. } => Some(*value),
            EvaluationOutcome::Failure { .. } => None,
        }
    }

    pub fn result_kind(&self) -> Option<ResultKind> {
        match self {
            EvaluationOutcome::Success { result_kind, .. } => Some(*result_kind),
            EvaluationOutcome::Failure { .. } => None,
        }
    }

    pub fn display_label(&self) -> Option<&str> {
        match self {
            EvaluationOutcome::Success { display_label, .. } => Some(display_label),
            EvaluationOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            EvaluationOutcome::Failure { reason } => Some(reason),
            EvaluationOutcome::Success { .. } => None,
        }
    }
}
