use crate::core::format::{
    format_complex, format_scalar, DEFAULT_ANNOTATION_PRECISION, DEFAULT_VECTOR_PRECISION,
};
use crate::core::registry::{self, OperationSpec};
use crate::domain::model::{ComplexNumber, EvaluationOutcome, FailureReason, OperationValue};
use serde::{Deserialize, Serialize};

/// 產生顯示標籤時使用的小數位數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub vector_precision: usize,
    pub annotation_precision: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            vector_precision: DEFAULT_VECTOR_PRECISION,
            annotation_precision: DEFAULT_ANNOTATION_PRECISION,
        }
    }
}

/// 無狀態，結果只取決於參數
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    options: DisplayOptions,
}

impl Evaluator {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    pub fn evaluate(
        &self,
        z1: ComplexNumber,
        z2: ComplexNumber,
        operation_name: &str,
    ) -> EvaluationOutcome {
        let spec = match registry::lookup(operation_name) {
            Ok(spec) => spec,
            Err(reason) => {
                tracing::debug!("Rejected operation name: {:?}", operation_name);
                return EvaluationOutcome::Failure { reason };
            }
        };

        // 定義域檢查失敗時不得呼叫運算規則
        if let Err(reason) = spec.check_domain(z1, z2) {
            tracing::debug!("{} undefined for z1={:?}, z2={:?}: {}", spec.name, z1, z2, reason);
            return EvaluationOutcome::Failure { reason };
        }

        let value = spec.apply(z1, z2);
        if !value.is_finite() {
            tracing::debug!("{} overflowed for z1={:?}, z2={:?}", spec.name, z1, z2);
            return EvaluationOutcome::Failure {
                reason: FailureReason::Overflow,
            };
        }
        let display_label = self.display_label(spec, &value);
        tracing::debug!("{} evaluated: {}", spec.name, display_label);

        EvaluationOutcome::Success {
            result_kind: spec.result_kind,
            value,
            display_label,
        }
    }

    fn display_label(&self, spec: &OperationSpec, value: &OperationValue) -> String {
        let rendered = match value {
            OperationValue::Complex(z) => format_complex(*z, self.options.vector_precision),
            OperationValue::Scalar(x) => format_scalar(*x, self.options.annotation_precision),
        };
        format!("{} = {}{}", spec.symbol, rendered, spec.unit)
    }
}

/// 以預設精度計算
pub fn evaluate(z1: ComplexNumber, z2: ComplexNumber, operation_name: &str) -> EvaluationOutcome {
    Evaluator::default().evaluate(z1, z2, operation_name)
}
