use crate::core::format::format_complex;
use crate::core::registry::{self, Operation};
use crate::domain::model::{ComplexNumber, EvaluationOutcome, OperationValue, ResultKind};
use serde::Serialize;

pub const DEFAULT_AXIS_LIMIT: f64 = 10.0;

/// 標註文字相對 z1 向右偏移的距離
const ANNOTATION_OFFSET: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotVector {
    pub label: String,
    pub tip: ComplexNumber,
    pub color: &'static str,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotAnnotation {
    pub text: String,
    pub anchor: ComplexNumber,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axes {
    pub limit: f64,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// 與繪圖後端無關的圖形描述
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotScene {
    pub title: String,
    pub axes: Axes,
    pub vectors: Vec<PlotVector>,
    pub annotation: Option<PlotAnnotation>,
    pub outcome: EvaluationOutcome,
    pub error: Option<String>,
}

impl PlotScene {
    pub fn build(
        z1: ComplexNumber,
        z2: ComplexNumber,
        operation_name: &str,
        outcome: &EvaluationOutcome,
        axis_limit: f64,
        vector_precision: usize,
    ) -> Self {
        let mut vectors = vec![
            PlotVector {
                label: format!("z₁ = {}", format_complex(z1, vector_precision)),
                tip: z1,
                color: "red",
                style: LineStyle::Solid,
            },
            PlotVector {
                label: format!("z₂ = {}", format_complex(z2, vector_precision)),
                tip: z2,
                color: "blue",
                style: LineStyle::Solid,
            },
        ];
        let mut annotation = None;
        let mut error = None;

        match outcome {
            EvaluationOutcome::Success {
                result_kind,
                value,
                display_label,
            } => {
                let operation = registry::lookup(operation_name).ok().map(|spec| spec.operation);
                match (result_kind, value, operation) {
                    (ResultKind::Vector, OperationValue::Complex(tip), Some(operation)) => {
                        let (color, style) = result_style(operation);
                        vectors.push(PlotVector {
                            label: display_label.clone(),
                            tip: *tip,
                            color,
                            style,
                        });
                    }
                    (ResultKind::Annotation, _, Some(operation)) => {
                        annotation = Some(PlotAnnotation {
                            text: display_label.clone(),
                            anchor: ComplexNumber::new(z1.re + ANNOTATION_OFFSET, z1.im),
                            color: result_style(operation).0,
                        });
                    }
                    _ => {
                        tracing::warn!("Outcome does not match operation {:?}", operation_name);
                    }
                }
            }
            EvaluationOutcome::Failure { reason } => error = Some(reason.to_string()),
        }

        Self {
            title: format!("Operation: {}", operation_name),
            axes: Axes {
                limit: axis_limit,
                x_label: "Re(z)",
                y_label: "Im(z)",
            },
            vectors,
            annotation,
            outcome: outcome.clone(),
            error,
        }
    }

    /// 圖上方的一行摘要
    pub fn headline(&self) -> String {
        match (&self.error, self.outcome.display_label()) {
            (Some(message), _) => format!("Error: {}", message),
            (None, Some(label)) => format!("Result: {}", label),
            (None, None) => "Result: -".to_string(),
        }
    }

    /// 點是否落在可視範圍內
    pub fn is_visible(&self, z: ComplexNumber) -> bool {
        z.re.abs() <= self.axes.limit && z.im.abs() <= self.axes.limit
    }
}

fn result_style(operation: Operation) -> (&'static str, LineStyle) {
    match operation {
        Operation::Addition => ("green", LineStyle::Solid),
        Operation::Subtraction => ("yellow", LineStyle::Solid),
        Operation::Multiplication => ("magenta", LineStyle::Solid),
        Operation::Division => ("cyan", LineStyle::Solid),
        Operation::Modulus => ("lime", LineStyle::Solid),
        Operation::Argument => ("yellow", LineStyle::Solid),
        Operation::Conjugate => ("cyan", LineStyle::Dashed),
        Operation::Exponentiation => ("black", LineStyle::Solid),
        Operation::Logarithm => ("red", LineStyle::Dashed),
    }
}
