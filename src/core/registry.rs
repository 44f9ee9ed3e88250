//! 固定的運算目錄。
//!
//! 每個運算都是靜態表中的一筆紀錄，evaluator 不依名稱分支；
//! 新增運算只需加一個 variant 與一筆紀錄。

use crate::domain::model::{Arity, ComplexNumber, FailureReason, OperationValue, ResultKind};
use num_complex::Complex64;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub type Rule = fn(ComplexNumber, ComplexNumber) -> OperationValue;
pub type GuardFn = fn(ComplexNumber, ComplexNumber) -> bool;

/// 絕對值不超過此值的整數實數指數以連乘計算
const MAX_INTEGRAL_EXPONENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulus,
    Argument,
    Conjugate,
    Exponentiation,
    Logarithm,
}

impl Operation {
    /// 介面選單上的順序
    pub const ALL: [Operation; 9] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Modulus,
        Operation::Argument,
        Operation::Conjugate,
        Operation::Exponentiation,
        Operation::Logarithm,
    ];

    pub fn spec(self) -> &'static OperationSpec {
        &REGISTRY[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = FailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).map(|spec| spec.operation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainViolation {
    DivisionByZero,
    LogarithmOfZero,
}

impl From<DomainViolation> for FailureReason {
    fn from(violation: DomainViolation) -> Self {
        match violation {
            DomainViolation::DivisionByZero => FailureReason::DivisionByZero,
            DomainViolation::LogarithmOfZero => FailureReason::LogarithmOfZero,
        }
    }
}

/// 執行運算規則前必須成立的前置條件
#[derive(Debug, Clone, Copy)]
pub struct DomainGuard {
    pub holds: GuardFn,
    pub violation: DomainViolation,
}

#[derive(Debug)]
pub struct OperationSpec {
    pub operation: Operation,
    /// 展示層選單上的完整名稱
    pub name: &'static str,
    /// 顯示標籤的左半部，例如 `z₁ + z₂`
    pub symbol: &'static str,
    pub arity: Arity,
    pub rule: Rule,
    pub result_kind: ResultKind,
    pub guard: Option<DomainGuard>,
    /// 附加在標註數值後的單位
    pub unit: &'static str,
}

impl OperationSpec {
    pub fn check_domain(&self, z1: ComplexNumber, z2: ComplexNumber) -> Result<(), FailureReason> {
        match self.guard {
            Some(guard) if !(guard.holds)(z1, z2) => Err(guard.violation.into()),
            _ => Ok(()),
        }
    }

    pub fn apply(&self, z1: ComplexNumber, z2: ComplexNumber) -> OperationValue {
        (self.rule)(z1, z2)
    }

    pub fn uses_z2(&self) -> bool {
        self.arity == Arity::Binary
    }
}

static REGISTRY: [OperationSpec; 9] = [
    OperationSpec {
        operation: Operation::Addition,
        name: "Addition",
        symbol: "z₁ + z₂",
        arity: Arity::Binary,
        rule: add,
        result_kind: ResultKind::Vector,
        guard: None,
        unit: "",
    },
    OperationSpec {
        operation: Operation::Subtraction,
        name: "Subtraction",
        symbol: "z₁ - z₂",
        arity: Arity::Binary,
        rule: subtract,
        result_kind: ResultKind::Vector,
        guard: None,
        unit: "",
    },
    OperationSpec {
        operation: Operation::Multiplication,
        name: "Multiplication",
        symbol: "z₁ × z₂",
        arity: Arity::Binary,
        rule: multiply,
        result_kind: ResultKind::Vector,
        guard: None,
        unit: "",
    },
    OperationSpec {
        operation: Operation::Division,
        name: "Division",
        symbol: "z₁ ÷ z₂",
        arity: Arity::Binary,
        rule: divide,
        result_kind: ResultKind::Vector,
        guard: Some(DomainGuard {
            holds: divisor_non_zero,
            violation: DomainViolation::DivisionByZero,
        }),
        unit: "",
    },
    OperationSpec {
        operation: Operation::Modulus,
        name: "Modulus (|z1|)",
        symbol: "|z₁|",
        arity: Arity::Unary,
        rule: modulus,
        result_kind: ResultKind::Annotation,
        guard: None,
        unit: "",
    },
    OperationSpec {
        operation: Operation::Argument,
        name: "Argument (arg(z1))",
        symbol: "arg(z₁)",
        arity: Arity::Unary,
        rule: argument,
        result_kind: ResultKind::Annotation,
        guard: None,
        unit: "°",
    },
    OperationSpec {
        operation: Operation::Conjugate,
        name: "Conjugate of z1",
        symbol: "Conj(z₁)",
        arity: Arity::Unary,
        rule: conjugate,
        result_kind: ResultKind::Vector,
        guard: None,
        unit: "",
    },
    OperationSpec {
        operation: Operation::Exponentiation,
        name: "Exponentiation (z1^z2)",
        symbol: "z₁ ^ z₂",
        arity: Arity::Binary,
        rule: power,
        result_kind: ResultKind::Vector,
        guard: Some(DomainGuard {
            holds: power_defined,
            violation: DomainViolation::LogarithmOfZero,
        }),
        unit: "",
    },
    OperationSpec {
        operation: Operation::Logarithm,
        name: "Logarithm (log(z1))",
        symbol: "log(z₁)",
        arity: Arity::Unary,
        rule: logarithm,
        result_kind: ResultKind::Vector,
        guard: Some(DomainGuard {
            holds: log_argument_non_zero,
            violation: DomainViolation::LogarithmOfZero,
        }),
        unit: "",
    },
];

pub fn lookup(name: &str) -> Result<&'static OperationSpec, FailureReason> {
    REGISTRY
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| FailureReason::UnknownOperation {
            name: name.to_string(),
        })
}

pub fn operations() -> &'static [OperationSpec] {
    &REGISTRY
}

// 帶號的零一律視為 +0
fn principal(z: ComplexNumber) -> Complex64 {
    Complex64::new(z.re + 0.0, z.im + 0.0)
}

/// 將角度限制在 (-π, π]：atan2 對極小的負虛部會捨入成 -π
fn principal_angle(theta: f64) -> f64 {
    if theta <= -std::f64::consts::PI {
        std::f64::consts::PI
    } else {
        theta
    }
}

/// 主值分支的自然對數
fn principal_ln(z: Complex64) -> Complex64 {
    Complex64::new(z.norm().ln(), principal_angle(z.arg()))
}

fn vector(z: Complex64) -> OperationValue {
    OperationValue::Complex(z.into())
}

fn add(z1: ComplexNumber, z2: ComplexNumber) -> OperationValue {
    vector(Complex64::from(z1) + Complex64::from(z2))
}

fn subtract(z1: ComplexNumber, z2: ComplexNumber) -> OperationValue {
    vector(Complex64::from(z1) - Complex64::from(z2))
}

fn multiply(z1: ComplexNumber, z2: ComplexNumber) -> OperationValue {
    vector(Complex64::from(z1) * Complex64::from(z2))
}

fn divide(z1: ComplexNumber, z2: ComplexNumber) -> OperationValue {
    vector(Complex64::from(z1) / Complex64::from(z2))
}

fn modulus(z1: ComplexNumber, _: ComplexNumber) -> OperationValue {
    OperationValue::Scalar(Complex64::from(z1).norm())
}

fn argument(z1: ComplexNumber, _: ComplexNumber) -> OperationValue {
    OperationValue::Scalar(principal_angle(principal(z1).arg()).to_degrees())
}

fn conjugate(z1: ComplexNumber, _: ComplexNumber) -> OperationValue {
    vector(Complex64::from(z1).conj())
}

fn power(z1: ComplexNumber, z2: ComplexNumber) -> OperationValue {
    if z1.is_zero() {
        // 已由 guard 保證指數為非負實數
        let result = if z2.is_zero() {
            ComplexNumber::ONE
        } else {
            ComplexNumber::ZERO
        };
        return OperationValue::Complex(result);
    }

    let base = principal(z1);
    if z2.im == 0.0 && z2.re.fract() == 0.0 && z2.re.abs() <= MAX_INTEGRAL_EXPONENT {
        return vector(base.powi(z2.re as i32));
    }

    vector((Complex64::from(z2) * principal_ln(base)).exp())
}

fn logarithm(z1: ComplexNumber, _: ComplexNumber) -> OperationValue {
    vector(principal_ln(principal(z1)))
}

fn divisor_non_zero(_: ComplexNumber, z2: ComplexNumber) -> bool {
    !z2.is_zero()
}

fn power_defined(z1: ComplexNumber, z2: ComplexNumber) -> bool {
    !z1.is_zero() || (z2.im == 0.0 && z2.re >= 0.0)
}

fn log_argument_non_zero(z1: ComplexNumber, _: ComplexNumber) -> bool {
    !z1.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(re: f64, im: f64) -> ComplexNumber {
        ComplexNumber::new(re, im)
    }

    #[test]
    fn test_registry_has_exactly_nine_entries_in_menu_order() {
        assert_eq!(operations().len(), 9);
        for (index, operation) in Operation::ALL.iter().enumerate() {
            assert_eq!(operations()[index].operation, *operation);
            assert_eq!(operation.spec().operation, *operation);
        }
    }

    #[test]
    fn test_lookup_by_exact_label() {
        let labels = [
            "Addition",
            "Subtraction",
            "Multiplication",
            "Division",
            "Modulus (|z1|)",
            "Argument (arg(z1))",
            "Conjugate of z1",
            "Exponentiation (z1^z2)",
            "Logarithm (log(z1))",
        ];
        for label in labels {
            let spec = lookup(label).unwrap();
            assert_eq!(spec.name, label);
            assert_eq!(label.parse::<Operation>().unwrap(), spec.operation);
            assert_eq!(spec.operation.to_string(), label);
        }
    }

    #[test]
    fn test_lookup_unknown_operation() {
        assert_eq!(
            lookup("Foo").unwrap_err(),
            FailureReason::UnknownOperation {
                name: "Foo".to_string()
            }
        );
        // 名稱必須完全相符
        assert!(lookup("addition").is_err());
        assert!(lookup(" Addition").is_err());
    }

    #[test]
    fn test_result_kinds_and_arity() {
        let annotations: Vec<_> = operations()
            .iter()
            .filter(|spec| spec.result_kind == ResultKind::Annotation)
            .map(|spec| spec.operation)
            .collect();
        assert_eq!(annotations, vec![Operation::Modulus, Operation::Argument]);

        let unary: Vec<_> = operations()
            .iter()
            .filter(|spec| !spec.uses_z2())
            .map(|spec| spec.operation)
            .collect();
        assert_eq!(
            unary,
            vec![
                Operation::Modulus,
                Operation::Argument,
                Operation::Conjugate,
                Operation::Logarithm
            ]
        );
    }

    #[test]
    fn test_guards() {
        let division = Operation::Division.spec();
        assert_eq!(
            division.check_domain(z(3.0, 2.0), z(0.0, 0.0)),
            Err(FailureReason::DivisionByZero)
        );
        assert!(division.check_domain(z(3.0, 2.0), z(0.0, 1.0)).is_ok());

        let log = Operation::Logarithm.spec();
        assert_eq!(
            log.check_domain(z(0.0, -0.0), z(1.0, 1.0)),
            Err(FailureReason::LogarithmOfZero)
        );

        let power = Operation::Exponentiation.spec();
        assert!(power.check_domain(z(0.0, 0.0), z(0.0, 0.0)).is_ok());
        assert!(power.check_domain(z(0.0, 0.0), z(2.5, 0.0)).is_ok());
        assert!(power.check_domain(z(0.0, 0.0), z(-1.0, 0.0)).is_err());
        assert!(power.check_domain(z(0.0, 0.0), z(0.0, 1.0)).is_err());
        assert!(power.check_domain(z(1.0, 0.0), z(-1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_rules() {
        assert_eq!(add(z(3.0, 2.0), z(1.0, 4.0)), OperationValue::Complex(z(4.0, 6.0)));
        assert_eq!(
            subtract(z(3.0, 2.0), z(1.0, 4.0)),
            OperationValue::Complex(z(2.0, -2.0))
        );
        assert_eq!(
            multiply(z(3.0, 2.0), z(1.0, 4.0)),
            OperationValue::Complex(z(-5.0, 14.0))
        );
        assert_eq!(modulus(z(3.0, 4.0), z(0.0, 0.0)), OperationValue::Scalar(5.0));
        assert_eq!(
            conjugate(z(3.0, 2.0), z(0.0, 0.0)),
            OperationValue::Complex(z(3.0, -2.0))
        );
    }

    #[test]
    fn test_argument_on_negative_real_axis_is_positive() {
        assert_eq!(argument(z(-1.0, 0.0), z(0.0, 0.0)), OperationValue::Scalar(180.0));
        assert_eq!(argument(z(-1.0, -0.0), z(0.0, 0.0)), OperationValue::Scalar(180.0));
        assert_eq!(argument(z(-0.0, 0.0), z(0.0, 0.0)), OperationValue::Scalar(0.0));
    }

    #[test]
    fn test_tiny_negative_imaginary_part_stays_in_principal_range() {
        for im in [-1e-300, -1e-17, -5e-324] {
            assert_eq!(
                argument(z(-1.0, im), z(0.0, 0.0)),
                OperationValue::Scalar(180.0),
                "im = {:e}",
                im
            );
            let log = logarithm(z(-1.0, im), z(0.0, 0.0)).as_complex().unwrap();
            assert_eq!(log.im, std::f64::consts::PI, "im = {:e}", im);
        }
        // 一般的第三象限仍為負角
        assert_eq!(argument(z(-1.0, -1.0), z(0.0, 0.0)), OperationValue::Scalar(-135.0));
    }

    #[test]
    fn test_power_conventions() {
        assert_eq!(power(z(0.0, 0.0), z(0.0, 0.0)), OperationValue::Complex(z(1.0, 0.0)));
        assert_eq!(power(z(0.0, 0.0), z(2.0, 0.0)), OperationValue::Complex(z(0.0, 0.0)));
        assert_eq!(power(z(1.0, 2.0), z(2.0, 0.0)), OperationValue::Complex(z(-3.0, 4.0)));

        // 指數恰為 100 仍走連乘
        assert_eq!(
            power(z(1.0, 1.0), z(100.0, 0.0)),
            OperationValue::Complex(z(-1125899906842624.0, 0.0))
        );

        let i_to_i = power(z(0.0, 1.0), z(0.0, 1.0)).as_complex().unwrap();
        assert!((i_to_i.re - (-std::f64::consts::FRAC_PI_2).exp()).abs() < 1e-12);
        assert!(i_to_i.im.abs() < 1e-12);
    }

    #[test]
    fn test_logarithm_principal_branch() {
        let log_minus_one = logarithm(z(-1.0, -0.0), z(0.0, 0.0)).as_complex().unwrap();
        assert_eq!(log_minus_one.re, 0.0);
        assert_eq!(log_minus_one.im, std::f64::consts::PI);
    }
}
