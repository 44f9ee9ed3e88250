use crate::domain::model::ComplexNumber;

pub const DEFAULT_VECTOR_PRECISION: usize = 4;
pub const DEFAULT_ANNOTATION_PRECISION: usize = 2;

/// 四捨五入到 `precision` 位並去掉尾端的 0，4.0 印成 `4`
pub fn format_component(x: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, x);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `a+bi` / `a-bi`，虛部一律顯示
pub fn format_complex(z: ComplexNumber, precision: usize) -> String {
    let re = format_component(z.re, precision);
    let im = format_component(z.im, precision);

    match im.strip_prefix('-') {
        Some(magnitude) => format!("{}-{}i", re, magnitude),
        None => format!("{}+{}i", re, im),
    }
}

/// 固定小數位數，例如 `90.00`
pub fn format_scalar(x: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, x);
    match fixed.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => fixed,
    }
}
