use crate::app::scene::DEFAULT_AXIS_LIMIT;
use crate::config::{OutputFormat, MAX_PRECISION};
use crate::core::{registry, DisplayOptions};
use crate::domain::model::ComplexNumber;
use crate::domain::ports::RequestProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_finite, validate_range,
    validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub request: RequestConfig,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    pub operation: Option<String>,
    pub z1: ComplexNumber,
    /// 單元運算可省略
    pub z2: Option<ComplexNumber>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub vector_precision: Option<usize>,
    pub annotation_precision: Option<usize>,
    pub axis_limit: Option<f64>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${Z1_RE})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        let operation = validate_required_field("request.operation", &self.request.operation)?;
        validate_non_empty_string("request.operation", operation)?;

        validate_finite("request.z1.re", self.request.z1.re)?;
        validate_finite("request.z1.im", self.request.z1.im)?;

        // 二元運算一定要有 z2；未知名稱留給 evaluator 回報
        if let Ok(spec) = registry::lookup(operation) {
            if spec.uses_z2() {
                validate_required_field("request.z2", &self.request.z2)?;
            }
        }
        if let Some(z2) = self.request.z2 {
            validate_finite("request.z2.re", z2.re)?;
            validate_finite("request.z2.im", z2.im)?;
        }

        let options = self.display_options();
        validate_range("display.vector_precision", options.vector_precision, 0, MAX_PRECISION)?;
        validate_range(
            "display.annotation_precision",
            options.annotation_precision,
            0,
            MAX_PRECISION,
        )?;
        validate_positive_finite("display.axis_limit", self.axis_limit())?;

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.display
            .as_ref()
            .and_then(|d| d.format)
            .unwrap_or_default()
    }
}

impl RequestProvider for TomlConfig {
    fn z1(&self) -> ComplexNumber {
        self.request.z1
    }

    fn z2(&self) -> ComplexNumber {
        self.request.z2.unwrap_or(ComplexNumber::ZERO)
    }

    fn operation(&self) -> &str {
        self.request.operation.as_deref().unwrap_or("")
    }

    fn display_options(&self) -> DisplayOptions {
        let defaults = DisplayOptions::default();
        let display = self.display.clone().unwrap_or_default();
        DisplayOptions {
            vector_precision: display.vector_precision.unwrap_or(defaults.vector_precision),
            annotation_precision: display
                .annotation_precision
                .unwrap_or(defaults.annotation_precision),
        }
    }

    fn axis_limit(&self) -> f64 {
        self.display
            .as_ref()
            .and_then(|d| d.axis_limit)
            .unwrap_or(DEFAULT_AXIS_LIMIT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[request]
operation = "Division"
z1 = { re = 3.0, im = 2.0 }
z2 = { re = 1.0, im = 4.0 }

[display]
vector_precision = 2
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.operation(), "Division");
        assert_eq!(config.z1(), ComplexNumber::new(3.0, 2.0));
        assert_eq!(config.z2(), ComplexNumber::new(1.0, 4.0));
        assert_eq!(config.display_options().vector_precision, 2);
        assert_eq!(config.display_options().annotation_precision, 2);
        assert_eq!(config.axis_limit(), 10.0);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unary_operation_may_omit_z2() {
        let toml_content = r#"
[request]
operation = "Conjugate of z1"
z1 = { re = 3.0, im = 2.0 }
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.z2(), ComplexNumber::ZERO);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_binary_operation_requires_z2() {
        let toml_content = r#"
[request]
operation = "Addition"
z1 = { re = 3.0, im = 2.0 }
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::MissingConfigError { field }) if field == "request.z2"
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COMPLEX_CALC_TEST_Z1_RE", "-7.5");

        let toml_content = r#"
[request]
operation = "Modulus (|z1|)"
z1 = { re = ${COMPLEX_CALC_TEST_Z1_RE}, im = 0.0 }
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.z1(), ComplexNumber::new(-7.5, 0.0));

        std::env::remove_var("COMPLEX_CALC_TEST_Z1_RE");
    }

    #[test]
    fn test_config_validation() {
        let missing_operation = r#"
[request]
z1 = { re = 3.0, im = 2.0 }
"#;
        let config = TomlConfig::from_toml_str(missing_operation).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::MissingConfigError { .. })
        ));

        let bad_axis = r#"
[request]
operation = "Addition"
z1 = { re = 3.0, im = 2.0 }
z2 = { re = 1.0, im = 4.0 }

[display]
axis_limit = -1.0
"#;
        let config = TomlConfig::from_toml_str(bad_axis).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::InvalidConfigValueError { .. })
        ));

        let infinite_operand = r#"
[request]
operation = "Addition"
z1 = { re = inf, im = 2.0 }
z2 = { re = 1.0, im = 4.0 }
"#;
        let config = TomlConfig::from_toml_str(infinite_operand).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = TomlConfig::from_toml_str("[request\noperation = ");
        assert!(matches!(
            result,
            Err(CalcError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[request]
operation = "Logarithm (log(z1))"
z1 = { re = 1.0, im = 1.0 }
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.operation(), "Logarithm (log(z1))");
    }
}
