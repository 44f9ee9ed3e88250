use crate::app::scene::DEFAULT_AXIS_LIMIT;
use crate::config::{OutputFormat, MAX_PRECISION};
use crate::core::format::{DEFAULT_ANNOTATION_PRECISION, DEFAULT_VECTOR_PRECISION};
use crate::core::DisplayOptions;
use crate::domain::model::ComplexNumber;
use crate::domain::ports::RequestProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_finite, validate_range, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "complex-calc")]
#[command(about = "Visualize arithmetic on complex numbers in the Argand plane")]
pub struct CliConfig {
    /// Real part of z₁
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub z1_re: f64,

    /// Imaginary part of z₁
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub z1_im: f64,

    /// Real part of z₂
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub z2_re: f64,

    /// Imaginary part of z₂
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub z2_im: f64,

    /// Operation label, e.g. "Division" or "Modulus (|z1|)"
    #[arg(short, long, default_value = "Addition")]
    pub operation: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimals shown for complex results
    #[arg(long, default_value_t = DEFAULT_VECTOR_PRECISION)]
    pub vector_precision: usize,

    /// Decimals shown for modulus and argument
    #[arg(long, default_value_t = DEFAULT_ANNOTATION_PRECISION)]
    pub annotation_precision: usize,

    /// Half-width of the square plot area
    #[arg(long, default_value_t = DEFAULT_AXIS_LIMIT)]
    pub axis_limit: f64,

    /// Print the supported operation labels and exit
    #[arg(long)]
    pub list_operations: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl RequestProvider for CliConfig {
    fn z1(&self) -> ComplexNumber {
        ComplexNumber::new(self.z1_re, self.z1_im)
    }

    fn z2(&self) -> ComplexNumber {
        ComplexNumber::new(self.z2_re, self.z2_im)
    }

    fn operation(&self) -> &str {
        &self.operation
    }

    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            vector_precision: self.vector_precision,
            annotation_precision: self.annotation_precision,
        }
    }

    fn axis_limit(&self) -> f64 {
        self.axis_limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_finite("z1-re", self.z1_re)?;
        validate_finite("z1-im", self.z1_im)?;
        validate_finite("z2-re", self.z2_re)?;
        validate_finite("z2-im", self.z2_im)?;
        // 未知的運算名稱交給 evaluator 回報
        validate_non_empty_string("operation", &self.operation)?;
        validate_range("vector-precision", self.vector_precision, 0, MAX_PRECISION)?;
        validate_range("annotation-precision", self.annotation_precision, 0, MAX_PRECISION)?;
        validate_positive_finite("axis-limit", self.axis_limit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_original_form() {
        let config = CliConfig::parse_from(["complex-calc"]);
        assert_eq!(config.z1(), ComplexNumber::new(3.0, 2.0));
        assert_eq!(config.z2(), ComplexNumber::new(1.0, 4.0));
        assert_eq!(config.operation(), "Addition");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.display_options(), DisplayOptions::default());
        assert_eq!(config.axis_limit(), 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_operands_and_json_format() {
        let config = CliConfig::parse_from([
            "complex-calc",
            "--z1-re",
            "-1.5",
            "--z2-im",
            "-2",
            "--operation",
            "Modulus (|z1|)",
            "--format",
            "json",
        ]);
        assert_eq!(config.z1(), ComplexNumber::new(-1.5, 2.0));
        assert_eq!(config.z2(), ComplexNumber::new(1.0, -2.0));
        assert_eq!(config.operation(), "Modulus (|z1|)");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = CliConfig::parse_from(["complex-calc"]);
        config.z1_re = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = CliConfig::parse_from(["complex-calc"]);
        config.vector_precision = 40;
        assert!(config.validate().is_err());

        let mut config = CliConfig::parse_from(["complex-calc"]);
        config.axis_limit = 0.0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::parse_from(["complex-calc"]);
        config.operation = "Foo".to_string();
        assert!(config.validate().is_ok());
    }
}
