use anyhow::Context;
use clap::Parser;
use complex_calc::config::toml_config::TomlConfig;
use complex_calc::domain::ports::{Presenter, RequestProvider};
use complex_calc::utils::{logger, validation::Validate};
use complex_calc::{
    lookup, CalcError, EvaluationOutcome, JsonPresenter, OutputFormat, TextPresenter, Visualizer,
};

#[derive(Parser)]
#[command(name = "complex-calc-toml")]
#[command(about = "Complex number visualizer driven by a TOML request file")]
struct Args {
    /// Path to TOML request file
    #[arg(short, long, default_value = "complex-calc.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output format from the file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - show the parsed request without evaluating it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_logger(args.verbose, false);

    tracing::info!("📁 Loading request from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load request file '{}'", args.config))?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    tracing::info!("✅ Request loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be evaluated");
        display_request_summary(&config);
        return Ok(());
    }

    let format = args.format.unwrap_or_else(|| config.output_format());
    let stdout = std::io::stdout().lock();
    let outcome = match format {
        OutputFormat::Text => run(TextPresenter::new(stdout), &config),
        OutputFormat::Json => run(JsonPresenter::new(stdout), &config),
    };

    let error = match outcome {
        Ok(EvaluationOutcome::Success { .. }) => return Ok(()),
        Ok(EvaluationOutcome::Failure { reason }) => CalcError::from(reason),
        Err(e) => e,
    };

    tracing::error!(
        "❌ Evaluation failed: {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());

    let exit_code = error.severity().exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn run<P: Presenter, R: RequestProvider>(
    presenter: P,
    request: &R,
) -> complex_calc::Result<EvaluationOutcome> {
    Visualizer::new(presenter).run(request)
}

fn display_request_summary(config: &TomlConfig) {
    let options = config.display_options();
    println!("📋 Request Summary:");
    println!("   Operation: {}", config.operation());
    println!("   z₁: {}", config.z1());
    match lookup(config.operation()) {
        Ok(spec) if spec.uses_z2() => println!("   z₂: {}", config.z2()),
        Ok(_) => println!("   z₂: (unused by this operation)"),
        Err(e) => println!("   ⚠️ {}", e),
    }
    println!(
        "   Precision: {} (vectors), {} (annotations)",
        options.vector_precision, options.annotation_precision
    );
    println!("   Axis limit: ±{}", config.axis_limit());
    println!("   Format: {:?}", config.output_format());
}
