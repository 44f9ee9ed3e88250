use clap::Parser;
use complex_calc::domain::ports::{Presenter, RequestProvider};
use complex_calc::utils::{logger, validation::Validate};
use complex_calc::{
    operations, CalcError, CliConfig, EvaluationOutcome, JsonPresenter, OutputFormat,
    TextPresenter, Visualizer,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::debug!("CLI config: {:?}", config);

    if config.list_operations {
        for spec in operations() {
            println!("{}", spec.name);
        }
        return Ok(());
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let stdout = std::io::stdout().lock();
    let outcome = match config.format {
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
