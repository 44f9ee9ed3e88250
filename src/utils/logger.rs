use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未設定 RUST_LOG 時使用的過濾規則
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "complex_calc=debug,info"
    } else {
        "complex_calc=info"
    }
}

/// 初始化全域 subscriber；`json` 為 true 時輸出結構化 JSON，否則為精簡文字
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 日誌寫到 stderr，stdout 留給結果輸出
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
