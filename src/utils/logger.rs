use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("lotto_draw=debug,info")
        } else {
            EnvFilter::new("lotto_draw=info")
        }
    })
}

/// 日誌輸出到 stderr，stdout 只保留回應 JSON
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(default_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json(), // CloudWatch 以 JSON 解析
        )
        .init();
}
