use tracing_subscriber::EnvFilter;

/// Routes library logs to the test harness. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
