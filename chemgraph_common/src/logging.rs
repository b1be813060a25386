use std::sync::OnceLock;

/// Install a `tracing` subscriber for tests, honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
