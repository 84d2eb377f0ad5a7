use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Level used until the config file has been read.
const BOOT_LEVEL: &str = "warn";

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the stderr subscriber. `RUST_LOG` wins when set; otherwise the
/// returned handle is `Some` and the configured level can be applied later.
pub fn init() -> Option<FilterHandle> {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(BOOT_LEVEL), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    (!from_env).then_some(handle)
}

/// Swap the active filter for `level` (an `EnvFilter` directive).
pub fn apply_log_level(handle: &FilterHandle, level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("invalid log_level {level:?}: {e}"))?;
    handle.modify(|current| *current = filter)?;
    Ok(())
}
