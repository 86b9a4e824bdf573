//! Logging setup for hosts that do not install their own logger.
//!
//! The crate only talks to the `log` facade. With the `debug` feature
//! enabled, [`init`] installs `env_logger`, configured through `RUST_LOG`.

/// Installs `env_logger` once. Later calls, or a host that already set a
/// logger, are left alone. Returns `true` if this call installed it.
#[cfg(feature = "debug")]
pub fn init() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "debug"))]
pub fn init() -> bool {
    false
}
