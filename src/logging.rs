use std::{any::Any, backtrace::Backtrace, panic::PanicHookInfo};

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber and a panic hook that reports through it.
///
/// `RUST_LOG` takes precedence over `default_filter` (`logging.rust_log`).
pub fn init_tracing(default_filter: &str) {
    fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(false)
        .init();
    std::panic::set_hook(Box::new(log_panic));
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let message = panic_message(info.payload());
    let backtrace = Backtrace::capture();
    match info.location() {
        Some(location) => tracing::error!(
            panic = %message,
            location = %location,
            backtrace = %backtrace,
            "panic"
        ),
        None => tracing::error!(panic = %message, backtrace = %backtrace, "panic"),
    }
}

/// Text of a panic payload; `panic!` produces either `&str` or `String`.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
