use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::time::SystemTime;

/// Install the global logger: `info` by default, overridable through
/// `RUST_LOG`, with colored levels only when stderr is a terminal.
pub fn setup_logging() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let timestamp = humantime::format_rfc3339_millis(SystemTime::now());
            let level = record.level();

            if atty::is(atty::Stream::Stderr) {
                let level_color = match level {
                    log::Level::Error => "\x1B[31m", // Red
                    log::Level::Warn => "\x1B[33m",  // Yellow
                    log::Level::Info => "\x1B[32m",  // Green
                    log::Level::Debug => "\x1B[36m", // Cyan
                    log::Level::Trace => "\x1B[35m", // Magenta
                };
                writeln!(
                    buf,
                    "{}{:>5}\x1B[0m [{}] {}",
                    level_color,
                    level,
                    timestamp,
                    record.args()
                )
            } else {
                writeln!(buf, "{:>5} [{}] {}", level, timestamp, record.args())
            }
        })
        .init();
}

#[macro_export]
macro_rules! log_request {
    ($request:expr) => {{
        let parts: Vec<&str> = $request.trim().split_whitespace().collect();
        if parts.len() >= 2 {
            log::info!("→ {} {}", parts[0], parts[1])
        } else {
            log::info!("→ Invalid request format: {}", $request.trim())
        }
    }};
}

#[macro_export]
macro_rules! log_response {
    ($status:expr, $duration:expr, $size:expr) => {
        log::info!("← {} ({:?}) - {} bytes", $status, $duration, $size)
    };
}

#[macro_export]
macro_rules! log_error {
    ($error:expr, $context:expr) => {
        log::error!("❌ {} - {}", $context, $error)
    };
}
