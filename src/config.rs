use std::env;
use std::io;
use std::path::PathBuf;

use crate::args::Args;

/// Headers attached to every response, in this order: cache disabling for
/// development reloads, then permissive CORS for cross-origin app testing.
pub const FIXED_HEADERS: [(&str, &str); 6] = [
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Immutable configuration captured once at startup and shared by reference
/// with every connection thread.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub root_dir: PathBuf,
}

impl ServerConfig {
    /// The document root is the working directory at process start.
    pub fn from_args(args: &Args) -> io::Result<Self> {
        Ok(Self {
            port: args.resolve_port(),
            root_dir: env::current_dir()?,
        })
    }
}
