use clap::Parser;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TCP port to listen on
    #[arg(value_name = "PORT")]
    pub port: Option<String>,
}

impl Args {
    /// A value that does not parse as a port warns and falls back to the
    /// default instead of aborting startup.
    pub fn resolve_port(&self) -> u16 {
        match self.port.as_deref() {
            Some(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    println!(
                        "❌ Invalid port number. Using default port {}.",
                        DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(port: Option<&str>) -> Args {
        Args {
            port: port.map(str::to_string),
        }
    }

    #[test]
    fn valid_port_is_used() {
        assert_eq!(args_with(Some("8080")).resolve_port(), 8080);
    }

    #[test]
    fn missing_port_uses_default() {
        assert_eq!(args_with(None).resolve_port(), DEFAULT_PORT);
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        assert_eq!(args_with(Some("abc")).resolve_port(), DEFAULT_PORT);
    }

    #[test]
    fn out_of_range_port_falls_back_to_default() {
        assert_eq!(args_with(Some("65536")).resolve_port(), DEFAULT_PORT);
        assert_eq!(args_with(Some("-1")).resolve_port(), DEFAULT_PORT);
    }
}
