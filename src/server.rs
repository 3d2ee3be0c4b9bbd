use log::{debug, info};
use std::io::{self, BufRead, BufReader};
use std::net::{TcpListener, TcpStream};
use std::process;
use std::sync::Arc;
use std::thread;

use crate::config::ServerConfig;
use crate::file_serving::handlers::handle_file_request;
use crate::log_error;

pub fn start_server(config: ServerConfig) -> io::Result<()> {
    let listener = match TcpListener::bind(("0.0.0.0", config.port)) {
        Ok(listener) => listener,
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            println!(
                "❌ Port {} is already in use. Try a different port.",
                config.port
            );
            println!(
                "💡 You can specify a different port: pwadev {}",
                config.port.saturating_add(1)
            );
            return Err(e);
        }
        Err(e) => {
            println!("❌ Error starting server: {}", e);
            return Err(e);
        }
    };

    print_banner(&config);
    install_interrupt_handler();

    let config = Arc::new(config);
    for stream in listener.incoming() {
        let stream = stream?;
        let config = Arc::clone(&config);

        thread::spawn(move || {
            if let Err(e) = handle_connection(stream, &config) {
                log_error!(e, "Connection handling failed");
            }
        });
    }

    Ok(())
}

fn handle_connection(client: TcpStream, config: &ServerConfig) -> io::Result<()> {
    info!("New connection received");

    let mut buf_reader = BufReader::new(&client);
    let mut request_line = String::new();
    buf_reader.read_line(&mut request_line)?;
    if request_line.trim().is_empty() {
        // Connection closed before sending a request.
        return Ok(());
    }

    // Drain the header block; nothing in it affects how a file is served.
    let mut line = String::new();
    while {
        line.clear();
        buf_reader.read_line(&mut line)?;
        !line.trim().is_empty()
    } {
        debug!("Header line: {}", line.trim());
    }

    handle_file_request(client, config, &request_line)
}

fn print_banner(config: &ServerConfig) {
    println!("🚀 Expense Tracker PWA Server");
    println!("📱 Server running at: http://localhost:{}", config.port);
    println!("🌐 Access the app at: http://localhost:{}", config.port);
    println!("📋 Features available:");
    println!("   - PWA Installation");
    println!("   - Offline Support");
    println!("   - Camera Integration");
    println!("   - Geolocation");
    println!("   - Responsive Design");
    println!();
    println!("💡 For PWA features, use HTTPS in production");
    println!("🛑 Press Ctrl+C to stop the server");
}

/// Ctrl-C ends the accept loop immediately; in-flight responses are
/// abandoned rather than drained.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        println!("\n🛑 Server stopped by user");
        process::exit(0);
    });
    if let Err(e) = result {
        log_error!(e, "Failed to install Ctrl-C handler");
    }
}
