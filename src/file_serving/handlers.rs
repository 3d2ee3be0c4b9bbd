use mime_guess::from_path;
use std::fs;
use std::io::{self, Write};
use std::net::TcpStream;
use std::path::Path;
use std::time::Instant;

use crate::config::{ServerConfig, FIXED_HEADERS};
use crate::{log_request, log_response};

use super::spa::resolve_request_path;
use super::{FileResponse, HttpStatus};

/// Build the response for one request path: SPA-resolve it, then read the
/// file behind it. Read failures become their HTTP status here so the
/// connection thread never sees a per-request error.
pub fn build_response(root_dir: &Path, request_path: &str) -> FileResponse {
    let path = resolve_request_path(root_dir, request_path);
    log::debug!("Resolved {} to {}", request_path, path.display());

    if !path.is_file() {
        return FileResponse::plain(HttpStatus::NotFound);
    }

    match fs::read(&path) {
        Ok(content) => FileResponse {
            status: HttpStatus::Ok,
            content,
            mime_type: from_path(&path).first_or_octet_stream().to_string(),
        },
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            log::warn!("Permission denied reading {}", path.display());
            FileResponse::plain(HttpStatus::Forbidden)
        }
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            FileResponse::plain(HttpStatus::InternalServerError)
        }
    }
}

pub fn handle_file_request(
    mut client: TcpStream,
    config: &ServerConfig,
    request_line: &str,
) -> io::Result<()> {
    let started = Instant::now();
    log_request!(request_line);

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let request_path = parts.next().unwrap_or("/");

    let response = match method {
        "GET" | "HEAD" => build_response(&config.root_dir, request_path),
        _ => FileResponse::plain(HttpStatus::NotImplemented),
    };

    write_response(&mut client, &response, method != "HEAD")?;
    log_response!(response.status, started.elapsed(), response.content.len());
    Ok(())
}

/// Write the response head and body. The fixed header set goes out on every
/// response, whatever its status, between the content type and the
/// completion headers.
fn write_response(
    client: &mut TcpStream,
    response: &FileResponse,
    include_body: bool,
) -> io::Result<()> {
    client.write_all(format!("HTTP/1.1 {}\r\n", response.status).as_bytes())?;
    client.write_all(format!("Content-Type: {}\r\n", response.mime_type).as_bytes())?;

    for (name, value) in FIXED_HEADERS {
        client.write_all(format!("{}: {}\r\n", name, value).as_bytes())?;
    }

    client.write_all(format!("Content-Length: {}\r\n", response.content.len()).as_bytes())?;
    client.write_all(b"\r\n")?;

    if include_body {
        client.write_all(&response.content)?;
    }
    Ok(())
}
