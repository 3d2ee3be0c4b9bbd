pub mod handlers;
mod path_utils;
pub mod spa;

use std::fmt;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum HttpStatus {
    Ok,
    Forbidden,
    NotFound,
    InternalServerError,
    NotImplemented,
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented",
        }
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A fully materialized response body, ready to be written to the socket.
pub struct FileResponse {
    pub status: HttpStatus,
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl FileResponse {
    /// Plain-text response used for every non-200 outcome.
    pub fn plain(status: HttpStatus) -> Self {
        Self {
            status,
            content: status.reason().as_bytes().to_vec(),
            mime_type: "text/plain".to_string(),
        }
    }
}
