use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::state::SharedState;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn bytes_response(status: u16, content_type: &[u8], bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![Header::from_bytes(b"Content-Type", content_type).unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, b"text/html; charset=utf-8", body.into_bytes())
}

pub fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, b"application/json", body.into_bytes())
}

pub fn png_response(bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, b"image/png", bytes)
}

pub fn redirect(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(303),
        vec![
            Header::from_bytes(b"Location", location.as_bytes()).unwrap(),
            Header::from_bytes(b"Content-Length", b"0").unwrap(),
        ],
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    bytes_response(404, b"text/plain", b"404 Not Found".to_vec())
}

pub fn server_error(msg: &str) -> Response<Cursor<Vec<u8>>> {
    bytes_response(500, b"text/plain; charset=utf-8", format!("500 Internal Server Error: {}", msg).into_bytes())
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Extracts `N` from `/samples/N.png`.
fn sample_index(path: &str) -> Option<&str> {
    path.strip_prefix("/samples/")
        .and_then(|s| s.strip_suffix(".png"))
        .filter(|s| !s.is_empty())
}

/// Dispatches incoming requests to the appropriate handler.
pub fn dispatch(request: Request, state: SharedState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let path   = url.split('?').next().unwrap_or("").to_owned();

    log::debug!("{} {}", method, url);

    let response = if method != Method::Get {
        not_found()
    } else if let Some(index) = sample_index(&path) {
        handlers::samples::handle_get(index, state)
    } else {
        match path.as_str() {
            "/"             => redirect("/grid"),
            "/grid"         => handlers::gallery::handle_get(state),
            "/grid.png"     => handlers::gallery::handle_png(state),
            "/summary.json" => handlers::summary::handle_get(state),
            _               => not_found(),
        }
    };

    if let Err(e) = request.respond(response) {
        log::warn!("Failed to send response for {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_paths_parse() {
        assert_eq!(sample_index("/samples/42.png"), Some("42"));
        assert_eq!(sample_index("/samples/.png"), None);
        assert_eq!(sample_index("/samples/42.jpg"), None);
        assert_eq!(sample_index("/grid.png"), None);
    }
}
