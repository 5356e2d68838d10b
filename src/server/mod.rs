use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

use crate::battle::DamageRng;
use crate::config::Config;
use crate::history::{FileHistory, HistorySink};
use crate::session::Session;

pub mod api;
pub mod page;
pub mod routes;

/// Upper bound on a buffered request, headers and body together.
pub const MAX_REQUEST_BYTES: usize = 16_384;
const READ_TIMEOUT: Duration = Duration::from_secs(5);

pub fn run_server(config: &Config) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.bind_addr)?;
    let history = FileHistory::new(&config.history_path);
    tracing::info!(
        addr = %config.bind_addr,
        history = %history.path().display(),
        "heroes-vs server listening on http://{}",
        config.bind_addr
    );
    let mut session = Session::new(history, config.rng());
    serve(&listener, &mut session);
    Ok(())
}

/// Serves one connection at a time, so at most one round is ever being resolved.
pub fn serve<H: HistorySink, R: DamageRng>(listener: &TcpListener, session: &mut Session<H, R>) {
    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(session, &mut stream) {
                    tracing::warn!(%err, "request error");
                }
            }
            Err(err) => tracing::warn!(%err, "connection failed"),
        }
    }
}

fn handle_connection<H: HistorySink, R: DamageRng>(
    session: &mut Session<H, R>,
    stream: &mut TcpStream,
) -> std::io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    let buffer = read_request(stream)?;
    if buffer.is_empty() {
        return Ok(());
    }

    let header_end = header_end(&buffer).unwrap_or(buffer.len());
    let head = String::from_utf8_lossy(&buffer[..header_end]);
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");

    let body_end = content_length(&head)
        .map(|len| (header_end + len).min(buffer.len()))
        .unwrap_or(buffer.len());
    let body = String::from_utf8_lossy(&buffer[header_end..body_end]);

    let response = routes::route_request(session, method, path, &body);
    tracing::debug!(method, path, status = response.status_code, "request served");
    stream.write_all(response.to_http_string().as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Reads until the headers and `Content-Length` body bytes are buffered, the peer
/// closes, or [`MAX_REQUEST_BYTES`] is reached.
fn read_request<S: Read>(stream: &mut S) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 4_096];
    loop {
        let bytes_read = stream.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..bytes_read]);

        if let Some(end) = header_end(&buffer) {
            let body_len = content_length(&String::from_utf8_lossy(&buffer[..end])).unwrap_or(0);
            if buffer.len() >= end + body_len {
                break;
            }
        }
        if buffer.len() >= MAX_REQUEST_BYTES {
            buffer.truncate(MAX_REQUEST_BYTES);
            break;
        }
    }
    Ok(buffer)
}

/// Offset of the first body byte, just past the blank line ending the headers.
fn header_end(buffer: &[u8]) -> Option<usize> {
    let crlf = buffer
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|i| i + 4);
    crlf.or_else(|| buffer.windows(2).position(|w| w == b"\n\n").map(|i| i + 2))
}

fn content_length(head: &str) -> Option<usize> {
    head.lines().skip(1).find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}
