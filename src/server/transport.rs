//! # Transports
//!
//! Carries JSON-RPC messages between a client and the handler built by
//! [`McpServer::io_handler`](super::McpServer::io_handler).

use crate::{GameError, GameResult};
use jsonrpc_core::IoHandler;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// Serves newline-delimited JSON-RPC until the reader reaches end of input.
///
/// Each non-blank line is one request. Responses are written one per line;
/// notifications produce no output. A line that is not valid UTF-8 gets a
/// parse error response and the session continues.
pub async fn serve_lines<R, W>(io: &IoHandler, reader: R, mut writer: W) -> GameResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut handled = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                log::trace!("<- {}", line);
                io.handle_request(line).await
            }
            Err(e) => {
                log::warn!("Discarding line that is not valid UTF-8: {}", e);
                Some(parse_error_response()?)
            }
        };

        if let Some(response) = response {
            log::trace!("-> {}", response);
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        handled += 1;
    }

    log::info!("Input closed after {} messages", handled);
    Ok(())
}

/// JSON-RPC parse error with a null id.
fn parse_error_response() -> GameResult<String> {
    let response = jsonrpc_core::Response::from(
        jsonrpc_core::Error::parse_error(),
        Some(jsonrpc_core::Version::V2),
    );
    Ok(serde_json::to_string(&response)?)
}

/// Serves MCP over the process's stdin and stdout.
///
/// Stdout carries protocol traffic only, so logging must go to stderr.
pub async fn serve_stdio(io: IoHandler) -> GameResult<()> {
    log::info!("Serving MCP on stdio");
    serve_lines(&io, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Starts the HTTP transport in the background and returns its handle.
///
/// Must not be called from inside a tokio runtime; the HTTP server runs
/// its own.
#[cfg(feature = "http-transport")]
pub fn start_http(
    io: IoHandler,
    address: std::net::SocketAddr,
    threads: usize,
) -> GameResult<jsonrpc_http_server::Server> {
    let server = jsonrpc_http_server::ServerBuilder::new(io)
        .threads(threads)
        .start_http(&address)
        .map_err(|e| GameError::Transport(format!("cannot bind {}: {}", address, e)))?;

    log::info!("Serving MCP over HTTP on {}", server.address());
    Ok(server)
}

/// Serves MCP as JSON-RPC over HTTP POST, blocking until the server stops.
#[cfg(feature = "http-transport")]
pub fn serve_http(io: IoHandler, address: std::net::SocketAddr, threads: usize) -> GameResult<()> {
    start_http(io, address, threads)?.wait();
    Ok(())
}

/// Fallback when the crate is built without HTTP support.
#[cfg(not(feature = "http-transport"))]
pub fn serve_http(
    _io: IoHandler,
    address: std::net::SocketAddr,
    _threads: usize,
) -> GameResult<()> {
    Err(GameError::Transport(format!(
        "HTTP transport not available for {}; rebuild with --features http-transport",
        address
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameDataClient, McpServer, ToolRegistry};
    use serde_json::Value;

    fn handler() -> IoHandler {
        McpServer::new(ToolRegistry::default(), GameDataClient::default()).io_handler()
    }

    #[tokio::test]
    async fn test_serve_lines_answers_each_request() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );
        let mut output = Vec::new();

        serve_lines(&handler(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let responses: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_serve_lines_reports_parse_errors() {
        let mut output = Vec::new();
        serve_lines(&handler(), "{not json\n".as_bytes(), &mut output)
            .await
            .unwrap();

        let response: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(response["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_serve_lines_survives_invalid_utf8() {
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#);
        input.push(b'\n');
        let mut output = Vec::new();

        serve_lines(&handler(), input.as_slice(), &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let responses: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[1]["id"], 3);
        assert_eq!(responses[1]["result"], serde_json::json!({}));
    }

    #[cfg(feature = "http-transport")]
    fn http_post(address: std::net::SocketAddr, body: &str) -> Value {
        use std::io::{Read, Write};
        use std::time::Duration;

        let mut stream = std::net::TcpStream::connect(address).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        write!(
            stream,
            "POST / HTTP/1.1\r\nHost: {}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            address,
            body.len(),
            body
        )
        .unwrap();

        let mut raw = String::new();
        stream.read_to_string(&mut raw).unwrap();
        assert!(raw.starts_with("HTTP/1.1 200"), "unexpected reply: {}", raw);
        let (_, payload) = raw.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(payload.trim()).unwrap()
    }

    #[cfg(feature = "http-transport")]
    #[test]
    fn test_http_transport_answers_ping() {
        let address: std::net::SocketAddr = "127.0.0.1:0".parse().unwrap();
        let server = start_http(handler(), address, 1).unwrap();

        let response = http_post(
            *server.address(),
            r#"{"jsonrpc":"2.0","id":9,"method":"ping"}"#,
        );
        assert_eq!(response["id"], 9);
        assert_eq!(response["result"], serde_json::json!({}));

        let response = http_post(
            *server.address(),
            r#"{"jsonrpc":"2.0","id":10,"method":"tools/call","params":{"name":"calculate_flee_chance","arguments":{"dexterity":10,"adventurerLevel":5,"beastLevel":5}}}"#,
        );
        assert_eq!(response["result"]["isError"], false);

        server.close();
    }
}
