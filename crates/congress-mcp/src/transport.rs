//! Newline-delimited JSON-RPC over a byte stream.
//!
//! Requests are read sequentially and each is handled on its own task, so a
//! slow tool call does not hold up `ping` or `tools/list`. Responses funnel
//! through one writer task; lines never interleave.

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::McpError;
use crate::jsonrpc::{JsonRpcResponse, PARSE_ERROR};
use crate::server::McpServer;

/// Serve requests from stdin, writing responses to stdout.
pub async fn serve_stdio(server: Arc<McpServer>) -> Result<(), McpError> {
    serve(server, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve until `reader` reaches EOF and every in-flight request has answered.
pub async fn serve<R, W>(server: Arc<McpServer>, reader: R, writer: W) -> Result<(), McpError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    // Writer task: drains channel and writes one response per line
    let (write_tx, mut write_rx) = mpsc::channel::<String>(64);
    let writer_handle = tokio::spawn(async move {
        let mut writer = writer;
        while let Some(msg) = write_rx.recv().await {
            if writer.write_all(msg.as_bytes()).await.is_err() {
                break;
            }
            if writer.write_all(b"\n").await.is_err() {
                break;
            }
            if writer.flush().await.is_err() {
                break;
            }
        }
    });

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut in_flight = JoinSet::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        // Invalid UTF-8 is answered like any other unparsable message
        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Non-UTF-8 message: {e}");
                let response = JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                );
                send(&write_tx, &response).await;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let server = Arc::clone(&server);
        let write_tx = write_tx.clone();
        in_flight.spawn(async move {
            if let Some(response) = server.handle_message(&line).await {
                send(&write_tx, &response).await;
            }
        });

        while let Some(done) = in_flight.try_join_next() {
            log_task_result(done);
        }
    }

    tracing::debug!("Input closed; waiting for {} request(s)", in_flight.len());
    while let Some(done) = in_flight.join_next().await {
        log_task_result(done);
    }

    drop(write_tx);
    writer_handle
        .await
        .map_err(|e| McpError::Protocol(format!("Writer task failed: {e}")))
}

async fn send(write_tx: &mpsc::Sender<String>, response: &JsonRpcResponse) {
    match serde_json::to_string(response) {
        Ok(serialized) => {
            if write_tx.send(serialized).await.is_err() {
                tracing::warn!("Writer closed; dropping response {}", response.id);
            }
        }
        Err(e) => tracing::error!("Failed to serialize response: {e}"),
    }
}

fn log_task_result(result: Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        tracing::error!("Request handler failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use congress_api::{ApiClient, ClientConfig};
    use tokio::io::AsyncReadExt;

    fn server() -> Arc<McpServer> {
        let client =
            ApiClient::new(ClientConfig::new("k").with_base_url("http://127.0.0.1:9")).unwrap();
        Arc::new(McpServer::new(Arc::new(client)))
    }

    async fn run(input: &str) -> Vec<Value> {
        run_bytes(input.as_bytes()).await
    }

    async fn run_bytes(input: &[u8]) -> Vec<Value> {
        let (mut client_in, server_in) = tokio::io::duplex(64 * 1024);
        let (server_out, mut client_out) = tokio::io::duplex(4 * 1024 * 1024);

        client_in.write_all(input).await.unwrap();
        drop(client_in);

        serve(server(), server_in, server_out).await.unwrap();

        let mut output = String::new();
        client_out.read_to_string(&mut output).await.unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn answers_each_request_on_its_own_line() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#,
            "\n",
        );
        let responses = run(input).await;
        assert_eq!(responses.len(), 3);

        let mut ids: Vec<i64> = responses.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);

        let tools = responses.iter().find(|r| r["id"] == 3).unwrap();
        assert_eq!(tools["result"]["tools"].as_array().unwrap().len(), 84);
    }

    #[tokio::test]
    async fn malformed_line_does_not_stop_the_loop() {
        let input = "garbage\n{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}\n";
        let responses = run(input).await;
        assert_eq!(responses.len(), 2);
        assert!(
            responses
                .iter()
                .any(|r| r["error"]["code"] == PARSE_ERROR)
        );
        assert!(responses.iter().any(|r| r["id"] == 9));
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_answered_and_loop_continues() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":9,"method":"ping"}"#);
        input.push(b'\n');

        let responses = run_bytes(&input).await;
        assert_eq!(responses.len(), 2);
        let parse_error = responses
            .iter()
            .find(|r| r["error"]["code"] == PARSE_ERROR)
            .unwrap();
        assert_eq!(parse_error["id"], Value::Null);
        let pong = responses.iter().find(|r| r["id"] == 9).unwrap();
        assert_eq!(pong["result"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn last_line_without_newline_is_handled() {
        let responses = run(r#"{"jsonrpc":"2.0","id":4,"method":"ping"}"#).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 4);
    }

    #[tokio::test]
    async fn empty_input_finishes_cleanly() {
        assert!(run("").await.is_empty());
    }
}
