//! End-to-end session tests over in-memory streams.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use call_center::CallCenterDesk;
use call_center_mcp::protocol::{ProtocolHandler, SessionState};
use call_center_mcp::registry::build_registry;
use call_center_mcp::transport::StreamTransport;

fn transport() -> StreamTransport {
    let registry = build_registry(Arc::new(CallCenterDesk::default())).unwrap();
    StreamTransport::new(ProtocolHandler::new(Arc::new(registry)))
}

const INIT: &str =
    r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#;

/// Feed `input` through a fresh session and collect every reply line.
async fn run_session(mut transport: StreamTransport, input: Vec<u8>) -> (StreamTransport, Vec<Value>) {
    let (client, server) = tokio::io::duplex(64 * 1024);
    let (server_read, server_write) = tokio::io::split(server);
    let (client_read, mut client_write) = tokio::io::split(client);

    let session = tokio::spawn(async move {
        transport
            .run(BufReader::new(server_read), server_write)
            .await
            .unwrap();
        transport
    });

    client_write.write_all(&input).await.unwrap();
    client_write.shutdown().await.unwrap();

    let mut replies = Vec::new();
    let mut lines = BufReader::new(client_read).lines();
    while let Some(line) = lines.next_line().await.unwrap() {
        replies.push(serde_json::from_str(&line).unwrap());
    }

    (session.await.unwrap(), replies)
}

#[tokio::test]
async fn test_full_session_over_duplex() {
    let input = format!(
        "{INIT}\n\
         {{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}}\n\
         {{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/list\"}}\n\
         {{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"tools/call\",\"params\":{{\"name\":\"create_ticket\",\"arguments\":{{\"title\":\"A\",\"description\":\"B\"}}}}}}\n"
    );

    let (transport, replies) = run_session(transport(), input.into_bytes()).await;

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["id"], 1);
    assert_eq!(replies[1]["id"], 2);
    assert_eq!(replies[1]["result"]["tools"].as_array().unwrap().len(), 8);
    assert_eq!(replies[2]["id"], 3);
    assert_eq!(
        replies[2]["result"]["content"][0]["text"],
        "Created ticket TICKET-0001"
    );
    assert_eq!(transport.handler().state(), SessionState::Closed);
}

#[tokio::test]
async fn test_garbage_line_does_not_end_session() {
    let input = format!(
        "{INIT}\nthis is not json\n\r\n{{\"jsonrpc\":\"2.0\",\"id\":\"after\",\"method\":\"ping\"}}\r\n"
    );

    let (_, replies) = run_session(transport(), input.into_bytes()).await;

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[1]["id"], Value::Null);
    assert_eq!(replies[1]["error"]["code"], -32700);
    assert_eq!(replies[2]["id"], "after");
    assert_eq!(replies[2]["result"], json!({}));
}

#[tokio::test]
async fn test_invalid_utf8_line_is_parse_error() {
    let mut input = format!("{INIT}\n").into_bytes();
    input.extend_from_slice(&[0xc3, 0x28, b'\n']);
    input.extend_from_slice(b"{\"id\":9,\"method\":\"ping\"}\n");

    let (_, replies) = run_session(transport(), input).await;

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[1]["error"]["code"], -32700);
    assert_eq!(replies[1]["id"], Value::Null);
    assert_eq!(replies[2]["id"], 9);
}

#[tokio::test]
async fn test_oversized_line_is_rejected_and_skipped() {
    let big = format!(
        "{{\"id\":2,\"method\":\"ping\",\"params\":{{\"pad\":\"{}\"}}}}",
        "x".repeat(4096)
    );
    let input = format!("{INIT}\n{big}\n{{\"id\":3,\"method\":\"ping\"}}\n");

    let transport = transport().with_max_frame_bytes(1024);
    let (_, replies) = run_session(transport, input.into_bytes()).await;

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[1]["error"]["code"], -32801);
    assert_eq!(replies[1]["id"], Value::Null);
    assert_eq!(replies[2]["id"], 3);
}

#[tokio::test]
async fn test_request_before_initialize_over_stream() {
    let input = b"{\"id\":1,\"method\":\"tools/list\"}\n".to_vec();
    let (_, replies) = run_session(transport(), input).await;

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["error"]["code"], -32002);
    assert_eq!(replies[0]["id"], 1);
}

#[tokio::test]
async fn test_blank_lines_and_notifications_write_nothing() {
    let reader = tokio_test::io::Builder::new()
        .read(b"\n   \n\r\n")
        .read(b"{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n")
        .build();
    let writer = tokio_test::io::Builder::new().build();

    let mut transport = transport();
    transport.run(BufReader::new(reader), writer).await.unwrap();
    assert_eq!(transport.handler().state(), SessionState::Closed);
}

#[tokio::test]
async fn test_reply_written_through_mock() {
    let reader = tokio_test::io::Builder::new()
        .read(b"{\"id\":1,\"method\":\"ping\"}\n")
        .build();
    let expected = concat!(
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32002,"message":"Server not initialized: ping received before initialize"}}"#,
        "\n"
    );
    let writer = tokio_test::io::Builder::new()
        .write(expected.as_bytes())
        .build();

    let mut transport = transport();
    transport.run(BufReader::new(reader), writer).await.unwrap();
}
