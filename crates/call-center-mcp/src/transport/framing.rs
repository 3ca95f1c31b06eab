//! Message framing for newline-delimited JSON.

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::types::{JsonRpcMessage, McpError, McpResult};

/// Outcome of reading one frame from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// A complete line is in the buffer, terminator included if one was read.
    Line,
    /// The line exceeded the limit and was discarded. Carries its full length.
    Oversized(usize),
    Eof,
}

/// Parse a single line of text as a JSON-RPC message.
pub fn parse_message(line: &str) -> McpResult<JsonRpcMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(McpError::ParseError("Empty message".to_string()));
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| McpError::ParseError(e.to_string()))?;
    JsonRpcMessage::from_value(value)
}

/// Decode raw frame bytes. Blank lines yield `None`.
pub fn decode_line(bytes: &[u8]) -> McpResult<Option<JsonRpcMessage>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| McpError::ParseError(format!("Invalid UTF-8: {e}")))?;

    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_message(text).map(Some)
}

/// Serialize a value to a JSON line (with trailing newline).
pub fn frame_message(value: &impl Serialize) -> McpResult<String> {
    let mut json = serde_json::to_string(value)?;
    json.push('\n');
    Ok(json)
}

/// Read the next newline-terminated frame into `buf`, holding at most
/// `max_bytes` of payload in memory.
///
/// A trailing line without a terminator is still returned as a frame.
pub async fn read_frame<R>(
    reader: &mut R,
    max_bytes: usize,
    buf: &mut Vec<u8>,
) -> std::io::Result<Frame>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let limit = max_bytes.saturating_add(1) as u64;
    let read = (&mut *reader).take(limit).read_until(b'\n', buf).await?;

    if read == 0 {
        return Ok(Frame::Eof);
    }
    if buf.ends_with(b"\n") || buf.len() <= max_bytes {
        return Ok(Frame::Line);
    }

    let skipped = discard_line(reader).await?;
    let size = buf.len() + skipped;
    buf.clear();
    Ok(Frame::Oversized(size))
}

/// Skip input up to and including the next newline. Returns the number of
/// payload bytes skipped.
async fn discard_line<R>(reader: &mut R) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut skipped = 0;
    loop {
        let available = reader.fill_buf().await?;
        let len = available.len();
        if len == 0 {
            return Ok(skipped);
        }

        match available.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(skipped + pos);
            }
            None => {
                reader.consume(len);
                skipped += len;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_message("not json").unwrap_err();
        assert_eq!(err.code(), -32700);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_message("[1,2,3]").unwrap_err();
        assert_eq!(err.code(), -32600);
    }

    #[test]
    fn test_decode_tolerates_crlf_and_blank() {
        assert!(decode_line(b"   \r\n").unwrap().is_none());
        let msg = decode_line(b"{\"id\":1,\"method\":\"ping\"}\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(msg.method(), "ping");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_line(&[0xff, 0xfe, b'\n']).unwrap_err();
        assert_eq!(err.code(), -32700);
    }

    #[test]
    fn test_frame_appends_newline() {
        let framed = frame_message(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(framed, "{\"a\":1}\n");
    }

    #[tokio::test]
    async fn test_read_frame_splits_lines() {
        let mut input: &[u8] = b"one\ntwo";
        let mut buf = Vec::new();

        assert_eq!(read_frame(&mut input, 64, &mut buf).await.unwrap(), Frame::Line);
        assert_eq!(buf, b"one\n");
        assert_eq!(read_frame(&mut input, 64, &mut buf).await.unwrap(), Frame::Line);
        assert_eq!(buf, b"two");
        assert_eq!(read_frame(&mut input, 64, &mut buf).await.unwrap(), Frame::Eof);
    }

    #[tokio::test]
    async fn test_read_frame_discards_oversized_line() {
        let mut input: &[u8] = b"0123456789abcdef\nok\n";
        let mut buf = Vec::new();

        assert_eq!(
            read_frame(&mut input, 8, &mut buf).await.unwrap(),
            Frame::Oversized(16)
        );
        assert!(buf.is_empty());
        assert_eq!(read_frame(&mut input, 8, &mut buf).await.unwrap(), Frame::Line);
        assert_eq!(buf, b"ok\n");
    }

    #[tokio::test]
    async fn test_line_at_limit_is_accepted() {
        let mut input: &[u8] = b"12345678\n";
        let mut buf = Vec::new();
        assert_eq!(read_frame(&mut input, 8, &mut buf).await.unwrap(), Frame::Line);
        assert_eq!(buf.len(), 9);
    }
}
