//! Session loop over any buffered reader / writer pair.

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::config::DEFAULT_MAX_LINE_BYTES;
use crate::protocol::ProtocolHandler;
use crate::types::{JsonRpcReply, McpError, McpResult, RequestId};

use super::framing::{self, Frame};

/// Runs one session: read a frame, dispatch it, write the reply, repeat.
///
/// The loop ends only at end of input or on an I/O error. Decode failures
/// and handler faults are answered on the wire and the loop carries on.
pub struct StreamTransport {
    handler: ProtocolHandler,
    max_frame_bytes: usize,
}

impl StreamTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            handler,
            max_frame_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }

    pub fn with_max_frame_bytes(mut self, max_frame_bytes: usize) -> Self {
        self.max_frame_bytes = max_frame_bytes;
        self
    }

    pub fn handler(&self) -> &ProtocolHandler {
        &self.handler
    }

    /// Serve the session until the reader is exhausted.
    ///
    /// Both halves are owned by the call. On every return path the session is
    /// closed and the writer is shut down; dropping the future drops both.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(
            "Session started (max frame {} bytes)",
            self.max_frame_bytes
        );

        let served = self.serve(&mut reader, &mut writer).await;
        self.handler.close();
        drop(reader);

        let shutdown = writer.shutdown().await;
        if let Err(e) = &served {
            tracing::error!("Session ended with error: {e}");
        }
        served.and_then(|()| shutdown.map_err(McpError::Io))
    }

    async fn serve<R, W>(&mut self, reader: &mut R, writer: &mut W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            let reply = match framing::read_frame(reader, self.max_frame_bytes, &mut buf).await? {
                Frame::Eof => {
                    tracing::info!("End of input, shutting down");
                    return Ok(());
                }
                Frame::Oversized(size) => {
                    let err = McpError::ContentTooLarge {
                        size,
                        max: self.max_frame_bytes,
                    };
                    tracing::warn!("{err}");
                    Some(JsonRpcReply::Error(err.to_json_rpc_error(RequestId::Null)))
                }
                Frame::Line => match framing::decode_line(&buf) {
                    Ok(None) => continue,
                    Ok(Some(msg)) => self.handler.handle_message(msg),
                    Err(e) => {
                        tracing::warn!("Undecodable message: {e}");
                        Some(JsonRpcReply::Error(e.to_json_rpc_error(RequestId::Null)))
                    }
                },
            };

            if let Some(reply) = reply {
                let framed = framing::frame_message(&reply)?;
                writer.write_all(framed.as_bytes()).await?;
                writer.flush().await?;
            }
        }
    }
}
