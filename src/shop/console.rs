//! Line-oriented console over any async reader/writer pair.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Wraps the input and output streams of a session.
///
/// The binary uses stdin/stdout; tests pass byte slices and `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line with surrounding whitespace removed.
    /// Invalid UTF-8 is replaced with U+FFFD so it reaches the caller as ordinary bad input.
    /// Returns `None` once the input is exhausted.
    pub async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Writes `text` followed by a newline.
    pub async fn say(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await
    }

    /// Writes `text` as-is.
    pub async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await
    }

    /// Writes `text` without a newline and flushes so it shows before the read blocks.
    pub async fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    pub async fn flush(&mut self) -> std::io::Result<()> {
        self.output.flush().await
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
