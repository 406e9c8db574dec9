use std::io;
use std::time::Duration;

use futures::io::{AsyncRead, AsyncReadExt};
use futures::stream::{Stream, TryStreamExt};
use tracing::debug;

use crate::error::FetchError;

/// Read size for each chunk pulled off the log stream.
pub const CHUNK_SIZE: usize = 2000;

/// Pause before retrying a zero-length, non-terminal read.
const EMPTY_READ_BACKOFF: Duration = Duration::from_millis(10);

/// Adapts an async reader into a stream of byte chunks of at most
/// [`CHUNK_SIZE`] bytes. The stream ends when the reader signals exhaustion.
pub fn read_chunks<R>(reader: R) -> impl Stream<Item = io::Result<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    futures::stream::try_unfold(reader, |mut reader| async move {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            return Ok(None);
        }
        buf.truncate(n);
        Ok(Some((buf, reader)))
    })
}

/// Drains a chunk stream into the full log text.
///
/// Chunks are appended strictly in arrival order; none are dropped or
/// duplicated. A zero-length chunk is neither an error nor the end of the
/// stream: the read is retried after a short pause. A mid-stream error
/// discards everything accumulated so far, so callers never observe a
/// partial log.
pub async fn aggregate<S>(stream: S) -> Result<String, FetchError>
where
    S: Stream<Item = io::Result<Vec<u8>>>,
{
    futures::pin_mut!(stream);
    let mut out: Vec<u8> = Vec::new();
    loop {
        match stream.try_next().await.map_err(FetchError::Stream)? {
            Some(chunk) if chunk.is_empty() => {
                debug!("Zero-byte read, retrying");
                tokio::time::sleep(EMPTY_READ_BACKOFF).await;
            }
            Some(chunk) => out.extend_from_slice(&chunk),
            None => break,
        }
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}
