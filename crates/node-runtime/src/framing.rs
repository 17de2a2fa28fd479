//! # Frame Codec
//!
//! ```text
//! ┌──────────┬─────────────────┬──────────────┐
//! │ tag (u8) │ length (u32 BE) │ body         │
//! └──────────┴─────────────────┴──────────────┘
//! ```
//!
//! Tags are `MessageType::tag` values. Unknown tags still parse as frames so
//! one bad frame does not desynchronize the stream; they are rejected when
//! the frame is processed.
//!
//! Frames are read incrementally. Each body is bounded before it is read, and
//! the whole stream is bounded by a total input limit.

use std::io::{self, BufReader, Read};
use thiserror::Error;

const HEADER_LEN: usize = 5;

/// One framed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tag: u8,
    pub body: Vec<u8>,
}

impl Frame {
    pub fn new(tag: u8, body: Vec<u8>) -> Self {
        Self { tag, body }
    }

    /// Encode with the frame header.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FrameError> {
        let len = u32::try_from(self.body.len()).map_err(|_| FrameError::TooLarge {
            offset: 0,
            len: u64::try_from(self.body.len()).unwrap_or(u64::MAX),
            limit: u32::MAX,
        })?;

        let mut out = Vec::with_capacity(HEADER_LEN + self.body.len());
        out.push(self.tag);
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&self.body);
        Ok(out)
    }
}

/// Stream-level framing failures. Any of these ends the stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("Truncated frame header at offset {offset}")]
    TruncatedHeader { offset: usize },

    #[error("Frame at offset {offset} declares {declared} bytes, only {available} remain")]
    TruncatedBody {
        offset: usize,
        declared: u32,
        available: usize,
    },

    #[error("Frame at offset {offset} is {len} bytes, limit is {limit}")]
    TooLarge { offset: usize, len: u64, limit: u32 },

    #[error("Frame at offset {offset} runs past the {limit} byte input limit")]
    InputTooLarge { offset: usize, limit: u64 },

    #[error("Failed to read frame stream: {0}")]
    Io(String),
}

/// Split `input` into frames, refusing any body longer than `max_frame_bytes`.
pub fn parse_frames(input: &[u8], max_frame_bytes: u32) -> Result<Vec<Frame>, FrameError> {
    read_frames(input, max_frame_bytes, u64::MAX)
}

/// Read frames from `reader` until EOF.
///
/// A body longer than `max_frame_bytes` is refused from its header alone. A
/// frame ending past `max_input_bytes` of total input is refused the same way.
pub fn read_frames<R: Read>(
    reader: R,
    max_frame_bytes: u32,
    max_input_bytes: u64,
) -> Result<Vec<Frame>, FrameError> {
    let mut reader = BufReader::new(reader);
    let mut frames = Vec::new();
    let mut offset = 0usize;

    while let Some(header) = read_header(&mut reader, offset)? {
        let tag = header[0];
        let len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]);

        if len > max_frame_bytes {
            return Err(FrameError::TooLarge {
                offset,
                len: u64::from(len),
                limit: max_frame_bytes,
            });
        }
        let end = offset as u64 + HEADER_LEN as u64 + u64::from(len);
        if end > max_input_bytes {
            return Err(FrameError::InputTooLarge {
                offset,
                limit: max_input_bytes,
            });
        }

        let mut body = Vec::new();
        (&mut reader)
            .take(u64::from(len))
            .read_to_end(&mut body)
            .map_err(|err| FrameError::Io(err.to_string()))?;
        if body.len() < len as usize {
            return Err(FrameError::TruncatedBody {
                offset,
                declared: len,
                available: body.len(),
            });
        }

        frames.push(Frame::new(tag, body));
        offset += HEADER_LEN + len as usize;
    }

    Ok(frames)
}

/// `None` on a clean EOF at a frame boundary.
fn read_header<R: Read>(
    reader: &mut R,
    offset: usize,
) -> Result<Option<[u8; HEADER_LEN]>, FrameError> {
    let mut header = [0u8; HEADER_LEN];
    let mut filled = 0;

    while filled < HEADER_LEN {
        match reader.read(&mut header[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(FrameError::TruncatedHeader { offset }),
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(FrameError::Io(err.to_string())),
        }
    }

    Ok(Some(header))
}
