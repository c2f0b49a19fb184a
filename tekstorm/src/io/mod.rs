//! Byte streams over heterogeneous storage.
//!
//! Every storage medium (memory, files, and eventually network or async
//! sources) implements the same [`Stream`] capability set, so callers can stay
//! polymorphic over where the bytes actually live.
//!
//! # Failure model
//!
//! Hard failures are returned as [`StreamError`]. Soft failures are part of the
//! successful return value and must be inspected by the caller:
//!
//! - `read` returns fewer bytes than requested (possibly zero) at end of data
//! - `read_byte` returns `None` at end of data
//! - `write` returns how many bytes were actually accepted
//! - `write_byte` returns `false` when the byte was rejected
//! - `seek` returns the resulting position, unchanged when the seek was rejected
//!
//! # Threading
//!
//! Streams carry no internal locking. Sharing one between threads requires
//! external synchronization by the caller.
//!
//! # Example
//!
//! ```
//! use tekstorm::io::{Capabilities, MemoryStream, SeekOrigin, Stream};
//!
//! let mut source_data = *b"hello";
//! let mut target_data = [0u8; 8];
//!
//! let mut source = MemoryStream::new(&mut source_data, Capabilities::all()).unwrap();
//! let mut target = MemoryStream::new(&mut target_data, Capabilities::all()).unwrap();
//!
//! assert_eq!(source.copy_to(&mut target).unwrap(), 5);
//! target.seek(0, SeekOrigin::Start).unwrap();
//! assert_eq!(target.read_byte().unwrap(), Some(b'h'));
//! ```

mod embedded_io_impl;
mod error;
mod file_stream;
mod memory_stream;

pub use error::StreamError;
pub use file_stream::{FileMode, FileStream};
pub use memory_stream::{Capabilities, MemoryStream};

use crate::log_macros::trace;

/// Reference point for a seek offset.
///
/// The discriminants match the integer encoding used by engine scripts and
/// asset tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SeekOrigin {
    /// Offset from the start of the stream.
    Start = 0,
    /// Offset relative to the current position.
    Current = 1,
    /// Offset counted backwards from the end of the stream.
    ///
    /// `seek(4, SeekOrigin::End)` positions the cursor four bytes before the
    /// end; `seek(0, SeekOrigin::End)` positions it at the end.
    ///
    /// A negative offset targets a position past the end. A memory stream
    /// rejects it, while a file stream follows the operating system and moves
    /// there; a later write then extends the file.
    End = 2,
}

impl TryFrom<u8> for SeekOrigin {
    type Error = StreamError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Start),
            1 => Ok(Self::Current),
            2 => Ok(Self::End),
            _ => Err(StreamError::InvalidSeek),
        }
    }
}

/// The capability set shared by every byte stream.
///
/// The trait is object safe: `copy_to` takes its destination as
/// `&mut dyn Stream` so a memory stream can feed a file stream (or the other
/// way around) without either side knowing the other's type.
pub trait Stream {
    /// Returns whether the underlying resource is valid and usable.
    fn is_open(&self) -> bool;

    /// Flushes pending state and releases the underlying resource.
    ///
    /// After closing, the stream has to be re-opened through the
    /// implementation's own `open` method before it can be used again.
    fn close(&mut self) -> Result<(), StreamError>;

    /// Reads up to `count` bytes into `buffer[offset..offset + count]`.
    ///
    /// Returns the number of bytes transferred. A short count is not an
    /// error, and zero means nothing could be read.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OutOfBounds`] if the range does not fit in
    /// `buffer`.
    fn read(&mut self, buffer: &mut [u8], offset: usize, count: usize) -> Result<usize, StreamError>;

    /// Reads a single byte, or `None` at end of data.
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError>;

    /// Writes up to `count` bytes from `buffer[offset..offset + count]`.
    ///
    /// Returns the number of bytes the stream accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OutOfBounds`] if the range does not fit in
    /// `buffer`.
    fn write(&mut self, buffer: &[u8], offset: usize, count: usize) -> Result<usize, StreamError>;

    /// Writes a single byte. Returns `false` if the stream rejected it.
    fn write_byte(&mut self, value: u8) -> Result<bool, StreamError>;

    /// Moves the cursor relative to `origin` and returns the resulting
    /// position.
    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64, StreamError>;

    /// Forces buffered writes to become visible.
    fn flush(&mut self) -> Result<(), StreamError>;

    /// Copies every remaining byte of this stream into `destination`.
    ///
    /// Returns the number of bytes transferred.
    fn copy_to(&mut self, destination: &mut dyn Stream) -> Result<u64, StreamError> {
        copy_bytes(self, destination, None)
    }

    /// Copies at most `count` bytes of this stream into `destination`.
    ///
    /// Returns the number of bytes transferred.
    fn copy_to_limit(&mut self, destination: &mut dyn Stream, count: u64) -> Result<u64, StreamError> {
        copy_bytes(self, destination, Some(count))
    }
}

/// Byte-at-a-time transfer shared by every `copy_to` implementation.
///
/// Stops at end of data, after `limit` bytes, or when the destination rejects
/// a byte. The limit is checked before reading, so no source byte is consumed
/// past it.
fn copy_bytes<S: Stream + ?Sized>(
    source: &mut S,
    destination: &mut dyn Stream,
    limit: Option<u64>,
) -> Result<u64, StreamError> {
    let mut copied = 0u64;

    while limit.is_none_or(|limit| copied < limit) {
        let Some(byte) = source.read_byte()? else {
            break;
        };
        if !destination.write_byte(byte)? {
            trace!("copy stopped after {} bytes: destination rejected a byte", copied);
            break;
        }
        copied += 1;
    }

    trace!("copied {} bytes", copied);
    Ok(copied)
}

/// Validates that `offset..offset + count` lies inside a buffer of `len` bytes.
pub(crate) fn checked_range(
    len: usize,
    offset: usize,
    count: usize,
) -> Result<core::ops::Range<usize>, StreamError> {
    let end = offset.checked_add(count).ok_or(StreamError::OutOfBounds)?;
    if end > len {
        return Err(StreamError::OutOfBounds);
    }
    Ok(offset..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_origin_from_raw() {
        assert_eq!(SeekOrigin::try_from(0).unwrap(), SeekOrigin::Start);
        assert_eq!(SeekOrigin::try_from(1).unwrap(), SeekOrigin::Current);
        assert_eq!(SeekOrigin::try_from(2).unwrap(), SeekOrigin::End);
        assert!(matches!(SeekOrigin::try_from(3), Err(StreamError::InvalidSeek)));
    }

    #[test]
    fn test_checked_range() {
        assert_eq!(checked_range(8, 2, 4).unwrap(), 2..6);
        assert_eq!(checked_range(8, 8, 0).unwrap(), 8..8);
        assert!(checked_range(8, 6, 4).is_err());
        assert!(checked_range(8, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_copy_between_memory_streams() {
        let mut source_data = [1u8, 2, 3, 4, 5, 6];
        let mut target_data = [0u8; 6];
        {
            let mut source = MemoryStream::new(&mut source_data, Capabilities::all()).unwrap();
            let mut target = MemoryStream::new(&mut target_data, Capabilities::all()).unwrap();

            assert_eq!(source.copy_to_limit(&mut target, 4).unwrap(), 4);
            assert_eq!(source.position(), 4);
            assert_eq!(target.position(), 4);

            assert_eq!(source.copy_to(&mut target).unwrap(), 2);
            assert_eq!(source.read_byte().unwrap(), None);
        }
        assert_eq!(target_data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_copy_stops_when_destination_is_full() {
        let mut source_data = [7u8; 10];
        let mut target_data = [0u8; 3];
        let mut source = MemoryStream::new(&mut source_data, Capabilities::all()).unwrap();
        let mut target = MemoryStream::new(&mut target_data, Capabilities::all()).unwrap();

        assert_eq!(source.copy_to(&mut target).unwrap(), 3);
        assert_eq!(target.remaining(), 0);
    }

    #[test]
    fn test_copy_from_unreadable_stream_is_empty() {
        let mut source_data = [7u8; 4];
        let mut target_data = [0u8; 4];
        let mut source =
            MemoryStream::new(&mut source_data, Capabilities::WRITE | Capabilities::SEEK).unwrap();
        let mut target = MemoryStream::new(&mut target_data, Capabilities::all()).unwrap();

        assert_eq!(source.copy_to(&mut target).unwrap(), 0);
        assert_eq!(target.position(), 0);
    }

    #[test]
    fn test_copy_with_zero_limit_reads_nothing() {
        let mut source_data = [9u8; 4];
        let mut target_data = [0u8; 4];
        let mut source = MemoryStream::new(&mut source_data, Capabilities::all()).unwrap();
        let mut target = MemoryStream::new(&mut target_data, Capabilities::all()).unwrap();

        assert_eq!(source.copy_to_limit(&mut target, 0).unwrap(), 0);
        assert_eq!(source.position(), 0);
    }
}
