//! Fixed-capacity stream over a caller-owned buffer.

use bitflags::bitflags;

use super::{SeekOrigin, Stream, StreamError, checked_range};
use crate::log_macros::{debug, trace};

bitflags! {
    /// Operations a [`MemoryStream`] permits, fixed when it is opened.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// The cursor may be moved with `seek`.
        const SEEK = 0x01;
        /// Bytes may be read.
        const READ = 0x02;
        /// Bytes may be written.
        const WRITE = 0x04;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}

/// A stream over a borrowed, fixed-size memory region.
///
/// The stream never owns its buffer: the borrow guarantees the region outlives
/// the stream, and closing the stream only gives the borrow back. The buffer is
/// never grown; reads stop and writes are truncated at its end.
///
/// The cursor always satisfies `0 <= position <= len`.
///
/// # Examples
///
/// ```
/// use tekstorm::io::{Capabilities, MemoryStream, SeekOrigin, Stream};
///
/// let mut backing = [0u8; 16];
/// let mut stream = MemoryStream::new(&mut backing, Capabilities::all()).unwrap();
///
/// stream.write(b"engine", 0, 6).unwrap();
/// stream.seek(0, SeekOrigin::Start).unwrap();
///
/// let mut out = [0u8; 6];
/// assert_eq!(stream.read(&mut out, 0, 6).unwrap(), 6);
/// assert_eq!(&out, b"engine");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStream<'a> {
    buffer: Option<&'a mut [u8]>,
    position: usize,
    capabilities: Capabilities,
}

impl<'a> MemoryStream<'a> {
    /// Create an open stream over `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidBuffer`] if `buffer` is empty.
    pub fn new(buffer: &'a mut [u8], capabilities: Capabilities) -> Result<Self, StreamError> {
        let mut stream = Self::default();
        stream.open(buffer, capabilities)?;
        Ok(stream)
    }

    /// Re-initialize this stream over a new buffer.
    ///
    /// Any previously held buffer is released first. The cursor starts at 0.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidBuffer`] if `buffer` is empty; the stream
    /// is left unchanged in that case.
    pub fn open(&mut self, buffer: &'a mut [u8], capabilities: Capabilities) -> Result<(), StreamError> {
        if buffer.is_empty() {
            return Err(StreamError::InvalidBuffer);
        }

        debug!(
            "memory stream opened over {} bytes ({:?})",
            buffer.len(),
            capabilities
        );
        self.buffer = Some(buffer);
        self.position = 0;
        self.capabilities = capabilities;
        Ok(())
    }

    /// Current cursor position in bytes from the start.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Size of the underlying buffer, or 0 when closed.
    pub fn len(&self) -> usize {
        self.buffer.as_deref().map_or(0, <[u8]>::len)
    }

    /// Returns `true` when the stream has no bytes at all (only when closed).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.len() - self.position
    }

    /// The operations this stream permits.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether `read` and `read_byte` are permitted.
    pub fn can_read(&self) -> bool {
        self.capabilities.contains(Capabilities::READ)
    }

    /// Whether `write` and `write_byte` are permitted.
    pub fn can_write(&self) -> bool {
        self.capabilities.contains(Capabilities::WRITE)
    }

    /// Whether `seek` is permitted.
    pub fn can_seek(&self) -> bool {
        self.capabilities.contains(Capabilities::SEEK)
    }

    /// Resolve a seek request to an absolute position, or `None` if it falls
    /// outside `[0, len]`.
    pub(crate) fn resolve_seek(&self, offset: i64, origin: SeekOrigin) -> Option<usize> {
        let size = i64::try_from(self.len()).ok()?;
        let target = match origin {
            SeekOrigin::Start => offset,
            SeekOrigin::Current => i64::try_from(self.position).ok()?.checked_add(offset)?,
            SeekOrigin::End => size.checked_sub(offset)?,
        };

        if (0..=size).contains(&target) {
            usize::try_from(target).ok()
        } else {
            None
        }
    }
}

impl Stream for MemoryStream<'_> {
    fn is_open(&self) -> bool {
        self.buffer.is_some()
    }

    fn close(&mut self) -> Result<(), StreamError> {
        if self.buffer.take().is_some() {
            debug!("memory stream closed");
        }
        self.position = 0;
        self.capabilities = Capabilities::empty();
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8], offset: usize, count: usize) -> Result<usize, StreamError> {
        let range = checked_range(buffer.len(), offset, count)?;
        if !self.can_read() {
            return Ok(0);
        }
        let Some(source) = self.buffer.as_deref() else {
            return Ok(0);
        };

        let to_read = count.min(source.len().saturating_sub(self.position));
        if to_read > 0 {
            buffer[range.start..range.start + to_read]
                .copy_from_slice(&source[self.position..self.position + to_read]);
            self.position += to_read;
        }

        Ok(to_read)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        if !self.can_read() {
            return Ok(None);
        }
        let Some(source) = self.buffer.as_deref() else {
            return Ok(None);
        };

        match source.get(self.position) {
            Some(&byte) => {
                self.position += 1;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }

    fn write(&mut self, buffer: &[u8], offset: usize, count: usize) -> Result<usize, StreamError> {
        let range = checked_range(buffer.len(), offset, count)?;
        if !self.can_write() {
            return Ok(0);
        }
        let position = self.position;
        let Some(target) = self.buffer.as_deref_mut() else {
            return Ok(0);
        };

        let to_write = count.min(target.len().saturating_sub(position));
        if to_write < count {
            trace!(
                "memory stream write truncated: {} of {} bytes fit",
                to_write,
                count
            );
        }
        if to_write > 0 {
            target[position..position + to_write]
                .copy_from_slice(&buffer[range.start..range.start + to_write]);
            self.position += to_write;
        }

        Ok(to_write)
    }

    fn write_byte(&mut self, value: u8) -> Result<bool, StreamError> {
        if !self.can_write() {
            return Ok(false);
        }
        let position = self.position;
        let Some(slot) = self
            .buffer
            .as_deref_mut()
            .and_then(|target| target.get_mut(position))
        else {
            return Ok(false);
        };

        *slot = value;
        self.position += 1;
        Ok(true)
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64, StreamError> {
        if self.can_seek() {
            match self.resolve_seek(offset, origin) {
                Some(target) => self.position = target,
                None => trace!("memory stream seek rejected: {} from {:?}", offset, origin),
            }
        }
        Ok(self.position as u64)
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        // Writes land in the buffer directly, nothing is queued.
        Ok(())
    }
}
