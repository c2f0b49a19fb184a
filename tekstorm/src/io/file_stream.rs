//! Stream over a native file handle.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use bitflags::bitflags;

use super::{SeekOrigin, Stream, StreamError, checked_range};
use crate::log_macros::{debug, log_warn, trace};

bitflags! {
    /// How a [`FileStream`] opens its file.
    ///
    /// The bit values match the integer mode encoding used by engine scripts,
    /// see [`FileMode::from_raw`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileMode: u32 {
        /// Read access.
        const READ = 0x01;
        /// Write access. Without `APPEND` the file is created or truncated.
        const WRITE = 0x02;
        /// Writes go to the end of the file, which is created if missing.
        ///
        /// Combined with both `READ` and `WRITE` the file must not exist yet.
        const APPEND = 0x04;
        /// Binary mode. Every Rust target already reads and writes files
        /// byte for byte, so this bit does not change the access pattern.
        const BINARY = 0x08;
    }
}

impl FileMode {
    /// Decode an integer mode.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidMode`] if `bits` contains unknown bits or
    /// no access bit (`READ`, `WRITE` or `APPEND`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tekstorm::io::FileMode;
    ///
    /// let mode = FileMode::from_raw(0x09).unwrap();
    /// assert_eq!(mode, FileMode::READ | FileMode::BINARY);
    /// assert!(FileMode::from_raw(0x08).is_err());
    /// ```
    pub fn from_raw(bits: u32) -> Result<Self, StreamError> {
        let mode = Self::from_bits(bits).ok_or(StreamError::InvalidMode(bits))?;
        mode.open_options()?;
        Ok(mode)
    }

    /// Resolve this mode to the equivalent `OpenOptions`.
    fn open_options(self) -> Result<OpenOptions, StreamError> {
        let read = self.contains(Self::READ);
        let write = self.contains(Self::WRITE);
        let append = self.contains(Self::APPEND);

        let mut options = OpenOptions::new();
        match (read, write, append) {
            (true, false, false) => {
                options.read(true);
            }
            (false, true, false) => {
                options.write(true).create(true).truncate(true);
            }
            (true, true, false) => {
                options.read(true).write(true);
            }
            (false, _, true) => {
                options.append(true).create(true);
            }
            (true, false, true) => {
                options.read(true).append(true).create(true);
            }
            (true, true, true) => {
                options.read(true).append(true).create_new(true);
            }
            (false, false, false) => return Err(StreamError::InvalidMode(self.bits())),
        }
        Ok(options)
    }
}

/// A stream over an exclusively owned file handle.
///
/// The cursor lives in the operating system; this type only forwards to it.
/// A `FileStream` can be opened in two ways with different failure contracts:
///
/// - [`FileStream::new`] fails fast with an error
/// - [`FileStream::open`] on a default-constructed stream reports failure as
///   `false`
///
/// Seeks follow native file semantics: a target before the start is
/// rejected, but the cursor may be placed past the end of the file.
///
/// The handle is released exactly once, either by [`Stream::close`] or on drop.
/// Closing a stream that is already closed is a programming error and returns
/// [`StreamError::AlreadyClosed`].
#[derive(Debug, Default)]
pub struct FileStream {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl FileStream {
    /// Open `path` with `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidMode`] for an unusable mode and
    /// [`StreamError::Open`] if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>, mode: FileMode) -> Result<Self, StreamError> {
        let path = path.as_ref();
        let file = mode
            .open_options()?
            .open(path)
            .map_err(|source| StreamError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("file stream opened {} ({:?})", path.display(), mode);
        Ok(Self {
            file: Some(file),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open `path` with `mode`, returning whether it succeeded.
    ///
    /// An already open handle is flushed and released first. On failure the
    /// stream is left closed.
    pub fn open(&mut self, path: impl AsRef<Path>, mode: FileMode) -> bool {
        if let Some(mut previous) = self.file.take() {
            if let Err(e) = previous.flush() {
                log_warn!("flush before reopen failed: {}", e);
            }
            self.path = None;
        }

        match Self::new(path, mode) {
            Ok(opened) => {
                *self = opened;
                true
            }
            Err(e) => {
                log_warn!("{}", e);
                false
            }
        }
    }

    /// Path of the open file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current cursor position as reported by the operating system.
    pub fn position(&mut self) -> Result<u64, StreamError> {
        Ok(self.file()?.stream_position()?)
    }

    /// Current length of the file in bytes.
    pub fn len(&self) -> Result<u64, StreamError> {
        let file = self.file.as_ref().ok_or(StreamError::Closed)?;
        Ok(file.metadata()?.len())
    }

    /// Returns `true` if the file has no bytes.
    pub fn is_empty(&self) -> Result<bool, StreamError> {
        Ok(self.len()? == 0)
    }

    fn file(&mut self) -> Result<&mut File, StreamError> {
        self.file.as_mut().ok_or(StreamError::Closed)
    }

    /// Seek with native semantics, surfacing rejected positions as errors.
    pub(crate) fn seek_native(&mut self, pos: SeekFrom) -> Result<u64, StreamError> {
        match self.file()?.seek(pos) {
            Ok(position) => Ok(position),
            Err(e) if e.kind() == ErrorKind::InvalidInput => Err(StreamError::InvalidSeek),
            Err(e) => Err(e.into()),
        }
    }
}

impl Stream for FileStream {
    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn close(&mut self) -> Result<(), StreamError> {
        let mut file = self.file.take().ok_or(StreamError::AlreadyClosed)?;
        let path = self.path.take();
        file.flush()?;
        drop(file);

        debug!(
            "file stream closed {}",
            path.as_deref().map_or_else(String::new, |p| p.display().to_string())
        );
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8], offset: usize, count: usize) -> Result<usize, StreamError> {
        let range = checked_range(buffer.len(), offset, count)?;
        let file = self.file()?;
        let target = &mut buffer[range];

        let mut total = 0;
        while total < target.len() {
            match file.read(&mut target[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(total)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        let file = self.file()?;
        let mut byte = [0u8; 1];
        loop {
            match file.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn write(&mut self, buffer: &[u8], offset: usize, count: usize) -> Result<usize, StreamError> {
        let range = checked_range(buffer.len(), offset, count)?;
        self.file()?.write_all(&buffer[range])?;
        Ok(count)
    }

    fn write_byte(&mut self, value: u8) -> Result<bool, StreamError> {
        self.file()?.write_all(&[value])?;
        Ok(true)
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64, StreamError> {
        let pos = match origin {
            SeekOrigin::Start => u64::try_from(offset).ok().map(SeekFrom::Start),
            SeekOrigin::Current => Some(SeekFrom::Current(offset)),
            SeekOrigin::End => offset.checked_neg().map(SeekFrom::End),
        };

        let result = match pos {
            Some(pos) => self.seek_native(pos),
            None => Err(StreamError::InvalidSeek),
        };
        match result {
            Err(StreamError::InvalidSeek) => {
                trace!("file stream seek rejected: {} from {:?}", offset, origin);
                self.position()
            }
            other => other,
        }
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        Ok(self.file()?.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table() {
        assert!(FileMode::READ.open_options().is_ok());
        assert!(FileMode::WRITE.open_options().is_ok());
        assert!((FileMode::READ | FileMode::WRITE).open_options().is_ok());
        assert!((FileMode::WRITE | FileMode::APPEND | FileMode::BINARY).open_options().is_ok());
        assert!(matches!(
            FileMode::BINARY.open_options(),
            Err(StreamError::InvalidMode(0x08))
        ));
        assert!(matches!(
            FileMode::empty().open_options(),
            Err(StreamError::InvalidMode(0))
        ));
    }

    #[test]
    fn test_mode_from_raw() {
        assert_eq!(FileMode::from_raw(1).unwrap(), FileMode::READ);
        assert_eq!(
            FileMode::from_raw(12).unwrap(),
            FileMode::APPEND | FileMode::BINARY
        );
        assert!(matches!(FileMode::from_raw(0x10), Err(StreamError::InvalidMode(0x10))));
    }

    #[test]
    fn test_default_stream_is_closed() {
        let mut stream = FileStream::default();
        assert!(!stream.is_open());
        assert!(stream.path().is_none());
        assert!(matches!(stream.read_byte(), Err(StreamError::Closed)));
        assert!(matches!(stream.write_byte(0), Err(StreamError::Closed)));
        assert!(matches!(stream.flush(), Err(StreamError::Closed)));
        assert!(matches!(stream.close(), Err(StreamError::AlreadyClosed)));
    }
}
