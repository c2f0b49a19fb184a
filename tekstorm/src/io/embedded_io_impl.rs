//! Implementations of `embedded_io` traits for the engine streams.
//!
//! These bridge [`Stream`] implementations to code written against the
//! `embedded_io` ecosystem. The blocking traits are stricter than the engine
//! contract in two places, so soft failures become errors here:
//!
//! - a rejected seek is [`StreamError::InvalidSeek`]
//! - a non-empty write that accepts nothing is [`StreamError::OutOfBounds`]

use embedded_io::{ErrorType, Read, Seek, SeekFrom, Write};

use super::{FileStream, MemoryStream, SeekOrigin, Stream, StreamError};

// Convert embedded_io's SeekFrom to an engine offset and origin
fn convert_seek_from(from: SeekFrom) -> Result<(i64, SeekOrigin), StreamError> {
    match from {
        SeekFrom::Start(n) => Ok((
            i64::try_from(n).map_err(|_| StreamError::InvalidSeek)?,
            SeekOrigin::Start,
        )),
        SeekFrom::Current(n) => Ok((n, SeekOrigin::Current)),
        SeekFrom::End(n) => Ok((
            n.checked_neg().ok_or(StreamError::InvalidSeek)?,
            SeekOrigin::End,
        )),
    }
}

fn reject_zero_write(requested: usize, written: usize) -> Result<usize, StreamError> {
    if written == 0 && requested > 0 {
        return Err(StreamError::OutOfBounds);
    }
    Ok(written)
}

// Implement for MemoryStream
impl ErrorType for MemoryStream<'_> {
    type Error = StreamError;
}

impl Read for MemoryStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len();
        Stream::read(self, buf, 0, len)
    }
}

impl Write for MemoryStream<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let written = Stream::write(self, buf, 0, buf.len())?;
        reject_zero_write(buf.len(), written)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Stream::flush(self)
    }
}

impl Seek for MemoryStream<'_> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        if !self.can_seek() {
            return Err(StreamError::InvalidSeek);
        }
        let (offset, origin) = convert_seek_from(pos)?;
        self.resolve_seek(offset, origin)
            .ok_or(StreamError::InvalidSeek)?;
        Stream::seek(self, offset, origin)
    }
}

// Implement for FileStream
impl ErrorType for FileStream {
    type Error = StreamError;
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len();
        Stream::read(self, buf, 0, len)
    }
}

impl Write for FileStream {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let written = Stream::write(self, buf, 0, buf.len())?;
        reject_zero_write(buf.len(), written)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Stream::flush(self)
    }
}

impl Seek for FileStream {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        let pos = match pos {
            SeekFrom::Start(n) => std::io::SeekFrom::Start(n),
            SeekFrom::End(n) => std::io::SeekFrom::End(n),
            SeekFrom::Current(n) => std::io::SeekFrom::Current(n),
        };
        self.seek_native(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Capabilities;

    #[test]
    fn test_memory_stream_as_embedded_io() {
        let mut backing = [0u8; 8];
        let mut stream = MemoryStream::new(&mut backing, Capabilities::all()).unwrap();

        Write::write_all(&mut stream, b"abcd").unwrap();
        assert_eq!(Seek::seek(&mut stream, SeekFrom::End(-2)).unwrap(), 6);
        assert_eq!(Seek::seek(&mut stream, SeekFrom::Start(1)).unwrap(), 1);

        let mut out = [0u8; 3];
        Read::read_exact(&mut stream, &mut out).unwrap();
        assert_eq!(&out, b"bcd");
    }

    #[test]
    fn test_rejected_seek_is_an_error() {
        let mut backing = [0u8; 4];
        let mut stream = MemoryStream::new(&mut backing, Capabilities::all()).unwrap();

        assert!(matches!(
            Seek::seek(&mut stream, SeekFrom::Start(5)),
            Err(StreamError::InvalidSeek)
        ));
        assert!(matches!(
            Seek::seek(&mut stream, SeekFrom::Current(-1)),
            Err(StreamError::InvalidSeek)
        ));
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_full_stream_write_is_an_error() {
        let mut backing = [0u8; 2];
        let mut stream = MemoryStream::new(&mut backing, Capabilities::all()).unwrap();

        assert_eq!(Write::write(&mut stream, b"xyz").unwrap(), 2);
        assert!(matches!(
            Write::write(&mut stream, b"z"),
            Err(StreamError::OutOfBounds)
        ));
        assert_eq!(Write::write(&mut stream, b"").unwrap(), 0);
    }

    #[test]
    fn test_file_stream_as_embedded_io() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"0123456789").unwrap();

        let mut stream = FileStream::new(&path, crate::io::FileMode::READ).unwrap();
        assert_eq!(Seek::seek(&mut stream, SeekFrom::End(-3)).unwrap(), 7);

        let mut out = [0u8; 3];
        Read::read_exact(&mut stream, &mut out).unwrap();
        assert_eq!(&out, b"789");

        assert!(matches!(
            Seek::seek(&mut stream, SeekFrom::Current(-20)),
            Err(StreamError::InvalidSeek)
        ));
        assert_eq!(Seek::seek(&mut stream, SeekFrom::Start(2)).unwrap(), 2);
    }

    #[test]
    fn test_convert_seek_from() {
        assert!(matches!(
            convert_seek_from(SeekFrom::End(-3)),
            Ok((3, SeekOrigin::End))
        ));
        assert!(matches!(
            convert_seek_from(SeekFrom::Start(u64::MAX)),
            Err(StreamError::InvalidSeek)
        ));
        assert!(matches!(
            convert_seek_from(SeekFrom::End(i64::MIN)),
            Err(StreamError::InvalidSeek)
        ));
    }
}
