//! Engine support library: byte streams and vector/color math.
//!
//! # Architecture
//!
//! ## Streams (`io`)
//! A single capability set, [`io::Stream`], implemented independently by each
//! storage medium:
//! - **`MemoryStream`**: fixed-capacity stream over a borrowed buffer
//! - **`FileStream`**: stream over an exclusively owned file handle
//!
//! Bytes can be copied between any two streams through
//! [`io::Stream::copy_to`], without either side knowing the other's type.
//! Both streams also implement the blocking `embedded_io` traits.
//!
//! ## Math (`math`)
//! Plain `Copy` value types with component-wise operators:
//! - **Vectors**: `Vector2`, `Vector3`, `Vector4`
//! - **Colors**: `Color3`, `Color4`, with the standard web color names as
//!   constants and a name lookup table
//!
//! # Quick Start
//!
//! ```
//! use tekstorm::io::{Capabilities, MemoryStream, SeekOrigin, Stream};
//! use tekstorm::math::{Color4, Vector3};
//!
//! let mut backing = [0u8; 64];
//! let mut stream = MemoryStream::new(&mut backing, Capabilities::all())?;
//! stream.write(b"save data", 0, 9)?;
//! stream.seek(0, SeekOrigin::Start)?;
//! assert_eq!(stream.read_byte()?, Some(b's'));
//!
//! let up = Vector3::RIGHT.cross(Vector3::FORWARD);
//! assert_eq!(up, -Vector3::UP);
//! assert_eq!(Color4::from_name("gold"), Some(Color4::GOLD));
//! # Ok::<(), tekstorm::io::StreamError>(())
//! ```
//!
//! # Features
//!
//! - `log` (default): emit diagnostics through the `log` facade
//! - `f64`: use `f64` instead of `f32` for math components

#![warn(missing_docs)]

mod log_macros;

pub mod io;
pub mod math;

// Re-export commonly used types for convenience
pub use io::{Capabilities, FileMode, FileStream, MemoryStream, SeekOrigin, Stream, StreamError};
pub use math::{Color3, Color4, Real, Vector2, Vector3, Vector4};
