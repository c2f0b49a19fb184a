//! Command definitions and handlers for the `tekstorm` binary

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tekstorm::io::{Capabilities, FileMode, FileStream, MemoryStream, Stream};
use tekstorm::math::Color4;

/// Exercise tekstorm streams and color tables from the command line
#[derive(Debug, Parser)]
#[command(name = "tekstorm", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill an in-memory stream with zero bytes and report how many were accepted
    Smoke {
        /// Size of the backing buffer in bytes
        #[arg(long, default_value_t = 1024)]
        size: usize,
    },
    /// Copy bytes from one file to another through file streams
    Copy {
        /// Source file
        src: PathBuf,
        /// Destination file (created or truncated)
        dst: PathBuf,
        /// Copy at most this many bytes
        #[arg(long)]
        count: Option<u64>,
    },
    /// Print the RGBA components of a named color
    Color {
        /// Color name, e.g. "cornflower blue" or "DARK_ORANGE"
        name: String,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Smoke { size } => smoke(size, &mut out),
        Command::Copy { src, dst, count } => copy(&src, &dst, count, &mut out),
        Command::Color { name } => color(&name, &mut out),
    }
}

fn smoke(size: usize, out: &mut impl Write) -> Result<()> {
    let mut buffer = vec![0xFFu8; size];
    let mut stream = MemoryStream::new(&mut buffer, Capabilities::all())
        .with_context(|| format!("Failed to create a {size}-byte memory stream"))?;

    let mut written = 0usize;
    while stream.write_byte(0)? {
        written += 1;
    }
    stream.close()?;

    log::debug!("smoke: {} of {} bytes accepted", written, size);
    writeln!(out, "wrote {written} bytes")?;
    Ok(())
}

fn copy(src: &Path, dst: &Path, count: Option<u64>, out: &mut impl Write) -> Result<()> {
    let mut source = FileStream::new(src, FileMode::READ | FileMode::BINARY)
        .with_context(|| format!("Failed to open source {}", src.display()))?;
    let mut destination = FileStream::new(dst, FileMode::WRITE | FileMode::BINARY)
        .with_context(|| format!("Failed to open destination {}", dst.display()))?;

    let copied = match count {
        Some(count) => source.copy_to_limit(&mut destination, count),
        None => source.copy_to(&mut destination),
    }
    .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;

    destination.flush()?;
    destination.close()?;
    source.close()?;

    writeln!(out, "copied {copied} bytes")?;
    Ok(())
}

fn color(name: &str, out: &mut impl Write) -> Result<()> {
    let Some(color) = Color4::from_name(name) else {
        bail!("Unknown color: {name}");
    };
    writeln!(
        out,
        "{name}: r={:.4} g={:.4} b={:.4} a={:.4}",
        color.r, color.g, color.b, color.a
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
        let mut out = Vec::new();
        f(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_commands() {
        let cli = Cli::parse_from(["tekstorm", "smoke"]);
        assert!(matches!(cli.command, Command::Smoke { size: 1024 }));

        let cli = Cli::parse_from(["tekstorm", "copy", "a.bin", "b.bin", "--count", "7"]);
        assert!(matches!(cli.command, Command::Copy { count: Some(7), .. }));
    }

    #[test]
    fn test_smoke_fills_buffer() -> Result<()> {
        assert_eq!(output(|out| smoke(1024, out))?, "wrote 1024 bytes\n");
        assert_eq!(output(|out| smoke(1, out))?, "wrote 1 bytes\n");
        Ok(())
    }

    #[test]
    fn test_smoke_rejects_empty_buffer() {
        assert!(smoke(0, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_copy_files() -> Result<()> {
        let dir = TempDir::new()?;
        let src = dir.path().join("src.bin");
        let dst = dir.path().join("dst.bin");
        fs::write(&src, b"0123456789")?;

        assert_eq!(output(|out| copy(&src, &dst, None, out))?, "copied 10 bytes\n");
        assert_eq!(fs::read(&dst)?, b"0123456789");

        assert_eq!(output(|out| copy(&src, &dst, Some(3), out))?, "copied 3 bytes\n");
        assert_eq!(fs::read(&dst)?, b"012");
        Ok(())
    }

    #[test]
    fn test_copy_missing_source() -> Result<()> {
        let dir = TempDir::new()?;
        let err = copy(&dir.path().join("nope"), &dir.path().join("dst"), None, &mut Vec::new())
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to open source"));
        assert!(!dir.path().join("dst").exists());
        Ok(())
    }

    #[test]
    fn test_color_lookup() -> Result<()> {
        assert_eq!(
            output(|out| color("white", out))?,
            "white: r=1.0000 g=1.0000 b=1.0000 a=1.0000\n"
        );
        assert!(color("octarine", &mut Vec::new()).is_err());
        Ok(())
    }
}
