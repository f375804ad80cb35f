//! Positional access to an SCM/SCA byte source.
//!
//! Sections in both formats reference each other by absolute file offset
//! rather than stream order, so every read is random-access: seek to an
//! offset, read a bounded range. A [`Source`] wraps one memory-mapped or
//! buffered file (or an in-memory buffer), lives for the duration of a
//! single decode call, and is released by drop on every exit path.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use memmap2::Mmap;
use parking_lot::RwLock;

use crate::util::{Error, Result};

/// Read-only byte source with positional (seek + read) access.
pub struct Source {
    inner: SourceInner,
    size: u64,
}

enum SourceInner {
    /// Memory-mapped file (preferred)
    Mmap(Mmap),
    /// Buffered file access (fallback)
    File(RwLock<File>),
    /// Owned in-memory buffer
    Bytes(Vec<u8>),
}

impl Source {
    /// Open a file for reading with memory mapping.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_opts(path, true)
    }

    /// Open a file with optional memory mapping.
    pub fn open_opts(path: impl AsRef<Path>, use_mmap: bool) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::SourceNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let size = file.metadata()?.len();

        let inner = if use_mmap && size > 0 {
            // Safety: the file is opened read-only
            let mmap =
                unsafe { Mmap::map(&file) }.map_err(|e| Error::MmapFailed(e.to_string()))?;
            SourceInner::Mmap(mmap)
        } else {
            SourceInner::File(RwLock::new(file))
        };

        Ok(Self { inner, size })
    }

    /// Wrap an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let size = bytes.len() as u64;
        Self {
            inner: SourceInner::Bytes(bytes),
            size,
        }
    }

    /// Total size of the source in bytes.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Check that `len` bytes at `pos` fall inside the source.
    ///
    /// Decoders call this before sizing allocations from header counts, so
    /// an absurd declared count fails instead of exhausting memory.
    pub fn check_range(&self, pos: u64, len: u64) -> Result<()> {
        match pos.checked_add(len) {
            Some(end) if end <= self.size => Ok(()),
            _ => Err(Error::truncated(pos, len, self.size.saturating_sub(pos))),
        }
    }

    /// Read `len` bytes at `pos`.
    ///
    /// The range is validated before the output buffer is allocated, so a
    /// header field declaring an absurd count fails here instead of
    /// exhausting memory.
    pub fn read_bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>> {
        self.check_range(pos, len as u64)?;
        let mut buf = vec![0u8; len];
        self.read_into(pos, &mut buf)?;
        Ok(buf)
    }

    /// Read bytes at `pos` into an existing buffer.
    pub fn read_into(&self, pos: u64, buf: &mut [u8]) -> Result<()> {
        self.check_range(pos, buf.len() as u64)?;

        match &self.inner {
            SourceInner::Mmap(mmap) => {
                buf.copy_from_slice(&mmap[pos as usize..pos as usize + buf.len()]);
                Ok(())
            }
            SourceInner::File(file) => {
                let mut f = file.write();
                f.seek(SeekFrom::Start(pos))?;
                f.read_exact(buf)?;
                Ok(())
            }
            SourceInner::Bytes(bytes) => {
                buf.copy_from_slice(&bytes[pos as usize..pos as usize + buf.len()]);
                Ok(())
            }
        }
    }

    /// Read a little-endian u32 at `pos`.
    pub fn read_u32(&self, pos: u64) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_into(pos, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read a little-endian i32 at `pos`.
    pub fn read_i32(&self, pos: u64) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_into(pos, &mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Read a little-endian u16 at `pos`.
    pub fn read_u16(&self, pos: u64) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_into(pos, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Read a little-endian f32 at `pos`.
    pub fn read_f32(&self, pos: u64) -> Result<f32> {
        let mut buf = [0u8; 4];
        self.read_into(pos, &mut buf)?;
        Ok(f32::from_le_bytes(buf))
    }

    /// Read a NUL-terminated ASCII string starting at `pos`.
    ///
    /// Fails with a truncated-input error if no terminator is found before
    /// end of data, and with an encoding error on any non-ASCII byte.
    pub fn read_cstring(&self, pos: u64) -> Result<String> {
        let mut s = String::new();
        let mut offset = pos;
        loop {
            if offset >= self.size {
                return Err(Error::TruncatedInput(format!(
                    "unterminated string starting at offset {pos}"
                )));
            }
            let mut byte = [0u8; 1];
            self.read_into(offset, &mut byte)?;
            let byte = byte[0];
            if byte == 0 {
                return Ok(s);
            }
            if !byte.is_ascii() {
                return Err(Error::Encoding { offset, byte });
            }
            s.push(byte as char);
            offset += 1;
        }
    }
}
