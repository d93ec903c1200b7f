//! Flat binary images

use std::fs::File;
use std::io;
use std::path::Path;

/// A raw dump of bytecode, loaded at a fixed base address.
///
/// No container format is understood. Every byte of the file is part of the
/// image, starting at `base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    base: u64,
    data: Vec<u8>,
}

impl Image {
    pub fn new(base: u64, data: Vec<u8>) -> Self {
        Image { base, data }
    }

    /// Read an image from anything readable.
    pub fn read_bytes<F>(file: &mut F, base: u64) -> io::Result<Self>
    where
        F: io::Read,
    {
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Ok(Image::new(base, data))
    }

    /// Read an image from a file on disk.
    pub fn open<P: AsRef<Path>>(path: P, base: u64) -> io::Result<Self> {
        let mut file = File::open(path)?;

        Image::read_bytes(&mut file, base)
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// The address just past the last byte of the image.
    pub fn end(&self) -> u64 {
        self.base.wrapping_add(self.data.len() as u64)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, addr: u64) -> bool {
        self.offset_of(addr).is_some()
    }

    fn offset_of(&self, addr: u64) -> Option<usize> {
        let offset = addr.checked_sub(self.base)?;

        if offset < self.data.len() as u64 {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// Retrieve exactly `count` bytes starting at `addr`, if the image holds
    /// all of them.
    pub fn retrieve(&self, addr: u64, count: usize) -> Option<&[u8]> {
        let offset = self.offset_of(addr)?;
        self.data.get(offset..offset.checked_add(count)?)
    }

    /// Hand out the bytes starting at `addr`, at most `max_len` of them.
    ///
    /// Near the end of the image the window is shorter than `max_len`; an
    /// address outside of the image yields an empty window.
    pub fn window(&self, addr: u64, max_len: usize) -> &[u8] {
        match self.offset_of(addr) {
            Some(offset) => {
                let end = offset.saturating_add(max_len).min(self.data.len());
                &self.data[offset..end]
            }
            None => &[],
        }
    }
}
