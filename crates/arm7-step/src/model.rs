use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Segment {
    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.bytes.len() as u32)
    }

    fn contains(&self, addr: u32) -> bool {
        addr >= self.base && addr < self.end()
    }
}

/// A raw binary image mapped at a fixed base address.
#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

impl Image {
    pub fn from_bytes(base: u32, bytes: Vec<u8>) -> Self {
        Self {
            segments: vec![Segment { name: "rom".into(), base, bytes }],
        }
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.bytes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    Ok(Image::from_bytes(base, payload.to_vec()))
}

pub fn read_u8(img: &Image, addr: u32) -> Option<u8> {
    img.segments
        .iter()
        .find(|s| s.contains(addr))
        .map(|s| s.bytes[(addr - s.base) as usize])
}

/// Little-endian word at `addr`; `None` unless all four bytes are mapped.
pub fn read_u32(img: &Image, addr: u32) -> Option<u32> {
    let b0 = read_u8(img, addr)?;
    let b1 = read_u8(img, addr.checked_add(1)?)?;
    let b2 = read_u8(img, addr.checked_add(2)?)?;
    let b3 = read_u8(img, addr.checked_add(3)?)?;
    Some(u32::from_le_bytes([b0, b1, b2, b3]))
}

pub fn is_mapped(img: &Image, addr: u32) -> bool {
    img.segments.iter().any(|s| s.contains(addr))
}
