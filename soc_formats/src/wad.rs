use std::fs::File;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail, ensure};
use byteorder::{ByteOrder, LittleEndian};
use memmap2::{Mmap, MmapOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadKind {
    Iwad,
    Pwad,
}

#[derive(Debug, Clone)]
pub struct WadEntry {
    pub name: String,
    pub offset: u64,
    pub size: u32,
}

impl WadEntry {
    pub fn data_range(&self) -> Range<usize> {
        let start = self.offset as usize;
        let end = start + self.size as usize;
        start..end
    }
}

/// Read-only view of a Doom-style WAD archive.
#[derive(Debug)]
pub struct WadArchive {
    path: PathBuf,
    kind: WadKind,
    mmap: Mmap,
    entries: Vec<WadEntry>,
}

impl WadArchive {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(&path_buf)
            .with_context(|| format!("opening WAD archive at {}", path_buf.display()))?;
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .with_context(|| format!("memory-mapping WAD archive {}", path_buf.display()))?;

        let (kind, entries) = parse_directory(&mmap)
            .with_context(|| format!("parsing WAD archive {}", path_buf.display()))?;

        Ok(WadArchive {
            path: path_buf,
            kind,
            mmap,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> WadKind {
        self.kind
    }

    pub fn entries(&self) -> &[WadEntry] {
        &self.entries
    }

    /// Last directory entry with this name; later lumps shadow earlier ones.
    pub fn find_entry(&self, name: &str) -> Option<&WadEntry> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn read_entry_bytes(&self, entry: &WadEntry) -> &[u8] {
        &self.mmap[entry.data_range()]
    }
}

fn parse_directory(mmap: &Mmap) -> Result<(WadKind, Vec<WadEntry>)> {
    const HEADER_SIZE: usize = 12;
    const ENTRY_SIZE: usize = 16;

    ensure!(
        mmap.len() >= HEADER_SIZE,
        "WAD archive is too small to contain a header"
    );

    let kind = match &mmap[0..4] {
        b"IWAD" => WadKind::Iwad,
        b"PWAD" => WadKind::Pwad,
        other => bail!(
            "WAD archive has unknown identification {:?}",
            String::from_utf8_lossy(other)
        ),
    };

    let lump_count = LittleEndian::read_i32(&mmap[4..8]);
    let table_offset = LittleEndian::read_i32(&mmap[8..12]);
    ensure!(
        lump_count >= 0 && table_offset >= 0,
        "WAD archive header has negative counts"
    );
    let lump_count = lump_count as usize;
    let table_offset = table_offset as usize;

    let table_len = lump_count
        .checked_mul(ENTRY_SIZE)
        .ok_or_else(|| anyhow!("WAD archive lump count overflow"))?;
    let table_end = table_offset
        .checked_add(table_len)
        .ok_or_else(|| anyhow!("WAD archive directory overflow"))?;
    ensure!(
        table_end <= mmap.len(),
        "WAD archive truncated before end of directory"
    );

    let mut entries = Vec::with_capacity(lump_count);
    for index in 0..lump_count {
        let base = table_offset + index * ENTRY_SIZE;
        let raw = &mmap[base..base + ENTRY_SIZE];

        let offset = LittleEndian::read_u32(&raw[0..4]) as usize;
        let size = LittleEndian::read_u32(&raw[4..8]);
        let end = offset
            .checked_add(size as usize)
            .ok_or_else(|| anyhow!("WAD lump {index} size overflow"))?;
        ensure!(end <= mmap.len(), "WAD lump {index} data extends beyond file");

        entries.push(WadEntry {
            name: lump_name(&raw[8..16]),
            offset: offset as u64,
            size,
        });
    }

    Ok((kind, entries))
}

fn lump_name(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).to_ascii_uppercase()
}

/// Builds a PWAD holding the given lumps in order.
pub fn build_pwad(lumps: &[(&str, &[u8])]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"PWAD");
    data.extend_from_slice(&(lumps.len() as i32).to_le_bytes());
    data.extend_from_slice(&0i32.to_le_bytes());

    let mut directory = Vec::new();
    for (name, bytes) in lumps {
        let offset = data.len() as u32;
        data.extend_from_slice(bytes);
        directory.extend_from_slice(&offset.to_le_bytes());
        directory.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        let mut raw_name = [0u8; 8];
        let len = name.len().min(raw_name.len());
        raw_name[..len].copy_from_slice(&name.as_bytes()[..len]);
        directory.extend_from_slice(&raw_name);
    }

    let table_offset = data.len() as i32;
    data[8..12].copy_from_slice(&table_offset.to_le_bytes());
    data.extend_from_slice(&directory);
    data
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_pwad_directory() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&build_pwad(&[("MAINCFG", b"MAINCFG\n"), ("soc_test", b"THING 1\n")]))
            .unwrap();

        let archive = WadArchive::open(file.path()).unwrap();
        assert_eq!(archive.kind(), WadKind::Pwad);
        assert_eq!(archive.entries().len(), 2);
        let entry = archive.find_entry("SOC_TEST").unwrap();
        assert_eq!(entry.name, "SOC_TEST");
        assert_eq!(archive.read_entry_bytes(entry), b"THING 1\n");
    }

    #[test]
    fn later_lumps_shadow_earlier_ones() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&build_pwad(&[("SOC_A", b"old"), ("SOC_A", b"new")]))
            .unwrap();
        let archive = WadArchive::open(file.path()).unwrap();
        let entry = archive.find_entry("soc_a").unwrap();
        assert_eq!(archive.read_entry_bytes(entry), b"new");
    }

    #[test]
    fn rejects_unknown_identification() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ZIPXxxxxxxxx").unwrap();
        assert!(WadArchive::open(file.path()).is_err());
    }
}
