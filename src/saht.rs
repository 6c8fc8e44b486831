// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{Cursor, SeekFrom};

use binrw::{binrw, BinRead, BinWrite, NullString};

use crate::{ByteBuffer, ByteSpan};

/// Size of the header, which is also where the first entry starts.
const HEADER_SIZE: u32 = 16;

/// Entries are padded to this boundary.
const ENTRY_ALIGNMENT: u32 = 16;

fn aligned_entry_size(entry: &HashEntry) -> u32 {
    // hash plus the NUL terminated name
    let size = 4 + entry.name.len() as u32 + 1;
    size.div_ceil(ENTRY_ALIGNMENT) * ENTRY_ALIGNMENT
}

fn table_size(entries: &[HashEntry]) -> u32 {
    HEADER_SIZE + entries.iter().map(aligned_entry_size).sum::<u32>()
}

#[binrw]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashEntry {
    /// The hashed file name, see [ArchiveHashTable::calculate_hash].
    pub hash: u32,
    #[brw(align_after = 16)]
    #[br(map = |x: NullString| x.to_string())]
    #[bw(map = |x: &String| NullString::from(x.as_str()))]
    pub name: String,
}

/// Archive hash table, which maps file name hashes back to their names.
#[binrw]
#[brw(magic = b"SAHT")]
#[brw(little)]
#[derive(Debug, Clone)]
pub struct ArchiveHashTable {
    #[br(temp)]
    #[bw(calc = table_size(entries))]
    _file_size: u32,

    #[br(temp)]
    #[bw(calc = HEADER_SIZE)]
    entry_offset: u32,

    #[br(temp)]
    #[bw(calc = entries.len() as u32)]
    entry_count: u32,

    #[br(seek_before = SeekFrom::Start(entry_offset as u64), count = entry_count)]
    pub entries: Vec<HashEntry>,
}

impl ArchiveHashTable {
    /// Creates a hash table for `names`.
    pub fn new(names: &[&str]) -> Self {
        Self {
            entries: names
                .iter()
                .map(|name| HashEntry {
                    hash: Self::calculate_hash(name),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Reads an existing SAHT file.
    pub fn from_existing(buffer: ByteSpan) -> Option<ArchiveHashTable> {
        let mut cursor = Cursor::new(buffer);
        ArchiveHashTable::read(&mut cursor).ok()
    }

    /// Writes the hash table into a new file.
    pub fn write_to_buffer(&self) -> Option<ByteBuffer> {
        let mut buffer = ByteBuffer::new();

        {
            let mut cursor = Cursor::new(&mut buffer);
            self.write(&mut cursor).ok()?;
        }

        Some(buffer)
    }

    /// Returns the name that hashes to `hash`, if it's in the table.
    pub fn lookup(&self, hash: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.hash == hash)
            .map(|entry| entry.name.as_str())
    }

    /// The file name hash used by the archives.
    pub fn calculate_hash(name: &str) -> u32 {
        name.bytes()
            .fold(0u32, |hash, byte| hash.wrapping_mul(0x65).wrapping_add(byte as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes() {
        assert_eq!(ArchiveHashTable::calculate_hash(""), 0);
        assert_eq!(ArchiveHashTable::calculate_hash("a"), 0x61);
        assert_eq!(ArchiveHashTable::calculate_hash("ab"), 0x61 * 0x65 + 0x62);
    }

    #[test]
    fn read_entries() {
        let mut data = Vec::new();
        data.extend_from_slice(b"SAHT");
        data.extend_from_slice(&64u32.to_le_bytes());
        data.extend_from_slice(&16u32.to_le_bytes());
        data.extend_from_slice(&2u32.to_le_bytes());

        data.extend_from_slice(&0x1234u32.to_le_bytes());
        data.extend_from_slice(b"tex.bntx\0");
        data.resize(32, 0);

        // long enough to spill over into a second line
        data.extend_from_slice(&0x5678u32.to_le_bytes());
        data.extend_from_slice(b"some/longer/name\0");
        data.resize(64, 0);

        let table = ArchiveHashTable::from_existing(&data).unwrap();

        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.lookup(0x1234), Some("tex.bntx"));
        assert_eq!(table.lookup(0x5678), Some("some/longer/name"));
        assert_eq!(table.lookup(0x9abc), None);
    }

    #[test]
    fn write_layout() {
        let table = ArchiveHashTable::new(&["a", "some/longer/name"]);
        let data = table.write_to_buffer().unwrap();

        assert_eq!(data.len(), 64);
        assert_eq!(&data[0..4], b"SAHT");
        assert_eq!(&data[4..8], &64u32.to_le_bytes());
        assert_eq!(&data[8..12], &16u32.to_le_bytes());
        assert_eq!(&data[12..16], &2u32.to_le_bytes());
        assert_eq!(&data[16..20], &0x61u32.to_le_bytes());
        assert_eq!(&data[20..22], b"a\0");
        assert_eq!(&data[32..36], &ArchiveHashTable::calculate_hash("some/longer/name").to_le_bytes());

        let reread = ArchiveHashTable::from_existing(&data).unwrap();
        assert_eq!(reread.entries, table.entries);
    }

    #[test]
    fn wrong_magic() {
        let mut data = vec![0u8; 16];
        data[..4].copy_from_slice(b"SARC");

        assert!(ArchiveHashTable::from_existing(&data).is_none());
    }
}
