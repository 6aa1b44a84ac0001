//! Loader for the NIST NSRL Sample Vectors subset
//! (http://www.nsrl.nist.gov/testdata/NSRLvectors.zip, unzipped manually).
//!
//! The subset is a directory holding `byte-hashes.sha1`, a text file listing
//! one digest per vector as 40 hex digits followed by ` ^`, and one
//! `byteNNNN.dat` payload file per listed digest, numbered in list order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// A single sample vector: the payload bytes and the expected digest in
/// lowercase hex.
pub struct NsrlVector {
    pub data: Vec<u8>,
    pub hex: String,
}

/// Load every vector under `dir`.
///
/// A zero-length `.dat` file is kept as a valid empty-input vector; the
/// hash list includes the digest of the empty message. A listed digest
/// with no matching payload file is an error.
pub fn load_vectors(dir: &Path) -> io::Result<Vec<NsrlVector>> {
    let hashes = read_hash_list(&dir.join("byte-hashes.sha1"))?;

    let mut vectors = Vec::with_capacity(hashes.len());
    for (idx, hex) in hashes.into_iter().enumerate() {
        let mut data = Vec::new();
        File::open(dir.join(format!("byte{:04}.dat", idx)))?
            .read_to_end(&mut data)?;
        vectors.push(NsrlVector { data: data, hex: hex });
    }
    Ok(vectors)
}

fn read_hash_list(path: &Path) -> io::Result<Vec<String>> {
    let mut hashes = Vec::new();
    for line in BufReader::new(File::open(path)?).lines() {
        if let Some(hex) = hash_list_entry(&line?) {
            hashes.push(hex);
        }
    }
    Ok(hashes)
}

/// Digest lines look like "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709 ^";
/// anything else (headers, blank lines) is ignored.
fn hash_list_entry(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    if bytes.len() >= 42 && bytes[40] == b' ' && bytes[41] == b'^' {
        Some(line[..40].to_ascii_lowercase())
    } else {
        None
    }
}
