//! Checksum lines as printed and verified by `skeinsum`.
use log::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::crypto::Skein512;
use crate::defs::{Digest, DIGEST_LEN};
use crate::error::Error;

pub const ALGORITHM_TAG: &str = "Skein-512";
const HEX_LEN: usize = 2 * DIGEST_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `<hex>  <name>`
    Gnu,
    /// `Skein-512 (<name>) = <hex>`
    Bsd,
}

/// Digest everything `reader` yields, reading `buf_size` bytes at a time.
pub fn hash_reader<R: Read>(mut reader: R, buf_size: usize) -> Result<Digest, Error> {
    let mut hasher = Skein512::new();
    let mut buf = vec![0u8; std::cmp::max(buf_size, 1)];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(hasher.finalize())
}

pub fn hash_file(path: &Path, buf_size: usize) -> Result<Digest, Error> {
    debug!("Hashing {}", path.display());
    let file = File::open(path)
        .map_err(|e| Error::IoError(format!("{}: {}", path.display(), e)))?;
    hash_reader(file, buf_size)
}

pub fn format_line(digest: &Digest, name: &str, style: Style, uppercase: bool) -> String {
    let mut hex = hex::encode(&digest[..]);
    if uppercase {
        hex.make_ascii_uppercase();
    }
    match style {
        Style::Gnu => format!("{}  {}", hex, name),
        Style::Bsd => format!("{} ({}) = {}", ALGORITHM_TAG, name, hex),
    }
}

fn digest_from_hex(hex: &str) -> Result<Digest, Error> {
    if hex.len() != HEX_LEN {
        return Err(Error::InputError(format!(
            "Digest must be {} hex characters, got {}",
            HEX_LEN,
            hex.len()
        )));
    }
    let mut digest = [0u8; DIGEST_LEN];
    hex::decode_to_slice(hex, &mut digest)?;
    Ok(digest)
}

/// Parse a checksum line in either style, returning the digest and the file name.
pub fn parse_line(line: &str) -> Result<(Digest, String), Error> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let bsd_prefix = format!("{} (", ALGORITHM_TAG);
    if let Some(rest) = line.strip_prefix(bsd_prefix.as_str()) {
        let sep = rest
            .rfind(") = ")
            .ok_or_else(|| Error::InputError(format!("Malformed checksum line: {}", line)))?;
        let digest = digest_from_hex(&rest[sep + 4..])?;
        return Ok((digest, rest[..sep].to_string()));
    }

    match (line.get(..HEX_LEN), line.get(HEX_LEN..HEX_LEN + 2), line.get(HEX_LEN + 2..)) {
        (Some(hex), Some("  "), Some(name)) | (Some(hex), Some(" *"), Some(name))
            if !name.is_empty() =>
        {
            Ok((digest_from_hex(hex)?, name.to_string()))
        }
        _ => Err(Error::InputError(format!("Malformed checksum line: {}", line))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::digest;

    #[test]
    fn gnu_round_trip() {
        let d = digest(b"hello");
        let line = format_line(&d, "dir/file name.txt", Style::Gnu, false);
        assert_eq!(line.len(), HEX_LEN + 2 + "dir/file name.txt".len());
        let (parsed, name) = parse_line(&line).unwrap();
        assert_eq!(&parsed[..], &d[..]);
        assert_eq!(name, "dir/file name.txt");
    }

    #[test]
    fn bsd_uppercase() {
        let d = digest(b"");
        let line = format_line(&d, "a (b)", Style::Bsd, true);
        assert!(line.starts_with("Skein-512 (a (b)) = BC5B4C50"));
        let (parsed, name) = parse_line(&format!("{}\n", line)).unwrap();
        assert_eq!(&parsed[..], &d[..]);
        assert_eq!(name, "a (b)");
    }

    #[test]
    fn binary_marker() {
        let d = digest(b"x");
        let line = format!("{} *x.bin", hex::encode(&d[..]));
        assert_eq!(parse_line(&line).unwrap().1, "x.bin");
    }

    #[test]
    fn malformed_lines() {
        for line in &["", "abc  file", "Skein-512 (file) = 00", "Skein-512 (file) 00"] {
            match parse_line(line) {
                Err(Error::InputError(_)) => (),
                r => panic!("Expected input error for {:?}, got {:?}", line, r),
            }
        }
        let not_hex = format!("{}  file", "g".repeat(HEX_LEN));
        assert!(parse_line(&not_hex).is_err());
    }

    #[test]
    fn reader_uses_small_buffers() {
        let data: Vec<u8> = (0..1000u32).map(|i| i as u8).collect();
        let d = hash_reader(&data[..], 7).unwrap();
        assert_eq!(&d[..], &digest(&data)[..]);
        let d = hash_reader(&data[..], 0).unwrap();
        assert_eq!(&d[..], &digest(&data)[..]);
    }

    #[test]
    fn missing_file() {
        match hash_file(Path::new("/nonexistent/skein"), 64) {
            Err(Error::IoError(msg)) => assert!(msg.contains("/nonexistent/skein")),
            r => panic!("Expected io error, got {:?}", r),
        }
    }
}
