use crate::error::DocumentReadError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const MEDIA_PREFIX: &str = "word/media/";

// Upper bound on preallocation; the declared size comes from the archive.
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared.min(MAX_PREALLOC)).unwrap_or(0)
}

pub static HEADER_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^word/header[0-9]*\.xml$").expect("header part pattern"));
pub static FOOTER_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^word/footer[0-9]*\.xml$").expect("footer part pattern"));

/// Opens a DOCX file (which is a ZIP archive).
pub fn open_archive<P: AsRef<Path>>(
    docx_path: P,
) -> Result<ZipArchive<BufReader<File>>, DocumentReadError> {
    let docx_path = docx_path.as_ref();
    debug!(path = %docx_path.display(), "opening document");
    let file = File::open(docx_path).map_err(|source| DocumentReadError::Open {
        path: docx_path.to_path_buf(),
        source,
    })?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// Names of the archive members accepted by `pattern`, in archive order.
pub fn matching_parts<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    pattern: &Regex,
) -> Result<Vec<String>, DocumentReadError> {
    let mut names = Vec::new();
    for index in 0..archive.len() {
        let entry = archive.by_index(index)?;
        if pattern.is_match(entry.name()) {
            names.push(entry.name().to_string());
        }
    }
    Ok(names)
}

/// Reads one archive member fully into memory.
pub fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Vec<u8>, DocumentReadError> {
    let mut part = archive.by_name(name)?;
    let mut content = Vec::with_capacity(capacity_hint(part.size()));
    part.read_to_end(&mut content)?;
    debug!(part = name, bytes = content.len(), "read part");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(names: &[&str]) -> ZipArchive<Cursor<Vec<u8>>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for name in names {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(name.as_bytes()).unwrap();
        }
        let cursor = writer.finish().unwrap();
        ZipArchive::new(cursor).unwrap()
    }

    #[test]
    fn test_header_and_footer_parts_keep_archive_order() {
        let mut archive = archive_with(&[
            "word/header2.xml",
            "word/document.xml",
            "word/header1.xml",
            "word/footer.xml",
            "word/headers/extra.xml",
            "word/_rels/header1.xml.rels",
        ]);

        let headers = matching_parts(&mut archive, &HEADER_PART).unwrap();
        assert_eq!(headers, vec!["word/header2.xml", "word/header1.xml"]);

        let footers = matching_parts(&mut archive, &FOOTER_PART).unwrap();
        assert_eq!(footers, vec!["word/footer.xml"]);
    }

    #[test]
    fn test_read_part_returns_member_bytes() {
        let mut archive = archive_with(&[DOCUMENT_PART]);
        let content = read_part(&mut archive, DOCUMENT_PART).unwrap();
        assert_eq!(content, DOCUMENT_PART.as_bytes());
    }

    #[test]
    fn test_capacity_hint_is_bounded() {
        assert_eq!(capacity_hint(42), 42);
        assert_eq!(capacity_hint(u64::MAX), MAX_PREALLOC as usize);
    }

    fn patch_u32(bytes: &mut [u8], signature: &[u8], field_offset: usize, value: u32) {
        let start = bytes
            .windows(signature.len())
            .position(|w| w == signature)
            .unwrap();
        let field = start + field_offset;
        bytes[field..field + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn test_read_part_survives_a_huge_declared_size() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file(DOCUMENT_PART, options).unwrap();
        writer.write_all(b"<w:document/>").unwrap();
        let mut bytes = writer.finish().unwrap().into_inner();

        // Uncompressed size: offset 22 in the local header, 24 in the central directory.
        patch_u32(&mut bytes, b"PK\x03\x04", 22, 0xFFFF_FFFE);
        patch_u32(&mut bytes, b"PK\x01\x02", 24, 0xFFFF_FFFE);

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        match read_part(&mut archive, DOCUMENT_PART) {
            Ok(content) => assert_eq!(content, b"<w:document/>"),
            Err(err) => assert!(matches!(
                err,
                DocumentReadError::Zip(_) | DocumentReadError::Io(_)
            )),
        }
    }

    #[test]
    fn test_missing_part_is_a_zip_error() {
        let mut archive = archive_with(&["word/styles.xml"]);
        let err = read_part(&mut archive, DOCUMENT_PART).unwrap_err();
        assert!(matches!(err, DocumentReadError::Zip(_)));
    }

    #[test]
    fn test_open_archive_reports_missing_file() {
        let err = open_archive("/nonexistent/dir/report.docx").err().unwrap();
        match err {
            DocumentReadError::Open { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/dir/report.docx"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_archive_rejects_non_zip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.doc");
        std::fs::write(&path, b"this is a plain text file, not a zip container at all").unwrap();
        let err = open_archive(&path).err().unwrap();
        assert!(matches!(err, DocumentReadError::Zip(_)));
    }
}
