use crate::error::DocumentReadError;
use crate::utils::MEDIA_PREFIX;
use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// Writes every embedded `word/media/` file into `dir` under its base name.
/// Returns the written paths in archive order.
pub fn extract_images<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    dir: &Path,
) -> Result<Vec<PathBuf>, DocumentReadError> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() || !entry.name().starts_with(MEDIA_PREFIX) {
            continue;
        }
        // Only the base name is kept, so "word/media/../../x" cannot escape `dir`.
        let Some(file_name) = Path::new(entry.name()).file_name().map(|n| n.to_owned()) else {
            continue;
        };
        let target = dir.join(file_name);
        let mut out = File::create(&target)?;
        let bytes = io::copy(&mut entry, &mut out)?;
        debug!(image = %target.display(), bytes, "extracted image");
        written.push(target);
    }

    Ok(written)
}
