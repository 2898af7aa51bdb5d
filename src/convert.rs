use crate::error::DocumentReadError;
use crate::media::extract_images;
use crate::read_text::xml_to_text;
use crate::utils::{matching_parts, open_archive, read_part, DOCUMENT_PART, FOOTER_PART, HEADER_PART};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Turns a document on disk into its plain text.
pub trait Converter {
    fn convert(&self, path: &Path) -> Result<String, DocumentReadError>;
}

/// Reads `.docx` files: headers, then the body, then footers. Whitespace
/// around the whole text is stripped.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    image_dir: Option<PathBuf>,
}

impl DocxConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also copy embedded images into `dir` on every conversion.
    pub fn with_image_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.image_dir = Some(dir.into());
        self
    }
}

impl Converter for DocxConverter {
    fn convert(&self, path: &Path) -> Result<String, DocumentReadError> {
        let mut archive = open_archive(path)?;

        let mut parts = matching_parts(&mut archive, &HEADER_PART)?;
        parts.push(DOCUMENT_PART.to_string());
        parts.extend(matching_parts(&mut archive, &FOOTER_PART)?);

        let mut text = String::new();
        for name in &parts {
            let xml = read_part(&mut archive, name)?;
            let part_text = xml_to_text(xml.as_slice())?;
            debug!(part = %name, chars = part_text.chars().count(), "converted part");
            text.push_str(&part_text);
        }

        if let Some(dir) = &self.image_dir {
            let images = extract_images(&mut archive, dir)?;
            info!(count = images.len(), dir = %dir.display(), "extracted images");
        }

        let text = text.trim().to_string();
        info!(path = %path.display(), parts = parts.len(), chars = text.chars().count(), "document converted");
        Ok(text)
    }
}
