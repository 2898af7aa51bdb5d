use std::path::PathBuf;
use thiserror::Error;

/// Every way loading a document can fail, from opening the file to
/// walking its XML parts.
#[derive(Error, Debug)]
pub enum DocumentReadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("XML error: {0}")]
    Xml(#[from] xml::reader::Error),
}
