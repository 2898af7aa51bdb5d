pub mod config;
pub mod convert;
pub mod error;
pub mod excerpt;
pub mod media;
pub mod read_text;
pub mod report;
pub mod translation;
mod utils;

pub use config::{ConfigError, ExcerptConfig, Section};
pub use convert::{Converter, DocxConverter};
pub use error::DocumentReadError;
pub use excerpt::{Excerpt, ExcerptWindow, SearchText};
pub use translation::Messages;

use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Converts the document at `path` and writes the excerpt report to `out`.
///
/// A document that cannot be read is not an error here: it is reported as a
/// single diagnostic line instead of the sections. Only failures writing to
/// `out` are returned.
pub fn run<C: Converter, W: Write>(
    converter: &C,
    path: &Path,
    config: &ExcerptConfig,
    out: &mut W,
) -> io::Result<()> {
    let messages = translation::messages_for(&config.locale);

    match converter.convert(path) {
        Ok(text) => report::write_sections(out, &text, config, &messages),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "document could not be read");
            writeln!(out, "{}", messages.read_error(&e))
        }
    }
}
