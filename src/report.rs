use crate::config::ExcerptConfig;
use crate::excerpt::SearchText;
use crate::translation::Messages;
use std::io::{self, Write};
use tracing::debug;

/// Writes one header plus window (or "not found" line) per configured
/// section, separated by blank lines.
pub fn write_sections<W: Write>(
    out: &mut W,
    text: &str,
    config: &ExcerptConfig,
    messages: &Messages,
) -> io::Result<()> {
    let search = SearchText::new(text);

    for (index, section) in config.sections.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        let label = section.label();
        writeln!(out, "{}", messages.header(label))?;

        match search.find(&section.keyword, config.window) {
            Some(excerpt) => {
                debug!(
                    keyword = %section.keyword,
                    position = excerpt.position,
                    start = excerpt.start,
                    "section found"
                );
                writeln!(out, "{}", excerpt.text)?;
            }
            None => {
                debug!(keyword = %section.keyword, "section not found");
                writeln!(out, "{}", messages.not_found(label))?;
            }
        }
    }

    Ok(())
}
