use crate::error::DocumentReadError;
use std::io::Read;
use xml::name::OwnedName;
use xml::reader::{ParserConfig, XmlEvent};

pub const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

fn is_wordml(name: &OwnedName, local: &str) -> bool {
    name.local_name == local && name.namespace.as_deref() == Some(WORDML_NS)
}

/// Flattens one WordprocessingML part into plain text.
///
/// Elements are visited in document order: `w:t` contributes its text,
/// `w:tab` a tab, `w:br`/`w:cr` a newline and every `w:p` start two
/// newlines. Nothing is trimmed.
pub fn xml_to_text<R: Read>(part: R) -> Result<String, DocumentReadError> {
    let parser = ParserConfig::new()
        .whitespace_to_characters(true)
        .cdata_to_characters(true)
        .create_reader(part);

    let mut text = String::new();
    // w:t never nests, but keep a depth so stray children don't end it early
    let mut text_depth = 0usize;

    for e in parser {
        match e? {
            XmlEvent::StartElement { name, .. } => {
                if text_depth > 0 {
                    text_depth += 1;
                } else if is_wordml(&name, "t") {
                    text_depth = 1;
                } else if is_wordml(&name, "tab") {
                    text.push('\t');
                } else if is_wordml(&name, "br") || is_wordml(&name, "cr") {
                    text.push('\n');
                } else if is_wordml(&name, "p") {
                    text.push_str("\n\n");
                }
            }
            XmlEvent::Characters(chunk) => {
                if text_depth == 1 {
                    text.push_str(&chunk);
                }
            }
            XmlEvent::EndElement { .. } => {
                text_depth = text_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    Ok(text)
}
