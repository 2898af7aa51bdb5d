use clap::Parser;
use docexcerpt::{run, DocxConverter, ExcerptConfig, Section};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print the text around section keywords of a Word document.
#[derive(Parser, Debug)]
#[command(name = "docexcerpt", version, about)]
struct Cli {
    /// The .docx file to read
    document: PathBuf,

    /// JSON file with sections, window and locale
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keyword to search for; repeat to replace the configured sections
    #[arg(short = 'k', long = "keyword")]
    keywords: Vec<String>,

    /// Characters kept before each hit
    #[arg(long)]
    before: Option<usize>,

    /// Characters kept after each hit starts
    #[arg(long)]
    after: Option<usize>,

    /// Message language (zh-CN, zh-TW, en, or auto)
    #[arg(long)]
    locale: Option<String>,

    /// Also extract embedded images into this directory
    #[arg(long)]
    image_dir: Option<PathBuf>,
}

impl Cli {
    fn excerpt_config(&self) -> Result<ExcerptConfig, docexcerpt::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ExcerptConfig::load(path)?,
            None => ExcerptConfig::default(),
        };
        if !self.keywords.is_empty() {
            config.sections = self.keywords.iter().cloned().map(Section::new).collect();
        }
        if let Some(before) = self.before {
            config.window.before = before;
        }
        if let Some(after) = self.after {
            config.window.after = after;
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.excerpt_config()?;

    let mut converter = DocxConverter::new();
    if let Some(dir) = &cli.image_dir {
        converter = converter.with_image_dir(dir);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&converter, &cli.document, &config, &mut out)?;
    out.flush()?;
    Ok(())
}
