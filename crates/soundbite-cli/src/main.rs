mod artifact;

use clap::Parser;
use soundbite_core::Lexicon;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "soundbite",
    version,
    about = "Extract quotable executive statements from earnings-call transcripts"
)]
struct Cli {
    /// Transcript source: a caption file (.vtt), a document (.pdf), or
    /// plain text (.txt)
    source: PathBuf,

    /// Lexicon file (YAML) replacing the built-in financial lexicon
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Directory for the output artifact (defaults to the current directory)
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli.source, cli.lexicon.as_deref(), &cli.out_dir)
}

/// Decode, extract, and write the artifact for one source. Zero quotes is
/// a successful run that writes nothing.
fn run(source: &Path, lexicon_path: Option<&Path>, out_dir: &Path) -> anyhow::Result<()> {
    let lexicon = Lexicon::load(lexicon_path)?;
    let transcript = soundbite_ingest::load_source(source)?;
    let quotes = soundbite_extract::extract_quotes(&transcript, &lexicon);

    if quotes.is_empty() {
        eprintln!("warning: no strong executive quotes found in {}", source.display());
        return Ok(());
    }

    let out_path = artifact::artifact_path(source, out_dir);
    artifact::write_quotes(&out_path, &quotes)?;
    println!(
        "Extracted {} quote(s) from {} -> {}",
        quotes.len(),
        source.display(),
        out_path.display()
    );
    Ok(())
}
