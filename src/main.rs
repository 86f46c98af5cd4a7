mod error;
mod format;
mod lookup;
mod parser;

use std::io::{self, BufWriter, Write};

use clap::Parser;

#[derive(Parser)]
#[command(name = "ldoce", about = "Longman dictionary lookup from the command line")]
struct Cli {
    /// Word to look up
    word: String,

    /// Only show noun entries
    #[arg(long)]
    noun: bool,

    /// Only show verb entries
    #[arg(long)]
    verb: bool,

    /// Only show adjective entries
    #[arg(long)]
    adjective: bool,

    /// Only show adverb entries
    #[arg(long)]
    adverb: bool,

    /// Consult the spell-checker before looking the word up
    #[arg(short = 's', long = "spell-check")]
    spell_check: bool,

    /// Print the result as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Requested part-of-speech filter, or None when all types are wanted.
    fn wanted_types(&self) -> Option<Vec<&'static str>> {
        let flags = [
            (self.noun, "noun"),
            (self.verb, "verb"),
            (self.adjective, "adjective"),
            (self.adverb, "adverb"),
        ];
        let wanted: Vec<&'static str> = flags
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect();
        if wanted.is_empty() {
            None
        } else {
            Some(wanted)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.spell_check {
        let suggestions = lookup::lookup_spellcheck(&cli.word).await?;
        let confirmed = suggestions
            .first()
            .is_some_and(|s| s.text.eq_ignore_ascii_case(&cli.word));
        if !confirmed {
            let texts: Vec<String> = suggestions.into_iter().map(|s| s.text).collect();
            format::write_suggestions(&mut out, &cli.word, &texts)?;
            out.flush()?;
            std::process::exit(1);
        }
    }

    let result = lookup::lookup_word(&cli.word).await?;
    let result = match cli.wanted_types() {
        Some(wanted) => result.filter_by_types(&wanted),
        None => result,
    };

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
        out.flush()?;
        if !result.spelling_is_correct {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !result.spelling_is_correct {
        format::write_suggestions(&mut out, &cli.word, &result.suggested_spellings)?;
        out.flush()?;
        std::process::exit(1);
    }

    if result.entries.is_empty() {
        format::write_no_entries(&mut out, &cli.word)?;
    } else {
        for entry in &result.entries {
            format::write_entry(&mut out, entry)?;
        }
    }
    out.flush()?;
    Ok(())
}
