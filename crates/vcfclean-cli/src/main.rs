mod error;
mod report;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::report::{print_json, CleanReport};
use vcfclean_core::{clean, merge, parse, write, DuplicateGroup};

#[derive(Debug, Parser)]
#[command(
    name = "vcfclean",
    version,
    about = "Clean and deduplicate vCard (.vcf) contact files"
)]
struct Cli {
    /// vCard file to clean
    input: PathBuf,
    /// Where to write the cleaned file
    output: PathBuf,
    /// Also write each duplicate group, pre-merge, to one file per contact
    #[arg(long)]
    duplicates_dir: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let data = fs::read_to_string(&cli.input)
        .with_context(|| format!("read vcf file {}", cli.input.display()))?;

    let mut cards = parse::parse_vcf(&data)
        .with_context(|| format!("parse vcf file {}", cli.input.display()))?;
    let cards_parsed = cards.len();
    debug!(count = cards_parsed, "parsed vCards");

    let mut stats = clean::clean_cards(&mut cards);
    let outcome = merge::merge_by_name(cards);
    let mut cards = outcome.cards;
    // Merging can bring together numbers that differ only in formatting.
    stats.phones_deduped += clean::dedup_phones(&mut cards);

    if let Some(dir) = &cli.duplicates_dir {
        write_duplicates(dir, &outcome.groups)?;
    }

    let out = write::write_vcf(&cards);
    fs::write(&cli.output, out)
        .with_context(|| format!("write vcf file {}", cli.output.display()))?;

    let report = CleanReport {
        cards_parsed,
        cards_written: cards.len(),
        groups_merged: outcome.groups.len(),
        stats,
    };

    if cli.json {
        return print_json(&report);
    }
    report.print_text();
    Ok(())
}

fn write_duplicates(dir: &Path, groups: &[DuplicateGroup]) -> Result<()> {
    if groups.is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("create duplicates directory {}", dir.display()))?;

    for group in groups {
        let path = dir.join(format!("{}.vcf", sanitize_file_name(&group.name)));
        let out = write::write_vcf(&group.members);
        fs::write(&path, out)
            .with_context(|| format!("write duplicates file {}", path.display()))?;
        debug!(path = %path.display(), members = group.members.len(), "wrote duplicate group");
    }
    Ok(())
}

fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() || matches!(ch, '-' | '.') {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push('_');
        }
    }
    if out.is_empty() {
        out.push_str("unnamed");
    }
    out
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::sanitize_file_name;

    #[test]
    fn sanitize_keeps_word_characters() {
        assert_eq!(sanitize_file_name("Jane Doe"), "Jane_Doe");
        assert_eq!(sanitize_file_name("J. R. Hartley"), "J._R._Hartley");
    }

    #[test]
    fn sanitize_strips_path_separators() {
        assert_eq!(sanitize_file_name("a/b\\c"), "abc");
        assert_eq!(sanitize_file_name("///"), "unnamed");
    }
}
