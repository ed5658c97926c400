use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use vcfclean_core::CleanStats;

#[derive(Debug, Serialize)]
pub struct CleanReport {
    pub cards_parsed: usize,
    pub cards_written: usize,
    pub groups_merged: usize,
    #[serde(flatten)]
    pub stats: CleanStats,
}

impl CleanReport {
    pub fn print_text(&self) {
        println!(
            "Cleaned {} vCards into {}: merged {} duplicate group(s), dropped {} propert(ies), removed {} duplicate phone number(s)",
            self.cards_parsed,
            self.cards_written,
            self.groups_merged,
            self.stats.properties_dropped,
            self.stats.phones_deduped
        );
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
