use anyhow::Result;
use log::{debug, info};

use crate::config::PathConfig;
use crate::dataset::{load_frequency_list, load_records, save_records};
use crate::structs::{HighFrequencyReport, IdiomRecord, ReverseIndex};
use crate::utils::format_count;

/// Most idioms the high-frequency list may hold.
pub const HIGH_FREQUENCY_LIMIT: usize = 3000;

/// Maps each word to its first position in `records`; later duplicates are
/// ignored.
pub(crate) fn reverse_index(records: &[IdiomRecord]) -> ReverseIndex<'_> {
    let mut index = ReverseIndex::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        index.entry(record.word.as_str()).or_insert(i);
    }
    index
}

/// First whitespace-separated token of a frequency list line.
pub fn headword(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Walks the frequency list top to bottom and collects the record of every
/// headword found in `records`, stopping once `limit` records are taken.
/// A headword listed twice is taken twice.
pub fn select_high_frequency<S: AsRef<str>>(
    records: &[IdiomRecord],
    frequency_list: &[S],
    limit: usize,
) -> (Vec<IdiomRecord>, HighFrequencyReport) {
    let index = reverse_index(records);
    let mut report = HighFrequencyReport {
        candidates: index.len(),
        ..Default::default()
    };
    let mut selected = Vec::with_capacity(limit.min(frequency_list.len()));

    for line in frequency_list {
        if selected.len() >= limit {
            break;
        }
        report.lines_scanned += 1;

        let Some(word) = headword(line.as_ref()) else {
            report.blank_lines += 1;
            continue;
        };
        match index.get(word) {
            Some(&i) => selected.push(records[i].clone()),
            None => debug!("{word} is not a known idiom"),
        }
    }
    if selected.len() >= limit {
        report.limit_reached = true;
    }

    report.selected = selected.len();
    (selected, report)
}

pub fn run_high_frequency(config: &PathConfig) -> Result<HighFrequencyReport> {
    info!("idioms: {}", config.records.display());
    info!("frequency list: {}", config.frequency_list.display());
    let records: Vec<IdiomRecord> = load_records(&config.records)?;
    let frequency_list = load_frequency_list(&config.frequency_list)?;

    let (selected, report) =
        select_high_frequency(&records, &frequency_list, HIGH_FREQUENCY_LIMIT);
    save_records(&config.high_frequency, &selected)?;

    info!("output: {}", config.high_frequency.display());
    info!(
        "Selected {} idioms from {} lines ({} distinct idioms, {} blank lines)",
        format_count(report.selected),
        format_count(report.lines_scanned),
        format_count(report.candidates),
        format_count(report.blank_lines)
    );
    if report.limit_reached {
        info!("Stopped at the limit of {HIGH_FREQUENCY_LIMIT}");
    }
    Ok(report)
}
