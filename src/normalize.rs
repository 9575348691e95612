use anyhow::{Context, Result, anyhow};
use indicatif::ProgressIterator;
use log::{info, warn};

use crate::config::PathConfig;
use crate::dataset::{load_records, save_records};
use crate::pinyin::{has_tone_mark, standardize_pinyin};
use crate::structs::{IdiomRecord, NormalizeReport, RawIdiomRecord};
use crate::utils::{format_count, progress_style};

/// Characters in an idiom headword.
pub const IDIOM_LENGTH: usize = 4;

/// Keeps the four-character idioms, in input order, with their pinyin
/// rewritten to tone numbers.
///
/// Records of any other length are dropped without looking at their other
/// fields. An idiom whose `pinyin` or `explanation` is missing or not a
/// string fails the whole run.
pub fn normalize_records<'a>(
    raw_records: impl IntoIterator<Item = &'a RawIdiomRecord>,
) -> Result<(Vec<IdiomRecord>, NormalizeReport)> {
    let mut report = NormalizeReport::default();
    let mut records = Vec::new();

    for (i, raw) in raw_records.into_iter().enumerate() {
        report.total += 1;
        if raw.word.chars().count() != IDIOM_LENGTH {
            continue;
        }
        let raw_pinyin = raw
            .pinyin()
            .ok_or_else(|| anyhow!("record {i} ({}): missing or non-string `pinyin`", raw.word))?;
        let explanation = raw.explanation().ok_or_else(|| {
            anyhow!("record {i} ({}): missing or non-string `explanation`", raw.word)
        })?;

        let pinyin = standardize_pinyin(raw_pinyin);
        // more than one mark in a syllable: only the first was rewritten
        for syllable in pinyin.split(' ').filter(|s| has_tone_mark(s)) {
            warn!("{}: syllable `{syllable}` still carries a tone mark", raw.word);
            report.partially_marked += 1;
        }
        records.push(IdiomRecord {
            word: raw.word.clone(),
            pinyin,
            explanation: explanation.to_owned(),
        });
    }

    report.kept = records.len();
    report.dropped = report.total - report.kept;
    Ok((records, report))
}

pub fn run_normalize(config: &PathConfig) -> Result<NormalizeReport> {
    info!("input: {}", config.raw_records.display());
    let raw_records: Vec<RawIdiomRecord> = load_records(&config.raw_records)?;

    let progress = raw_records.iter().progress_with_style(progress_style());
    let (records, report) = normalize_records(progress)
        .with_context(|| format!("Invalid idiom in {}", config.raw_records.display()))?;
    save_records(&config.records, &records)?;

    info!("output: {}", config.records.display());
    info!(
        "Kept {} of {} idioms ({} dropped)",
        format_count(report.kept),
        format_count(report.total),
        format_count(report.dropped)
    );
    if report.partially_marked > 0 {
        warn!(
            "{} syllables kept a second tone mark",
            format_count(report.partially_marked)
        );
    }
    Ok(report)
}
