use indicatif::ProgressStyle;
use num_format::{Locale, ToFormattedString};

const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] [{wide_bar}] {pos}/{len} ({eta})";

pub(crate) fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

#[inline]
pub(crate) fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}
