mod config;
mod dataset;
mod high_frequency;
mod normalize;
mod pinyin;
mod structs;
mod utils;
pub use config::PathConfig;
pub use dataset::{load_frequency_list, load_records, save_records};
pub use high_frequency::{
    HIGH_FREQUENCY_LIMIT, headword, run_high_frequency, select_high_frequency,
};
pub use normalize::{IDIOM_LENGTH, normalize_records, run_normalize};
pub use pinyin::{PINYIN_MAP, Tone, has_tone_mark, standardize_pinyin, standardize_syllable};
pub use structs::{HighFrequencyReport, IdiomRecord, NormalizeReport, RawIdiomRecord};
