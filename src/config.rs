use std::path::{Path, PathBuf};

/// Where the tools read and write their files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    /// raw idiom dump, input of the normalizer
    pub raw_records: PathBuf,
    /// normalized idioms, output of the normalizer
    pub records: PathBuf,
    /// frequency-ranked word list
    pub frequency_list: PathBuf,
    pub high_frequency: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::with_data_dir("data")
    }
}

impl PathConfig {
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let raw_dir = data_dir.join("raw");
        Self {
            raw_records: raw_dir.join("all.json"),
            records: data_dir.join("all.json"),
            frequency_list: raw_dir.join("answer.txt"),
            high_frequency: data_dir.join("high-frequency.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = PathConfig::default();
        assert_eq!(config.raw_records, Path::new("data/raw/all.json"));
        assert_eq!(config.records, Path::new("data/all.json"));
        assert_eq!(config.frequency_list, Path::new("data/raw/answer.txt"));
        assert_eq!(config.high_frequency, Path::new("data/high-frequency.json"));
        assert!(config.raw_records.is_relative());
    }

    #[test]
    fn test_custom_data_dir() {
        let config = PathConfig::with_data_dir("/tmp/idioms");
        assert_eq!(config.raw_records, Path::new("/tmp/idioms/raw/all.json"));
        assert_eq!(
            config.high_frequency,
            Path::new("/tmp/idioms/high-frequency.json")
        );
    }
}
