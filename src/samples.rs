use crate::loader::TapeLoader;
use crate::parser::Layout;
use crate::types::{LocatorError, Verdict};
use tracing::warn;

// Default embedded tapes with the verdict each one produces.
const SAMPLE_TEXTS: [(&str, &str, Verdict); 5] = [
    (
        "single-mismatch",
        include_str!("../samples/single-mismatch.tape"),
        Verdict::Halt,
    ),
    (
        "single-match",
        include_str!("../samples/single-match.tape"),
        Verdict::Copy,
    ),
    (
        "prefix-match",
        include_str!("../samples/prefix-match.tape"),
        Verdict::Copy,
    ),
    (
        "second-candidate",
        include_str!("../samples/second-candidate.tape"),
        Verdict::Copy,
    ),
    (
        "exhausted",
        include_str!("../samples/exhausted.tape"),
        Verdict::Halt,
    ),
];

/// A built-in tape.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: &'static str,
    pub layout: Layout,
    /// The verdict the locator reaches on this tape.
    pub expected: Verdict,
}

lazy_static::lazy_static! {
    pub static ref SAMPLES: Vec<Sample> = SAMPLE_TEXTS
        .iter()
        .filter_map(|&(name, text, expected)| match TapeLoader::load_tape_from_string(text) {
            Ok(layout) => Some(Sample { name, layout, expected }),
            Err(e) => {
                warn!(name, error = %e, "failed to parse sample tape");
                None
            }
        })
        .collect();
}

pub struct SampleManager;

impl SampleManager {
    /// Get the number of available samples
    pub fn get_sample_count() -> usize {
        SAMPLES.len()
    }

    /// Get a sample by its index
    pub fn get_sample_by_index(index: usize) -> Result<&'static Sample, LocatorError> {
        SAMPLES.get(index).ok_or_else(|| {
            LocatorError::ValidationError(format!("Sample index {} out of range", index))
        })
    }

    /// Get a sample by its name
    pub fn get_sample_by_name(name: &str) -> Result<&'static Sample, LocatorError> {
        SAMPLES
            .iter()
            .find(|sample| sample.name == name)
            .ok_or_else(|| LocatorError::ValidationError(format!("Sample '{}' not found", name)))
    }

    /// List all sample names
    pub fn list_sample_names() -> Vec<&'static str> {
        SAMPLES.iter().map(|sample| sample.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::run;

    #[test]
    fn test_all_samples_parse() {
        assert_eq!(SampleManager::get_sample_count(), SAMPLE_TEXTS.len());
    }

    #[test]
    fn test_samples_reach_expected_verdict() {
        for sample in SAMPLES.iter() {
            let outcome = run(sample.layout.tape().unwrap()).unwrap();
            assert_eq!(outcome.verdict, sample.expected, "sample {}", sample.name);
            assert_eq!(outcome.tape.len(), sample.layout.len());
        }
    }

    #[test]
    fn test_sample_directory_matches_embedded_samples() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("samples");
        let results = TapeLoader::load_tapes(&dir);
        assert_eq!(results.len(), SAMPLES.len());

        for result in results {
            let (path, layout) = result.unwrap();
            let name = path.file_stem().unwrap().to_str().unwrap();
            let sample = SampleManager::get_sample_by_name(name).unwrap();

            assert_eq!(layout, sample.layout);
            let outcome = run(layout.tape().unwrap()).unwrap();
            assert_eq!(outcome.verdict, sample.expected, "{}", path.display());
        }
    }

    #[test]
    fn test_get_sample_by_name() {
        let sample = SampleManager::get_sample_by_name("prefix-match").unwrap();
        assert_eq!(sample.layout.to_string(), "Y101X101111Y");

        let outcome = run(sample.layout.tape().unwrap()).unwrap();
        assert_eq!(outcome.tape, "Y101XBAB111Y");
        assert_eq!(outcome.steps, 14);
    }

    #[test]
    fn test_get_sample_by_index() {
        let sample = SampleManager::get_sample_by_index(0).unwrap();
        assert_eq!(sample.name, "single-mismatch");

        assert!(matches!(
            SampleManager::get_sample_by_index(100),
            Err(LocatorError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_sample() {
        let error = SampleManager::get_sample_by_name("nope").unwrap_err();
        assert_eq!(error.to_string(), "Invalid input: Sample 'nope' not found");
    }

    #[test]
    fn test_list_sample_names() {
        let names = SampleManager::list_sample_names();
        assert_eq!(
            names,
            vec![
                "single-mismatch",
                "single-match",
                "prefix-match",
                "second-candidate",
                "exhausted"
            ]
        );
    }
}
