//! Run orchestration across languages and sources

use std::collections::BTreeMap;

use log::info;

use crate::services::aggregator;
use crate::sources::VacancySource;
use crate::types::LanguageStats;

/// Per-language statistics for one source; the BTreeMap keeps languages in
/// ascending order for display regardless of survey order
pub type StatsByLanguage = BTreeMap<String, LanguageStats>;

/// Statistics for one source, ready for display
#[derive(Debug)]
pub struct SourceStats {
    pub label: String,
    pub by_language: StatsByLanguage,
}

/// Drives the per-(source, language) aggregation for a whole run
pub struct StatsCollector {
    sources: Vec<Box<dyn VacancySource>>,
    target_currency: String,
}

impl StatsCollector {
    pub fn new(sources: Vec<Box<dyn VacancySource>>, target_currency: impl Into<String>) -> Self {
        Self {
            sources,
            target_currency: target_currency.into(),
        }
    }

    /// Aggregate every language on every source, sequentially.
    ///
    /// Failures are absorbed per (source, language) pair inside the
    /// aggregator; a pair that fails degrades to partial or zero
    /// statistics without affecting any other pair.
    pub fn collect(&self, languages: &[String]) -> Vec<SourceStats> {
        let mut results: Vec<SourceStats> = self
            .sources
            .iter()
            .map(|source| SourceStats {
                label: source.label().to_string(),
                by_language: BTreeMap::new(),
            })
            .collect();

        for language in languages {
            for (source, stats) in self.sources.iter().zip(results.iter_mut()) {
                info!("{}: surveying \"{}\"", source.name(), language);
                let result =
                    aggregator::aggregate(source.as_ref(), language, &self.target_currency);
                stats.by_language.insert(language.clone(), result);
            }
        }

        results
    }
}
