//! Source adapters for the external vacancy-listing APIs
//!
//! Each adapter translates its API's request shape, response envelope, and
//! currency spelling into the normalized [`VacancyPage`] contract; the
//! aggregation services never see a source-specific field name.

mod headhunter;
mod superjob;

pub use headhunter::HeadHunterSource;
pub use superjob::SuperJobSource;

use crate::config::Config;
use crate::types::{Result, VacancyPage};

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Trait for fetching paged vacancy listings from an external source
pub trait VacancySource {
    /// Source identifier used in logs (e.g., "headhunter")
    fn name(&self) -> &str;

    /// Human-readable label shown above the stats table
    fn label(&self) -> &str;

    /// Fetch one page (zero-based) of vacancies for a language query.
    ///
    /// Transport failures surface as `Err`; a response missing its item
    /// list surfaces as a page with empty `items`, never an error.
    fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}

/// Search query both APIs are asked for a language
fn search_text(language: &str) -> String {
    format!("Программист {language}")
}

/// Build the default source set in display order
pub fn default_sources(config: &Config) -> Result<Vec<Box<dyn VacancySource>>> {
    Ok(vec![
        Box::new(HeadHunterSource::new(config)?),
        Box::new(SuperJobSource::new(config)?),
    ])
}
