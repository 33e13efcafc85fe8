//! Normalized vacancy types shared by all sources

use serde::Serialize;

/// Salary data for a single vacancy, already translated out of the
/// source-specific field names and currency spellings.
///
/// Bounds are monthly amounts in the record's own currency. A vacancy
/// that carries no salary data at all is represented with every field
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryRecord {
    pub from: Option<u64>,
    pub to: Option<u64>,
    /// Canonical ISO-style currency code ("RUB", "USD", ...)
    pub currency: Option<String>,
}

/// How a source tells the aggregator whether further pages exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Source declares a total page count up front (offset-bounded paging)
    PageCount(u32),
    /// Source sets a "more pages exist" flag on every page (cursor-style)
    MoreFlag(bool),
}

impl Termination {
    /// Whether the page at `page` (zero-based) was the last one.
    pub fn is_last(&self, page: u32) -> bool {
        match self {
            Termination::PageCount(total) => page + 1 >= *total,
            Termination::MoreFlag(more) => !more,
        }
    }
}

/// One batch of vacancies for a (source, language, page) triple.
#[derive(Debug, Clone)]
pub struct VacancyPage {
    /// One record per vacancy entry, in source order
    pub items: Vec<SalaryRecord>,
    /// Source-declared total vacancy count; the latest non-absent value
    /// observed during a run wins
    pub found: Option<u64>,
    pub termination: Termination,
}

/// Aggregated statistics for one (source, language) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    /// Vacancies the source claims to have for the query
    pub found: u64,
    /// Vacancies that yielded a usable salary estimate
    pub processed: u64,
    /// Integer average of the usable estimates, 0 when there are none
    pub average_salary: u64,
}
