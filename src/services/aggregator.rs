//! Pagination aggregation and statistics reduction
//!
//! Drives repeated page fetches for one (source, language) pair until the
//! source's termination signal fires, then folds the collected salary
//! estimates into a single statistic. Written once against the normalized
//! page contract; nothing here knows which source it is paging.

use crate::services::estimator;
use crate::sources::VacancySource;
use crate::types::LanguageStats;
use log::warn;

/// Hard ceiling on pages fetched per (source, language) pair; cuts off a
/// source that never signals termination
const MAX_PAGES: u32 = 1000;

/// Page through one (source, language) pair and fold the result.
///
/// A transport failure aborts this pair's loop and returns whatever was
/// accumulated so far; it is logged, never retried, and never escapes to
/// the caller. An empty or malformed page is a benign stop.
pub fn aggregate(
    source: &dyn VacancySource,
    language: &str,
    target_currency: &str,
) -> LanguageStats {
    let mut found = 0u64;
    let mut salaries: Vec<u64> = Vec::new();
    let mut page = 0u32;

    loop {
        let response = match source.fetch_page(language, page) {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    "{}: \"{}\" page {} failed: {}",
                    source.name(),
                    language,
                    page,
                    e
                );
                break;
            }
        };

        if response.items.is_empty() {
            break;
        }

        // Latest non-absent value wins: some sources re-report the total
        // on every page, others only meaningfully on the first
        if let Some(total) = response.found {
            found = total;
        }

        for record in &response.items {
            if let Some(salary) = estimator::estimate(record, target_currency) {
                salaries.push(salary);
            }
        }

        if response.termination.is_last(page) {
            break;
        }

        page += 1;
        if page >= MAX_PAGES {
            warn!(
                "{}: \"{}\" still paging after {} pages, cutting off",
                source.name(),
                language,
                MAX_PAGES
            );
            break;
        }
    }

    reduce(found, &salaries)
}

/// Fold an accumulated salary list into the per-language statistic
pub fn reduce(found: u64, salaries: &[u64]) -> LanguageStats {
    let processed = salaries.len() as u64;
    let average_salary = if processed > 0 {
        salaries.iter().sum::<u64>() / processed
    } else {
        0
    };

    LanguageStats {
        found,
        processed,
        average_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Result, SalaryRecord, Termination, VacancyPage, VacstatError};

    const RUB: &str = "RUB";

    enum StubPage {
        Page(VacancyPage),
        TransportError,
    }

    struct StubSource {
        pages: Vec<StubPage>,
    }

    impl VacancySource for StubSource {
        fn name(&self) -> &str {
            "stub"
        }

        fn label(&self) -> &str {
            "Stub"
        }

        fn fetch_page(&self, _language: &str, page: u32) -> Result<VacancyPage> {
            match self.pages.get(page as usize) {
                Some(StubPage::Page(p)) => Ok(p.clone()),
                Some(StubPage::TransportError) => {
                    Err(VacstatError::Decode("simulated transport failure".into()))
                }
                None => panic!("fetched page {page} past the stubbed responses"),
            }
        }
    }

    fn rub(from: Option<u64>, to: Option<u64>) -> SalaryRecord {
        SalaryRecord {
            from,
            to,
            currency: Some(RUB.into()),
        }
    }

    fn page(items: Vec<SalaryRecord>, found: u64, termination: Termination) -> StubPage {
        StubPage::Page(VacancyPage {
            items,
            found: Some(found),
            termination,
        })
    }

    // ========== reduce tests ==========

    #[test]
    fn test_reduce_empty() {
        let stats = reduce(7, &[]);
        assert_eq!(
            stats,
            LanguageStats {
                found: 7,
                processed: 0,
                average_salary: 0
            }
        );
    }

    #[test]
    fn test_reduce_single() {
        let stats = reduce(7, &[150_000]);
        assert_eq!(
            stats,
            LanguageStats {
                found: 7,
                processed: 1,
                average_salary: 150_000
            }
        );
    }

    #[test]
    fn test_reduce_average_floors() {
        let stats = reduce(3, &[100, 101]);
        assert_eq!(stats.processed, 2);
        assert_eq!(stats.average_salary, 100);
    }

    // ========== aggregate scenario tests ==========

    #[test]
    fn test_single_page_by_page_count() {
        // Source declares found=3, page 0 carries 2 usable entries and is
        // the last page by declared page count
        let source = StubSource {
            pages: vec![page(
                vec![rub(Some(100), Some(200)), rub(Some(100), Some(200))],
                3,
                Termination::PageCount(1),
            )],
        };

        let stats = aggregate(&source, "Python", RUB);
        assert_eq!(
            stats,
            LanguageStats {
                found: 3,
                processed: 2,
                average_salary: 150
            }
        );
    }

    #[test]
    fn test_single_page_by_continuation_flag() {
        let source = StubSource {
            pages: vec![page(
                vec![rub(None, Some(1000))],
                42,
                Termination::MoreFlag(false),
            )],
        };

        let stats = aggregate(&source, "Go", RUB);
        assert_eq!(
            stats,
            LanguageStats {
                found: 42,
                processed: 1,
                average_salary: 800
            }
        );
    }

    #[test]
    fn test_first_fetch_transport_failure() {
        let source = StubSource {
            pages: vec![StubPage::TransportError],
        };

        let stats = aggregate(&source, "Ruby", RUB);
        assert_eq!(stats, LanguageStats::default());
    }

    #[test]
    fn test_transport_failure_mid_run_keeps_partial_results() {
        // Pages 0-1 succeed, page 2 of a declared 5 fails: the data from
        // the first two pages survives
        let source = StubSource {
            pages: vec![
                page(vec![rub(Some(100), Some(200))], 50, Termination::PageCount(5)),
                page(vec![rub(Some(300), Some(500))], 50, Termination::PageCount(5)),
                StubPage::TransportError,
            ],
        };

        let stats = aggregate(&source, "Java", RUB);
        assert_eq!(
            stats,
            LanguageStats {
                found: 50,
                processed: 2,
                average_salary: 275
            }
        );
    }

    #[test]
    fn test_multi_page_continuation_flag() {
        let source = StubSource {
            pages: vec![
                page(vec![rub(Some(100), None)], 2, Termination::MoreFlag(true)),
                page(vec![rub(Some(200), None)], 2, Termination::MoreFlag(false)),
            ],
        };

        let stats = aggregate(&source, "PHP", RUB);
        assert_eq!(stats.processed, 2);
        assert_eq!(stats.average_salary, (120 + 240) / 2);
    }

    #[test]
    fn test_stops_at_declared_page_count() {
        // Only one page stubbed; paging past it would panic the stub
        let source = StubSource {
            pages: vec![page(
                vec![rub(Some(100), Some(200))],
                100,
                Termination::PageCount(1),
            )],
        };

        let stats = aggregate(&source, "C", RUB);
        assert_eq!(stats.processed, 1);
    }

    #[test]
    fn test_empty_page_is_benign_stop() {
        // Declared "more pages" but an empty item list: stop, keep nothing
        let source = StubSource {
            pages: vec![page(vec![], 10, Termination::MoreFlag(true))],
        };

        let stats = aggregate(&source, "C#", RUB);
        assert_eq!(stats, LanguageStats::default());
    }

    #[test]
    fn test_latest_found_value_wins() {
        let source = StubSource {
            pages: vec![
                page(vec![rub(Some(100), None)], 10, Termination::MoreFlag(true)),
                page(vec![rub(Some(100), None)], 12, Termination::MoreFlag(false)),
            ],
        };

        let stats = aggregate(&source, "C++", RUB);
        assert_eq!(stats.found, 12);
    }

    #[test]
    fn test_absent_found_keeps_previous_value() {
        let source = StubSource {
            pages: vec![
                page(vec![rub(Some(100), None)], 10, Termination::MoreFlag(true)),
                StubPage::Page(VacancyPage {
                    items: vec![rub(Some(100), None)],
                    found: None,
                    termination: Termination::MoreFlag(false),
                }),
            ],
        };

        let stats = aggregate(&source, "C++", RUB);
        assert_eq!(stats.found, 10);
    }

    #[test]
    fn test_unusable_records_not_processed() {
        let source = StubSource {
            pages: vec![page(
                vec![
                    rub(Some(100_000), Some(200_000)),
                    SalaryRecord::default(),
                    SalaryRecord {
                        from: Some(3000),
                        to: Some(5000),
                        currency: Some("USD".into()),
                    },
                    rub(Some(0), Some(0)),
                ],
                4,
                Termination::PageCount(1),
            )],
        };

        let stats = aggregate(&source, "JavaScript", RUB);
        assert_eq!(stats.found, 4);
        assert_eq!(stats.processed, 1);
        assert_eq!(stats.average_salary, 150_000);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let source = StubSource {
            pages: vec![
                page(vec![rub(Some(100), Some(200))], 5, Termination::PageCount(2)),
                page(vec![rub(None, Some(1000))], 5, Termination::PageCount(2)),
            ],
        };

        let first = aggregate(&source, "Python", RUB);
        let second = aggregate(&source, "Python", RUB);
        assert_eq!(first, second);
    }
}
