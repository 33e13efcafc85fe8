//! HeadHunter (api.hh.ru) source adapter

use crate::config::Config;
use crate::types::{Result, SalaryRecord, Termination, VacancyPage, VacstatError};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{search_text, VacancySource, REQUEST_TIMEOUT_SECS};

const HH_VACANCIES_URL: &str = "https://api.hh.ru/vacancies";

/// HeadHunter area id for Moscow
const AREA_MOSCOW: u32 = 1;

/// Only vacancies published within the last week
const PERIOD_DAYS: u32 = 7;

/// Paged response envelope; every field optional so a reshaped or
/// truncated response degrades to an empty page instead of an error
#[derive(Deserialize)]
struct HhResponse {
    #[serde(default)]
    items: Option<Vec<HhVacancy>>,
    #[serde(default)]
    found: Option<u64>,
    /// Declared total page count for the query
    #[serde(default)]
    pages: Option<u32>,
}

#[derive(Deserialize)]
struct HhVacancy {
    #[serde(default)]
    salary: Option<HhSalary>,
}

/// Nested salary object: `{"from": 100000, "to": null, "currency": "RUR"}`
#[derive(Deserialize)]
struct HhSalary {
    #[serde(default)]
    from: Option<u64>,
    #[serde(default)]
    to: Option<u64>,
    #[serde(default)]
    currency: Option<String>,
}

/// HeadHunter still uses the legacy "RUR" code for the domestic currency
fn canonical_currency(code: &str) -> String {
    match code {
        "RUR" => "RUB".to_string(),
        other => other.to_uppercase(),
    }
}

/// Adapter for the HeadHunter vacancies API
pub struct HeadHunterSource {
    client: Client,
}

impl HeadHunterSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl VacancySource for HeadHunterSource {
    fn name(&self) -> &str {
        "headhunter"
    }

    fn label(&self) -> &str {
        "HeadHunter"
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let body = self
            .client
            .get(HH_VACANCIES_URL)
            .query(&[
                ("text", search_text(language)),
                ("area", AREA_MOSCOW.to_string()),
                ("period", PERIOD_DAYS.to_string()),
                ("page", page.to_string()),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        let response: HhResponse =
            serde_json::from_str(&body).map_err(|e| VacstatError::Decode(e.to_string()))?;

        Ok(normalize(response))
    }
}

/// Translate the HeadHunter envelope into the normalized page contract
fn normalize(response: HhResponse) -> VacancyPage {
    let items = response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|vacancy| match vacancy.salary {
            Some(salary) => SalaryRecord {
                from: salary.from,
                to: salary.to,
                currency: salary.currency.as_deref().map(canonical_currency),
            },
            None => SalaryRecord::default(),
        })
        .collect();

    VacancyPage {
        items,
        found: response.found,
        termination: Termination::PageCount(response.pages.unwrap_or(0)),
    }
}
