//! SuperJob (api.superjob.ru) source adapter

use crate::config::Config;
use crate::types::{Result, SalaryRecord, Termination, VacancyPage, VacstatError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use std::time::Duration;

use super::{search_text, VacancySource, REQUEST_TIMEOUT_SECS};

const SUPERJOB_VACANCIES_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

/// SuperJob town id for Moscow
const TOWN_MOSCOW: u32 = 4;

/// Vacancies requested per page (API maximum)
const VACANCIES_PER_PAGE: u32 = 100;

/// Paged response envelope; every field optional so a reshaped or
/// truncated response degrades to an empty page instead of an error
#[derive(Deserialize)]
struct SjResponse {
    #[serde(default)]
    objects: Option<Vec<SjVacancy>>,
    #[serde(default)]
    total: Option<u64>,
    /// Whether further pages exist beyond this one
    #[serde(default)]
    more: Option<bool>,
}

/// Flat salary fields; SuperJob reports unset bounds as 0
#[derive(Deserialize)]
struct SjVacancy {
    #[serde(default)]
    payment_from: Option<u64>,
    #[serde(default)]
    payment_to: Option<u64>,
    #[serde(default)]
    currency: Option<String>,
}

/// SuperJob spells currency codes in lowercase ("rub", "usd")
fn canonical_currency(code: &str) -> String {
    code.to_uppercase()
}

/// Adapter for the SuperJob vacancies API
pub struct SuperJobSource {
    client: Client,
}

impl SuperJobSource {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let app_id = HeaderValue::from_str(&config.superjob_api_key).map_err(|_| {
            VacstatError::Config("SUPERJOB_API_KEY contains characters invalid in a header".into())
        })?;
        headers.insert("X-Api-App-Id", app_id);

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        "superjob"
    }

    fn label(&self) -> &str {
        "SuperJob"
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let body = self
            .client
            .get(SUPERJOB_VACANCIES_URL)
            .query(&[
                ("keyword", search_text(language)),
                ("town", TOWN_MOSCOW.to_string()),
                ("count", VACANCIES_PER_PAGE.to_string()),
                ("page", page.to_string()),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        let response: SjResponse =
            serde_json::from_str(&body).map_err(|e| VacstatError::Decode(e.to_string()))?;

        Ok(normalize(response))
    }
}

/// Translate the SuperJob envelope into the normalized page contract
fn normalize(response: SjResponse) -> VacancyPage {
    let items = response
        .objects
        .unwrap_or_default()
        .into_iter()
        .map(|vacancy| SalaryRecord {
            from: vacancy.payment_from,
            to: vacancy.payment_to,
            currency: vacancy.currency.as_deref().map(canonical_currency),
        })
        .collect();

    VacancyPage {
        items,
        found: response.total,
        termination: Termination::MoreFlag(response.more.unwrap_or(false)),
    }
}
