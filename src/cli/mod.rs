use std::collections::BTreeMap;

use clap::Parser;

use crate::config::Config;
use crate::services::collector::StatsByLanguage;
use crate::services::{estimator, StatsCollector};
use crate::sources;

mod report;

/// Languages surveyed when no override is given
const PROGRAMMING_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "JavaScript",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
    "1C",
];

/// Vacancy & salary statistics for programming languages in Moscow
#[derive(Parser)]
#[command(name = "vacstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Survey these languages instead of the built-in list
    #[arg(long, value_delimiter = ',')]
    languages: Vec<String>,

    /// Output as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let languages: Vec<String> = if self.languages.is_empty() {
            PROGRAMMING_LANGUAGES.iter().map(|s| s.to_string()).collect()
        } else {
            self.languages
        };

        let sources = sources::default_sources(&config)?;
        let collector = StatsCollector::new(sources, estimator::TARGET_CURRENCY);
        let results = collector.collect(&languages);

        if self.json {
            let map: BTreeMap<&str, &StatsByLanguage> = results
                .iter()
                .map(|stats| (stats.label.as_str(), &stats.by_language))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        } else {
            for stats in &results {
                report::print_stats(stats);
            }
        }

        Ok(())
    }
}
