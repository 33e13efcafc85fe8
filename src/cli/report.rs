//! Console table rendering of per-source statistics

use comfy_table::{presets::UTF8_FULL, Table};

use crate::services::SourceStats;

/// Build the stats table for one source, one row per language in
/// ascending order
pub fn render_stats(stats: &SourceStats) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header([
        "Language",
        "Vacancies found",
        "Vacancies processed",
        "Average salary",
    ]);

    for (language, stats) in &stats.by_language {
        table.add_row([
            language.to_lowercase(),
            stats.found.to_string(),
            stats.processed.to_string(),
            stats.average_salary.to_string(),
        ]);
    }

    table
}

/// Print one source's caption and table to stdout
pub fn print_stats(stats: &SourceStats) {
    println!("{} (Moscow)", stats.label);
    println!("{}", render_stats(stats));
    println!();
}
