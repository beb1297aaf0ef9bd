//! Console rendering for search results and survey statistics.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use nces_search::{ScoreBreakdown, state_name};
use nces_stats::GroupCount;

use crate::types::{SearchHit, SearchReport, StatsReport};

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Plain,
    Json,
}

/// Render options shared by every report.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: ReportFormat,
    /// Emit ANSI styling in tables.
    pub styled: bool,
    /// Include per-field score components.
    pub explain: bool,
}

impl RenderOptions {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            styled: false,
            explain: false,
        }
    }

    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    #[must_use]
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }
}

pub fn render_search(report: &SearchReport, options: RenderOptions) -> serde_json::Result<String> {
    match options.format {
        ReportFormat::Table => Ok(search_table(report, options)),
        ReportFormat::Plain => Ok(search_plain(report, options.explain)),
        ReportFormat::Json => to_json(report),
    }
}

pub fn render_stats(report: &StatsReport, options: RenderOptions) -> serde_json::Result<String> {
    match options.format {
        ReportFormat::Table => Ok(stats_tables(report, options.styled)),
        ReportFormat::Plain => Ok(stats_plain(report)),
        ReportFormat::Json => to_json(report),
    }
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

// === Plain ===

fn search_plain(report: &SearchReport, explain: bool) -> String {
    let mut out = format!(
        "Results for \"{}\" (search took: {}s)\n",
        report.query, report.elapsed_secs
    );
    for hit in &report.hits {
        out.push_str(&format!("{}. {}\n{}, {}\n", hit.rank, hit.name, hit.city, hit.state));
        if explain && let Some(breakdown) = &hit.breakdown {
            out.push_str(&format!("   {}\n", describe_breakdown(breakdown)));
        }
    }
    out
}

fn describe_breakdown(breakdown: &ScoreBreakdown) -> String {
    format!(
        "score {} = name {} + city {} + state {} - misses {} + bonus {}",
        breakdown.total,
        breakdown.name,
        breakdown.city,
        breakdown.state,
        breakdown.misses,
        breakdown.bonus
    )
}

fn stats_plain(report: &StatsReport) -> String {
    let stats = &report.stats;
    let mut lines = vec![
        format!("Total Schools: {}", stats.total_schools),
        "Schools by State:".to_string(),
    ];
    lines.extend(group_lines(&stats.schools_by_state));
    lines.push("Schools by Metro-centric locale:".to_string());
    lines.extend(group_lines(&stats.schools_by_locale));
    if let Some(city) = &stats.top_city {
        lines.push(format!(
            "City with most schools: {} ({} schools)",
            city.city_state, city.schools
        ));
    }
    lines.push(format!(
        "Unique cities with at least one school: {}",
        stats.unique_cities
    ));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn group_lines(groups: &GroupCount) -> impl Iterator<Item = String> + '_ {
    groups
        .sorted()
        .into_iter()
        .map(|(key, count)| format!("{key}: {count}"))
}

// === Tables ===

fn search_table(report: &SearchReport, options: RenderOptions) -> String {
    let mut header = vec![
        header_cell("#"),
        header_cell("School"),
        header_cell("City"),
        header_cell("State"),
        header_cell("Score"),
    ];
    if options.explain {
        header.extend(["Name", "City pts", "State pts", "Misses", "Bonus"].map(header_cell));
    }

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table, options.styled);
    align_column(&mut table, 0, CellAlignment::Right);
    for index in 4..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for hit in &report.hits {
        table.add_row(search_row(hit, options.explain));
    }

    let mut out = format!(
        "Results for \"{}\" ({} found, search took {:.3}s)\n",
        report.query,
        report.hits.len(),
        report.elapsed_secs
    );
    if report.hits.is_empty() {
        out.push_str("No matching schools.\n");
    } else {
        out.push_str(&format!("{table}\n"));
    }
    out
}

fn search_row(hit: &SearchHit, explain: bool) -> Vec<Cell> {
    let mut row = vec![
        Cell::new(hit.rank),
        Cell::new(&hit.name).add_attribute(Attribute::Bold),
        Cell::new(&hit.city),
        Cell::new(&hit.state),
        score_cell(hit.score),
    ];
    if explain && let Some(breakdown) = &hit.breakdown {
        row.extend([
            dim_cell(breakdown.name),
            dim_cell(breakdown.city),
            dim_cell(breakdown.state),
            count_cell(breakdown.misses),
            dim_cell(breakdown.bonus),
        ]);
    }
    row
}

fn stats_tables(report: &StatsReport, styled: bool) -> String {
    let stats = &report.stats;

    let mut summary = Table::new();
    summary.set_header(vec![header_cell("Question"), header_cell("Answer")]);
    apply_table_style(&mut summary, styled);
    align_column(&mut summary, 1, CellAlignment::Right);
    summary.add_row(vec![
        Cell::new("Total schools"),
        Cell::new(stats.total_schools).add_attribute(Attribute::Bold),
    ]);
    let top_city = match &stats.top_city {
        Some(city) => Cell::new(format!("{} ({} schools)", city.city_state, city.schools)),
        None => dim_cell("-"),
    };
    summary.add_row(vec![Cell::new("City with most schools"), top_city]);
    summary.add_row(vec![
        Cell::new("Unique cities with at least one school"),
        Cell::new(stats.unique_cities),
    ]);

    let mut by_state = Table::new();
    by_state.set_header(vec![
        header_cell("State"),
        header_cell("Name"),
        header_cell("Schools"),
    ]);
    apply_group_table_style(&mut by_state, styled);
    align_column(&mut by_state, 2, CellAlignment::Right);
    for (code, count) in stats.schools_by_state.sorted() {
        let name = match state_name(code) {
            Some(name) => Cell::new(name),
            None => dim_cell("unknown"),
        };
        by_state.add_row(vec![Cell::new(code), name, Cell::new(count)]);
    }
    add_total_row(&mut by_state, &stats.schools_by_state, 3);

    let mut by_locale = Table::new();
    by_locale.set_header(vec![header_cell("Locale"), header_cell("Schools")]);
    apply_group_table_style(&mut by_locale, styled);
    align_column(&mut by_locale, 1, CellAlignment::Right);
    for (locale, count) in stats.schools_by_locale.sorted() {
        by_locale.add_row(vec![Cell::new(locale), Cell::new(count)]);
    }
    add_total_row(&mut by_locale, &stats.schools_by_locale, 2);

    format!(
        "{summary}\n\nSchools by state\n{by_state}\n\nSchools by metro-centric locale\n{by_locale}\n"
    )
}

fn add_total_row(table: &mut Table, groups: &GroupCount, width: usize) {
    let mut row = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ];
    row.extend((2..width).map(|_| dim_cell("-")));
    row.push(Cell::new(groups.total()).add_attribute(Attribute::Bold));
    table.add_row(row);
}

fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    apply_styling(table, styled);
}

fn apply_group_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    apply_styling(table, styled);
}

fn apply_styling(table: &mut Table, styled: bool) {
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn score_cell(score: f64) -> Cell {
    let color = if score >= 3.0 {
        Color::Green
    } else if score >= 1.5 {
        Color::Yellow
    } else {
        Color::White
    };
    Cell::new(score).fg(color)
}

fn count_cell(count: u32) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
