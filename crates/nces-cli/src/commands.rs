use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nces_cli::types::{SearchHit, SearchReport, StatsReport};
use nces_data::{Dataset, LoadOptions, columns, read_dataset};
use nces_search::{FieldMatchMode, ScoringOptions, Searcher};
use nces_stats::compute_stats;

use crate::cli::{DataArgs, SearchArgs, StatsArgs};

pub fn run_search(args: &SearchArgs) -> Result<SearchReport> {
    let query = args.query.join(" ");
    let span = info_span!("search", query = %query);
    let _guard = span.enter();

    let dataset = load_dataset(&args.data, &columns::SEARCH_COLUMNS)?;
    let field_matches = if args.accumulate_field_matches {
        FieldMatchMode::Accumulate
    } else {
        FieldMatchMode::LastMatch
    };
    let searcher = Searcher::new(
        ScoringOptions::default()
            .with_field_matches(field_matches)
            .with_top_k(args.top),
    );

    let start = Instant::now();
    let results = searcher
        .search_default(&query, &dataset)
        .context("search dataset")?;
    let elapsed = start.elapsed();
    info!(
        hits = results.len(),
        elapsed_ms = elapsed.as_millis(),
        "Search complete"
    );

    let mut hits = Vec::with_capacity(results.len());
    for (position, result) in results.into_iter().enumerate() {
        let mut hit = SearchHit::from_result(position + 1, result, &dataset)
            .with_context(|| format!("resolve result row {}", result.entry_idx))?;
        if args.explain {
            hit.breakdown = Some(
                searcher
                    .explain(&query, &dataset, result.entry_idx)
                    .context("explain score")?,
            );
        }
        hits.push(hit);
    }

    Ok(SearchReport {
        query,
        elapsed_secs: elapsed.as_secs_f64(),
        hits,
    })
}

pub fn run_stats(args: &StatsArgs) -> Result<StatsReport> {
    let span = info_span!("stats");
    let _guard = span.enter();

    let mut dataset = load_dataset(&args.data, &columns::STATS_COLUMNS)?;
    let start = Instant::now();
    let stats = compute_stats(&mut dataset).context("compute survey statistics")?;
    Ok(StatsReport {
        elapsed_secs: start.elapsed().as_secs_f64(),
        stats,
    })
}

/// Loads the dataset named by the data options, keeping only `keep`.
fn load_dataset(args: &DataArgs, keep: &[&str]) -> Result<Dataset> {
    let path = args.data_path();
    let options = LoadOptions::default()
        .with_encoding_label(&args.encoding)
        .context("resolve encoding")?
        .with_delimiter(args.delimiter_byte()?)
        .with_pad_short_rows(args.pad_short_rows);

    let start = Instant::now();
    let dataset = read_dataset(&path, &options)
        .with_context(|| format!("load {}", path.display()))?;
    for column in keep {
        dataset
            .column_index(column)
            .with_context(|| format!("check columns of {}", path.display()))?;
    }
    let dataset = dataset.project(keep.iter().copied());
    info!(
        path = %path.display(),
        rows = dataset.height(),
        elapsed_ms = start.elapsed().as_millis(),
        "Loaded dataset"
    );
    Ok(dataset)
}
