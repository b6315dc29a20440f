//! Run status report rendering
//!
//! Turns a fetched repository snapshot into the text printed by
//! `repository describe`. Output is deterministic for a given repository
//! and clock: the display order is a stable sort, and every relative time
//! goes through the injected clock rather than the system clock. The
//! renderer emits plain text; color is layered on by the caller.

use chrono::{DateTime, Duration, Utc};
use convoy_core::clock::Clock;
use convoy_core::domain::repository::Repository;
use convoy_core::domain::run::RunStatus;

/// Placeholder for cells with no value.
const EMPTY_CELL: &str = "---";
/// Duration shown when a record's time range is inconsistent.
const UNKNOWN_DURATION: &str = "unknown";
/// Duration shown for a run that started but has not finished.
const IN_PROGRESS_DURATION: &str = "running";

const COLUMNS: usize = 8;
const HEADERS: [&str; COLUMNS] = [
    "", "PIPELINERUN", "EVENT", "SHA", "TITLE", "BRANCH", "AGE", "DURATION",
];

/// Render the run status report for a repository.
///
/// Never fails: malformed individual records degrade to placeholder cells
/// and the full report string is always returned.
pub fn render(repo: &Repository, clock: &impl Clock) -> String {
    let mut out = String::new();

    out.push_str(&format!("Name:      {}\n", repo.name));
    out.push_str(&format!("Namespace: {}\n", repo.namespace));
    out.push_str(&format!("URL:       {}\n", repo.source_url));
    out.push('\n');

    if repo.runs.is_empty() {
        out.push_str("No runs recorded yet.\n");
        return out;
    }

    let now = clock.now();
    let rows: Vec<[String; COLUMNS]> = display_order(&repo.runs)
        .into_iter()
        .map(|run| row_cells(run, now))
        .collect();

    let mut widths: [usize; COLUMNS] = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_row(&mut out, &widths, &HEADERS.map(String::from));
    for row in &rows {
        push_row(&mut out, &widths, row);
    }

    out
}

/// Runs in display order: newest first by start time; runs without a
/// start time after all dated runs, original relative order preserved.
fn display_order(runs: &[RunStatus]) -> Vec<&RunStatus> {
    let mut ordered: Vec<&RunStatus> = runs.iter().collect();
    // sort_by is stable, so ties and undated entries keep ledger order
    ordered.sort_by(|a, b| match (a.start_time, b.start_time) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    ordered
}

fn row_cells(run: &RunStatus, now: DateTime<Utc>) -> [String; COLUMNS] {
    [
        run.state().icon().to_string(),
        run.pipeline_run_name.clone(),
        cell(run.event_type.as_deref()),
        cell(run.commit_sha.as_deref().map(short_sha)),
        cell(run.commit_title.as_deref()),
        cell(run.target_branch.as_deref()),
        relative_age(now, run.start_time),
        run_duration(run.start_time, run.completion_time),
    ]
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or(EMPTY_CELL).to_string()
}

/// Append one padded table row.
///
/// Cells are left-aligned with a two-space gutter; the last column is
/// written bare so rows carry no trailing whitespace. Widths are counted
/// in characters, not bytes, so the icon column lines up.
fn push_row(out: &mut String, widths: &[usize; COLUMNS], cells: &[String; COLUMNS]) {
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(cell);
        if index + 1 < COLUMNS {
            let pad = width - cell.chars().count() + 2;
            for _ in 0..pad {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

/// Age of a run relative to the clock, e.g. "16 minutes ago".
fn relative_age(now: DateTime<Utc>, start: Option<DateTime<Utc>>) -> String {
    match start {
        None => EMPTY_CELL.to_string(),
        Some(start) => format!("{} ago", human_duration(now - start)),
    }
}

/// Elapsed run time, or a placeholder while the run is in flight.
///
/// A record whose completion precedes its start degrades to a fixed
/// token; a negative duration is never rendered.
fn run_duration(start: Option<DateTime<Utc>>, completion: Option<DateTime<Utc>>) -> String {
    match (start, completion) {
        (Some(start), Some(completion)) => {
            if completion < start {
                UNKNOWN_DURATION.to_string()
            } else {
                human_duration(completion - start)
            }
        }
        (Some(_), None) => IN_PROGRESS_DURATION.to_string(),
        (None, _) => EMPTY_CELL.to_string(),
    }
}

/// Coarse human duration using the largest non-zero unit.
fn human_duration(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);

    let (count, unit) = if seconds >= 86_400 {
        (seconds / 86_400, "day")
    } else if seconds >= 3_600 {
        (seconds / 3_600, "hour")
    } else if seconds >= 60 {
        (seconds / 60, "minute")
    } else {
        (seconds, "second")
    };

    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// First seven characters of a commit SHA.
fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(7) {
        Some((index, _)) => &sha[..index],
        None => sha,
    }
}
