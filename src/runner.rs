// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use scraper::Html;

use crate::{
    config::options::{AppOptions, Source},
    extract::{assemble, DoctorRecord},
    file::export_records,
    filter::filter,
    log::RunLog,
    progress::Progress,
    search::SearchForm,
    session::{Scope, Session, SessionError, SnapshotSession},
    specs::results_page::CARDS,
};

/// How a run ended. Only environment faults are errors; everything here is a
/// normal ending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Records were accepted (and written, when auto-export is on).
    Done,
    /// The results page had no cards.
    NoResults,
    /// Cards were read but none survived extraction and filtering.
    NoRecords,
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub cards_found: usize,
    pub extracted: usize,
    pub skipped: usize,
    /// Accepted records, in page order.
    pub records: Vec<DoctorRecord>,
    pub written: Option<PathBuf>,
}

impl RunSummary {
    fn empty(outcome: Outcome, cards_found: usize) -> Self {
        Self { outcome, cards_found, extracted: 0, skipped: 0, records: Vec::new(), written: None }
    }
}

/// Top-level runner: open the configured source, run, release the browser.
/// Pass [`NullProgress`](crate::progress::NullProgress) when no UI updates are wanted.
pub fn run(
    opts: &AppOptions,
    log: &RunLog,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    let result = match &opts.source {
        Source::Snapshot(path) => run_snapshot(path, opts, log, progress),
        Source::Live => run_live(opts, log, progress),
    };

    progress.finish();
    if let Err(e) = &result {
        loge!(log, "Run aborted: {}", e);
    }
    result
}

fn run_snapshot(
    path: &Path,
    opts: &AppOptions,
    log: &RunLog,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    logf!(log, "Source: snapshot {}", path.display());
    let html = fs::read_to_string(path)
        .map_err(|e| SessionError::Environment(format!("cannot read {}: {e}", path.display())))?;
    let doc = Html::parse_document(&html);
    let session = SnapshotSession::new(&doc);
    run_with(&session, opts, log, progress)
}

#[cfg(feature = "webdriver")]
fn run_live(
    opts: &AppOptions,
    log: &RunLog,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    use crate::session::WebDriverSession;

    logf!(
        log,
        "Source: live {} via {}{}",
        opts.browser.kind.label(),
        opts.browser.webdriver_url,
        if opts.browser.headless { " (headless)" } else { "" }
    );
    let mut session = WebDriverSession::connect(&opts.browser)?;
    let result = run_with(&session, opts, log, progress);
    // Drop closes too; closing here surfaces the error in the log.
    if let Err(e) = session.close() {
        logw!(log, "Browser close failed: {}", e);
    }
    result
}

#[cfg(not(feature = "webdriver"))]
fn run_live(
    _opts: &AppOptions,
    _log: &RunLog,
    _progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    Err(SessionError::Environment(s!("built without the `webdriver` feature; use a saved page")).into())
}

/// The pipeline over any session: search (live only), cards, records, filter,
/// export.
pub fn run_with<S: Session>(
    session: &S,
    opts: &AppOptions,
    log: &RunLog,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    if session.is_live() {
        prepare_results_page(session, opts, log)?;
        progress.log("Search submitted, reading results…");
    }

    let cards = CARDS.locate(session, Scope::Page, log)?;
    if cards.is_empty() {
        logw!(log, "No result cards found; nothing to export");
        progress.log("No results found.");
        return Ok(RunSummary::empty(Outcome::NoResults, 0));
    }

    let found = cards.nodes.len();
    let take = found.min(opts.search.limit);
    logf!(log, "{} card(s) found, reading {}", found, take);
    progress.begin(take);

    let mut extracted = Vec::with_capacity(take);
    let mut skipped = 0;
    for (i, card) in cards.nodes.iter().take(take).enumerate() {
        match assemble(session, card, log)? {
            Some(rec) => {
                logd!(log, "card {}: {}", i + 1, rec.name);
                extracted.push(rec);
                progress.item_done(i);
            }
            None => {
                skipped += 1;
                progress.item_failed(i);
            }
        }
    }

    let n_extracted = extracted.len();
    let records = filter(extracted, &opts.filter);
    logf!(
        log,
        "{} extracted, {} skipped, {} accepted by filter ({}{})",
        n_extracted,
        skipped,
        records.len(),
        opts.filter.sector,
        if opts.filter.video_only { ", video only" } else { "" }
    );

    if records.is_empty() {
        logw!(log, "No record matched the criteria; nothing to export");
        progress.log("No doctor matched the criteria.");
        return Ok(RunSummary { extracted: n_extracted, skipped, ..RunSummary::empty(Outcome::NoRecords, found) });
    }

    let written = if opts.export.auto_export {
        let path = export_records(&records, &opts.export, &opts.filter)?;
        logf!(log, "Wrote {} record(s) to {}", records.len(), path.display());
        progress.log(&format!("Saved {} doctors to {}", records.len(), path.display()));
        Some(path)
    } else {
        None
    };

    Ok(RunSummary {
        outcome: Outcome::Done,
        cards_found: found,
        extracted: n_extracted,
        skipped,
        records,
        written,
    })
}

/// Landing page → filtered results page. Only navigation failure is fatal;
/// the form steps are best-effort.
fn prepare_results_page<S: Session>(
    session: &S,
    opts: &AppOptions,
    log: &RunLog,
) -> Result<(), Box<dyn Error>> {
    let search = &opts.search;
    session.navigate(&search.base_url)?;
    logf!(log, "Opened {}", search.base_url);
    if !search.pace.after_load.is_zero() {
        thread::sleep(search.pace.after_load);
    }

    let form = SearchForm::new(session, log, search.pace);
    form.dismiss_consent_banner()?;

    let located = form.set_location(&search.location)?;
    let specced = form.set_speciality(&search.speciality)?;
    let submitted = form.submit()?;
    if !(located && specced && submitted) {
        loge!(log, "Search form incomplete; reading whatever page is shown");
    }

    form.apply_filter_panel(&opts.filter)?;
    Ok(())
}
