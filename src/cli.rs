// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, eyre, WrapErr};

use crate::config::consts::MAX_CARDS;
use crate::config::options::{
    AppOptions, BrowserKind, Columns, ExportFormat, FilterCriteria, SectorFilter, Source,
};
use crate::log::{Level, RunLog};
use crate::progress::StderrProgress;
use crate::runner::{self, Outcome};
use crate::store;

/// Scrape Doctolib search results into a CSV/TSV file.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Speciality to search for (prompted if missing)
    #[arg(long)]
    pub speciality: Option<String>,

    /// Location to search in (prompted if missing)
    #[arg(long)]
    pub location: Option<String>,

    /// Sector filter: any, 1, 2, non-conventionne
    #[arg(long, default_value = "any")]
    pub sector: SectorFilter,

    /// Keep only doctors offering video consultations
    #[arg(long)]
    pub video_only: bool,

    /// Read a saved results page instead of driving a browser
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// WebDriver endpoint (defaults to the browser's usual driver port)
    #[arg(long, value_name = "URL")]
    pub webdriver: Option<String>,

    /// chrome or firefox
    #[arg(long, default_value = "chrome")]
    pub browser: BrowserKind,

    #[arg(long)]
    pub headless: bool,

    /// Read at most this many result cards
    #[arg(long, default_value_t = MAX_CARDS)]
    pub limit: usize,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// csv or tsv
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Leave out the videoAvailable column
    #[arg(long)]
    pub no_video_column: bool,

    /// Echo the debug log to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Options for one run. Offline runs don't need search terms.
    pub fn into_options(self, input: &mut impl BufRead) -> color_eyre::Result<AppOptions> {
        let mut opts = AppOptions::default();

        opts.source = match self.html {
            Some(path) => Source::Snapshot(path),
            None => Source::Live,
        };
        let live = opts.source == Source::Live;

        opts.search.speciality = match self.speciality {
            Some(s) => s,
            None if live => prompt(input, "Speciality (e.g. dermatologue): ")?,
            None => s!(),
        };
        opts.search.location = match self.location {
            Some(s) => s,
            None if live => prompt(input, "Location (e.g. Paris): ")?,
            None => s!(),
        };
        if live && (opts.search.speciality.trim().is_empty() || opts.search.location.trim().is_empty()) {
            bail!("speciality and location are required for a live search");
        }
        if self.limit == 0 {
            bail!("--limit must be at least 1");
        }
        opts.search.limit = self.limit;

        opts.filter = FilterCriteria { sector: self.sector, video_only: self.video_only };

        opts.browser.kind = self.browser;
        opts.browser.webdriver_url = self.webdriver.unwrap_or_else(|| s!(self.browser.default_webdriver_url()));
        opts.browser.headless = self.headless;

        opts.export.format = self.format;
        opts.export.columns = if self.no_video_column { Columns::WithoutVideo } else { Columns::Full };
        if let Some(out) = self.out {
            opts.export.out_dir = out;
        }
        Ok(opts)
    }
}

fn prompt(input: &mut impl BufRead, question: &str) -> color_eyre::Result<String> {
    eprint!("{question}");
    io::stderr().flush().ok();
    let mut line = s!();
    input.read_line(&mut line).wrap_err("reading stdin")?;
    Ok(s!(line.trim()))
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let verbose = args.verbose;
    let opts = args.into_options(&mut io::stdin().lock())?;

    let min = if verbose { Level::Debug } else { Level::Info };
    let log = RunLog::to_file(&store::log_path(), min, verbose)
        .wrap_err_with(|| format!("opening {}", store::log_path().display()))?;

    let mut progress = StderrProgress::new();
    let summary = runner::run(&opts, &log, &mut progress).map_err(|e| eyre!("{e}"))?;

    match summary.outcome {
        Outcome::NoResults => eprintln!("No results found."),
        Outcome::NoRecords => eprintln!("No doctor matched the criteria."),
        Outcome::Done => {
            if let Err(e) = store::save_records(&summary.records) {
                logw!(log, "Could not update last-run cache: {}", e);
            }
            if let Some(path) = &summary.written {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_map_onto_options() {
        let args = parse(&[
            "--speciality", "dermatologue", "--location", "Paris",
            "--sector", "1", "--video-only", "--format", "tsv", "--no-video-column", "--limit", "5",
        ]);
        let opts = args.into_options(&mut io::empty()).unwrap();
        assert_eq!(opts.source, Source::Live);
        assert_eq!(opts.search.speciality, "dermatologue");
        assert_eq!(opts.search.limit, 5);
        assert_eq!(opts.filter, FilterCriteria { sector: SectorFilter::Sector1, video_only: true });
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert_eq!(opts.export.columns, Columns::WithoutVideo);
    }

    #[test]
    fn missing_terms_are_prompted() {
        let args = parse(&["--location", "Lyon"]);
        let mut stdin = io::Cursor::new("cardiologue\n");
        let opts = args.into_options(&mut stdin).unwrap();
        assert_eq!(opts.search.speciality, "cardiologue");
        assert_eq!(opts.search.location, "Lyon");
    }

    #[test]
    fn offline_run_needs_no_terms() {
        let args = parse(&["--html", "page.html", "--sector", "non-conventionne"]);
        let opts = args.into_options(&mut io::empty()).unwrap();
        assert_eq!(opts.source, Source::Snapshot(PathBuf::from("page.html")));
        assert_eq!(opts.filter.sector, SectorFilter::NonContracted);
    }

    #[test]
    fn empty_prompt_answer_is_rejected() {
        let args = parse(&[]);
        assert!(args.into_options(&mut io::Cursor::new("\n\n")).is_err());
    }
}
