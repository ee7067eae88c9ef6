// benches/classify.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use scraper::Html;

use medic_scrape::{
    extract::{classify, TextFragment},
    log::RunLog,
    progress::NullProgress,
    runner::run_with,
    config::options::AppOptions,
    session::SnapshotSession,
};

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/results_page.html"))
        .expect("read tests/fixtures/results_page.html")
}

fn card_fragments() -> Vec<TextFragment> {
    [
        "12 rue de Paris",
        "75001",
        "Secteur 1, Conventionné",
        "Prochaine disponibilité: lundi",
        "Parle anglais, espagnol",
        "Moyens de paiement: chèque, espèces",
    ]
    .into_iter()
    .map(TextFragment::new)
    .collect()
}

fn bench_classify(c: &mut Criterion) {
    let frags = card_fragments();
    c.bench_function("classify_card", |b| {
        b.iter(|| black_box(classify(black_box(&frags))).len())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let html = load_sample();
    let doc = Html::parse_document(&html);
    let mut opts = AppOptions::default();
    opts.export.auto_export = false;
    let log = RunLog::silent();

    c.bench_function("snapshot_pipeline", |b| {
        b.iter(|| {
            let session = SnapshotSession::new(&doc);
            let summary = run_with(&session, black_box(&opts), &log, &mut NullProgress)
                .expect("snapshot run");
            black_box(summary.records.len())
        })
    });
}

criterion_group!(benches, bench_classify, bench_snapshot);
criterion_main!(benches);
