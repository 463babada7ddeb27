// Composition tests — the whole pipeline from files on disk to report files.
//
// These tests exercise the data flow between modules:
//   Loader -> Vectorizer -> Similarity Matrix -> Ranking -> Summary -> Reports
// using temporary directories for both submissions and reports.

use std::fs;
use std::path::Path;

use simcheck::error::CheckError;
use simcheck::extract::pdf::PdfExtractor;
use simcheck::extract::traits::TextExtractor;
use simcheck::output::pdf::{build_document, MAX_DETAIL_ROWS, TRUNCATION_NOTICE};
use simcheck::output::{text, write_reports, ReportFormat};
use simcheck::pipeline::check::{
    compare_corpus, run_check, run_check_files, CheckOptions, CheckOutcome, SimilarityReport,
};
use simcheck::pipeline::loader::load_files;
use simcheck::samples::{self, SampleOptions};
use simcheck::scoring::risk::{PlagiarismBadge, RiskLevel};
use simcheck::similarity::matrix::SimilarityMatrix;
use simcheck::similarity::traits::{ComparisonMode, SimilarityStrategy};

const ESSAY_ML: &str = "Machine learning enables systems to learn from data and improve \
                        automatically. Supervised learning uses labeled data to train models.";
const ESSAY_ML_COPY: &str = "Machine learning enables systems to learn from data and improve \
                             automatically. Supervised learning uses labeled data to train models.";
const ESSAY_GEO: &str = "The Himalayas form the northern mountain boundary. Major rivers include \
                         the Ganges, Brahmaputra, and Yamuna.";

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn expect_report(outcome: CheckOutcome) -> SimilarityReport {
    match outcome {
        CheckOutcome::Compared(report) => report,
        CheckOutcome::NothingToCompare { document, .. } => {
            panic!("expected a comparison, got a single document: {}", document.id)
        }
    }
}

// ============================================================
// Pipeline outcomes
// ============================================================

#[test]
fn copied_essay_is_flagged_high_risk() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "alice.txt", ESSAY_ML);
    write(dir.path(), "bob.txt", ESSAY_ML_COPY);
    write(dir.path(), "carol.txt", ESSAY_GEO);

    let report = expect_report(run_check(dir.path(), &CheckOptions::default()).unwrap());

    assert_eq!(report.summary.total_documents, 3);
    assert_eq!(report.summary.total_comparisons, 3);

    let top = &report.results[0];
    assert_eq!((top.doc_a.as_str(), top.doc_b.as_str()), ("alice.txt", "bob.txt"));
    assert!((top.score - 100.0).abs() < 1e-6);
    assert_eq!(top.risk, RiskLevel::High);
    assert_eq!(report.top_badge(), PlagiarismBadge::Plagiarized);

    // Only the copied pair clears the default 50% threshold
    assert_eq!(report.above_threshold().count(), 1);
    assert!(report.warnings.is_empty());
}

#[test]
fn one_bad_file_out_of_three_leaves_one_comparison() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", ESSAY_ML);
    write(dir.path(), "b.txt", ESSAY_GEO);
    write(dir.path(), "c.txt", "   ");

    let report = expect_report(run_check(dir.path(), &CheckOptions::default()).unwrap());

    assert_eq!(report.summary.total_documents, 2);
    assert_eq!(report.summary.total_comparisons, 1);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].id, "c.txt");
}

#[test]
fn single_document_has_nothing_to_compare() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "only.txt", ESSAY_ML);
    write(dir.path(), "slides.pptx", "binary-ish");

    match run_check(dir.path(), &CheckOptions::default()).unwrap() {
        CheckOutcome::NothingToCompare { document, warnings } => {
            assert_eq!(document.id, "only.txt");
            assert_eq!(warnings.len(), 1);
        }
        CheckOutcome::Compared(_) => panic!("a single document cannot be compared"),
    }
}

#[test]
fn no_valid_documents_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "empty.txt", "");
    write(dir.path(), "image.png", "png");

    let err = run_check(dir.path(), &CheckOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CheckError>(),
        Some(CheckError::NoDocuments(_))
    ));
}

#[test]
fn in_memory_uploads_run_the_same_pipeline() {
    let files = vec![
        ("one.txt", ESSAY_ML.as_bytes().to_vec()),
        ("two.txt", ESSAY_GEO.as_bytes().to_vec()),
    ];
    let options = CheckOptions {
        mode: ComparisonMode::Enhanced,
        threshold: 0.0,
    };
    let report = expect_report(run_check_files(files, &options).unwrap());
    assert_eq!(report.mode, ComparisonMode::Enhanced);
    assert_eq!(report.results.len(), 1);
    // Threshold 0 flags everything
    assert_eq!(report.above_threshold().count(), 1);
}

#[test]
fn empty_upload_is_an_input_error() {
    let files: Vec<(&str, Vec<u8>)> = vec![("blank.txt", b" ".to_vec())];
    let err = run_check_files(files, &CheckOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CheckError>(),
        Some(CheckError::NoDocumentsProvided)
    ));
}

/// A stand-in strategy: proves ranking and summary only depend on the matrix.
struct FixedStrategy;

impl SimilarityStrategy for FixedStrategy {
    fn name(&self) -> &str {
        "fixed"
    }

    fn similarity_matrix(&self, texts: &[String]) -> anyhow::Result<SimilarityMatrix> {
        let n = texts.len();
        let values = (0..n * n)
            .map(|k| if k / n == k % n { 1.0 } else { 0.75 })
            .collect();
        SimilarityMatrix::from_row_major(n, values)
            .ok_or_else(|| anyhow::anyhow!("bad shape"))
    }
}

#[test]
fn strategy_can_be_swapped() {
    let loaded = load_files(vec![
        ("x.txt", b"first".to_vec()),
        ("y.txt", b"second".to_vec()),
        ("z.txt", b"third".to_vec()),
    ]);
    let outcome = compare_corpus(loaded, &FixedStrategy, &CheckOptions::default()).unwrap();
    let report = expect_report(outcome);
    assert_eq!(report.results.len(), 3);
    assert!(report.results.iter().all(|r| (r.score - 75.0).abs() < 1e-9));
    assert!(report.results.iter().all(|r| r.risk == RiskLevel::Medium));
    assert!((report.summary.average - 75.0).abs() < 1e-9);
    assert_eq!(report.top_badge(), PlagiarismBadge::HighlySimilar);
}

// ============================================================
// Reports
// ============================================================

#[test]
fn reports_are_written_in_every_format() {
    let subs = tempfile::tempdir().unwrap();
    write(subs.path(), "alice.txt", ESSAY_ML);
    write(subs.path(), "bob.txt", ESSAY_ML_COPY);
    write(subs.path(), "carol.txt", ESSAY_GEO);
    let report = expect_report(run_check(subs.path(), &CheckOptions::default()).unwrap());

    let out = tempfile::tempdir().unwrap();
    let reports_dir = out.path().join("reports");
    let written = write_reports(&report, &reports_dir, &ReportFormat::ALL).unwrap();

    assert_eq!(written.len(), ReportFormat::ALL.len());
    for path in &written {
        assert!(path.exists(), "{} missing", path.display());
        assert!(fs::metadata(path).unwrap().len() > 0);
    }

    let csv = fs::read_to_string(reports_dir.join("similarity_report.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("File 1,File 2,Similarity (%),Risk Level"));
    assert_eq!(lines.next(), Some("alice.txt,bob.txt,100.00%,HIGH RISK"));
    assert_eq!(lines.count(), 2);

    let txt = fs::read_to_string(reports_dir.join("similarity_report.txt")).unwrap();
    assert!(txt.starts_with("=== Document Similarity Report ==="));
    assert!(txt.contains("Total Documents   : 3"));
    assert!(txt.contains("Total Comparisons : 3"));
    assert!(txt.contains("alice.txt <--> bob.txt : 100.00%  [HIGH RISK]"));

    let pdf = fs::read(reports_dir.join("similarity_report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(reports_dir.join("similarity_report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["summary"]["total_comparisons"], 3);
    assert_eq!(json["mode"], "standard");
}

#[test]
fn text_report_lists_skipped_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", ESSAY_ML);
    write(dir.path(), "b.txt", ESSAY_GEO);
    write(dir.path(), "c.xyz", "??");
    let report = expect_report(run_check(dir.path(), &CheckOptions::default()).unwrap());

    let rendered = text::render(&report);
    assert!(rendered.contains("=== Skipped Files ==="));
    assert!(rendered.contains("c.xyz: unsupported file type (.xyz)"));
}

#[test]
fn pdf_report_caps_detail_rows() {
    // 15 documents -> 105 pairs, more than the detail cap
    let files: Vec<(String, Vec<u8>)> = (0..15)
        .map(|i| (format!("doc_{i:02}.txt"), format!("shared words plus token{i}").into_bytes()))
        .collect();
    let report = expect_report(run_check_files(files, &CheckOptions::default()).unwrap());
    assert!(report.results.len() > MAX_DETAIL_ROWS);

    let mut doc = build_document(&report).unwrap();
    assert!(doc.get_pages().len() >= 2);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    let text = PdfExtractor.extract(&bytes).unwrap();
    assert!(text.contains("Document Similarity Report"));
    assert!(text.contains(TRUNCATION_NOTICE));
}

// ============================================================
// Sample generator -> pipeline
// ============================================================

#[test]
fn generated_samples_cluster_by_topic() {
    let dir = tempfile::tempdir().unwrap();
    let options = SampleOptions {
        count: 10,
        lines_per_doc: 40,
        per_topic: 5,
        seed: Some(42),
    };
    let written = samples::generate(dir.path(), &options).unwrap();
    assert_eq!(written.len(), 10);

    let report = expect_report(run_check(dir.path(), &CheckOptions::default()).unwrap());
    assert_eq!(report.summary.total_comparisons, 45);

    // sample_1..5 share a topic, sample_6..10 share another
    let topic = |name: &str| {
        let n: usize = name
            .trim_start_matches("sample_")
            .trim_end_matches(".txt")
            .parse()
            .unwrap();
        (n - 1) / 5
    };
    let top = &report.results[0];
    assert_eq!(topic(&top.doc_a), topic(&top.doc_b));
    let bottom = report.results.last().unwrap();
    assert_ne!(topic(&bottom.doc_a), topic(&bottom.doc_b));
}
