//! Site assembly: pages on disk, index links, section presence.

use tempfile::TempDir;

use prism_analysis::counts::{CountEntry, FreqEntry, GlossedCount};
use prism_analysis::keywords::{JobKeywords, KeywordsAnalysis};
use prism_analysis::patterns::{ComboFrequency, FieldFrequency, MonthCount};
use prism_analysis::pipeline::AnalysisBundle;
use prism_analysis::voc::{ThemeSummary, VocAnalysis};
use prism_core::config::ReportConfig;
use prism_report::site;

fn sample_bundle() -> AnalysisBundle {
    let mut bundle = AnalysisBundle::default();
    bundle.generated_at = "2026-08-06T10:00:00+00:00".into();
    bundle.summary.total_bookings = 4;
    bundle.summary.unique_jobs = 3;
    bundle.summary.unique_models = 3;
    bundle.summary.top_regions = vec![CountEntry { value: "Seoul".into(), count: 2 }];

    bundle.vocabulary.total_jobs = 3;
    bundle.vocabulary.language_distribution =
        vec![CountEntry { value: "korean".into(), count: 2 }];
    bundle.vocabulary.top_phrases = vec![GlossedCount {
        value: "룩북 촬영".into(),
        gloss: Some("lookbook, photoshoot".into()),
        count: 2,
    }];

    bundle.patterns.fields = vec![FieldFrequency {
        field: "usages".into(),
        total_mentions: 3,
        unique_values: 2,
        entries: vec![FreqEntry { value: "commerce".into(), count: 2, pct: 66.7 }],
    }];
    bundle.patterns.combos = vec![ComboFrequency {
        kind: "shoot_type + location".into(),
        entries: vec![FreqEntry { value: "photo + studio".into(), count: 2, pct: 66.7 }],
    }];
    bundle.patterns.monthly = vec![MonthCount { month: "2025-01".into(), jobs: 3 }];

    bundle.voc = Some(VocAnalysis {
        entry_count: 2,
        theme_summaries: vec![ThemeSummary {
            theme: "Pricing & Transparency".into(),
            entry_count: 1,
            share_pct: 50.0,
            sentence_count: 1,
            top_phrases: vec![],
            samples: vec![],
        }],
        korean_phrases: vec![],
        english_phrases: vec![],
    });
    bundle.keywords = Some(KeywordsAnalysis {
        jobs: vec![JobKeywords {
            job_id: 1,
            brand_name: "Acme".into(),
            job_name: "봄 룩북".into(),
            job_keywords: vec!["spring".into()],
            model_keywords: vec!["casual".into()],
            num_models: 2,
        }],
        top_job_keywords: vec![CountEntry { value: "spring".into(), count: 1 }],
        top_model_keywords: vec![],
    });
    bundle
}

#[test]
fn assemble_writes_all_pages_and_index() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig {
        out_dir: Some(dir.path().to_path_buf()),
        title: Some("Test Report".into()),
        ..Default::default()
    };

    let written = site::assemble(&sample_bundle(), &config).unwrap();

    // Index first, then pages, documents, tables.
    assert!(written[0].ends_with("index.html"));
    for expected in [
        "dashboard.html",
        "vocabulary.html",
        "patterns.html",
        "voc.html",
        "keywords.html",
        "consolidated.html",
        "consolidated.md",
        "bundle.json",
    ] {
        assert!(
            written.iter().any(|p| p.ends_with(expected)),
            "missing {expected}"
        );
        assert!(dir.path().join(expected).exists(), "{expected} not on disk");
    }

    // Tables were exported.
    assert!(dir.path().join("tables/phrase_frequency.csv").exists());
    assert!(dir.path().join("tables/usages_frequency.csv").exists());
    assert!(dir.path().join("tables/keywords_summary.csv").exists());

    // Index links every page.
    let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    for link in ["dashboard.html", "vocabulary.html", "patterns.html", "voc.html", "keywords.html", "consolidated.html"] {
        assert!(index.contains(link), "index missing link to {link}");
    }
    assert!(index.contains("Test Report"));
}

#[test]
fn optional_pages_skipped_without_data() {
    let dir = TempDir::new().unwrap();
    let mut bundle = sample_bundle();
    bundle.voc = None;
    bundle.keywords = None;

    let config = ReportConfig {
        out_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    site::assemble(&bundle, &config).unwrap();

    assert!(!dir.path().join("voc.html").exists());
    assert!(!dir.path().join("keywords.html").exists());
    let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(!index.contains("voc.html"));
}

#[test]
fn unknown_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig {
        out_dir: Some(dir.path().to_path_buf()),
        formats: vec!["pdf".into()],
        ..Default::default()
    };

    let err = site::assemble(&sample_bundle(), &config).unwrap_err();
    assert!(err.to_string().contains("pdf"));
}

#[test]
fn user_text_is_escaped_in_pages() {
    let dir = TempDir::new().unwrap();
    let mut bundle = sample_bundle();
    bundle.keywords.as_mut().unwrap().jobs[0].brand_name = "<script>alert(1)</script>".into();

    let config = ReportConfig {
        out_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    site::assemble(&bundle, &config).unwrap();

    let page = std::fs::read_to_string(dir.path().join("keywords.html")).unwrap();
    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("&lt;script&gt;"));
}
