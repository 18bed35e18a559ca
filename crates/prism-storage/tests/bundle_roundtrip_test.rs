//! Bundle persistence: save a snapshot, read it back both ways.

use prism_analysis::counts::{CountEntry, FreqEntry, GlossedCount};
use prism_analysis::keywords::{JobKeywords, KeywordsAnalysis};
use prism_analysis::patterns::{
    ComboFrequency, FieldFrequency, MonthCount, NumericSummary, OutlierRow, PatternsAnalysis,
};
use prism_analysis::pipeline::{AnalysisBundle, DatasetSummary};
use prism_analysis::text::VocabularyAnalysis;
use prism_analysis::voc::{ThemeSummary, VocAnalysis};
use prism_storage::queries::{frequencies, job_keywords, numeric, snapshots, voc_themes};
use prism_storage::{load_bundle, load_latest_bundle, save_bundle, Database};

fn sample_bundle() -> AnalysisBundle {
    AnalysisBundle {
        generated_at: "2026-08-06T10:00:00+00:00".to_string(),
        summary: DatasetSummary {
            total_bookings: 4,
            unique_jobs: 3,
            unique_models: 3,
            unique_clients: 3,
            unique_brands: 3,
            top_regions: vec![CountEntry { value: "Seoul".into(), count: 2 }],
            top_nationalities: vec![CountEntry { value: "korean".into(), count: 3 }],
            avg_price_client: Some(616666.6),
            avg_price_talent: Some(416666.6),
            avg_shoot_hours: Some(5.3),
        },
        vocabulary: VocabularyAnalysis {
            total_jobs: 3,
            unique_phrases: 12,
            language_distribution: vec![
                CountEntry { value: "korean".into(), count: 2 },
                CountEntry { value: "english".into(), count: 1 },
            ],
            top_job_names: vec![GlossedCount {
                value: "봄 룩북".into(),
                gloss: Some("spring, lookbook".into()),
                count: 2,
            }],
            top_phrases: vec![GlossedCount {
                value: "룩북 촬영".into(),
                gloss: Some("lookbook, photoshoot".into()),
                count: 2,
            }],
            concept_mentions: vec![CountEntry { value: "minimal".into(), count: 2 }],
        },
        patterns: PatternsAnalysis {
            fields: vec![FieldFrequency {
                field: "shoot_types".into(),
                total_mentions: 3,
                unique_values: 2,
                entries: vec![FreqEntry { value: "photo".into(), count: 2, pct: 66.7 }],
            }],
            numeric: vec![NumericSummary {
                metric: "shoot_hours".into(),
                count: 3,
                mean: 5.3,
                median: 4.0,
                min: 4.0,
                max: 8.0,
            }],
            outliers: vec![OutlierRow {
                metric: "price_client".into(),
                job_id: 2,
                value: 900000.0,
                lower_fence: 100000.0,
                upper_fence: 800000.0,
            }],
            combos: vec![ComboFrequency {
                kind: "shoot_type + location".into(),
                entries: vec![FreqEntry { value: "photo + studio".into(), count: 2, pct: 66.7 }],
            }],
            full_patterns: vec![FreqEntry {
                value: "photo + studio + commerce".into(),
                count: 2,
                pct: 66.7,
            }],
            heatmap: Default::default(),
            monthly: vec![
                MonthCount { month: "2025-01".into(), jobs: 1 },
                MonthCount { month: "2025-02".into(), jobs: 2 },
            ],
            unparsed_dates: 0,
        },
        voc: Some(VocAnalysis {
            entry_count: 2,
            theme_summaries: vec![ThemeSummary {
                theme: "Pricing & Transparency".into(),
                entry_count: 1,
                share_pct: 50.0,
                sentence_count: 2,
                top_phrases: vec![],
                samples: vec![],
            }],
            korean_phrases: vec![],
            english_phrases: vec![],
        }),
        keywords: Some(KeywordsAnalysis {
            jobs: vec![JobKeywords {
                job_id: 1,
                brand_name: "Acme".into(),
                job_name: "봄 룩북".into(),
                job_keywords: vec!["spring".into(), "lookbook".into()],
                model_keywords: vec!["casual".into()],
                num_models: 2,
            }],
            top_job_keywords: vec![],
            top_model_keywords: vec![],
        }),
        jobs: vec![],
    }
}

#[test]
fn save_and_load_by_id() {
    let db = Database::open_in_memory().unwrap();
    let bundle = sample_bundle();

    let snapshot_id = save_bundle(&db, None, &bundle).unwrap();
    let loaded = load_bundle(&db, snapshot_id).unwrap();

    assert_eq!(loaded.generated_at, bundle.generated_at);
    assert_eq!(loaded.summary.total_bookings, 4);
    assert_eq!(loaded.vocabulary.top_job_names[0].value, "봄 룩북");
    assert_eq!(loaded.patterns.monthly.len(), 2);
    assert_eq!(loaded.voc.unwrap().theme_summaries.len(), 1);
    assert_eq!(loaded.keywords.unwrap().jobs[0].num_models, 2);
}

#[test]
fn latest_bundle_wins() {
    let db = Database::open_in_memory().unwrap();
    assert!(load_latest_bundle(&db).unwrap().is_none());

    let mut first = sample_bundle();
    first.generated_at = "2026-08-05T00:00:00+00:00".into();
    save_bundle(&db, None, &first).unwrap();

    let second = sample_bundle();
    save_bundle(&db, None, &second).unwrap();

    let latest = load_latest_bundle(&db).unwrap().unwrap();
    assert_eq!(latest.generated_at, second.generated_at);
}

#[test]
fn normalized_tables_are_populated() {
    let db = Database::open_in_memory().unwrap();
    let bundle = sample_bundle();
    let snapshot_id = save_bundle(&db, None, &bundle).unwrap();

    db.with_conn(|conn| {
        assert_eq!(snapshots::count(conn)?, 1);

        let types = frequencies::query_family(conn, snapshot_id, "field:shoot_types")?;
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].value, "photo");
        assert_eq!(types[0].count, 2);

        let phrases = frequencies::query_family(conn, snapshot_id, "phrase")?;
        assert_eq!(phrases[0].gloss.as_deref(), Some("lookbook, photoshoot"));

        let families = frequencies::families(conn, snapshot_id)?;
        assert!(families.contains(&"monthly".to_string()));
        assert!(families.contains(&"language".to_string()));

        let sums = numeric::query_all(conn, snapshot_id)?;
        assert_eq!(sums.len(), 1);
        assert_eq!(sums[0].metric, "shoot_hours");

        let themes = voc_themes::query_all(conn, snapshot_id)?;
        assert_eq!(themes[0].theme, "Pricing & Transparency");

        let kw = job_keywords::query_all(conn, snapshot_id)?;
        assert_eq!(kw[0].job_keywords, vec!["spring", "lookbook"]);
        Ok(())
    })
    .unwrap();
}
