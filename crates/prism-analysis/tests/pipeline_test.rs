//! End-to-end pipeline: datasets on disk → analysis bundle.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use prism_analysis::Pipeline;
use prism_core::config::{AnalysisConfig, IngestConfig};
use prism_core::events::{PrismEventHandler, StageFinishedEvent};

const BOOKINGS_HEADER: &str = "job_id,talent_id,client_id,brand_name,job_name,inquiry_text,shoot_types,shoot_locations,shoot_details,usages,extra_needs,copyright,shoot_hours,region,talent_name,talent_nationality,price_client,price_talent,start_date_time,headshot,thumbnails,concept_photos";

fn write_file(dir: &TempDir, name: &str, content: &str) {
    let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

fn seed_datasets(dir: &TempDir) {
    let bookings = format!(
        "{BOOKINGS_HEADER}\n\
         1,10,100,Acme,봄 룩북,미니멀 룩북 촬영 문의,\"{{photo}}\",\"{{studio}}\",{{}},\"{{commerce}}\",{{}},12,4,Seoul,Mina,korean,500000,350000,2025-01-10 09:00:00,,{{}},{{}}\n\
         1,11,100,Acme,봄 룩북,미니멀 룩북 촬영 문의,\"{{photo}}\",\"{{studio}}\",{{}},\"{{commerce}}\",{{}},12,4,Seoul,Jae,korean,500000,350000,2025-01-10 09:00:00,,{{}},{{}}\n\
         2,12,101,Blanc,Summer campaign,minimal concept campaign video,\"{{video}}\",\"{{outdoor}}\",{{}},\"{{sns}}\",{{}},6,8,Busan,Ana,american,900000,600000,2025-02-20 13:00:00,,{{}},{{}}\n\
         3,10,102,Cora,화보 촬영,화보 촬영 문의드립니다,\"{{photo}}\",\"{{studio}}\",{{}},\"{{commerce}}\",{{}},12,4,Seoul,Mina,korean,450000,300000,2025-02-05 10:00:00,,{{}},{{}}\n"
    );
    write_file(dir, "bookings.csv", &bookings);

    write_file(
        dir,
        "voc.csv",
        "Categories,User Type,KOR,ENG\n\
         praise,client,가격이 투명해서 좋아요,Pricing is transparent.\n\
         praise,client,모델 검색이 편리해요,Model search is convenient.\n",
    );

    write_file(
        dir,
        "style_tags.csv",
        "talentId,tagName\n10,Street Casual\n11,(New) Active Wear 액티브웨어\n",
    );

    write_file(
        dir,
        "model_profiles.csv",
        "id,gender,hair,eyes,height\n10,female,dark_brown,brown,176\n11,male,black,brown,186\n",
    );
}

struct StageCounter(AtomicUsize);

impl PrismEventHandler for StageCounter {
    fn on_stage_finished(&self, _event: &StageFinishedEvent) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn full_run_produces_a_complete_bundle() {
    let dir = TempDir::new().unwrap();
    seed_datasets(&dir);

    let ingest = IngestConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let counter = Arc::new(StageCounter(AtomicUsize::new(0)));
    let pipeline = Pipeline::new(AnalysisConfig::default()).with_handler(counter.clone());
    let report = pipeline.run(&ingest).unwrap();

    assert!(report.is_clean());
    let bundle = &report.data;

    // Summary metrics match the seeded rows.
    assert_eq!(bundle.summary.total_bookings, 4);
    assert_eq!(bundle.summary.unique_jobs, 3);
    assert_eq!(bundle.summary.unique_models, 3);
    assert_eq!(bundle.summary.unique_brands, 3);
    assert_eq!(bundle.summary.top_regions[0].value, "Seoul");

    // Vocabulary picked up the repeated Korean phrase and glossed it.
    assert_eq!(bundle.vocabulary.total_jobs, 3);
    assert!(bundle
        .vocabulary
        .top_phrases
        .iter()
        .any(|p| p.value.contains("촬영")));

    // Patterns: photo+studio dominates; monthly trend is chronological.
    let type_loc = bundle
        .patterns
        .combos
        .iter()
        .find(|c| c.kind == "shoot_type + location")
        .unwrap();
    assert_eq!(type_loc.entries[0].value, "photo + studio");
    assert_eq!(type_loc.entries[0].count, 2);
    assert_eq!(bundle.patterns.monthly[0].month, "2025-01");
    assert_eq!(bundle.patterns.unparsed_dates, 0);

    // Optional analyses ran.
    let voc = bundle.voc.as_ref().unwrap();
    assert_eq!(voc.entry_count, 2);
    let keywords = bundle.keywords.as_ref().unwrap();
    assert_eq!(keywords.jobs.len(), 3);

    // Ingest + vocabulary + patterns + voc + keywords all reported.
    assert_eq!(counter.0.load(Ordering::SeqCst), 5);
}

#[test]
fn missing_optional_datasets_skip_their_stages() {
    let dir = TempDir::new().unwrap();
    let bookings = format!(
        "{BOOKINGS_HEADER}\n\
         1,10,100,Acme,Job,inquiry text,\"{{photo}}\",\"{{studio}}\",{{}},\"{{commerce}}\",{{}},12,4,Seoul,Mina,korean,1,1,2025-01-10 09:00:00,,{{}},{{}}\n"
    );
    write_file(&dir, "bookings.csv", &bookings);

    let ingest = IngestConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let pipeline = Pipeline::new(AnalysisConfig::default());
    let report = pipeline.run(&ingest).unwrap();

    assert!(report.is_clean());
    assert!(report.data.voc.is_none());
    assert!(report.data.keywords.is_none());
}

#[test]
fn missing_bookings_file_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let ingest = IngestConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let pipeline = Pipeline::new(AnalysisConfig::default());
    assert!(pipeline.run(&ingest).is_err());
}
