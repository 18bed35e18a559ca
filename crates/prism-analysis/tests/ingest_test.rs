//! Ingest lifecycle: CSV loading, row-error accumulation, job grouping.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use prism_analysis::ingest::{group_jobs, load_bookings, load_voc};

const BOOKINGS_HEADER: &str = "job_id,talent_id,client_id,brand_name,job_name,inquiry_text,shoot_types,shoot_locations,shoot_details,usages,extra_needs,copyright,shoot_hours,region,talent_name,talent_nationality,price_client,price_talent,start_date_time,headshot,thumbnails,concept_photos";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn loads_bookings_and_parses_array_cells() {
    let dir = TempDir::new().unwrap();
    let csv = format!(
        "{BOOKINGS_HEADER}\n\
         101,7,3,Acme,봄 룩북,미니멀 촬영 문의,\"{{photo,video}}\",\"{{studio}}\",{{}},\"{{commerce,sns}}\",{{}},12,4,Seoul,Mina,korean,500000,350000,2025-03-02 10:00:00,,{{}},{{}}\n\
         101,8,3,Acme,봄 룩북,미니멀 촬영 문의,\"{{photo}}\",\"{{studio}}\",{{}},\"{{commerce}}\",{{}},12,4,Seoul,Jae,korean,500000,350000,2025-03-02 10:00:00,,{{}},{{}}\n"
    );
    let path = write_file(&dir, "bookings.csv", &csv);

    let report = load_bookings(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.data.len(), 2);

    let first = &report.data[0];
    assert_eq!(first.job_id, 101);
    assert_eq!(first.talent_id, Some(7));
    assert_eq!(first.shoot_types, vec!["photo", "video"]);
    assert_eq!(first.usages, vec!["commerce", "sns"]);
    assert_eq!(first.copyright_months, Some(12.0));

    let jobs = group_jobs(&report.data);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].booking_count(), 2);
    assert_eq!(jobs[0].first().talent_name, "Mina");
}

#[test]
fn bad_rows_are_skipped_and_reported() {
    let dir = TempDir::new().unwrap();
    let csv = format!(
        "{BOOKINGS_HEADER}\n\
         ,7,3,Acme,No Job Id,text,{{}},{{}},{{}},{{}},{{}},12,4,Seoul,A,korean,1,1,2025-01-01,,{{}},{{}}\n\
         202,7,3,Acme,Valid,text,{{}},{{}},{{}},{{}},{{}},12,4,Seoul,A,korean,1,1,2025-01-01,,{{}},{{}}\n"
    );
    let path = write_file(&dir, "bookings.csv", &csv);

    let report = load_bookings(&path).unwrap();
    assert_eq!(report.data.len(), 1);
    assert_eq!(report.data[0].job_id, 202);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn float_rendered_ids_are_accepted() {
    let dir = TempDir::new().unwrap();
    let csv = format!(
        "{BOOKINGS_HEADER}\n\
         303.0,9.0,,Brand,Job,text,{{}},{{}},{{}},{{}},{{}},,,,,,,,,,{{}},{{}}\n"
    );
    let path = write_file(&dir, "bookings.csv", &csv);

    let report = load_bookings(&path).unwrap();
    assert_eq!(report.data[0].job_id, 303);
    assert_eq!(report.data[0].talent_id, Some(9));
    assert_eq!(report.data[0].client_id, None);
}

#[test]
fn missing_file_is_a_file_level_error() {
    let dir = TempDir::new().unwrap();
    let err = load_bookings(&dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn empty_bookings_file_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bookings.csv", &format!("{BOOKINGS_HEADER}\n"));

    let report = load_bookings(&path).unwrap();
    assert!(report.is_clean());
    assert!(report.data.is_empty());
}

#[test]
fn voc_rows_without_text_are_dropped() {
    let dir = TempDir::new().unwrap();
    let csv = "Categories,User Type,KOR,ENG\n\
               praise,client,가격이 투명해요,Pricing is transparent\n\
               empty,client,,\n";
    let path = write_file(&dir, "voc.csv", csv);

    let report = load_voc(&path).unwrap();
    assert_eq!(report.data.len(), 1);
    assert_eq!(report.data[0].category, "praise");
    assert_eq!(report.data[0].korean, "가격이 투명해요");
}
