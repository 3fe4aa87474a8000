use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tempfile::TempDir;

use tcas_prep::adjust::FeePolicy;
use tcas_prep::prepare::{self, PrepareArgs};
use tcas_prep::{CleanRecord, RawRecord};

fn raw_record(order: &str, uni: &str, major: &str, fee: &str) -> RawRecord {
    RawRecord {
        order: order.to_string(),
        start_url: "https://mytcas.com".to_string(),
        uni: uni.to_string(),
        uni_href: "https://mytcas.com/universities".to_string(),
        major: major.to_string(),
        major_href: String::new(),
        minor: String::new(),
        minor_href: String::new(),
        course: String::new(),
        course_href: String::new(),
        course_name: String::new(),
        fee: fee.to_string(),
        success_rate: "ประมาณ 85%".to_string(),
        round1: "รับ 10 คน".to_string(),
        round2: "-".to_string(),
        round3: "5".to_string(),
        round4: String::new(),
    }
}

fn write_input_csv(path: &Path, records: &[RawRecord]) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    for record in records {
        writer.serialize(record).unwrap();
    }
    writer.flush().unwrap();
}

fn write_registry(path: &Path) {
    fs::write(
        path,
        r#"[{"uni": "มหาวิทยาลัยมหิดล", "lat": 13.7925, "lon": 100.3233}]"#,
    )
    .unwrap();
}

fn read_output(path: &Path) -> Vec<CleanRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|r| r.unwrap()).collect()
}

#[test]
fn test_full_pipeline_filter_clean_adjust_enrich_persist() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("tcas.csv");
    let output = temp_dir.path().join("out").join("data_mark_01.csv");
    let registry = temp_dir.path().join("coords.json");

    // Three rows match the keyword, two of them identical; one law row
    // does not match at all.
    let engineering = raw_record(
        "1",
        "มหาวิทยาลัยมหิดล",
        "10. วิศวกรรมศาสตร์",
        "ตลอดหลักสูตร 70,000 บาท",
    );
    let duplicate = raw_record(
        "2",
        "มหาวิทยาลัยที่ไม่รู้จัก",
        "วิศวกรรมคอมพิวเตอร์",
        "150,000 บาท/ปี",
    );
    let law = raw_record("3", "มหาวิทยาลัยมหิดล", "นิติศาสตร์", "40,000 บาท/ปี");
    write_input_csv(
        &input,
        &[engineering, duplicate.clone(), duplicate, law],
    );
    write_registry(&registry);

    let args = PrepareArgs {
        input,
        output: output.clone(),
        registry,
        keyword: "วิศวกรรม".to_string(),
        fee_policy: FeePolicy::Tiered,
    };
    prepare::run(args).unwrap();

    // Header row plus exactly the two unique matching rows.
    let header = BufReader::new(File::open(&output).unwrap())
        .lines()
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(
        header,
        "uni,major,minor,course,fee,success_rate,round1,round2,round3,round4,lat,lon"
    );

    let rows = read_output(&output);
    assert_eq!(rows.len(), 2);

    let mahidol = &rows[0];
    assert_eq!(mahidol.uni, "มหาวิทยาลัยมหิดล");
    assert_eq!(mahidol.major, "วิศวกรรมศาสตร์");
    assert_eq!(mahidol.fee, 560_000); // marked whole-programme fee, rescaled
    assert_eq!(mahidol.success_rate, 85);
    assert_eq!(mahidol.round1, 10);
    assert_eq!(mahidol.round2, 0);
    assert_eq!(mahidol.round3, 5);
    assert_eq!(mahidol.round4, 0);
    assert_eq!(mahidol.lat, Some(13.7925));
    assert_eq!(mahidol.lon, Some(100.3233));

    let unknown = &rows[1];
    assert_eq!(unknown.fee, 1_200_000); // per-year fee under 200,000, rescaled
    assert_eq!(unknown.lat, None);
    assert_eq!(unknown.lon, None);
}

#[test]
fn test_output_round_trips_through_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    let records = vec![
        CleanRecord {
            uni: "มหาวิทยาลัยมหิดล".to_string(),
            major: "วิศวกรรมศาสตร์".to_string(),
            minor: "วิศวกรรมโยธา".to_string(),
            course: "วศ.บ.".to_string(),
            fee: 560_000,
            success_rate: 85,
            round1: 10,
            round2: 0,
            round3: 5,
            round4: 0,
            lat: Some(13.7925),
            lon: Some(100.3233),
        },
        CleanRecord {
            uni: "มหาวิทยาลัยที่ไม่รู้จัก".to_string(),
            major: "วิศวกรรมคอมพิวเตอร์".to_string(),
            minor: String::new(),
            course: String::new(),
            fee: 0,
            success_rate: 0,
            round1: 0,
            round2: 0,
            round3: 0,
            round4: 0,
            lat: None,
            lon: None,
        },
    ];

    prepare::write_clean_records(&path, &records).unwrap();
    let read_back = read_output(&path);

    assert_eq!(read_back, records);
}

#[test]
fn test_missing_input_column_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.csv");
    fs::write(&input, "uni,major\nมหาวิทยาลัยมหิดล,วิศวกรรมศาสตร์\n").unwrap();

    let result = prepare::read_raw_records(&input);

    assert!(result.is_err());
}

#[test]
fn test_persistence_failure_is_reported_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("tcas.csv");
    let registry = temp_dir.path().join("coords.json");
    write_input_csv(
        &input,
        &[raw_record("1", "มหาวิทยาลัยมหิดล", "วิศวกรรมศาสตร์", "-")],
    );
    write_registry(&registry);

    // The output parent is an existing file, so the write must fail.
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let output = blocker.join("out.csv");

    let args = PrepareArgs {
        input,
        output: output.clone(),
        registry,
        keyword: "วิศวกรรม".to_string(),
        fee_policy: FeePolicy::Tiered,
    };

    // The run reports the failure and still completes.
    prepare::run(args).unwrap();
    assert!(!output.exists());
}

#[test]
fn test_write_leaves_no_partial_file_behind() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    prepare::write_clean_records(&path, &[]).unwrap();

    // Only the final file exists; the staging file was renamed away.
    assert!(path.exists());
    assert!(!temp_dir.path().join("out.csv.tmp").exists());
}
