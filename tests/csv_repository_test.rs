use chrono::NaiveDate;
use ik_otomasyon::models::{LeaveRequest, LeaveStatus, LeaveType};
use ik_otomasyon::repository::csv::split_delimited;
use ik_otomasyon::repository::{CsvLeaveRepository, LeaveRepository};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Geçici dosya oluşturulamadı");
    writeln!(file, "Id,Employee Name,Leave Type,From,To,Status").unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[tokio::test]
async fn test_rows_are_parsed_into_leave_requests() {
    let file = write_csv(&[
        "1,Jane Doe,CAN - FMLA,2025-03-10,2025-03-12,Pending Approval",
        "2,John Smith,CAN - Personal,2025-04-01,2025-04-02,Approved",
    ]);

    let repository = CsvLeaveRepository::new(file.path());
    let requests = repository.leave_requests(None).await.unwrap();

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].leave_type(), LeaveType::Annual);
    assert_eq!(
        requests[0].from_date(),
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    );
    assert_eq!(requests[0].status(), LeaveStatus::PendingApproval);
    assert_eq!(requests[0].employee_name(), Some("Jane Doe"));

    assert_eq!(requests[1].leave_type(), LeaveType::Sick);
    assert_eq!(requests[1].status(), LeaveStatus::Approved);
}

#[tokio::test]
async fn test_employee_name_filter_is_substring_match() {
    let file = write_csv(&[
        "1,Jane Doe,CAN - FMLA,2025-03-10,2025-03-12,Pending Approval",
        "2,John Smith,CAN - Personal,2025-04-01,2025-04-02,Approved",
    ]);

    let repository = CsvLeaveRepository::new(file.path());
    let requests = repository.leave_requests(Some("Doe")).await.unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].employee_name(), Some("Jane Doe"));
}

#[tokio::test]
async fn test_quoted_field_keeps_embedded_delimiter() {
    let file = write_csv(&[r#"1,"Smith, John",CAN - FMLA,2025-01-01,2025-01-03,Pending Approval"#]);

    let repository = CsvLeaveRepository::new(file.path());
    let requests = repository.leave_requests(None).await.unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].employee_name(), Some("Smith, John"));
}

#[tokio::test]
async fn test_missing_file_is_hard_error() {
    let repository = CsvLeaveRepository::new("boyle-bir-dosya-yok.csv");
    let result = repository.leave_requests(None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_by_employee_returns_first_match_or_none() {
    let file = write_csv(&[
        "1,Jane Doe,CAN - FMLA,2025-03-10,2025-03-12,Pending Approval",
        "2,Jane Doe,CAN - Personal,2025-05-01,2025-05-02,Approved",
    ]);

    let repository = CsvLeaveRepository::new(file.path());

    let first = repository
        .leave_request_by_employee("Jane Doe")
        .await
        .unwrap()
        .expect("Kayıt bekleniyordu");
    assert_eq!(first.leave_type(), LeaveType::Annual);

    let none = repository
        .leave_request_by_employee("Nonexistent")
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn test_unrecognized_labels_fall_back_to_defaults() {
    let file = write_csv(&["1,Jane Doe,Gibberish,2025-03-10,2025-03-12,???"]);

    let repository = CsvLeaveRepository::new(file.path());
    let requests = repository.leave_requests(None).await.unwrap();

    assert_eq!(requests[0].leave_type(), LeaveType::Annual);
    assert_eq!(requests[0].status(), LeaveStatus::PendingApproval);
}

#[tokio::test]
async fn test_short_rows_are_skipped() {
    let file = write_csv(&[
        "1,Jane Doe,CAN - FMLA,2025-03-10,2025-03-12,Pending Approval",
        "eksik,satir",
    ]);

    let repository = CsvLeaveRepository::new(file.path());
    let requests = repository.leave_requests(None).await.unwrap();
    assert_eq!(requests.len(), 1);
}

// İki repository stratejisi aynı veriden alan alan eşit nesne üretmeli.
// UI stratejisi canlı tarayıcı istediği için burada CSV çıktısı, UI
// satırının geçeceği aynı eşleme yolundan elle kurulan beklentiyle
// karşılaştırılır.
#[tokio::test]
async fn test_csv_output_matches_equivalent_hand_built_request() {
    let file = write_csv(&["1,Jane Doe,CAN - FMLA,2025-03-10,2025-03-12,Approved"]);

    let repository = CsvLeaveRepository::new(file.path());
    let from_csv = repository
        .leave_request_by_employee("Jane Doe")
        .await
        .unwrap()
        .expect("Kayıt bekleniyordu");

    let expected = LeaveRequest::new(
        LeaveType::from_label("CAN - FMLA"),
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        None,
        Some("Jane Doe".to_string()),
    )
    .unwrap()
    .with_status(LeaveStatus::from_label("Approved"));

    assert_eq!(from_csv, expected);
}

#[test]
fn test_split_delimited_property_from_quoted_line() {
    let fields = split_delimited(r#""Smith, John",FMLA,2025-01-01,2025-01-03,Pending"#);
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[0], "Smith, John");
}
