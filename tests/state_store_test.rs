use ik_otomasyon::state::{
    EmployeeRecord, LeaveRecord, SystemUserRecord, TestData, TestDataStore, SCHEMA_VERSION,
};

fn sample_employee() -> EmployeeRecord {
    EmployeeRecord {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        full_name: "Jane Doe".to_string(),
        employee_id: Some("0042".to_string()),
    }
}

#[test]
fn test_chained_updates_accumulate_workflow_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestDataStore::new(dir.path().join("test-data.json"));

    // 1-2. adım: çalışan + kimlik bilgileri
    store
        .update(|data| {
            data.employee = Some(sample_employee());
            data.system_user = Some(SystemUserRecord {
                username: "emp12345".to_string(),
                password: "TestPass123!".to_string(),
            });
        })
        .unwrap();

    // 5. adım: izin başvurusu
    store
        .update(|data| {
            data.leave_request = Some(LeaveRecord {
                from_date: "2025-03-10".to_string(),
                to_date: "2025-03-12".to_string(),
                comment: Some("vacation".to_string()),
                applied_at: "2025-03-05T09:00:00Z".to_string(),
                approved_at: None,
                approved_by: None,
            });
        })
        .unwrap();

    // 8. adım: onay metadata'sı mevcut kaydın üzerine eklenir
    store
        .update(|data| {
            if let Some(leave) = data.leave_request.as_mut() {
                leave.approved_at = Some("2025-03-06T10:00:00Z".to_string());
                leave.approved_by = Some("supervisor1".to_string());
            }
        })
        .unwrap();

    let data = store.load().unwrap();
    assert_eq!(data.employee.unwrap().full_name, "Jane Doe");
    assert_eq!(data.system_user.unwrap().username, "emp12345");

    let leave = data.leave_request.unwrap();
    assert_eq!(leave.from_date, "2025-03-10");
    assert_eq!(leave.comment.as_deref(), Some("vacation"));
    assert_eq!(leave.approved_by.as_deref(), Some("supervisor1"));
}

#[test]
fn test_absent_keys_signal_upstream_step_not_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestDataStore::new(dir.path().join("test-data.json"));

    store
        .update(|data| {
            data.employee = Some(sample_employee());
        })
        .unwrap();

    let data = store.load().unwrap();
    assert!(data.employee.is_some());
    assert!(data.system_user.is_none());
    assert!(data.supervisor.is_none());
    assert!(data.leave_request.is_none());
}

#[test]
fn test_schema_version_defaults_on_old_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test-data.json");

    // schemaVersion alanı olmayan eski biçim
    std::fs::write(&path, r#"{"createdAt":"2025-01-01T00:00:00Z"}"#).unwrap();

    let store = TestDataStore::new(&path);
    let data = store.load().unwrap();
    assert_eq!(data.schema_version, SCHEMA_VERSION);
    assert_eq!(data.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("test-data.json");
    let store = TestDataStore::new(&path);

    store.save(&TestData::default()).unwrap();
    assert!(path.exists());
}
