//! Bağımsız çalışan senaryo adımları arasında durumu taşıyan JSON dosyası.
//! Adımlar sıralı çalışır varsayımıyla kilitleme yok; yazma işlemi yine de
//! atomik yapılır (önce geçici dosya, sonra rename).

use crate::error::SuiteError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub employee: Option<EmployeeRecord>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub system_user: Option<SystemUserRecord>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub supervisor: Option<SupervisorRecord>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub leave_request: Option<LeaveRecord>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<String>,
}

impl Default for TestData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            employee: None,
            system_user: None,
            supervisor: None,
            leave_request: None,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub employee_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUserRecord {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorRecord {
    pub name: String,
    pub assigned_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub from_date: String,
    pub to_date: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
    pub applied_at: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approved_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approved_by: Option<String>,
}

pub struct TestDataStore {
    path: PathBuf,
}

impl TestDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Dosya yoksa boş kayıtla başlar; eksik anahtar "önceki adım
    /// çalışmadı" anlamına gelir
    pub fn load(&self) -> Result<TestData, SuiteError> {
        if !self.path.exists() {
            tracing::debug!("Durum dosyası bulunamadı: {:?}", self.path);
            return Ok(TestData::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Oku-değiştir-yaz döngüsü, her adım kendi anahtarını ekler
    pub fn update<F>(&self, mutate: F) -> Result<TestData, SuiteError>
    where
        F: FnOnce(&mut TestData),
    {
        let mut data = self.load()?;
        mutate(&mut data);
        self.save(&data)?;
        Ok(data)
    }

    pub fn save(&self, data: &TestData) -> Result<(), SuiteError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(data)?;

        // Yarım yazılmış dosya bırakmamak için önce geçici dosyaya yaz
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!("Durum dosyası kaydedildi: {:?}", self.path);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SuiteError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::info!("Durum dosyası silindi: {:?}", self.path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = TestDataStore::new(dir.path().join("test-data.json"));

        let data = store.load().unwrap();
        assert_eq!(data.schema_version, SCHEMA_VERSION);
        assert!(data.employee.is_none());
        assert!(data.created_at.is_none());
    }

    #[test]
    fn test_update_merges_incrementally() {
        let dir = tempfile::tempdir().unwrap();
        let store = TestDataStore::new(dir.path().join("test-data.json"));

        store
            .update(|data| {
                data.employee = Some(EmployeeRecord {
                    first_name: "Jane".to_string(),
                    last_name: "Doe".to_string(),
                    full_name: "Jane Doe".to_string(),
                    employee_id: Some("0042".to_string()),
                });
            })
            .unwrap();

        store
            .update(|data| {
                data.supervisor = Some(SupervisorRecord {
                    name: "Odis Adalwin".to_string(),
                    assigned_at: "2025-03-01T10:00:00Z".to_string(),
                });
            })
            .unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.employee.unwrap().full_name, "Jane Doe");
        assert_eq!(data.supervisor.unwrap().name, "Odis Adalwin");
    }

    #[test]
    fn test_save_is_atomic_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-data.json");
        let store = TestDataStore::new(&path);

        store.save(&TestData::default()).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-data.json");
        let store = TestDataStore::new(&path);

        store
            .update(|data| {
                data.employee = Some(EmployeeRecord {
                    first_name: "Jane".to_string(),
                    last_name: "Doe".to_string(),
                    full_name: "Jane Doe".to_string(),
                    employee_id: None,
                });
            })
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"schemaVersion\""));
        assert!(raw.contains("\"firstName\""));
        assert!(raw.contains("\"fullName\""));
        // boş anahtarlar hiç yazılmaz
        assert!(!raw.contains("\"employeeId\""));
        assert!(!raw.contains("\"leaveRequest\""));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-data.json");
        let store = TestDataStore::new(&path);

        store.save(&TestData::default()).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
    }
}
