use crate::error::SuiteError;
use crate::models::{LeaveRequest, LeaveStatus, LeaveType};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;

use super::LeaveRepository;

/// Noktalı virgülsüz klasik CSV: başlık satırı + en az 6 alanlı satırlar.
/// Alan sırası: (kullanılmayan), çalışan adı, izin türü, başlangıç, bitiş,
/// durum. Alanlar ayracı içerebilmek için tırnaklanabilir.
pub struct CsvLeaveRepository {
    csv_path: PathBuf,
}

impl CsvLeaveRepository {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }
}

#[async_trait]
impl LeaveRepository for CsvLeaveRepository {
    async fn leave_requests(
        &self,
        employee_name: Option<&str>,
    ) -> Result<Vec<LeaveRequest>, SuiteError> {
        if !self.csv_path.exists() {
            return Err(SuiteError::IoError(format!(
                "CSV dosyası bulunamadı: {}",
                self.csv_path.display()
            )));
        }

        let content = std::fs::read_to_string(&self.csv_path)?;

        let mut requests = Vec::new();

        // Başlık satırını atla
        for line in content.lines().filter(|l| !l.trim().is_empty()).skip(1) {
            let columns = split_delimited(line);
            if columns.len() < 6 {
                tracing::warn!("⚠️ Eksik alanlı satır atlandı: '{}'", line);
                continue;
            }

            let record_name = columns[1].trim();
            if let Some(filter) = employee_name {
                if !record_name.contains(filter) {
                    continue;
                }
            }

            let from_date = NaiveDate::parse_from_str(columns[3].trim(), "%Y-%m-%d")?;
            let to_date = NaiveDate::parse_from_str(columns[4].trim(), "%Y-%m-%d")?;

            let request = LeaveRequest::new(
                LeaveType::from_label(columns[2].trim()),
                from_date,
                to_date,
                None,
                Some(record_name.to_string()),
            )?
            .with_status(LeaveStatus::from_label(columns[5].trim()));

            requests.push(request);
        }

        Ok(requests)
    }
}

/// Satırı virgülden böler, tırnak içindeki virgülleri korur
pub fn split_delimited(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_fields() {
        let fields = split_delimited("1,Jane Doe,CAN - FMLA,2025-01-01,2025-01-03,Pending");
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[1], "Jane Doe");
    }

    #[test]
    fn test_split_preserves_quoted_delimiter() {
        let fields = split_delimited(r#""Smith, John",FMLA,2025-01-01,2025-01-03,Pending"#);
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], "Smith, John");
    }

    #[test]
    fn test_split_trailing_empty_field() {
        let fields = split_delimited("a,b,");
        assert_eq!(fields, vec!["a", "b", ""]);
    }
}
