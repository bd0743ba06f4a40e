use crate::error::SuiteError;
use chrono::NaiveDate;
use std::fmt;

/// İzin türleri, OrangeHRM demo verisindeki etiketlerle birebir eşleşir
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveType {
    Annual,
    Sick,
}

impl LeaveType {
    pub const fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "CAN - FMLA",
            LeaveType::Sick => "CAN - Personal",
        }
    }

    /// UI'dan veya dosyadan okunan etiketi türe eşler. Tanınmayan metin
    /// varsayılan türe düşer, uyarı loglanır.
    pub fn from_label(label: &str) -> Self {
        if label.contains("FMLA") {
            LeaveType::Annual
        } else if label.contains("Personal") {
            LeaveType::Sick
        } else {
            tracing::warn!("⚠️ Tanınmayan izin türü etiketi: '{}'", label);
            LeaveType::Annual
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveStatus {
    PendingApproval,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            LeaveStatus::PendingApproval => "Pending Approval",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(label: &str) -> Self {
        if label.contains("Pending") {
            LeaveStatus::PendingApproval
        } else if label.contains("Approved") {
            LeaveStatus::Approved
        } else if label.contains("Rejected") {
            LeaveStatus::Rejected
        } else if label.contains("Cancelled") {
            LeaveStatus::Cancelled
        } else {
            tracing::warn!("⚠️ Tanınmayan izin durumu etiketi: '{}'", label);
            LeaveStatus::PendingApproval
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// İzin talebi. Tarih aralığı oluşturma anında doğrulanır; durum dış
/// sistemdeki değişikliği yansıtmak için sonradan güncellenebilir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    leave_type: LeaveType,
    from_date: NaiveDate,
    to_date: NaiveDate,
    comment: Option<String>,
    employee_name: Option<String>,
    status: LeaveStatus,
}

impl LeaveRequest {
    pub fn new(
        leave_type: LeaveType,
        from_date: NaiveDate,
        to_date: NaiveDate,
        comment: Option<String>,
        employee_name: Option<String>,
    ) -> Result<Self, SuiteError> {
        if from_date > to_date {
            return Err(SuiteError::FormValidation(
                "Başlangıç tarihi bitiş tarihinden sonra olamaz".to_string(),
            ));
        }

        Ok(Self {
            leave_type,
            from_date,
            to_date,
            comment,
            employee_name,
            status: LeaveStatus::PendingApproval,
        })
    }

    pub fn annual(
        from_date: NaiveDate,
        to_date: NaiveDate,
        comment: Option<String>,
    ) -> Result<Self, SuiteError> {
        Self::new(LeaveType::Annual, from_date, to_date, comment, None)
    }

    pub fn with_status(mut self, status: LeaveStatus) -> Self {
        self.status = status;
        self
    }

    pub fn leave_type(&self) -> LeaveType {
        self.leave_type
    }

    pub fn from_date(&self) -> NaiveDate {
        self.from_date
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to_date
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn employee_name(&self) -> Option<&str> {
        self.employee_name.as_deref()
    }

    pub fn status(&self) -> LeaveStatus {
        self.status
    }

    pub fn set_status(&mut self, status: LeaveStatus) {
        self.status = status;
    }

    /// Kanonik ISO format, UI'daki tarih alanları da aynı formatı bekliyor
    pub fn from_date_formatted(&self) -> String {
        self.from_date.format("%Y-%m-%d").to_string()
    }

    pub fn to_date_formatted(&self) -> String {
        self.to_date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_after_to_fails() {
        let result = LeaveRequest::annual(date(2025, 3, 12), date(2025, 3, 10), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_range_defaults_to_pending() {
        let request = LeaveRequest::annual(date(2025, 3, 10), date(2025, 3, 12), None).unwrap();
        assert_eq!(request.status(), LeaveStatus::PendingApproval);
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let request = LeaveRequest::annual(date(2025, 3, 10), date(2025, 3, 10), None).unwrap();
        assert_eq!(request.from_date(), request.to_date());
    }

    #[test]
    fn test_date_format_is_canonical_and_idempotent() {
        let request = LeaveRequest::annual(date(2025, 1, 5), date(2025, 1, 5), None).unwrap();
        assert_eq!(request.from_date_formatted(), "2025-01-05");

        let reparsed =
            NaiveDate::parse_from_str(&request.from_date_formatted(), "%Y-%m-%d").unwrap();
        assert_eq!(reparsed, request.from_date());
    }

    #[test]
    fn test_status_mutable_after_construction() {
        let mut request =
            LeaveRequest::annual(date(2025, 3, 10), date(2025, 3, 12), None).unwrap();
        request.set_status(LeaveStatus::Approved);
        assert_eq!(request.status(), LeaveStatus::Approved);
    }

    #[test]
    fn test_leave_type_label_mapping() {
        assert_eq!(LeaveType::from_label("CAN - FMLA"), LeaveType::Annual);
        assert_eq!(LeaveType::from_label("CAN - Personal"), LeaveType::Sick);
        // tanınmayan etiket varsayılana düşer
        assert_eq!(LeaveType::from_label("Bilinmeyen"), LeaveType::Annual);
    }

    #[test]
    fn test_leave_status_label_mapping() {
        assert_eq!(
            LeaveStatus::from_label("Pending Approval"),
            LeaveStatus::PendingApproval
        );
        assert_eq!(LeaveStatus::from_label("Approved"), LeaveStatus::Approved);
        assert_eq!(LeaveStatus::from_label("Rejected"), LeaveStatus::Rejected);
        assert_eq!(LeaveStatus::from_label("Cancelled"), LeaveStatus::Cancelled);
        assert_eq!(LeaveStatus::from_label("???"), LeaveStatus::PendingApproval);
    }
}
