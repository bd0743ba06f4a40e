use crate::error::SuiteError;

/// PIM modülünde oluşturulan çalışan kaydı. Ad ve soyad oluşturma anında
/// doğrulanır; çalışan kimliği dış sistem tarafından atandıktan sonra
/// doldurulur, gerisi değişmez.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    employee_id: Option<String>,
}

impl Employee {
    pub fn new(
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> Result<Self, SuiteError> {
        if first_name.trim().is_empty() {
            return Err(SuiteError::FormValidation("Ad boş olamaz".to_string()));
        }
        if last_name.trim().is_empty() {
            return Err(SuiteError::FormValidation("Soyad boş olamaz".to_string()));
        }

        Ok(Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            middle_name: middle_name
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
            employee_id: None,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    /// Dış sistemin atadığı kimlik, kayıt işleminden sonra yazılır
    pub fn set_employee_id(&mut self, id: impl Into<String>) {
        self.employee_id = Some(id.into());
    }

    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_first_and_last() {
        let employee = Employee::new("Jane", "Doe", None).unwrap();
        assert_eq!(employee.full_name(), "Jane Doe");
    }

    #[test]
    fn test_full_name_includes_middle_name() {
        let employee = Employee::new("Jane", "Doe", Some("Marie")).unwrap();
        assert_eq!(employee.full_name(), "Jane Marie Doe");
    }

    #[test]
    fn test_names_are_trimmed() {
        let employee = Employee::new("  Jane ", " Doe  ", None).unwrap();
        assert_eq!(employee.first_name(), "Jane");
        assert_eq!(employee.last_name(), "Doe");
    }

    #[test]
    fn test_empty_first_name_fails() {
        assert!(Employee::new("", "Doe", None).is_err());
        assert!(Employee::new("   ", "Doe", None).is_err());
    }

    #[test]
    fn test_empty_last_name_fails() {
        assert!(Employee::new("Jane", "", None).is_err());
        assert!(Employee::new("Jane", "  ", None).is_err());
    }

    #[test]
    fn test_employee_id_set_after_construction() {
        let mut employee = Employee::new("Jane", "Doe", None).unwrap();
        assert_eq!(employee.employee_id(), None);
        employee.set_employee_id("0042");
        assert_eq!(employee.employee_id(), Some("0042"));
    }
}
