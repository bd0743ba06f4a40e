use crate::error::SuiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Ess,
}

impl UserRole {
    pub const fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Ess => "ESS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Enabled,
    Disabled,
}

impl UserStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            UserStatus::Enabled => "Enabled",
            UserStatus::Disabled => "Disabled",
        }
    }
}

/// Admin modülünde oluşturulan sistem kullanıcısı hesabı.
/// Oluşturulduktan sonra değişmez.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemUser {
    user_role: UserRole,
    employee_name: String,
    status: UserStatus,
    username: String,
    password: String,
}

impl SystemUser {
    pub fn new(
        user_role: UserRole,
        employee_name: &str,
        status: UserStatus,
        username: &str,
        password: &str,
    ) -> Result<Self, SuiteError> {
        if username.trim().chars().count() < 5 {
            return Err(SuiteError::FormValidation(
                "Kullanıcı adı en az 5 karakter olmalı".to_string(),
            ));
        }
        if password.chars().count() < 7 {
            return Err(SuiteError::FormValidation(
                "Şifre en az 7 karakter olmalı".to_string(),
            ));
        }
        if employee_name.trim().is_empty() {
            return Err(SuiteError::FormValidation(
                "Çalışan adı boş olamaz".to_string(),
            ));
        }

        Ok(Self {
            user_role,
            employee_name: employee_name.trim().to_string(),
            status,
            username: username.trim().to_string(),
            password: password.to_string(),
        })
    }

    /// ESS rolünde aktif kullanıcı, senaryoların kullandığı varsayılan biçim
    pub fn ess(employee_name: &str, username: &str, password: &str) -> Result<Self, SuiteError> {
        Self::new(
            UserRole::Ess,
            employee_name,
            UserStatus::Enabled,
            username,
            password,
        )
    }

    pub fn user_role(&self) -> UserRole {
        self.user_role
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_username_fails() {
        assert!(SystemUser::ess("Jane Doe", "abcd", "longenough").is_err());
    }

    #[test]
    fn test_username_boundary_five_chars_passes() {
        assert!(SystemUser::ess("Jane Doe", "abcde", "longenough").is_ok());
    }

    #[test]
    fn test_short_password_fails() {
        assert!(SystemUser::ess("Jane Doe", "validuser", "sixchr").is_err());
    }

    #[test]
    fn test_password_boundary_seven_chars_passes() {
        assert!(SystemUser::ess("Jane Doe", "validuser", "sevench").is_ok());
    }

    #[test]
    fn test_empty_employee_name_fails() {
        assert!(SystemUser::ess("", "validuser", "longenough").is_err());
        assert!(SystemUser::ess("   ", "validuser", "longenough").is_err());
    }

    #[test]
    fn test_username_is_trimmed() {
        let user = SystemUser::ess("Jane Doe", "  validuser ", "longenough").unwrap();
        assert_eq!(user.username(), "validuser");
    }

    #[test]
    fn test_ess_defaults() {
        let user = SystemUser::ess("Jane Doe", "validuser", "longenough").unwrap();
        assert_eq!(user.user_role(), UserRole::Ess);
        assert_eq!(user.status(), UserStatus::Enabled);
    }
}
