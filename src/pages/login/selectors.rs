/// Giriş sayfası için CSS selector'ları
pub struct LoginSelectors;

impl LoginSelectors {
    pub const USERNAME_INPUT: &'static str = r#"input[name="username"]"#;
    pub const PASSWORD_INPUT: &'static str = r#"input[name="password"]"#;
    pub const LOGIN_BUTTON: &'static str = r#"button[type="submit"]"#;

    // Rolden bağımsız giriş-sonrası landmark
    pub const DASHBOARD_HEADER: &'static str = ".oxd-topbar-header-breadcrumb-module";

    pub const ERROR_ALERT: &'static str = ".oxd-alert--error";
}
