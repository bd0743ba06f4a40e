/// Admin / User Management modülü için CSS/XPath selector'ları
pub struct AdminSelectors;

impl AdminSelectors {
    // Navigation
    pub const ADMIN_MENU: &'static str = r#"a[href="/web/index.php/admin/viewAdminModule"]"#;
    pub const USER_MANAGEMENT_MENU: &'static str = r#"//span[text()="User Management "]"#;
    pub const USERS_MENU_ITEM: &'static str = r#"//a[text()="Users"]"#;

    // Add User formu
    pub const ADD_BUTTON: &'static str = r#"//button[normalize-space()="Add"]"#;
    pub const USER_ROLE_DROPDOWN: &'static str =
        r#"//label[text()="User Role"]/../..//div[contains(@class, "oxd-select-text")]"#;
    pub const EMPLOYEE_NAME_INPUT: &'static str =
        r#"//label[text()="Employee Name"]/../..//input"#;
    pub const STATUS_DROPDOWN: &'static str =
        r#"//label[text()="Status"]/../..//div[contains(@class, "oxd-select-text")]"#;
    pub const USERNAME_INPUT: &'static str = r#"//label[text()="Username"]/../..//input"#;
    pub const PASSWORD_INPUT: &'static str = r#"//label[text()="Password"]/../..//input"#;
    pub const CONFIRM_PASSWORD_INPUT: &'static str =
        r#"//label[text()="Confirm Password"]/../..//input"#;
    pub const SAVE_BUTTON: &'static str = r#"button[type="submit"]"#;
    pub const SUCCESS_TOAST: &'static str = ".oxd-toast--success";

    // User List
    pub const SEARCH_USERNAME_INPUT: &'static str = r#"//label[text()="Username"]/../..//input"#;
    pub const SEARCH_BUTTON: &'static str = r#"button[type="submit"]"#;
    pub const RECORDS_FOUND_TEXT: &'static str =
        ".orangehrm-horizontal-padding span.oxd-text--span";

    pub fn user_role_option(role: &str) -> String {
        format!(r#"//div[@role="option"]//span[text()="{}"]"#, role)
    }

    pub fn status_option(status: &str) -> String {
        format!(r#"//div[@role="option"]//span[text()="{}"]"#, status)
    }

    pub fn autocomplete_option(name: &str) -> String {
        format!(r#"//div[@role="option"]//span[contains(text(), "{}")]"#, name)
    }
}
