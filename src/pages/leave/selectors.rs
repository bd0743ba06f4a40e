/// Leave modülü için CSS/XPath selector'ları
pub struct LeaveSelectors;

impl LeaveSelectors {
    // Navigation
    pub const LEAVE_MENU: &'static str = r#"a[href="/web/index.php/leave/viewLeaveModule"]"#;
    pub const APPLY_TAB: &'static str = r#"a[href="/web/index.php/leave/applyLeave"]"#;
    pub const MY_LEAVE_TAB: &'static str = r#"a[href="/web/index.php/leave/viewMyLeaveList"]"#;
    pub const LEAVE_LIST_TAB: &'static str = r#"a[href="/web/index.php/leave/viewLeaveList"]"#;

    // Apply Leave formu
    pub const LEAVE_TYPE_DROPDOWN: &'static str =
        r#"//label[text()="Leave Type"]/../..//div[contains(@class, "oxd-select-text")]"#;
    pub const FROM_DATE_INPUT: &'static str = r#"//label[text()="From Date"]/../..//input"#;
    pub const TO_DATE_INPUT: &'static str = r#"//label[text()="To Date"]/../..//input"#;
    pub const COMMENTS_TEXTAREA: &'static str = r#"textarea[placeholder="Type comment here"]"#;
    pub const APPLY_BUTTON: &'static str = r#"button[type="submit"]"#;
    pub const SUCCESS_TOAST: &'static str = ".oxd-toast--success";

    // My Leave / Leave List filtreleri
    pub const EMPLOYEE_NAME_INPUT: &'static str =
        r#"//label[text()="Employee Name"]/../..//input"#;
    pub const STATUS_DROPDOWN: &'static str = r#"//label[contains(text(), "Show Leave with Status")]/../..//div[contains(@class, "oxd-select-text")]"#;
    pub const SEARCH_BUTTON: &'static str = r#"button[type="submit"]"#;

    // İzin tablosu; iş alanları sabit hücre indekslerinde (durum = 6. hücre)
    pub const LEAVE_TABLE_ROW: &'static str = ".oxd-table-body .oxd-table-card";
    pub const TABLE_CELL: &'static str = "div.oxd-table-cell";
    pub const RECORDS_FOUND_TEXT: &'static str =
        ".orangehrm-horizontal-padding span.oxd-text--span";

    pub fn leave_type_option(label: &str) -> String {
        format!(r#"//div[@role="option"]//span[contains(text(), "{}")]"#, label)
    }

    pub fn status_option(label: &str) -> String {
        format!(r#"//div[@role="option"]//span[text()="{}"]"#, label)
    }

    pub fn status_cell(row: usize) -> String {
        format!(
            r#"(//div[contains(@class, "oxd-table-card")])[{}]//div[contains(@class, "oxd-table-cell")][6]"#,
            row
        )
    }

    pub fn employee_name_cell(row: usize) -> String {
        format!(
            r#"(//div[contains(@class, "oxd-table-card")])[{}]//div[contains(@class, "oxd-table-cell")][2]"#,
            row
        )
    }

    pub fn approve_button(row: usize) -> String {
        format!(
            r#"(//div[contains(@class, "oxd-table-card")])[{}]//button[contains(@class, "oxd-icon-button")]//i[contains(@class, "bi-check")]"#,
            row
        )
    }

    pub fn autocomplete_option(name: &str) -> String {
        format!(r#"//div[@role="option"]//span[contains(text(), "{}")]"#, name)
    }
}
