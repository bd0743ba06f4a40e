/// PIM modülü için CSS/XPath selector'ları. Etikete bağlı alanlar ve tablo
/// hücreleri için XPath, kararlı attribute'lar için CSS.
pub struct PimSelectors;

impl PimSelectors {
    // Navigation
    pub const PIM_MENU: &'static str = r#"a[href="/web/index.php/pim/viewPimModule"]"#;
    pub const ADD_EMPLOYEE_TAB: &'static str = r#"a[href="/web/index.php/pim/addEmployee"]"#;
    pub const EMPLOYEE_LIST_TAB: &'static str = r#"a[href="/web/index.php/pim/viewEmployeeList"]"#;

    // Add Employee formu
    pub const FIRST_NAME_INPUT: &'static str = r#"input[name="firstName"]"#;
    pub const MIDDLE_NAME_INPUT: &'static str = r#"input[name="middleName"]"#;
    pub const LAST_NAME_INPUT: &'static str = r#"input[name="lastName"]"#;
    pub const EMPLOYEE_ID_INPUT: &'static str = r#"//label[text()="Employee Id"]/../..//input"#;
    pub const CREATE_LOGIN_TOGGLE: &'static str =
        r#"//span[contains(@class, "oxd-switch-input")]"#;
    pub const SAVE_BUTTON: &'static str = r#"button[type="submit"]"#;
    pub const SUCCESS_TOAST: &'static str = ".oxd-toast--success";

    // Employee List
    pub const SEARCH_EMPLOYEE_NAME_INPUT: &'static str =
        r#"//label[text()="Employee Name"]/../..//input"#;
    pub const SEARCH_BUTTON: &'static str = r#"button[type="submit"]"#;
    pub const RECORDS_FOUND_TEXT: &'static str =
        ".orangehrm-horizontal-padding span.oxd-text--span";

    // Report-to sekmesi
    pub const REPORT_TO_TAB: &'static str = r#"//a[text()="Report-to"]"#;
    pub const ADD_SUPERVISOR_BUTTON: &'static str =
        r#"//h6[text()="Assigned Supervisors"]/following::button[1]"#;
    pub const SUPERVISOR_NAME_INPUT: &'static str = r#"//label[text()="Name"]/../..//input"#;
    pub const REPORTING_METHOD_DROPDOWN: &'static str =
        r#"//label[text()="Reporting Method"]/../..//div[contains(@class, "oxd-select-text")]"#;

    pub fn reporting_method_option(method: &str) -> String {
        format!(r#"//div[@role="option" and text()="{}"]"#, method)
    }

    pub fn employee_name_link(name: &str) -> String {
        format!(
            r#"//div[contains(@class, "oxd-table-cell") and text()="{}"]"#,
            name
        )
    }

    pub fn supervisor_entry(name: &str) -> String {
        format!(r#"//*[contains(text(), "{}")]"#, name)
    }

    pub fn autocomplete_option(name: &str) -> String {
        format!(r#"//div[@role="option"]//span[contains(text(), "{}")]"#, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_selectors_embed_argument() {
        assert!(PimSelectors::autocomplete_option("Odis Adalwin").contains("Odis Adalwin"));
        assert!(PimSelectors::employee_name_link("Jane Doe").contains("Jane Doe"));
        assert_eq!(
            PimSelectors::reporting_method_option("Direct"),
            r#"//div[@role="option" and text()="Direct"]"#
        );
    }
}
