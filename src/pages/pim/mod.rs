pub mod selectors;

use crate::browser::wait;
use crate::config::Config;
use crate::error::SuiteError;
use crate::models::Employee;
use crate::utils::parse_record_count;
use fantoccini::{Client, Locator};
use self::selectors::PimSelectors;
use std::sync::Arc;

/// PIM modülü: çalışan oluşturma, arama ve süpervizör atama
pub struct PimPage {
    client: Client,
    config: Arc<Config>,
}

impl PimPage {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn navigate(&self) -> Result<(), SuiteError> {
        wait::element(
            &self.client,
            Locator::Css(PimSelectors::PIM_MENU),
            self.config.wait_timeout(),
            "PIM menüsü",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn navigate_to_add_employee(&self) -> Result<(), SuiteError> {
        self.navigate().await?;
        wait::element(
            &self.client,
            Locator::Css(PimSelectors::ADD_EMPLOYEE_TAB),
            self.config.wait_timeout(),
            "Add Employee sekmesi",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn navigate_to_employee_list(&self) -> Result<(), SuiteError> {
        self.navigate().await?;
        wait::element(
            &self.client,
            Locator::Css(PimSelectors::EMPLOYEE_LIST_TAB),
            self.config.wait_timeout(),
            "Employee List sekmesi",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    /// Çalışanı kaydeder ve sistemin atadığı çalışan kimliğini döndürür
    pub async fn create_employee(
        &self,
        employee: &Employee,
        create_login: bool,
    ) -> Result<String, SuiteError> {
        self.navigate_to_add_employee().await?;

        let first_name_input = wait::element(
            &self.client,
            Locator::Css(PimSelectors::FIRST_NAME_INPUT),
            self.config.wait_timeout(),
            "ad alanı",
        )
        .await?;
        first_name_input.send_keys(employee.first_name()).await?;

        if let Some(middle) = employee.middle_name() {
            self.client
                .find(Locator::Css(PimSelectors::MIDDLE_NAME_INPUT))
                .await?
                .send_keys(middle)
                .await?;
        }

        self.client
            .find(Locator::Css(PimSelectors::LAST_NAME_INPUT))
            .await?
            .send_keys(employee.last_name())
            .await?;

        // Form açılırken otomatik atanan çalışan kimliğini oku
        let employee_id = self
            .client
            .find(Locator::XPath(PimSelectors::EMPLOYEE_ID_INPUT))
            .await?
            .prop("value")
            .await?
            .unwrap_or_default();

        if create_login {
            self.client
                .find(Locator::XPath(PimSelectors::CREATE_LOGIN_TOGGLE))
                .await?
                .click()
                .await?;
            tokio::time::sleep(self.config.settle()).await;
        }

        self.client
            .find(Locator::Css(PimSelectors::SAVE_BUTTON))
            .await?
            .click()
            .await?;

        wait::element(
            &self.client,
            Locator::Css(PimSelectors::SUCCESS_TOAST),
            self.config.wait_timeout(),
            "başarı bildirimi",
        )
        .await?;

        tracing::info!("✅ Çalışan kaydedildi: {}", employee.full_name());
        Ok(employee_id)
    }

    /// Çalışan listesinde autocomplete ile arama yapar
    pub async fn search_employee(&self, employee_name: &str) -> Result<(), SuiteError> {
        self.navigate_to_employee_list().await?;

        let option = PimSelectors::autocomplete_option(employee_name);
        super::fill_autocomplete(
            &self.client,
            Locator::XPath(PimSelectors::SEARCH_EMPLOYEE_NAME_INPUT),
            &option,
            employee_name,
            self.config.wait_timeout(),
        )
        .await?;

        self.client
            .find(Locator::Css(PimSelectors::SEARCH_BUTTON))
            .await?
            .click()
            .await?;

        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn open_employee_profile(&self, employee_name: &str) -> Result<(), SuiteError> {
        self.search_employee(employee_name).await?;

        let link = PimSelectors::employee_name_link(employee_name);
        wait::element(
            &self.client,
            Locator::XPath(&link),
            self.config.wait_timeout(),
            "çalışan satırı",
        )
        .await?
        .click()
        .await?;

        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    /// Açık profildeki Report-to sekmesinden süpervizör atar
    pub async fn assign_supervisor(
        &self,
        supervisor_name: &str,
        reporting_method: &str,
    ) -> Result<(), SuiteError> {
        self.open_report_to_tab().await?;

        wait::element(
            &self.client,
            Locator::XPath(PimSelectors::ADD_SUPERVISOR_BUTTON),
            self.config.wait_timeout(),
            "süpervizör ekle butonu",
        )
        .await?
        .click()
        .await?;

        let option = PimSelectors::autocomplete_option(supervisor_name);
        super::fill_autocomplete(
            &self.client,
            Locator::XPath(PimSelectors::SUPERVISOR_NAME_INPUT),
            &option,
            supervisor_name,
            self.config.wait_timeout(),
        )
        .await?;

        let method_option = PimSelectors::reporting_method_option(reporting_method);
        super::select_dropdown_option(
            &self.client,
            Locator::XPath(PimSelectors::REPORTING_METHOD_DROPDOWN),
            &method_option,
            self.config.wait_timeout(),
        )
        .await?;

        self.client
            .find(Locator::Css(PimSelectors::SAVE_BUTTON))
            .await?
            .click()
            .await?;

        wait::element(
            &self.client,
            Locator::Css(PimSelectors::SUCCESS_TOAST),
            self.config.wait_timeout(),
            "başarı bildirimi",
        )
        .await?;

        tracing::info!("✅ Süpervizör atandı: {}", supervisor_name);
        Ok(())
    }

    /// Açık profildeki Report-to sekmesinde süpervizörün listelendiğini
    /// doğrular
    pub async fn verify_supervisor_assigned(
        &self,
        supervisor_name: &str,
    ) -> Result<(), SuiteError> {
        self.open_report_to_tab().await?;

        let entry = PimSelectors::supervisor_entry(supervisor_name);
        match wait::element(
            &self.client,
            Locator::XPath(&entry),
            self.config.wait_timeout(),
            "süpervizör kaydı",
        )
        .await
        {
            Ok(_) => Ok(()),
            Err(SuiteError::Timeout(_)) => Err(SuiteError::Verification(format!(
                "Süpervizör '{}' Report-to sekmesinde görünmüyor",
                supervisor_name
            ))),
            Err(e) => Err(e),
        }
    }

    pub async fn verify_employee_created(&self, employee_name: &str) -> Result<(), SuiteError> {
        self.search_employee(employee_name).await?;

        let text = wait::element(
            &self.client,
            Locator::Css(PimSelectors::RECORDS_FOUND_TEXT),
            self.config.wait_timeout(),
            "kayıt sayısı metni",
        )
        .await?
        .text()
        .await?;
        let count = parse_record_count(&text)?;

        if count != 1 {
            return Err(SuiteError::Verification(format!(
                "Çalışan '{}' için tek kayıt bekleniyordu, görünen: '{}'",
                employee_name,
                text.trim()
            )));
        }
        Ok(())
    }

    async fn open_report_to_tab(&self) -> Result<(), SuiteError> {
        wait::element(
            &self.client,
            Locator::XPath(PimSelectors::REPORT_TO_TAB),
            self.config.wait_timeout(),
            "Report-to sekmesi",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }
}
