use crate::browser::wait;
use crate::config::Config;
use crate::error::SuiteError;
use crate::models::LeaveStatus;
use crate::utils::parse_record_count;
use fantoccini::{Client, Locator};
use std::sync::Arc;

use super::selectors::LeaveSelectors;

/// Leave List görünümü: filtreleme, onaylama ve durum okuma
/// (süpervizör/admin oturumu)
pub struct LeaveListPage {
    client: Client,
    config: Arc<Config>,
}

impl LeaveListPage {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn navigate(&self) -> Result<(), SuiteError> {
        wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::LEAVE_MENU),
            self.config.wait_timeout(),
            "Leave menüsü",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn navigate_to_leave_list(&self) -> Result<(), SuiteError> {
        self.navigate().await?;
        wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::LEAVE_LIST_TAB),
            self.config.wait_timeout(),
            "Leave List sekmesi",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn filter_by_employee(&self, employee_name: &str) -> Result<(), SuiteError> {
        let option = LeaveSelectors::autocomplete_option(employee_name);
        super::super::fill_autocomplete(
            &self.client,
            Locator::XPath(LeaveSelectors::EMPLOYEE_NAME_INPUT),
            &option,
            employee_name,
            self.config.wait_timeout(),
        )
        .await
    }

    pub async fn filter_by_status(&self, status: LeaveStatus) -> Result<(), SuiteError> {
        let option = LeaveSelectors::status_option(status.label());
        super::super::select_dropdown_option(
            &self.client,
            Locator::XPath(LeaveSelectors::STATUS_DROPDOWN),
            &option,
            self.config.wait_timeout(),
        )
        .await
    }

    /// Leave List'e gider, filtreleri uygular ve aramayı tetikler
    pub async fn search_leave(
        &self,
        employee_name: Option<&str>,
        status: Option<LeaveStatus>,
    ) -> Result<(), SuiteError> {
        self.navigate_to_leave_list().await?;

        if let Some(name) = employee_name {
            self.filter_by_employee(name).await?;
        }
        if let Some(status) = status {
            self.filter_by_status(status).await?;
        }

        self.client
            .find(Locator::Css(LeaveSelectors::SEARCH_BUTTON))
            .await?
            .click()
            .await?;

        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    /// Tablodaki satırın onay butonuna tıklar
    pub async fn approve_leave(&self, row: usize) -> Result<(), SuiteError> {
        wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::LEAVE_TABLE_ROW),
            self.config.wait_timeout(),
            "izin tablosu",
        )
        .await?;

        let button = LeaveSelectors::approve_button(row);
        wait::element(
            &self.client,
            Locator::XPath(&button),
            self.config.wait_timeout(),
            "onay butonu",
        )
        .await?
        .click()
        .await?;

        wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::SUCCESS_TOAST),
            self.config.wait_timeout(),
            "başarı bildirimi",
        )
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await?;

        tracing::info!("✅ İzin talebi onaylandı (satır {})", row);
        Ok(())
    }

    pub async fn leave_status(&self, row: usize) -> Result<String, SuiteError> {
        wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::LEAVE_TABLE_ROW),
            self.config.wait_timeout(),
            "izin tablosu",
        )
        .await?;

        let cell = LeaveSelectors::status_cell(row);
        let status = wait::element(
            &self.client,
            Locator::XPath(&cell),
            self.config.wait_timeout(),
            "durum hücresi",
        )
        .await?
        .text()
        .await?;

        Ok(status.trim().to_string())
    }

    /// Mevcut arama sonucundaki satırın durumunu doğrular
    pub async fn verify_leave_status(&self, expected: &str, row: usize) -> Result<(), SuiteError> {
        let status = self.leave_status(row).await?;
        if !status.contains(expected) {
            return Err(SuiteError::Verification(format!(
                "Beklenen izin durumu '{}', görünen '{}'",
                expected, status
            )));
        }

        tracing::info!("✅ İzin durumu doğrulandı: {}", status);
        Ok(())
    }

    pub async fn records_found_count(&self) -> Result<usize, SuiteError> {
        let text = wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::RECORDS_FOUND_TEXT),
            self.config.wait_timeout(),
            "kayıt sayısı metni",
        )
        .await?
        .text()
        .await?;

        parse_record_count(&text)
    }

    pub async fn verify_leave_exists(&self, employee_name: &str) -> Result<(), SuiteError> {
        self.search_leave(Some(employee_name), None).await?;

        let count = self.records_found_count().await?;
        if count == 0 {
            return Err(SuiteError::Verification(format!(
                "'{}' için izin kaydı bulunamadı",
                employee_name
            )));
        }
        Ok(())
    }
}
