use crate::browser::wait;
use crate::config::Config;
use crate::error::SuiteError;
use crate::models::LeaveRequest;
use fantoccini::{Client, Locator};
use std::sync::Arc;

use super::selectors::LeaveSelectors;

/// İzin başvurusu ve My Leave görünümü (çalışan oturumu)
pub struct LeaveApplyPage {
    client: Client,
    config: Arc<Config>,
}

impl LeaveApplyPage {
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

    pub async fn navigate_to_apply(&self) -> Result<(), SuiteError> {
        self.navigate().await?;
        wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::APPLY_TAB),
            self.config.wait_timeout(),
            "Apply sekmesi",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn navigate_to_my_leave(&self) -> Result<(), SuiteError> {
        self.navigate().await?;
        wait::element(
            &self.client,
            Locator::Css(LeaveSelectors::MY_LEAVE_TAB),
            self.config.wait_timeout(),
            "My Leave sekmesi",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    /// İzin başvurusu formunu doldurup gönderir, başarı bildirimini bekler
    pub async fn apply_leave(&self, request: &LeaveRequest) -> Result<(), SuiteError> {
        self.navigate_to_apply().await?;

        // İzin türü
        let type_option = LeaveSelectors::leave_type_option(request.leave_type().label());
        super::super::select_dropdown_option(
            &self.client,
            Locator::XPath(LeaveSelectors::LEAVE_TYPE_DROPDOWN),
            &type_option,
            self.config.wait_timeout(),
        )
        .await?;

        // Tarihler ISO formatında girilir, UI aynı formatı bekliyor
        let from_input = wait::element(
            &self.client,
            Locator::XPath(LeaveSelectors::FROM_DATE_INPUT),
            self.config.wait_timeout(),
            "başlangıç tarihi alanı",
        )
        .await?;
        from_input.clear().await?;
        from_input.send_keys(&request.from_date_formatted()).await?;

        let to_input = self
            .client
            .find(Locator::XPath(LeaveSelectors::TO_DATE_INPUT))
            .await?;
        to_input.clear().await?;
        to_input.send_keys(&request.to_date_formatted()).await?;

        if let Some(comment) = request.comment() {
            self.client
                .find(Locator::Css(LeaveSelectors::COMMENTS_TEXTAREA))
                .await?
                .send_keys(comment)
                .await?;
        }

        self.client
            .find(Locator::Css(LeaveSelectors::APPLY_BUTTON))
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

        tracing::info!(
            "✅ İzin başvurusu yapıldı: {} → {}",
            request.from_date_formatted(),
            request.to_date_formatted()
        );
        Ok(())
    }

    /// My Leave tablosundaki satırın durum hücresini okur
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

    /// My Leave görünümüne gidip ilk satırın durumunu doğrular
    pub async fn verify_leave_status(&self, expected: &str) -> Result<(), SuiteError> {
        self.navigate_to_my_leave().await?;

        let status = self.leave_status(1).await?;
        if !status.contains(expected) {
            return Err(SuiteError::Verification(format!(
                "Beklenen izin durumu '{}', görünen '{}'",
                expected, status
            )));
        }

        tracing::info!("✅ İzin durumu doğrulandı: {}", status);
        Ok(())
    }
}
