pub mod selectors;

use crate::browser::wait;
use crate::config::Config;
use crate::error::SuiteError;
use crate::models::SystemUser;
use crate::utils::{mask_sensitive, parse_record_count};
use fantoccini::{Client, Locator};
use self::selectors::AdminSelectors;
use std::sync::Arc;

/// Admin modülü: sistem kullanıcısı oluşturma ve arama
pub struct UserManagementPage {
    client: Client,
    config: Arc<Config>,
}

impl UserManagementPage {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn navigate(&self) -> Result<(), SuiteError> {
        wait::element(
            &self.client,
            Locator::Css(AdminSelectors::ADMIN_MENU),
            self.config.wait_timeout(),
            "Admin menüsü",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    /// Admin modülünde Users listesine geçer. Üst menü öğesi hover'a bağlı
    /// olduğundan doğrudan tıklama başarısız olursa JS ile tıklanır.
    pub async fn navigate_to_users(&self) -> Result<(), SuiteError> {
        self.navigate().await?;

        match self
            .client
            .find(Locator::XPath(AdminSelectors::USERS_MENU_ITEM))
            .await
        {
            Ok(item) => {
                if item.click().await.is_err() {
                    self.click_users_via_js().await?;
                }
            }
            Err(_) => self.click_users_via_js().await?,
        }

        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    async fn click_users_via_js(&self) -> Result<(), SuiteError> {
        let js = r#"
            const items = Array.from(document.querySelectorAll('a, li'));
            for (const el of items) {
                if ((el.textContent || '').trim() === 'Users') {
                    el.click();
                    return true;
                }
            }
            return false;
        "#;

        let result = self.client.execute(js, vec![]).await?;
        if result.as_bool() != Some(true) {
            // Admin modülünün varsayılan görünümü zaten Users listesi
            tracing::warn!("⚠️ 'Users' menü öğesi bulunamadı, mevcut sayfayla devam ediliyor");
        }
        Ok(())
    }

    /// Add User formunu doldurup kaydeder, başarı bildirimini bekler
    pub async fn create_system_user(&self, user: &SystemUser) -> Result<(), SuiteError> {
        self.navigate_to_users().await?;

        wait::element(
            &self.client,
            Locator::XPath(AdminSelectors::ADD_BUTTON),
            self.config.wait_timeout(),
            "Add butonu",
        )
        .await?
        .click()
        .await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await?;

        let role_option = AdminSelectors::user_role_option(user.user_role().label());
        super::select_dropdown_option(
            &self.client,
            Locator::XPath(AdminSelectors::USER_ROLE_DROPDOWN),
            &role_option,
            self.config.wait_timeout(),
        )
        .await?;

        let employee_option = AdminSelectors::autocomplete_option(user.employee_name());
        super::fill_autocomplete(
            &self.client,
            Locator::XPath(AdminSelectors::EMPLOYEE_NAME_INPUT),
            &employee_option,
            user.employee_name(),
            self.config.wait_timeout(),
        )
        .await?;

        let status_option = AdminSelectors::status_option(user.status().label());
        super::select_dropdown_option(
            &self.client,
            Locator::XPath(AdminSelectors::STATUS_DROPDOWN),
            &status_option,
            self.config.wait_timeout(),
        )
        .await?;

        self.client
            .find(Locator::XPath(AdminSelectors::USERNAME_INPUT))
            .await?
            .send_keys(user.username())
            .await?;
        self.client
            .find(Locator::XPath(AdminSelectors::PASSWORD_INPUT))
            .await?
            .send_keys(user.password())
            .await?;
        self.client
            .find(Locator::XPath(AdminSelectors::CONFIRM_PASSWORD_INPUT))
            .await?
            .send_keys(user.password())
            .await?;

        self.client
            .find(Locator::Css(AdminSelectors::SAVE_BUTTON))
            .await?
            .click()
            .await?;

        wait::element(
            &self.client,
            Locator::Css(AdminSelectors::SUCCESS_TOAST),
            self.config.wait_timeout(),
            "başarı bildirimi",
        )
        .await?;

        tracing::info!(
            "✅ Sistem kullanıcısı kaydedildi: {}",
            mask_sensitive(user.username())
        );
        Ok(())
    }

    pub async fn search_user(&self, username: &str) -> Result<(), SuiteError> {
        self.navigate_to_users().await?;

        let input = wait::element(
            &self.client,
            Locator::XPath(AdminSelectors::SEARCH_USERNAME_INPUT),
            self.config.wait_timeout(),
            "kullanıcı adı filtresi",
        )
        .await?;
        input.clear().await?;
        input.send_keys(username).await?;

        self.client
            .find(Locator::Css(AdminSelectors::SEARCH_BUTTON))
            .await?
            .click()
            .await?;

        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn verify_user_created(&self, username: &str) -> Result<(), SuiteError> {
        self.search_user(username).await?;

        let text = wait::element(
            &self.client,
            Locator::Css(AdminSelectors::RECORDS_FOUND_TEXT),
            self.config.wait_timeout(),
            "kayıt sayısı metni",
        )
        .await?
        .text()
        .await?;
        let count = parse_record_count(&text)?;

        if count != 1 {
            return Err(SuiteError::Verification(format!(
                "Kullanıcı '{}' için tek kayıt bekleniyordu, görünen: '{}'",
                username,
                text.trim()
            )));
        }
        Ok(())
    }
}
