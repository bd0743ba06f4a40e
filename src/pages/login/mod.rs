pub mod selectors;

use crate::browser::wait;
use crate::config::Config;
use crate::error::SuiteError;
use crate::utils::mask_sensitive;
use fantoccini::{Client, Locator};
use self::selectors::LoginSelectors;
use std::sync::Arc;

pub struct LoginPage {
    client: Client,
    config: Arc<Config>,
}

impl LoginPage {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Giriş sayfasına gider
    pub async fn goto(&self) -> Result<(), SuiteError> {
        self.client.goto(&self.config.base_url).await?;
        wait::page_settled(&self.client, self.config.wait_timeout()).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(), SuiteError> {
        tracing::info!("🔑 Giriş yapılıyor: {}", mask_sensitive(username));

        let username_input = wait::element(
            &self.client,
            Locator::Css(LoginSelectors::USERNAME_INPUT),
            self.config.wait_timeout(),
            "kullanıcı adı alanı",
        )
        .await?;
        username_input.clear().await?;
        username_input.send_keys(username).await?;

        let password_input = self
            .client
            .find(Locator::Css(LoginSelectors::PASSWORD_INPUT))
            .await?;
        password_input.clear().await?;
        password_input.send_keys(password).await?;

        self.client
            .find(Locator::Css(LoginSelectors::LOGIN_BUTTON))
            .await?
            .click()
            .await?;

        Ok(())
    }

    /// Giriş sonrası landmark elementini bekleyerek oturumu doğrular
    pub async fn expect_logged_in(&self) -> Result<(), SuiteError> {
        match wait::element(
            &self.client,
            Locator::Css(LoginSelectors::DASHBOARD_HEADER),
            self.config.login_timeout(),
            "dashboard başlığı",
        )
        .await
        {
            Ok(_) => Ok(()),
            Err(SuiteError::Timeout(_)) => Err(SuiteError::LoginFailed(
                "Dashboard görünmedi, kimlik bilgileri hatalı olabilir".to_string(),
            )),
            Err(e) => Err(e),
        }
    }
}
