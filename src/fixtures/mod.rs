//! Rol bazlı oturum fixture'ları. Admin oturumu zorunludur; çalışan ve
//! süpervizör kimlik bilgileri yoksa oturum açılmadan session döner,
//! bağımlı adımlar kendini atlar.

use crate::browser::create_webdriver_client;
use crate::config::Config;
use crate::error::SuiteError;
use crate::pages::LoginPage;
use crate::utils::mask_sensitive;
use fantoccini::Client;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
    Supervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Supervisor => "supervisor",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub struct RoleSession {
    pub client: Client,
    pub role: Role,
    pub authenticated: bool,
}

impl RoleSession {
    pub async fn close(self) {
        let _ = self.client.close().await;
    }
}

/// Admin oturumu zorunlu, kimlik bilgisi eksikse kurulum hatası
pub async fn admin_session(config: Arc<Config>) -> Result<RoleSession, SuiteError> {
    if config.admin_username.is_empty() || config.admin_password.is_empty() {
        return Err(SuiteError::ConfigError(
            "ADMIN_USERNAME/ADMIN_PASSWORD tanımlı olmalı".to_string(),
        ));
    }

    let credentials = Credentials {
        username: config.admin_username.clone(),
        password: config.admin_password.clone(),
    };
    authenticated_session(config, Role::Admin, credentials).await
}

/// Çalışan oturumu; kimlik bilgileri senaryo durumundan gelebilir,
/// yoksa environment'tan okunur
pub async fn employee_session(
    config: Arc<Config>,
    credentials: Option<Credentials>,
) -> Result<RoleSession, SuiteError> {
    let credentials = credentials
        .or_else(|| config_credentials(&config.employee_username, &config.employee_password));
    optional_session(config, Role::Employee, credentials).await
}

pub async fn supervisor_session(config: Arc<Config>) -> Result<RoleSession, SuiteError> {
    let credentials =
        config_credentials(&config.supervisor_username, &config.supervisor_password);
    optional_session(config, Role::Supervisor, credentials).await
}

fn config_credentials(username: &str, password: &str) -> Option<Credentials> {
    if username.is_empty() || password.is_empty() {
        None
    } else {
        Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

async fn optional_session(
    config: Arc<Config>,
    role: Role,
    credentials: Option<Credentials>,
) -> Result<RoleSession, SuiteError> {
    match credentials {
        Some(credentials) => authenticated_session(config, role, credentials).await,
        None => {
            tracing::warn!(
                "⚠️ {} için kimlik bilgisi yok, oturum açılmadan devam ediliyor",
                role.as_str()
            );
            let client = create_webdriver_client(&config).await?;
            Ok(RoleSession {
                client,
                role,
                authenticated: false,
            })
        }
    }
}

async fn authenticated_session(
    config: Arc<Config>,
    role: Role,
    credentials: Credentials,
) -> Result<RoleSession, SuiteError> {
    tracing::info!(
        "🔑 {} oturumu açılıyor: {}",
        role.as_str(),
        mask_sensitive(&credentials.username)
    );

    let client = create_webdriver_client(&config).await?;
    let login = LoginPage::new(client.clone(), config.clone());

    let result = async {
        login.goto().await?;
        login.login(&credentials.username, &credentials.password).await?;
        login.expect_logged_in().await
    }
    .await;

    if let Err(e) = result {
        let _ = client.close().await;
        return Err(e);
    }

    tracing::info!("✅ {} oturumu hazır", role.as_str());
    Ok(RoleSession {
        client,
        role,
        authenticated: true,
    })
}
