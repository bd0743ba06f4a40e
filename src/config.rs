use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Hedef uygulama
    pub base_url: String,

    // Browser
    pub webdriver_url: String,
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,

    // Rol kimlik bilgileri
    pub admin_username: String,
    pub admin_password: String,
    pub employee_username: String,
    pub employee_password: String,
    pub supervisor_username: String,
    pub supervisor_password: String,

    // Timeouts
    pub wait_timeout_ms: u64,
    pub login_timeout_ms: u64,
    pub settle_ms: u64,

    // Dosya yolları
    pub test_data_path: String,
    pub leave_csv_path: String,
    pub artifacts_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "https://opensource-demo.orangehrmlive.com".to_string()),

            webdriver_url: env::var("WEBDRIVER_URL")
                .unwrap_or_else(|_| "http://localhost:9515".to_string()),
            headless: env::var("HEADLESS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            window_width: env::var("WINDOW_WIDTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1280),
            window_height: env::var("WINDOW_HEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(720),

            admin_username: env::var("ADMIN_USERNAME").unwrap_or_default(),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
            employee_username: env::var("EMPLOYEE_USERNAME").unwrap_or_default(),
            employee_password: env::var("EMPLOYEE_PASSWORD").unwrap_or_default(),
            supervisor_username: env::var("SUPERVISOR_USERNAME").unwrap_or_default(),
            supervisor_password: env::var("SUPERVISOR_PASSWORD").unwrap_or_default(),

            wait_timeout_ms: env::var("WAIT_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10000),
            login_timeout_ms: env::var("LOGIN_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            settle_ms: env::var("SETTLE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),

            test_data_path: env::var("TEST_DATA_PATH")
                .unwrap_or_else(|_| "test-data.json".to_string()),
            leave_csv_path: env::var("LEAVE_CSV_PATH")
                .unwrap_or_else(|_| "data/leave-records.csv".to_string()),
            artifacts_dir: env::var("ARTIFACTS_DIR")
                .unwrap_or_else(|_| "artifacts".to_string()),
        })
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    pub fn login_timeout(&self) -> Duration {
        Duration::from_millis(self.login_timeout_ms)
    }

    /// UI animasyonlarının oturması için kısa bekleme
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}
