use crate::config::Config;
use crate::error::SuiteError;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;

pub async fn create_webdriver_client(config: &Config) -> Result<Client, SuiteError> {
    let mut caps = serde_json::Map::new();

    // Chrome options
    let mut chrome_opts = serde_json::Map::new();

    let mut args = vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--disable-infobars".to_string(),
        format!("--window-size={},{}", config.window_width, config.window_height),
        "--lang=en-US".to_string(),
    ];

    if config.headless {
        args.push("--headless=new".to_string());
        args.push("--disable-software-rasterizer".to_string());
    }

    chrome_opts.insert("args".to_string(), json!(args));

    // Şifre yöneticisi popup'ları login formunu engelliyor, kapat
    let mut prefs = serde_json::Map::new();
    prefs.insert("credentials_enable_service".to_string(), json!(false));
    prefs.insert("profile.password_manager_enabled".to_string(), json!(false));
    chrome_opts.insert("prefs".to_string(), json!(prefs));

    caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

    // Standard capabilities
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("acceptInsecureCerts".to_string(), json!(true));

    tracing::info!("WebDriver bağlantısı oluşturuluyor: {}", config.webdriver_url);

    let client = ClientBuilder::native()
        .capabilities(caps)
        .connect(&config.webdriver_url)
        .await
        .map_err(|e| SuiteError::WebDriverError(format!("WebDriver bağlantısı başarısız: {}", e)))?;

    tracing::info!("✅ WebDriver bağlantısı başarılı");

    Ok(client)
}
