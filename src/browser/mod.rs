pub mod driver;
pub mod wait;

pub use driver::create_webdriver_client;

use fantoccini::Client;
use std::path::Path;

/// Başarısız adımın ekran görüntüsünü artifacts dizinine kaydeder.
/// Hata ayıklama yardımcısıdır, kendi hatası adımı etkilemez.
pub async fn capture_failure(client: &Client, artifacts_dir: &str, tag: &str) {
    let png = match client.screenshot().await {
        Ok(png) => png,
        Err(e) => {
            tracing::warn!("⚠️ Ekran görüntüsü alınamadı: {}", e);
            return;
        }
    };

    if let Err(e) = std::fs::create_dir_all(artifacts_dir) {
        tracing::warn!("⚠️ Artifacts dizini oluşturulamadı: {}", e);
        return;
    }

    let path = Path::new(artifacts_dir).join(format!("{}-failure.png", tag));
    match std::fs::write(&path, png) {
        Ok(_) => tracing::info!("📸 Ekran görüntüsü kaydedildi: {:?}", path),
        Err(e) => tracing::warn!("⚠️ Ekran görüntüsü yazılamadı: {}", e),
    }
}
