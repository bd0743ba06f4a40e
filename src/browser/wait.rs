//! Sabit süreli sleep yerine hazır-olma koşulunu sınırlı süre poll eden
//! bekleme yardımcıları.

use crate::error::SuiteError;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, Locator};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

// OrangeHRM sayfa geçişlerinde gösterilen spinner
const LOADING_SPINNER: &str = ".oxd-loading-spinner";

/// Belirtilen element görünene kadar bekler
pub async fn element(
    client: &Client,
    locator: Locator<'_>,
    timeout: Duration,
    what: &str,
) -> Result<Element, SuiteError> {
    client
        .wait()
        .at_most(timeout)
        .every(POLL_INTERVAL)
        .for_element(locator)
        .await
        .map_err(|e| match e {
            CmdError::WaitTimeout => SuiteError::Timeout(format!(
                "{} {}ms içinde görünmedi",
                what,
                timeout.as_millis()
            )),
            other => SuiteError::WebDriverError(other.to_string()),
        })
}

/// Belirtilen element kaybolana kadar bekler
pub async fn element_gone(
    client: &Client,
    locator: Locator<'_>,
    timeout: Duration,
    what: &str,
) -> Result<(), SuiteError> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        match client.find(locator).await {
            Err(e) if e.is_no_such_element() => return Ok(()),
            Err(e) => return Err(e.into()),
            Ok(_) => {}
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(SuiteError::Timeout(format!(
                "{} {}ms içinde kaybolmadı",
                what,
                timeout.as_millis()
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Sayfanın oturmasını bekler: document.readyState "complete" olmalı ve
/// yükleme göstergesi kaybolmalı
pub async fn page_settled(client: &Client, timeout: Duration) -> Result<(), SuiteError> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        let ready = client.execute("return document.readyState;", vec![]).await?;
        if ready.as_str() == Some("complete") {
            break;
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(SuiteError::Timeout(format!(
                "Sayfa {}ms içinde yüklenmedi",
                timeout.as_millis()
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    let remaining = deadline.duration_since(tokio::time::Instant::now());
    element_gone(
        client,
        Locator::Css(LOADING_SPINNER),
        remaining.max(POLL_INTERVAL),
        "yükleme göstergesi",
    )
    .await
}
