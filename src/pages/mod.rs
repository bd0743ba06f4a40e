pub mod admin;
pub mod leave;
pub mod login;
pub mod pim;

pub use admin::UserManagementPage;
pub use leave::{LeaveApplyPage, LeaveListPage};
pub use login::LoginPage;
pub use pim::PimPage;

use crate::browser::wait;
use crate::error::SuiteError;
use fantoccini::{Client, Locator};
use std::time::Duration;

/// Autocomplete alanı doldurur: metni yazar, öneri listesindeki eşleşmeyi
/// bekler ve tıklar
pub(crate) async fn fill_autocomplete(
    client: &Client,
    input: Locator<'_>,
    option_xpath: &str,
    text: &str,
    timeout: Duration,
) -> Result<(), SuiteError> {
    let elem = wait::element(client, input, timeout, "autocomplete alanı").await?;
    elem.clear().await?;
    elem.send_keys(text).await?;

    let option = wait::element(
        client,
        Locator::XPath(option_xpath),
        timeout,
        "autocomplete önerisi",
    )
    .await?;
    option.click().await?;

    Ok(())
}

/// Dropdown açar ve görünen metne göre seçeneği seçer
pub(crate) async fn select_dropdown_option(
    client: &Client,
    dropdown: Locator<'_>,
    option_xpath: &str,
    timeout: Duration,
) -> Result<(), SuiteError> {
    wait::element(client, dropdown, timeout, "dropdown")
        .await?
        .click()
        .await?;

    wait::element(
        client,
        Locator::XPath(option_xpath),
        timeout,
        "dropdown seçeneği",
    )
    .await?
    .click()
    .await?;

    Ok(())
}
