use crate::config::Config;
use crate::error::SuiteError;
use crate::models::{LeaveRequest, LeaveStatus, LeaveType};
use crate::pages::leave::selectors::LeaveSelectors;
use crate::pages::LeaveListPage;
use crate::utils::parse_date_range;
use async_trait::async_trait;
use fantoccini::{Client, Locator};
use std::sync::Arc;

use super::LeaveRepository;

/// Aynı sözleşmenin canlı UI implementasyonu: Leave List'te arar ve tablo
/// satırlarını sabit hücre indekslerinden domain nesnelerine çevirir.
/// Yorum alanı tablodan okunamadığı için boş kalır.
pub struct UiLeaveRepository {
    client: Client,
    config: Arc<Config>,
}

impl UiLeaveRepository {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl LeaveRepository for UiLeaveRepository {
    async fn leave_requests(
        &self,
        employee_name: Option<&str>,
    ) -> Result<Vec<LeaveRequest>, SuiteError> {
        let list = LeaveListPage::new(self.client.clone(), self.config.clone());
        list.search_leave(employee_name, None).await?;

        let rows = self
            .client
            .find_all(Locator::Css(LeaveSelectors::LEAVE_TABLE_ROW))
            .await?;

        let mut requests = Vec::new();

        for row in rows {
            let cells = row.find_all(Locator::Css(LeaveSelectors::TABLE_CELL)).await?;
            if cells.len() < 6 {
                continue;
            }

            let record_name = cells[1].text().await?;
            let type_label = cells[2].text().await?;
            let date_range = cells[3].text().await?;
            let status_label = cells[5].text().await?;

            // Tarih aralığı "YYYY-MM-DD to YYYY-MM-DD" biçiminde tek hücrede
            let (from_date, to_date) = parse_date_range(date_range.trim())?;

            let request = LeaveRequest::new(
                LeaveType::from_label(type_label.trim()),
                from_date,
                to_date,
                None,
                Some(record_name.trim().to_string()),
            )?
            .with_status(LeaveStatus::from_label(status_label.trim()));

            requests.push(request);
        }

        tracing::info!("📊 UI'dan {} izin kaydı okundu", requests.len());
        Ok(requests)
    }
}
