pub mod csv;
pub mod ui;

pub use csv::CsvLeaveRepository;
pub use ui::UiLeaveRepository;

use crate::error::SuiteError;
use crate::models::LeaveRequest;
use async_trait::async_trait;

/// İzin taleplerine erişim sözleşmesi. İki değiştirilebilir implementasyon
/// var: dosya tabanlı ve canlı UI tabanlı. İkisi de aynı veriden değer
/// olarak eşdeğer `LeaveRequest` üretmek zorunda; testler kaynağı
/// değiştirince assertion'lar değişmez.
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// İsteğe bağlı çalışan adı filtresiyle görünür izin taleplerini getirir
    async fn leave_requests(
        &self,
        employee_name: Option<&str>,
    ) -> Result<Vec<LeaveRequest>, SuiteError>;

    /// Çalışana ait ilk izin talebini getirir
    async fn leave_request_by_employee(
        &self,
        employee_name: &str,
    ) -> Result<Option<LeaveRequest>, SuiteError> {
        Ok(self
            .leave_requests(Some(employee_name))
            .await?
            .into_iter()
            .next())
    }
}
