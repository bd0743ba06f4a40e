//! Numaralı senaryo adımları. Her grup bağımsız çalıştırılabilir bir
//! birimdir; ön koşul verisi durum dosyasında yoksa adım başarısız olmak
//! yerine kendini atlar.

pub mod admin_assign_supervisor;
pub mod admin_create_employee;
pub mod admin_verify_leave;
pub mod employee_apply_leave;
pub mod supervisor_approve_leave;

use crate::browser;
use crate::config::Config;
use crate::error::SuiteError;
use crate::fixtures::RoleSession;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Passed,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: String,
    pub outcome: StepOutcome,
}

impl StepReport {
    pub fn new(step: impl Into<String>, outcome: StepOutcome) -> Self {
        Self {
            step: step.into(),
            outcome,
        }
    }

    pub fn skipped(step: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(step, StepOutcome::Skipped(reason.into()))
    }
}

/// Adımı çalıştırır, sonucu loglar; hata halinde ekran görüntüsü alıp
/// adımı başarısız işaretler
pub(crate) async fn report_step<Fut>(
    step: &str,
    tag: &str,
    session: &RoleSession,
    config: &Config,
    fut: Fut,
) -> StepReport
where
    Fut: Future<Output = Result<StepOutcome, SuiteError>>,
{
    tracing::info!("▶️ {}", step);

    match fut.await {
        Ok(StepOutcome::Passed) => {
            tracing::info!("✅ {}", step);
            StepReport::new(step, StepOutcome::Passed)
        }
        Ok(StepOutcome::Skipped(reason)) => {
            tracing::warn!("⏭️ {} atlandı: {}", step, reason);
            StepReport::new(step, StepOutcome::Skipped(reason))
        }
        Ok(StepOutcome::Failed(reason)) => {
            tracing::error!("❌ {}: {}", step, reason);
            StepReport::new(step, StepOutcome::Failed(reason))
        }
        Err(e) => {
            tracing::error!("❌ {}: {}", step, e);
            browser::capture_failure(&session.client, &config.artifacts_dir, tag).await;
            StepReport::new(step, StepOutcome::Failed(e.to_string()))
        }
    }
}
