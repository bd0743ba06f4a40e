//! Adım 5-6: Çalışan 2. adımda oluşturulan kimlik bilgileriyle giriş yapıp
//! yıllık izin başvurusu yapar ve durumun beklemede olduğunu doğrular.

use super::{report_step, StepOutcome, StepReport};
use crate::config::Config;
use crate::error::SuiteError;
use crate::fixtures::{self, Credentials, RoleSession};
use crate::models::{LeaveRequest, LeaveStatus};
use crate::pages::LeaveApplyPage;
use crate::state::{LeaveRecord, TestDataStore};
use crate::utils;
use std::sync::Arc;

const STEP_5: &str = "Adım 5: Çalışan giriş yapıp yıllık izin başvurusu yapar";
const STEP_6: &str = "Adım 6: Çalışan My Leave'de bekleyen durumu doğrular";

const LEAVE_COMMENT: &str = "Otomasyon testi - aile tatili için yıllık izin";

pub async fn run(
    config: Arc<Config>,
    store: &TestDataStore,
) -> Result<Vec<StepReport>, SuiteError> {
    let data = store.load()?;
    let Some(system_user) = data.system_user else {
        let reason = "Sistem kullanıcısı kaydı yok, önce 2. adım çalıştırılmalı";
        return Ok(vec![
            StepReport::skipped(STEP_5, reason),
            StepReport::skipped(STEP_6, reason),
        ]);
    };

    let session = fixtures::employee_session(
        config.clone(),
        Some(Credentials {
            username: system_user.username.clone(),
            password: system_user.password.clone(),
        }),
    )
    .await?;

    // Bugünden 5 gün sonrası için 3 günlük izin
    let from_date = chrono::Utc::now().date_naive() + chrono::Duration::days(5);
    let to_date = from_date + chrono::Duration::days(2);
    let request = LeaveRequest::annual(from_date, to_date, Some(LEAVE_COMMENT.to_string()))?;

    let mut reports = Vec::new();

    reports.push(
        report_step(
            STEP_5,
            "step-05",
            &session,
            &config,
            step_apply_leave(&session, &config, store, &request),
        )
        .await,
    );

    reports.push(
        report_step(
            STEP_6,
            "step-06",
            &session,
            &config,
            step_verify_pending(&session, &config),
        )
        .await,
    );

    session.close().await;
    Ok(reports)
}

async fn step_apply_leave(
    session: &RoleSession,
    config: &Arc<Config>,
    store: &TestDataStore,
    request: &LeaveRequest,
) -> Result<StepOutcome, SuiteError> {
    let apply_page = LeaveApplyPage::new(session.client.clone(), config.clone());

    apply_page.apply_leave(request).await?;

    store.update(|data| {
        data.leave_request = Some(LeaveRecord {
            from_date: request.from_date_formatted(),
            to_date: request.to_date_formatted(),
            comment: request.comment().map(str::to_string),
            applied_at: utils::now_iso(),
            approved_at: None,
            approved_by: None,
        });
    })?;

    tracing::info!(
        "✓ İzin başvurusu kaydedildi: {} → {}",
        request.from_date_formatted(),
        request.to_date_formatted()
    );
    Ok(StepOutcome::Passed)
}

async fn step_verify_pending(
    session: &RoleSession,
    config: &Arc<Config>,
) -> Result<StepOutcome, SuiteError> {
    let apply_page = LeaveApplyPage::new(session.client.clone(), config.clone());

    apply_page
        .verify_leave_status(LeaveStatus::PendingApproval.label())
        .await?;

    tracing::info!("✓ İzin durumu '{}'", LeaveStatus::PendingApproval.label());
    Ok(StepOutcome::Passed)
}
