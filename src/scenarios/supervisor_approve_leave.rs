//! Adım 7-9: Süpervizör bekleyen izin taleplerini görüntüler, çalışanın
//! talebini onaylar ve durumun onaylandığını doğrular.

use super::{report_step, StepOutcome, StepReport};
use crate::config::Config;
use crate::error::SuiteError;
use crate::fixtures::{self, RoleSession};
use crate::models::LeaveStatus;
use crate::pages::LeaveListPage;
use crate::state::TestDataStore;
use crate::utils;
use std::sync::Arc;

const STEP_7: &str = "Adım 7: Süpervizör bekleyen izin taleplerini görüntüler";
const STEP_8: &str = "Adım 8: Süpervizör çalışanın izin talebini onaylar";
const STEP_9: &str = "Adım 9: Süpervizör durumun Approved olduğunu doğrular";

pub async fn run(
    config: Arc<Config>,
    store: &TestDataStore,
) -> Result<Vec<StepReport>, SuiteError> {
    let data = store.load()?;
    let employee_name = data.employee.map(|e| e.full_name);

    let session = fixtures::supervisor_session(config.clone()).await?;
    if !session.authenticated {
        session.close().await;
        let reason =
            "Süpervizör kimlik bilgileri tanımlı değil (SUPERVISOR_USERNAME/SUPERVISOR_PASSWORD)";
        return Ok(vec![
            StepReport::skipped(STEP_7, reason),
            StepReport::skipped(STEP_8, reason),
            StepReport::skipped(STEP_9, reason),
        ]);
    }

    let mut reports = Vec::new();

    reports.push(
        report_step(
            STEP_7,
            "step-07",
            &session,
            &config,
            step_view_pending(&session, &config),
        )
        .await,
    );

    reports.push(
        report_step(
            STEP_8,
            "step-08",
            &session,
            &config,
            step_approve(&session, &config, store, employee_name.as_deref()),
        )
        .await,
    );

    reports.push(
        report_step(
            STEP_9,
            "step-09",
            &session,
            &config,
            step_verify_approved(&session, &config, employee_name.as_deref()),
        )
        .await,
    );

    session.close().await;
    Ok(reports)
}

async fn step_view_pending(
    session: &RoleSession,
    config: &Arc<Config>,
) -> Result<StepOutcome, SuiteError> {
    let list = LeaveListPage::new(session.client.clone(), config.clone());

    list.search_leave(None, Some(LeaveStatus::PendingApproval))
        .await?;

    let count = list.records_found_count().await?;
    if count == 0 {
        return Err(SuiteError::Verification(
            "Bekleyen izin talebi bulunamadı".to_string(),
        ));
    }

    tracing::info!("✓ {} bekleyen izin talebi bulundu", count);
    Ok(StepOutcome::Passed)
}

async fn step_approve(
    session: &RoleSession,
    config: &Arc<Config>,
    store: &TestDataStore,
    employee_name: Option<&str>,
) -> Result<StepOutcome, SuiteError> {
    let Some(employee_name) = employee_name else {
        return Ok(StepOutcome::Skipped(
            "Çalışan kaydı yok, önce 1. adım çalıştırılmalı".to_string(),
        ));
    };

    let list = LeaveListPage::new(session.client.clone(), config.clone());

    list.search_leave(Some(employee_name), Some(LeaveStatus::PendingApproval))
        .await?;
    list.approve_leave(1).await?;

    store.update(|data| {
        if let Some(leave) = data.leave_request.as_mut() {
            leave.approved_at = Some(utils::now_iso());
            leave.approved_by = Some(config.supervisor_username.clone());
        }
    })?;

    tracing::info!("✓ İzin talebi onaylandı: {}", employee_name);
    Ok(StepOutcome::Passed)
}

async fn step_verify_approved(
    session: &RoleSession,
    config: &Arc<Config>,
    employee_name: Option<&str>,
) -> Result<StepOutcome, SuiteError> {
    let Some(employee_name) = employee_name else {
        return Ok(StepOutcome::Skipped(
            "Çalışan kaydı yok, önce 1. adım çalıştırılmalı".to_string(),
        ));
    };

    let list = LeaveListPage::new(session.client.clone(), config.clone());

    list.search_leave(Some(employee_name), Some(LeaveStatus::Approved))
        .await?;
    list.verify_leave_status(LeaveStatus::Approved.label(), 1)
        .await?;

    tracing::info!("✓ İzin durumu '{}'", LeaveStatus::Approved.label());
    Ok(StepOutcome::Passed)
}
