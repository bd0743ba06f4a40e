//! Adım 3-4: Admin çalışana süpervizör atar ve atamayı Report-to
//! sekmesinde doğrular.

use super::{report_step, StepOutcome, StepReport};
use crate::config::Config;
use crate::error::SuiteError;
use crate::fixtures::{self, RoleSession};
use crate::pages::PimPage;
use crate::state::{SupervisorRecord, TestDataStore};
use crate::utils;
use std::sync::Arc;

// Demo ortamındaki mevcut süpervizör
const SUPERVISOR_NAME: &str = "Odis Adalwin";
const REPORTING_METHOD: &str = "Direct";

const STEP_3: &str = "Adım 3: Admin çalışana süpervizör atar";
const STEP_4: &str = "Adım 4: Süpervizör ataması Report-to sekmesinde doğrulanır";

pub async fn run(
    config: Arc<Config>,
    store: &TestDataStore,
) -> Result<Vec<StepReport>, SuiteError> {
    let data = store.load()?;
    let Some(employee) = data.employee else {
        let reason = "Çalışan kaydı yok, önce 1. adım çalıştırılmalı";
        return Ok(vec![
            StepReport::skipped(STEP_3, reason),
            StepReport::skipped(STEP_4, reason),
        ]);
    };

    let session = fixtures::admin_session(config.clone()).await?;

    let mut reports = Vec::new();

    reports.push(
        report_step(
            STEP_3,
            "step-03",
            &session,
            &config,
            step_assign_supervisor(&session, &config, store, &employee.full_name),
        )
        .await,
    );

    reports.push(
        report_step(
            STEP_4,
            "step-04",
            &session,
            &config,
            step_verify_assignment(&session, &config, &employee.full_name),
        )
        .await,
    );

    session.close().await;
    Ok(reports)
}

async fn step_assign_supervisor(
    session: &RoleSession,
    config: &Arc<Config>,
    store: &TestDataStore,
    employee_name: &str,
) -> Result<StepOutcome, SuiteError> {
    let pim = PimPage::new(session.client.clone(), config.clone());

    pim.open_employee_profile(employee_name).await?;
    pim.assign_supervisor(SUPERVISOR_NAME, REPORTING_METHOD).await?;

    store.update(|data| {
        data.supervisor = Some(SupervisorRecord {
            name: SUPERVISOR_NAME.to_string(),
            assigned_at: utils::now_iso(),
        });
    })?;

    tracing::info!(
        "✓ Süpervizör '{}' çalışana atandı: {}",
        SUPERVISOR_NAME,
        employee_name
    );
    Ok(StepOutcome::Passed)
}

async fn step_verify_assignment(
    session: &RoleSession,
    config: &Arc<Config>,
    employee_name: &str,
) -> Result<StepOutcome, SuiteError> {
    let pim = PimPage::new(session.client.clone(), config.clone());

    pim.open_employee_profile(employee_name).await?;
    pim.verify_supervisor_assigned(SUPERVISOR_NAME).await?;

    tracing::info!("✓ Süpervizör ataması doğrulandı");
    Ok(StepOutcome::Passed)
}
