//! Adım 1-2: Admin yeni çalışan ve ona bağlı ESS sistem kullanıcısı
//! oluşturur. Üretilen kimlik bilgileri sonraki senaryolar için durum
//! dosyasına yazılır.

use super::{report_step, StepOutcome, StepReport};
use crate::config::Config;
use crate::error::SuiteError;
use crate::fixtures::{self, RoleSession};
use crate::models::{Employee, SystemUser};
use crate::pages::{PimPage, UserManagementPage};
use crate::state::{EmployeeRecord, SystemUserRecord, TestDataStore};
use crate::utils;
use std::sync::Arc;

const STEP_1: &str = "Adım 1: Admin PIM üzerinden yeni çalışan oluşturur";
const STEP_2: &str = "Adım 2: Admin çalışan için ESS sistem kullanıcısı oluşturur";

pub async fn run(
    config: Arc<Config>,
    store: &TestDataStore,
) -> Result<Vec<StepReport>, SuiteError> {
    let session = fixtures::admin_session(config.clone()).await?;

    // Zaman damgasıyla benzersiz test verisi üret
    let stamp = chrono::Utc::now().timestamp_millis();
    let mut employee = Employee::new(&format!("TestEmp{}", stamp), "Automation", None)?;
    let system_user = SystemUser::ess(
        &employee.full_name(),
        &format!("emp{}", stamp),
        "TestPass123!",
    )?;

    let mut reports = Vec::new();

    reports.push(
        report_step(
            STEP_1,
            "step-01",
            &session,
            &config,
            step_create_employee(&session, &config, store, &mut employee),
        )
        .await,
    );

    reports.push(
        report_step(
            STEP_2,
            "step-02",
            &session,
            &config,
            step_create_system_user(&session, &config, store, &system_user),
        )
        .await,
    );

    session.close().await;
    Ok(reports)
}

async fn step_create_employee(
    session: &RoleSession,
    config: &Arc<Config>,
    store: &TestDataStore,
    employee: &mut Employee,
) -> Result<StepOutcome, SuiteError> {
    let pim = PimPage::new(session.client.clone(), config.clone());

    let employee_id = pim.create_employee(employee, false).await?;
    if !employee_id.is_empty() {
        employee.set_employee_id(employee_id.clone());
    }

    pim.verify_employee_created(&employee.full_name()).await?;

    store.update(|data| {
        data.employee = Some(EmployeeRecord {
            first_name: employee.first_name().to_string(),
            last_name: employee.last_name().to_string(),
            full_name: employee.full_name(),
            employee_id: employee.employee_id().map(str::to_string),
        });
    })?;

    tracing::info!(
        "✓ Çalışan oluşturuldu: {} (ID: {})",
        employee.full_name(),
        employee_id
    );
    Ok(StepOutcome::Passed)
}

async fn step_create_system_user(
    session: &RoleSession,
    config: &Arc<Config>,
    store: &TestDataStore,
    system_user: &SystemUser,
) -> Result<StepOutcome, SuiteError> {
    let users = UserManagementPage::new(session.client.clone(), config.clone());

    users.create_system_user(system_user).await?;
    users.verify_user_created(system_user.username()).await?;

    store.update(|data| {
        data.system_user = Some(SystemUserRecord {
            username: system_user.username().to_string(),
            password: system_user.password().to_string(),
        });
        if data.created_at.is_none() {
            data.created_at = Some(utils::now_iso());
        }
    })?;

    tracing::info!("✓ Sistem kullanıcısı oluşturuldu: {}", system_user.username());
    Ok(StepOutcome::Passed)
}
