//! Dashboard and settings shapes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Year-to-date compliance picture for one user.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSummary {
    pub year: i32,
    pub working_country_code: String,
    pub homeworking_threshold: i32,
    pub total_working_days: i32,
    pub past_working_days: i32,
    pub days_with_proof: i32,
    pub days_without_proof: i32,
    pub forecast_homeworking_days: i32,
    pub forecasted_days_without_proof: i32,
    pub remaining_allowed_homeworking_days: i32,
    pub is_at_risk: bool,
    pub compliance_status: ComplianceStatus,
}

/// Verdict on the user's homeworking budget for the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    AtRisk,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSettings {
    pub user_id: Uuid,
    pub working_country_code: String,
    pub residence_country_code: String,
    pub homeworking_threshold: i32,
    /// Weekday numbers, 0 = Monday.
    pub working_days: Vec<u8>,
}

/// Patch shape for settings; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homeworking_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_days: Option<Vec<u8>>,
}
