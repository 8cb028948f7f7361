//! Holiday and work-schedule shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A leave period recorded by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserHoliday {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

/// Creation/update payload for a user holiday.
#[derive(Debug, Clone, Serialize)]
pub struct UserHolidayDraft {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A span during which the user's working-day pattern differs from the
/// default settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkSchedulePeriod {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    /// `None` means open-ended.
    pub end_date: Option<NaiveDate>,
    /// Weekday numbers, 0 = Monday. Empty means full leave.
    pub working_days: Vec<u8>,
    pub description: Option<String>,
}

/// Creation/update payload for a schedule period. `end_date: None` is
/// meaningful (open-ended) and is serialized as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkSchedulePeriodDraft {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub working_days: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Nation-wide holiday in the user's working country.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicHoliday {
    pub date: NaiveDate,
    pub name: String,
    pub local_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableCountry {
    pub country_code: String,
    pub name: String,
}
