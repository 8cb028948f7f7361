//! Wire shapes exchanged with the backend.
//!
//! Field names mirror the wire convention (underscores); serde carries the
//! mapping onto these snake_case fields, closed string sets decode into
//! enums, and ISO-8601 dates land on `chrono` types.

mod auth;
mod dashboard;
mod holidays;
mod receipts;

pub use auth::{AuthResponse, LoginRequest, MessageResponse, RefreshRequest, RegisterRequest};
pub use dashboard::{ComplianceStatus, DashboardSummary, UserSettings, UserSettingsUpdate};
pub use holidays::{
    AvailableCountry, PublicHoliday, UserHoliday, UserHolidayDraft, WorkSchedulePeriod,
    WorkSchedulePeriodDraft,
};
pub use receipts::{OcrStatus, Receipt, ReceiptDateUpdate, ReceiptList};
