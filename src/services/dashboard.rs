//! Compliance dashboard, user settings, holidays, and work schedules.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::{
    DashboardSummary, UserHoliday, UserHolidayDraft, UserSettings, UserSettingsUpdate,
    WorkSchedulePeriod, WorkSchedulePeriodDraft,
};

#[derive(Debug, Clone)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn summary(&self, year: i32) -> Result<DashboardSummary> {
        self.client
            .request(Endpoint::get("/dashboard").with_query([("year", year.to_string())]))
            .await
    }

    pub async fn settings(&self) -> Result<UserSettings> {
        self.client
            .request(Endpoint::get("/dashboard/settings"))
            .await
    }

    pub async fn update_settings(&self, update: &UserSettingsUpdate) -> Result<UserSettings> {
        self.client
            .request(Endpoint::put("/dashboard/settings").with_json_body(update)?)
            .await
    }

    pub async fn list_holidays(&self, year: Option<i32>) -> Result<Vec<UserHoliday>> {
        let mut endpoint = Endpoint::get("/dashboard/holidays");
        if let Some(year) = year {
            endpoint = endpoint.with_query([("year", year.to_string())]);
        }
        self.client.request(endpoint).await
    }

    pub async fn create_holiday(&self, draft: &UserHolidayDraft) -> Result<UserHoliday> {
        self.client
            .request(Endpoint::post("/dashboard/holidays").with_json_body(draft)?)
            .await
    }

    pub async fn update_holiday(&self, id: Uuid, draft: &UserHolidayDraft) -> Result<UserHoliday> {
        self.client
            .request(Endpoint::put(format!("/dashboard/holidays/{id}")).with_json_body(draft)?)
            .await
    }

    pub async fn delete_holiday(&self, id: Uuid) -> Result<()> {
        self.client
            .request_no_content(Endpoint::delete(format!("/dashboard/holidays/{id}")))
            .await
    }

    pub async fn list_schedule_periods(&self) -> Result<Vec<WorkSchedulePeriod>> {
        self.client
            .request(Endpoint::get("/dashboard/schedule"))
            .await
    }

    pub async fn create_schedule_period(
        &self,
        draft: &WorkSchedulePeriodDraft,
    ) -> Result<WorkSchedulePeriod> {
        self.client
            .request(Endpoint::post("/dashboard/schedule").with_json_body(draft)?)
            .await
    }

    pub async fn update_schedule_period(
        &self,
        id: Uuid,
        draft: &WorkSchedulePeriodDraft,
    ) -> Result<WorkSchedulePeriod> {
        self.client
            .request(Endpoint::put(format!("/dashboard/schedule/{id}")).with_json_body(draft)?)
            .await
    }

    pub async fn delete_schedule_period(&self, id: Uuid) -> Result<()> {
        self.client
            .request_no_content(Endpoint::delete(format!("/dashboard/schedule/{id}")))
            .await
    }
}
