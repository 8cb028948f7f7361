//! Public-holiday lookups for the user's working country.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::{AvailableCountry, PublicHoliday};

#[derive(Debug, Clone)]
pub struct HolidaysApi {
    client: ApiClient,
}

impl HolidaysApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn public_holidays(&self, year: i32) -> Result<Vec<PublicHoliday>> {
        self.client
            .request(Endpoint::get("/holidays").with_query([("year", year.to_string())]))
            .await
    }

    pub async fn countries(&self) -> Result<Vec<AvailableCountry>> {
        self.client
            .request(Endpoint::get("/holidays/countries"))
            .await
    }
}
