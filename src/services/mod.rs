//! Typed wrappers over the request layer, one per backend feature area.
//!
//! Each wrapper is stateless and holds a clone of the client; clones are
//! cheap and share the connection pool. The wrappers only choose paths,
//! methods, and shapes; classification, auth, and decoding all happen in
//! the client.

mod auth;
mod dashboard;
mod holidays;
mod receipts;
mod report;

pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use holidays::HolidaysApi;
pub use receipts::ReceiptsApi;
pub use report::ReportApi;
