use chrono::NaiveDate;
use contracts::domain::a007_reservation::{DirectReserveRequest, Reservation, RoomSchedule};
use contracts::shared::envelope::ApiEnvelope;
use serde::Serialize;

use crate::shared::gateway::{self, expect_data, unwrap_envelope, ApiError};

/// Query of one store's schedule matrix. Also serves as the cache key
/// parameter, so invalidating the `schedule` prefix hits every open window.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQuery {
    pub store_id: String,
    pub start_date: NaiveDate,
    pub days: i64,
}

/// Schedule matrix of one store: one row per room, one cell per date.
/// There is no "all stores" endpoint; multi-store views fan out per store.
pub async fn schedule(query: &ScheduleQuery) -> Result<Vec<RoomSchedule>, ApiError> {
    let path = format!(
        "/api/admin/stores/{}/room-schedules",
        urlencoding::encode(&query.store_id)
    );
    let env: ApiEnvelope<Vec<RoomSchedule>> = gateway::get_json(&path, Some(query)).await?;
    expect_data(env)
}

pub async fn detail(id: &str) -> Result<Option<Reservation>, ApiError> {
    let path = format!("/api/admin/bookings/{}", urlencoding::encode(id));
    let env: ApiEnvelope<Reservation> = gateway::get_json::<_, ()>(&path, None).await?;
    unwrap_envelope(env)
}

/// Privileged direct reservation: bypasses the customer-facing review flow
/// and creates the booking already approved.
pub async fn direct_reserve(request: &DirectReserveRequest) -> Result<Reservation, ApiError> {
    let env: ApiEnvelope<Reservation> =
        gateway::post_json("/api/admin/bookings/direct", request).await?;
    expect_data(env)
}
