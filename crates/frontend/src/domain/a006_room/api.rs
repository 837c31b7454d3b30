use contracts::domain::a006_room::Room;
use contracts::shared::envelope::ApiEnvelope;
use serde::Serialize;

use crate::shared::gateway::{self, expect_data, ApiError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomQuery<'a> {
    store_id: &'a str,
}

/// Rooms of one store. Rooms are static configuration; the booking overlay
/// comes from the schedule endpoint.
pub async fn list(store_id: &str) -> Result<Vec<Room>, ApiError> {
    let env: ApiEnvelope<Vec<Room>> =
        gateway::get_json("/api/admin/rooms", Some(&RoomQuery { store_id })).await?;
    expect_data(env)
}
