use serde::{Deserialize, Serialize};

/// Room of a store. Static configuration; the time-varying booking overlay
/// lives in the schedule matrix (`a007_reservation`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub room_no: String,
    #[serde(default)]
    pub room_type: String,
    pub store_id: String,
    #[serde(default)]
    pub price: f64,
}
