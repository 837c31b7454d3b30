use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a006_room::Room;

/// Booking state of one `(room, date)` schedule cell.
///
/// The state is derived from the reservation lifecycle; a cell with no
/// reservation is always `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellState {
    #[default]
    Available,
    Pending,
    Booked,
    Finished,
}

impl CellState {
    pub fn label(&self) -> &'static str {
        match self {
            CellState::Available => "可订",
            CellState::Pending => "待审核",
            CellState::Booked => "已预定",
            CellState::Finished => "已完成",
        }
    }

    pub fn cell_class(&self) -> &'static str {
        match self {
            CellState::Available => "schedule-cell--available",
            CellState::Pending => "schedule-cell--pending",
            CellState::Booked => "schedule-cell--booked",
            CellState::Finished => "schedule-cell--finished",
        }
    }
}

/// One cell of the schedule matrix. A missing `state` on the wire means the
/// room is bookable that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCell {
    pub date: NaiveDate,
    #[serde(default)]
    pub state: CellState,
    #[serde(default)]
    pub reservation_id: Option<String>,
}

/// One row of the schedule matrix: a room plus its date-indexed cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSchedule {
    pub room: Room,
    pub cells: Vec<ScheduleCell>,
}

/// What clicking a schedule cell does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    /// Bookable cell: open the booking-creation modal seeded with the cell.
    OpenCreate,
    /// Occupied cell: open the read-only detail modal for its reservation.
    OpenDetail(String),
    /// Occupied state without a reservation reference; inconsistent data, no
    /// handler fires.
    Inert,
}

/// Click-dispatch rule of the availability grid.
pub fn cell_action(cell: &ScheduleCell) -> CellAction {
    match (cell.state, &cell.reservation_id) {
        (CellState::Available, _) => CellAction::OpenCreate,
        (_, Some(id)) => CellAction::OpenDetail(id.clone()),
        (_, None) => CellAction::Inert,
    }
}

/// Reservation lifecycle as reported by the booking endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "待审核",
            ReservationStatus::Approved => "已通过",
            ReservationStatus::Rejected => "已拒绝",
            ReservationStatus::Cancelled => "已取消",
            ReservationStatus::Unknown => "未知状态",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "badge--pending",
            ReservationStatus::Approved => "badge--approved",
            ReservationStatus::Rejected => "badge--rejected",
            ReservationStatus::Cancelled => "badge--cancelled",
            ReservationStatus::Unknown => "badge--neutral",
        }
    }
}

/// Reservation record behind an occupied schedule cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub reserve_no: String,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub staff_id: Option<String>,
    pub reserve_date: NaiveDate,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Body of the privileged "admin direct reservation" operation. The created
/// reservation is already approved; no review step follows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectReserveRequest {
    pub store_id: String,
    pub room_id: String,
    pub member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    pub reserve_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Form state of the booking-creation modal before submission.
#[derive(Debug, Clone, Default)]
pub struct DirectReserveDraft {
    pub member_id: Option<String>,
    pub staff_id: Option<String>,
    pub guest_count: Option<u32>,
    pub remark: String,
}

impl DirectReserveDraft {
    /// Client-side validation gate: a member is mandatory, and the request
    /// body is only assembled once the gate passes. No network call is made
    /// on failure.
    pub fn validate(
        &self,
        store_id: &str,
        room_id: &str,
        reserve_date: NaiveDate,
    ) -> Result<DirectReserveRequest, String> {
        let member_id = self
            .member_id
            .clone()
            .ok_or_else(|| "请先选择会员".to_string())?;
        let remark = self.remark.trim();
        Ok(DirectReserveRequest {
            store_id: store_id.to_string(),
            room_id: room_id.to_string(),
            member_id,
            staff_id: self.staff_id.clone(),
            reserve_date,
            guest_count: self.guest_count,
            remark: if remark.is_empty() {
                None
            } else {
                Some(remark.to_string())
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(state: CellState, reservation_id: Option<&str>) -> ScheduleCell {
        ScheduleCell {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            state,
            reservation_id: reservation_id.map(String::from),
        }
    }

    #[test]
    fn test_available_cell_opens_creation() {
        assert_eq!(cell_action(&cell(CellState::Available, None)), CellAction::OpenCreate);
        // a reservation reference on an available cell is ignored
        assert_eq!(
            cell_action(&cell(CellState::Available, Some("r1"))),
            CellAction::OpenCreate
        );
    }

    #[test]
    fn test_occupied_cell_opens_detail() {
        for state in [CellState::Pending, CellState::Booked, CellState::Finished] {
            assert_eq!(
                cell_action(&cell(state, Some("r9"))),
                CellAction::OpenDetail("r9".into())
            );
        }
    }

    #[test]
    fn test_occupied_cell_without_reservation_is_inert() {
        for state in [CellState::Pending, CellState::Booked, CellState::Finished] {
            assert_eq!(cell_action(&cell(state, None)), CellAction::Inert);
        }
    }

    #[test]
    fn test_cell_labels() {
        assert_eq!(CellState::Available.label(), "可订");
        assert_eq!(CellState::Pending.label(), "待审核");
        assert_eq!(CellState::Booked.label(), "已预定");
        assert_eq!(CellState::Finished.label(), "已完成");
    }

    #[test]
    fn test_absent_state_deserializes_as_available() {
        let c: ScheduleCell = serde_json::from_str(r#"{"date":"2025-06-01"}"#).unwrap();
        assert_eq!(c.state, CellState::Available);
        assert!(c.reservation_id.is_none());
    }

    #[test]
    fn test_draft_requires_member() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let draft = DirectReserveDraft::default();
        assert!(draft.validate("s1", "room1", date).is_err());

        let draft = DirectReserveDraft {
            member_id: Some("m1".into()),
            guest_count: Some(6),
            remark: "  生日聚会 ".into(),
            ..Default::default()
        };
        let req = draft.validate("s1", "room1", date).unwrap();
        assert_eq!(req.member_id, "m1");
        assert_eq!(req.remark.as_deref(), Some("生日聚会"));
        assert!(req.staff_id.is_none());
    }

    #[test]
    fn test_direct_request_omits_optional_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let req = DirectReserveDraft {
            member_id: Some("m1".into()),
            ..Default::default()
        }
        .validate("s1", "room1", date)
        .unwrap();
        let json = serde_json::to_value(&req).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("staffId"));
        assert!(!obj.contains_key("guestCount"));
        assert!(!obj.contains_key("remark"));
        assert_eq!(obj.get("reserveDate").unwrap(), "2025-06-01");
    }
}
