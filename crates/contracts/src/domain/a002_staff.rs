use serde::{Deserialize, Serialize};

/// Role of a staff record. Leaders and salespersons share one shape; a
/// salesperson additionally carries a `leader_id` back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    TeamLeader,
    Salesman,
}

impl StaffRole {
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::TeamLeader => "团队长",
            StaffRole::Salesman => "销售",
        }
    }
}

/// Unified leader/salesperson record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub wechat: String,
    #[serde(default)]
    pub store_id: Option<String>,
    /// Relation only, no ownership: a salesperson points at its leader.
    #[serde(default)]
    pub leader_id: Option<String>,
    pub role: StaffRole,
}

/// Fixed placeholder payload used by the list views' "add" action. The new
/// record is refined afterwards through inline edits.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffDto {
    pub name: String,
    pub phone: String,
    pub wechat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<String>,
}

impl CreateStaffDto {
    pub fn placeholder_leader() -> Self {
        Self {
            name: "新团队长".into(),
            ..Self::default()
        }
    }

    pub fn placeholder_salesperson() -> Self {
        Self {
            name: "新销售".into(),
            ..Self::default()
        }
    }
}
