use serde::{Deserialize, Serialize};

/// Review lifecycle of a ledger entry (recharge or consume record).
///
/// Records are append-only; the status is the only field the back office
/// ever changes, and this console merely displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Void,
    #[serde(other)]
    Unknown,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "待审核",
            ReviewStatus::Approved => "已通过",
            ReviewStatus::Rejected => "已拒绝",
            ReviewStatus::Cancelled => "已取消",
            ReviewStatus::Void => "已作废",
            ReviewStatus::Unknown => "未知",
        }
    }

    /// Badge css modifier used by the ledger tables.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "badge--pending",
            ReviewStatus::Approved => "badge--approved",
            ReviewStatus::Rejected => "badge--rejected",
            ReviewStatus::Cancelled => "badge--cancelled",
            ReviewStatus::Void => "badge--void",
            ReviewStatus::Unknown => "badge--neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ReviewStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let s: ReviewStatus = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(s, ReviewStatus::Approved);
    }

    #[test]
    fn test_unrecognized_status_maps_to_unknown() {
        let s: ReviewStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(s, ReviewStatus::Unknown);
        assert_eq!(s.label(), "未知");
    }
}
