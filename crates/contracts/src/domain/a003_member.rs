use serde::{Deserialize, Serialize};

/// Card tier of a member, derived from the cumulative recharge total.
///
/// Invariant: `card_type = max tier whose min_amount <= cumulative recharge`.
/// The tier is recomputed by the recharge flow only and never edited by hand
/// in this console, so it cannot decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    #[default]
    Normal,
    Silver,
    Gold,
    Diamond,
}

impl CardType {
    /// Tiers in ascending order of their entry threshold.
    pub const TIERS: [CardType; 4] = [
        CardType::Normal,
        CardType::Silver,
        CardType::Gold,
        CardType::Diamond,
    ];

    /// Cumulative recharge (元) required to enter the tier.
    pub fn min_amount(&self) -> f64 {
        match self {
            CardType::Normal => 0.0,
            CardType::Silver => 5_000.0,
            CardType::Gold => 20_000.0,
            CardType::Diamond => 50_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardType::Normal => "普通卡",
            CardType::Silver => "银卡",
            CardType::Gold => "金卡",
            CardType::Diamond => "钻石卡",
        }
    }

    /// Highest tier whose threshold is covered by `cumulative`.
    pub fn for_cumulative(cumulative: f64) -> CardType {
        Self::TIERS
            .iter()
            .rev()
            .copied()
            .find(|t| t.min_amount() <= cumulative)
            .unwrap_or(CardType::Normal)
    }
}

/// Customer account with a paid balance and a bonus ("gift") balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub member_id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub card_type: CardType,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub register_date: Option<String>,
    #[serde(default)]
    pub remaining_recharge: f64,
    #[serde(default)]
    pub remaining_gift: f64,
    #[serde(default)]
    pub cumulative_recharge: f64,
    /// Owning salesperson; relation only, no ownership.
    #[serde(default)]
    pub sales_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberDto {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_id: Option<String>,
}

impl CreateMemberDto {
    pub fn placeholder() -> Self {
        Self {
            name: "新会员".into(),
            ..Self::default()
        }
    }
}

/// Body of `POST /api/admin/members/:id/recharge`.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RechargeApply {
    pub amount: f64,
    pub gift_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_thresholds() {
        assert_eq!(CardType::for_cumulative(0.0), CardType::Normal);
        assert_eq!(CardType::for_cumulative(4_999.99), CardType::Normal);
        assert_eq!(CardType::for_cumulative(5_000.0), CardType::Silver);
        assert_eq!(CardType::for_cumulative(19_999.0), CardType::Silver);
        assert_eq!(CardType::for_cumulative(20_000.0), CardType::Gold);
        assert_eq!(CardType::for_cumulative(50_000.0), CardType::Diamond);
        assert_eq!(CardType::for_cumulative(1_000_000.0), CardType::Diamond);
    }

    #[test]
    fn test_card_type_monotonic_in_cumulative() {
        let mut last = CardType::Normal;
        for amount in (0..120_000).step_by(500) {
            let tier = CardType::for_cumulative(amount as f64);
            assert!(tier >= last, "tier decreased at {amount}");
            last = tier;
        }
    }

    #[test]
    fn test_card_type_wire_format() {
        assert_eq!(serde_json::to_string(&CardType::Gold).unwrap(), "\"GOLD\"");
        let t: CardType = serde_json::from_str("\"DIAMOND\"").unwrap();
        assert_eq!(t, CardType::Diamond);
    }
}
