use serde::{Deserialize, Serialize};

use crate::domain::a003_member::CardType;

/// Physical KTV store. Identity is immutable once created; everything else
/// (rooms, staff, bookings) hangs off `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pricing: PricingScheme,
}

/// Room pricing configuration of a store.
///
/// Two store types coexist in the business: one prices rooms by time slot,
/// the other by the member's card tier. The scheme is a tagged union so the
/// store form can pick its editor off the tag instead of keeping two
/// near-duplicate code paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PricingScheme {
    TimeSlot { slots: Vec<TimeSlotPrice> },
    MembershipTier { prices: Vec<TierPrice> },
}

impl Default for PricingScheme {
    fn default() -> Self {
        PricingScheme::TimeSlot { slots: Vec::new() }
    }
}

impl PricingScheme {
    pub fn kind_label(&self) -> &'static str {
        match self {
            PricingScheme::TimeSlot { .. } => "时段计价",
            PricingScheme::MembershipTier { .. } => "会员等级计价",
        }
    }
}

/// Price of one time slot, e.g. 12:00-18:00.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotPrice {
    pub start_time: String,
    pub end_time: String,
    pub price: f64,
}

/// Flat per-card-tier price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierPrice {
    pub card_type: CardType,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingScheme>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_scheme_tag() {
        let slot = PricingScheme::TimeSlot {
            slots: vec![TimeSlotPrice {
                start_time: "12:00".into(),
                end_time: "18:00".into(),
                price: 88.0,
            }],
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["kind"], "timeSlot");

        let tier: PricingScheme = serde_json::from_str(
            r#"{"kind":"membershipTier","prices":[{"cardType":"GOLD","price":128.0}]}"#,
        )
        .unwrap();
        match tier {
            PricingScheme::MembershipTier { prices } => {
                assert_eq!(prices.len(), 1);
                assert_eq!(prices[0].card_type, CardType::Gold);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_store_without_pricing_defaults() {
        let s: Store = serde_json::from_str(r#"{"id":"s1","name":"总店"}"#).unwrap();
        assert_eq!(s.pricing, PricingScheme::TimeSlot { slots: Vec::new() });
    }
}
