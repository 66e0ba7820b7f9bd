use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::Snowflake;

mod gift_code_flags;
pub use gift_code_flags::GiftCodeFlags;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Entitlement {
    pub id: Snowflake,
    pub sku_id: Snowflake,
    pub application_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(rename = "type")]
    pub entitlement_type: EntitlementType,
    #[serde(default)]
    pub deleted: bool,
    /// Test entitlements have no validity window.
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub consumed: bool,
}

impl Entitlement {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.deleted
            && self.starts_at.map_or(true, |start| start <= now)
            && self.ends_at.map_or(true, |end| now < end)
    }
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EntitlementType {
    Purchase = 1,
    PremiumSubscription = 2,
    DeveloperGift = 3,
    TestModePurchase = 4,
    FreePurchase = 5,
    UserGift = 6,
    PremiumPurchase = 7,
    ApplicationSubscription = 8,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EntitlementOwnerType {
    Guild = 1,
    User = 2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_active_window() {
        let raw = r#"{
            "id": "1019653849998299136",
            "sku_id": "1019475255913222144",
            "application_id": "1019370614521200640",
            "user_id": "771129655544643584",
            "deleted": false,
            "starts_at": "2022-09-14T17:00:18.704163+00:00",
            "ends_at": "2022-10-14T17:00:18.704163+00:00",
            "type": 8,
            "consumed": false
        }"#;

        let entitlement: Entitlement = serde_json::from_str(raw).unwrap();
        assert_eq!(entitlement.entitlement_type, EntitlementType::ApplicationSubscription);
        assert!(entitlement.is_active(Utc.with_ymd_and_hms(2022, 10, 1, 0, 0, 0).unwrap()));
        assert!(!entitlement.is_active(Utc.with_ymd_and_hms(2022, 11, 1, 0, 0, 0).unwrap()));
    }
}
