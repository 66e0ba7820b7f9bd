use bitflags::bitflags;

use crate::util::bitflags_serde;

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct GiftCodeFlags: u64 {
        const PAYMENT_SOURCE_REQUIRED = 1 << 0;
        const EXISTING_SUBSCRIPTION_DISALLOWED = 1 << 1;
        const NOT_SELF_REDEEMABLE = 1 << 2;
        const PROMOTION = 1 << 3;
    }
}

bitflags_serde!(GiftCodeFlags, u64);
