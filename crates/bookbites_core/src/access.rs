//! crates/bookbites_core/src/access.rs
//!
//! The access control engine: a single pure function mapping
//! (content level, current user, admin override) to a grant/deny decision.
//! Called on every content render, so it must stay total and side-effect
//! free.

use chrono::{DateTime, Utc};

use crate::domain::{AccessLevel, SubscriptionTier, User};

/// Decides whether content at `level` is visible.
///
/// An expired tier downgrades the decision to free-only; the stored tier is
/// never mutated here — expiry is evaluated lazily at access time.
pub fn can_access(
    level: AccessLevel,
    user: Option<&User>,
    admin_override: bool,
    now: DateTime<Utc>,
) -> bool {
    if admin_override {
        return true;
    }

    let user = match user {
        Some(user) => user,
        None => return level == AccessLevel::Free,
    };

    if let Some(expiry) = user.tier_expiry {
        if expiry < now {
            return level == AccessLevel::Free;
        }
    }

    match level {
        AccessLevel::Free => true,
        AccessLevel::Premium => {
            user.tier == SubscriptionTier::Premium || user.tier == SubscriptionTier::Gold
        }
        AccessLevel::Gold => user.tier == SubscriptionTier::Gold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user_with_tier(tier: SubscriptionTier) -> User {
        User {
            id: "u1".to_string(),
            token: None,
            name: None,
            email: None,
            phone: None,
            is_guest: false,
            provider_id: None,
            tier,
            tier_expiry: None,
            is_super_admin: false,
            is_store_manager: false,
            preferences: Default::default(),
        }
    }

    #[test]
    fn free_content_is_granted_to_every_user() {
        let now = Utc::now();
        for tier in [
            SubscriptionTier::Free,
            SubscriptionTier::Premium,
            SubscriptionTier::Gold,
        ] {
            let user = user_with_tier(tier);
            assert!(can_access(AccessLevel::Free, Some(&user), false, now));
        }
    }

    #[test]
    fn signed_out_users_only_see_free_content() {
        let now = Utc::now();
        assert!(can_access(AccessLevel::Free, None, false, now));
        assert!(!can_access(AccessLevel::Premium, None, false, now));
        assert!(!can_access(AccessLevel::Gold, None, false, now));
    }

    #[test]
    fn premium_content_needs_premium_or_gold() {
        let now = Utc::now();
        let free = user_with_tier(SubscriptionTier::Free);
        let premium = user_with_tier(SubscriptionTier::Premium);
        let gold = user_with_tier(SubscriptionTier::Gold);

        assert!(!can_access(AccessLevel::Premium, Some(&free), false, now));
        assert!(can_access(AccessLevel::Premium, Some(&premium), false, now));
        assert!(can_access(AccessLevel::Premium, Some(&gold), false, now));
    }

    #[test]
    fn gold_content_needs_gold() {
        let now = Utc::now();
        let premium = user_with_tier(SubscriptionTier::Premium);
        let gold = user_with_tier(SubscriptionTier::Gold);

        assert!(!can_access(AccessLevel::Gold, Some(&premium), false, now));
        assert!(can_access(AccessLevel::Gold, Some(&gold), false, now));
    }

    #[test]
    fn past_expiry_downgrades_to_free_only() {
        let now = Utc::now();
        let mut gold = user_with_tier(SubscriptionTier::Gold);
        gold.tier_expiry = Some(now - Duration::days(1));

        assert!(can_access(AccessLevel::Free, Some(&gold), false, now));
        assert!(!can_access(AccessLevel::Premium, Some(&gold), false, now));
        assert!(!can_access(AccessLevel::Gold, Some(&gold), false, now));

        // The stored tier itself is untouched.
        assert_eq!(gold.tier, SubscriptionTier::Gold);
    }

    #[test]
    fn future_expiry_keeps_the_tier() {
        let now = Utc::now();
        let mut gold = user_with_tier(SubscriptionTier::Gold);
        gold.tier_expiry = Some(now + Duration::days(30));

        assert!(can_access(AccessLevel::Gold, Some(&gold), false, now));
    }

    #[test]
    fn admin_override_grants_everything() {
        let now = Utc::now();
        let expired = {
            let mut u = user_with_tier(SubscriptionTier::Free);
            u.tier_expiry = Some(now - Duration::days(1));
            u
        };

        for level in [AccessLevel::Free, AccessLevel::Premium, AccessLevel::Gold] {
            assert!(can_access(level, None, true, now));
            assert!(can_access(level, Some(&expired), true, now));
        }
    }
}
