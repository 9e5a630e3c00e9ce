//! crates/bookbites_core/src/users.rs
//!
//! Lookups and pure reducers over the global user list. Admin mutations
//! target users through `UserRef`, the explicit id-or-phone union key, so
//! the dual lookup is resolved in exactly one place.

use crate::domain::{User, UserRef};

pub fn find_by_token<'a>(users: &'a [User], token: &str) -> Option<&'a User> {
    users.iter().find(|u| u.token.as_deref() == Some(token))
}

pub fn find_by_provider<'a>(users: &'a [User], provider_id: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.provider_id.as_deref() == Some(provider_id))
}

/// Replaces the user with a matching id, or appends when no match exists.
pub fn upsert(mut users: Vec<User>, user: User) -> Vec<User> {
    if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
        *slot = user;
    } else {
        users.push(user);
    }
    users
}

/// Applies `mutate` to every user matching `target`. Unknown targets leave
/// the snapshot unchanged.
pub fn apply<F>(users: Vec<User>, target: &UserRef, mutate: F) -> Vec<User>
where
    F: Fn(&mut User),
{
    users
        .into_iter()
        .map(|mut user| {
            if target.matches(&user) {
                mutate(&mut user);
            }
            user
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubscriptionTier;

    fn user(id: &str, phone: Option<&str>) -> User {
        User {
            id: id.to_string(),
            token: None,
            name: None,
            email: None,
            phone: phone.map(|p| p.to_string()),
            is_guest: false,
            provider_id: None,
            tier: SubscriptionTier::Free,
            tier_expiry: None,
            is_super_admin: false,
            is_store_manager: false,
            preferences: Default::default(),
        }
    }

    #[test]
    fn user_ref_matches_by_id_or_phone() {
        let u = user("u1", Some("+998901112233"));
        assert!(UserRef::ById("u1".to_string()).matches(&u));
        assert!(!UserRef::ById("+998901112233".to_string()).matches(&u));
        assert!(UserRef::ByPhone("+998901112233".to_string()).matches(&u));
        assert!(!UserRef::ByPhone("u1".to_string()).matches(&u));
    }

    #[test]
    fn apply_mutates_only_the_target() {
        let users = vec![user("u1", None), user("u2", Some("+998900000000"))];
        let users = apply(users, &UserRef::ByPhone("+998900000000".to_string()), |u| {
            u.tier = SubscriptionTier::Gold;
        });
        assert_eq!(users[0].tier, SubscriptionTier::Free);
        assert_eq!(users[1].tier, SubscriptionTier::Gold);
    }

    #[test]
    fn upsert_replaces_by_id() {
        let users = upsert(Vec::new(), user("u1", None));
        let mut updated = user("u1", Some("+998905554433"));
        updated.tier = SubscriptionTier::Premium;
        let users = upsert(users, updated);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].tier, SubscriptionTier::Premium);
    }
}
