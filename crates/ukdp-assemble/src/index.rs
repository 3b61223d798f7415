//! Email→id index for login resolution.

use std::collections::BTreeMap;

use ukdp_model::{User, UserId};

/// How login usernames are matched against stored user emails.
///
/// Identity derivation is case-insensitive, but the observed login join is
/// an exact, case-sensitive match against the stored email. That asymmetry
/// is most likely a defect; it is kept behind this policy so tests can pin
/// the current behavior until a product decision changes the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UsernameMatchPolicy {
    /// Exact match against the email as stored (observed behavior).
    #[default]
    CaseSensitive,
    /// Lowercase both sides before matching.
    CaseInsensitive,
}

/// Read-only mapping from stored email to derived user id.
///
/// Built once after user assembly completes; login assembly only reads it.
#[derive(Debug, Clone)]
pub struct EmailIndex {
    entries: BTreeMap<String, UserId>,
    policy: UsernameMatchPolicy,
}

impl EmailIndex {
    pub fn build(users: &[User], policy: UsernameMatchPolicy) -> Self {
        let entries = users
            .iter()
            .map(|user| (Self::key(&user.email, policy), user.id))
            .collect();
        Self { entries, policy }
    }

    /// Resolves a trimmed username to a user id under the index policy.
    pub fn resolve(&self, username: &str) -> Option<UserId> {
        self.entries
            .get(&Self::key(username.trim(), self.policy))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(email: &str, policy: UsernameMatchPolicy) -> String {
        match policy {
            UsernameMatchPolicy::CaseSensitive => email.to_string(),
            UsernameMatchPolicy::CaseInsensitive => email.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ukdp_clean::derive_user_id;

    fn user(email: &str) -> User {
        User {
            id: derive_user_id(Some(email)).into_option().unwrap(),
            first_name: "A".into(),
            middle_initials: None,
            surname: "B".into(),
            date_of_birth: None,
            gender: None,
            favourite_colour: None,
            favourite_animal: None,
            favourite_food: None,
            city: None,
            county: None,
            postcode: None,
            email: email.to_string(),
            phone: None,
            mobile: None,
            rqf: None,
            salary: None,
            password_hash: None,
        }
    }

    #[test]
    fn case_sensitive_match_misses_other_casing() {
        let users = vec![user("Ada@X.com")];
        let index = EmailIndex::build(&users, UsernameMatchPolicy::CaseSensitive);
        assert!(index.resolve("Ada@X.com").is_some());
        assert!(index.resolve(" Ada@X.com ").is_some());
        // The derived id is case-insensitive but the join is not.
        assert!(index.resolve("ada@x.com").is_none());
    }

    #[test]
    fn case_insensitive_policy_matches_any_casing() {
        let users = vec![user("Ada@X.com")];
        let index = EmailIndex::build(&users, UsernameMatchPolicy::CaseInsensitive);
        assert_eq!(index.resolve("ADA@x.COM"), Some(users[0].id));
    }

    #[test]
    fn unknown_username_does_not_resolve() {
        let index = EmailIndex::build(&[user("a@x.com")], UsernameMatchPolicy::default());
        assert!(index.resolve("ghost@x.com").is_none());
        assert_eq!(index.len(), 1);
    }
}
