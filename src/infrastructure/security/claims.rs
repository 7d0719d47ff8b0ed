// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuilds the authenticated user from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(&fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    user_id: Option<i64>,
    username: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

fn date_term(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl Claims {
    fn apply(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => {
                if let [Term::Integer(id), Term::Str(name)] = predicate.terms.as_slice() {
                    self.user_id = Some(*id);
                    self.username = Some(name.clone());
                }
            }
            "issued_at" => self.issued_at = date_term(predicate).or(self.issued_at),
            "expires_at" => self.expires_at = date_term(predicate).or(self.expires_at),
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        let username = self
            .username
            .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        let id = UserId::new(user_id)
            .map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

        Ok(AuthenticatedUser {
            id,
            username,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_string(), terms)
    }

    #[test]
    fn missing_user_fact_is_unauthorized() {
        let facts = vec![fact("issued_at", vec![Term::Date(1)])];
        let err = parse_claims(facts).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn complete_fact_set_yields_user() {
        let facts = vec![
            fact("user", vec![Term::Integer(3), Term::Str("jake".into())]),
            fact("issued_at", vec![Term::Date(100)]),
            fact("expires_at", vec![Term::Date(200)]),
        ];
        let user = parse_claims(facts).unwrap();
        assert_eq!(i64::from(user.id), 3);
        assert_eq!(user.username, "jake");
        assert_eq!(user.expires_at.timestamp() - user.issued_at.timestamp(), 100);
    }
}
