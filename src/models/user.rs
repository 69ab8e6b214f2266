use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_CONNECTIONS_RANGE: std::ops::RangeInclusive<u32> = 1..=10;
pub const DURATION_DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=365;

/// Streaming account record. Lives only in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    /// YYYY-MM-DD
    pub expiry_date: String,
    pub active: bool,
    pub created_at: String,
}

/// User form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub days: u32,
}

impl CreateUserRequest {
    /// Check the form rules, returning one message per violated field
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.username.chars().count() < MIN_USERNAME_LEN {
            errors.push(format!(
                "username must contain at least {} characters",
                MIN_USERNAME_LEN
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "password must contain at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        if !MAX_CONNECTIONS_RANGE.contains(&self.max_connections) {
            errors.push(format!(
                "maxConnections must be between {} and {}",
                MAX_CONNECTIONS_RANGE.start(),
                MAX_CONNECTIONS_RANGE.end()
            ));
        }
        if !DURATION_DAYS_RANGE.contains(&self.days) {
            errors.push(format!(
                "days must be between {} and {}",
                DURATION_DAYS_RANGE.start(),
                DURATION_DAYS_RANGE.end()
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the user record as of `now`. Does not validate.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        let expiry = now + Duration::days(i64::from(self.days));
        User {
            id: Uuid::new_v4().to_string(),
            username: self.username,
            password: self.password,
            max_connections: self.max_connections,
            expiry_date: expiry.format("%Y-%m-%d").to_string(),
            active: true,
            created_at: now.to_rfc3339(),
        }
    }
}

/// Response for user creation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub user: User,
    /// Number of channels mapped onto the Xtream layout for this user
    pub xtream_channels: usize,
}

/// User list response
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request() -> CreateUserRequest {
        CreateUserRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            max_connections: 2,
            days: 30,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_short_credentials_rejected() {
        let req = CreateUserRequest {
            username: "al".to_string(),
            password: "12345".to_string(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("username"));
        assert!(errors[1].starts_with("password"));
    }

    #[test]
    fn test_ranges() {
        let req = CreateUserRequest {
            max_connections: 0,
            days: 366,
            ..request()
        };
        assert_eq!(req.validate().unwrap_err().len(), 2);

        let req = CreateUserRequest {
            max_connections: 10,
            days: 365,
            ..request()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_into_user_expiry() {
        let now = Utc.with_ymd_and_hms(2024, 12, 20, 15, 30, 0).unwrap();
        let user = request().into_user(now);

        assert_eq!(user.expiry_date, "2025-01-19");
        assert!(user.active);
        assert!(!user.id.is_empty());
        assert!(user.created_at.starts_with("2024-12-20T15:30:00"));
    }

    #[test]
    fn test_user_json_is_camel_case() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(request().into_user(now)).unwrap();
        assert_eq!(json["maxConnections"], 2);
        assert_eq!(json["expiryDate"], "2024-01-31");
    }
}
