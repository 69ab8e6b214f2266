use chrono::{DateTime, Utc};

use crate::models::{CreateUserRequest, User};

/// Users created during the editing session, in creation order
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Validate the form and store the new user
    pub fn create(&mut self, request: CreateUserRequest, now: DateTime<Utc>) -> Result<User, Vec<String>> {
        request.validate()?;

        let user = request.into_user(now);
        self.users.push(user.clone());
        Ok(user)
    }

    /// Remove a user, returning it when it existed
    pub fn delete(&mut self, id: &str) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: "secret1".to_string(),
            max_connections: 1,
            days: 7,
        }
    }

    #[test]
    fn test_create_and_list() {
        let mut registry = UserRegistry::default();
        let alice = registry.create(request("alice"), Utc::now()).unwrap();
        registry.create(request("bob"), Utc::now()).unwrap();

        let names: Vec<_> = registry.list().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
        assert_eq!(registry.list()[0].id, alice.id);
    }

    #[test]
    fn test_invalid_user_not_stored() {
        let mut registry = UserRegistry::default();
        assert!(registry.create(request("al"), Utc::now()).is_err());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_delete() {
        let mut registry = UserRegistry::default();
        let alice = registry.create(request("alice"), Utc::now()).unwrap();

        assert!(registry.delete("missing").is_none());
        assert_eq!(registry.delete(&alice.id).map(|u| u.username), Some("alice".to_string()));
        assert!(registry.list().is_empty());
    }
}
