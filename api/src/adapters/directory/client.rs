//! User directory API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::UserId;
use crate::domain::ports::{DirectoryUser, UserDirectory};
use crate::error::DirectoryError;

/// Implementation of the user directory client
///
/// Talks to the identity provider's backend API with a secret key.
pub struct DirectoryClient {
    http: Client,
    base_url: String,
    secret_key: String,
}

impl DirectoryClient {
    pub fn new(base_url: String, secret_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, DirectoryError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| DirectoryError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(DirectoryError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(DirectoryError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(DirectoryError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// A user record as the directory API returns it
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl From<UserRecord> for DirectoryUser {
    fn from(record: UserRecord) -> Self {
        let full_name = [record.first_name, record.last_name]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        DirectoryUser {
            id: UserId(record.id),
            full_name,
        }
    }
}

#[async_trait]
impl UserDirectory for DirectoryClient {
    async fn list_users(&self, limit: i64) -> Result<Vec<DirectoryUser>, DirectoryError> {
        let response = self
            .http
            .get(self.api_url("/users"))
            .bearer_auth(&self.secret_key)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let records: Vec<UserRecord> = self.handle_response(response).await?;

        Ok(records.into_iter().map(|r| r.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_parses_and_joins_names() {
        let body = r#"[
            {"id": "user_2aaa", "first_name": "Ivan", "last_name": "Petrov"},
            {"id": "user_2bbb", "first_name": "Anna", "last_name": null},
            {"id": "user_2ccc", "first_name": null, "last_name": null}
        ]"#;

        let records: Vec<UserRecord> = serde_json::from_str(body).unwrap();
        let users: Vec<DirectoryUser> = records.into_iter().map(|r| r.into()).collect();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, UserId::new("user_2aaa"));
        assert_eq!(users[0].full_name, "Ivan Petrov");
        assert_eq!(users[1].full_name, "Anna");
        assert_eq!(users[2].full_name, "");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = DirectoryClient::new("http://localhost:3100/".to_string(), String::new());
        assert_eq!(client.api_url("/users"), "http://localhost:3100/v1/users");
    }
}
