//! Auth and profile collaborator

use serde::{Deserialize, Serialize};

use tripkit_state::app::state::{User, UserPatch};

use crate::envelope::decode;
use crate::error::ApiError;

/// Login request body
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login payload: the identity and its bearer token
#[derive(Clone, Debug, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    user: User,
}

/// Client for the auth/profile endpoints
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Exchange credentials for a session.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        tracing::debug!(email = %credentials.email, "Logging in");
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(credentials)
            .send()
            .await?;
        decode(response).await
    }

    /// Merge profile fields server-side; returns the updated profile.
    pub async fn update_profile(&self, fields: &UserPatch, token: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .put(format!("{}/auth/profile", self.base_url))
            .bearer_auth(token)
            .json(fields)
            .send()
            .await?;
        let data: ProfileData = decode(response).await?;
        Ok(data.user)
    }
}
