//! Authentication endpoints.

use super::{ApiClient, ApiResult};
use crate::forms::{LoginForm, SignupForm};
use crate::models::User;

impl ApiClient {
    /// POST /login — authenticate, returns the identity record.
    pub async fn login(&self, form: &LoginForm) -> ApiResult<User> {
        let response = self
            .http
            .post(self.endpoint("/login"))
            .json(form)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// POST /users — register, returns the identity record.
    pub async fn signup(&self, form: &SignupForm) -> ApiResult<User> {
        let response = self
            .http
            .post(self.endpoint("/users"))
            .json(form)
            .send()
            .await?;
        Self::read_json(response).await
    }
}
