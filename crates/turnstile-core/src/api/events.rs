//! Event CRUD endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{Event, EventPayload};

impl ApiClient {
    /// GET /events — the full event collection (no pagination).
    pub async fn list_events(&self) -> ApiResult<Vec<Event>> {
        let response = self.http.get(self.endpoint("/events")).send().await?;
        Self::read_json(response).await
    }

    /// GET /events/:id — a single event.
    pub async fn event(&self, id: i64) -> ApiResult<Event> {
        let response = self
            .http
            .get(self.endpoint(&format!("/events/{id}")))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// POST /events — create an event (admin).
    pub async fn create_event(&self, payload: &EventPayload) -> ApiResult<Event> {
        let response = self
            .http
            .post(self.endpoint("/events"))
            .json(payload)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// PATCH /events/:id — update an event (admin).
    pub async fn update_event(&self, id: i64, payload: &EventPayload) -> ApiResult<Event> {
        let response = self
            .http
            .patch(self.endpoint(&format!("/events/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// DELETE /events/:id — delete an event (admin).
    pub async fn delete_event(&self, id: i64) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/events/{id}")))
            .send()
            .await?;
        Self::read_unit(response).await
    }

    /// GET /users/:id/events — events created by an admin.
    pub async fn user_events(&self, user_id: i64) -> ApiResult<Vec<Event>> {
        let response = self
            .http
            .get(self.endpoint(&format!("/users/{user_id}/events")))
            .send()
            .await?;
        Self::read_json(response).await
    }
}
