//! Ticket endpoints.

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::Ticket;

#[derive(Debug, Serialize)]
struct BookTicketRequest {
    user_id: i64,
    event_id: i64,
}

impl ApiClient {
    /// POST /tickets — book a ticket. The server copies the event's price.
    pub async fn book_ticket(&self, user_id: i64, event_id: i64) -> ApiResult<Ticket> {
        let response = self
            .http
            .post(self.endpoint("/tickets"))
            .json(&BookTicketRequest { user_id, event_id })
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// GET /users/:id/tickets — a user's tickets, event denormalized.
    pub async fn user_tickets(&self, user_id: i64) -> ApiResult<Vec<Ticket>> {
        let response = self
            .http
            .get(self.endpoint(&format!("/users/{user_id}/tickets")))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// DELETE /tickets/:id — cancel a ticket.
    pub async fn cancel_ticket(&self, id: i64) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/tickets/{id}")))
            .send()
            .await?;
        Self::read_unit(response).await
    }
}
