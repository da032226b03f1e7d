use async_trait::async_trait;
use reqwest::Client;

use crate::domain::model::{CreatedTicket, HelpdeskUser, NewTicket};
use crate::domain::ports::{Helpdesk, UserCreateResponse};
use crate::utils::error::{Result, SyncError};

/// ZenDesk REST client. Authenticates with the API-token scheme, where the
/// basic-auth username is `{email}/token`.
pub struct ZendeskClient {
    http: Client,
    base_url: String,
    username: String,
    token: String,
}

impl ZendeskClient {
    pub fn new(email: &str, token: &str, uri: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: uri.trim_end_matches('/').to_string(),
            username: format!("{}/token", email),
            token: token.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Helpdesk for ZendeskClient {
    async fn search_users(&self, query: &str) -> Result<Vec<HelpdeskUser>> {
        tracing::debug!("Searching ZenDesk users for {}", query);
        let response = self
            .http
            .get(self.endpoint("/api/v2/users/search.json"))
            .query(&[("query", query)])
            .basic_auth(&self.username, Some(&self.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::StatusError {
                status: status.as_u16(),
                context: "searching users".to_string(),
            });
        }

        let results: wire::UserSearchResults = response.json().await?;
        Ok(results.users)
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<UserCreateResponse> {
        tracing::debug!("Creating ZenDesk user {} <{}>", name, email);
        let response = self
            .http
            .post(self.endpoint("/api/v2/users.json"))
            .basic_auth(&self.username, Some(&self.token))
            .json(&wire::UserEnvelope {
                user: wire::NewUser { name, email },
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let user = if status == 201 {
            let envelope: wire::CreatedUserEnvelope = response.json().await?;
            Some(envelope.user)
        } else {
            None
        };

        Ok(UserCreateResponse { status, user })
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<CreatedTicket> {
        tracing::debug!("Creating ZenDesk ticket for {}", ticket.external_id);
        let response = self
            .http
            .post(self.endpoint("/api/v2/tickets.json"))
            .basic_auth(&self.username, Some(&self.token))
            .json(&wire::TicketEnvelope {
                ticket: wire::NewRemoteTicket {
                    group_id: ticket.group_id,
                    requester_id: ticket.requester_id,
                    external_id: &ticket.external_id,
                    subject: &ticket.subject,
                    description: &ticket.body,
                },
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::StatusError {
                status: status.as_u16(),
                context: "creating ticket".to_string(),
            });
        }

        let envelope: wire::CreatedTicketEnvelope = response.json().await?;
        Ok(envelope.ticket)
    }

    async fn add_private_comment(&self, ticket_id: u64, body: &str) -> Result<()> {
        tracing::debug!("Adding private comment to ZenDesk ticket {}", ticket_id);
        let response = self
            .http
            .put(self.endpoint(&format!("/api/v2/tickets/{}.json", ticket_id)))
            .basic_auth(&self.username, Some(&self.token))
            .json(&wire::CommentEnvelope {
                ticket: wire::TicketComment {
                    comment: wire::Comment {
                        body,
                        public: false,
                    },
                },
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::StatusError {
                status: status.as_u16(),
                context: "commenting on ticket".to_string(),
            });
        }

        Ok(())
    }
}

/// Request/response envelopes of the ZenDesk v2 API.
mod wire {
    use serde::{Deserialize, Serialize};

    use crate::domain::model::{CreatedTicket, HelpdeskUser};

    #[derive(Serialize)]
    pub struct NewUser<'a> {
        pub name: &'a str,
        pub email: &'a str,
    }

    #[derive(Serialize)]
    pub struct UserEnvelope<'a> {
        pub user: NewUser<'a>,
    }

    #[derive(Deserialize)]
    pub struct CreatedUserEnvelope {
        pub user: HelpdeskUser,
    }

    #[derive(Deserialize)]
    pub struct UserSearchResults {
        pub users: Vec<HelpdeskUser>,
    }

    #[derive(Serialize)]
    pub struct NewRemoteTicket<'a> {
        pub group_id: u64,
        pub requester_id: u64,
        pub external_id: &'a str,
        pub subject: &'a str,
        pub description: &'a str,
    }

    #[derive(Serialize)]
    pub struct TicketEnvelope<'a> {
        pub ticket: NewRemoteTicket<'a>,
    }

    #[derive(Deserialize)]
    pub struct CreatedTicketEnvelope {
        pub ticket: CreatedTicket,
    }

    #[derive(Serialize)]
    pub struct Comment<'a> {
        pub body: &'a str,
        pub public: bool,
    }

    #[derive(Serialize)]
    pub struct TicketComment<'a> {
        pub comment: Comment<'a>,
    }

    #[derive(Serialize)]
    pub struct CommentEnvelope<'a> {
        pub ticket: TicketComment<'a>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_search_users_parses_results() {
        let server = MockServer::start();
        let search_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/users/search.json")
                .query_param("query", "ada@cam.ac.uk")
                .header_exists("authorization");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "users": [{"id": 7, "name": "Ada Lovelace", "email": "ada@cam.ac.uk"}],
                    "count": 1
                }));
        });

        let client = ZendeskClient::new("admin@cam.ac.uk", "secret", server.base_url().as_str());
        let users = client.search_users("ada@cam.ac.uk").await.unwrap();

        search_mock.assert();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 7);
        assert_eq!(users[0].email, "ada@cam.ac.uk");
    }

    #[tokio::test]
    async fn test_search_users_surfaces_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/users/search.json");
            then.status(503);
        });

        let client = ZendeskClient::new("admin@cam.ac.uk", "secret", server.base_url().as_str());
        let err = client.search_users("ada@cam.ac.uk").await.unwrap_err();

        match err {
            SyncError::StatusError { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_create_user_wraps_payload_and_parses_201() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/users.json")
                .json_body(serde_json::json!({
                    "user": {"name": "Ada Lovelace", "email": "ada@cam.ac.uk"}
                }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "user": {"id": 900, "name": "Ada Lovelace", "email": "ada@cam.ac.uk"}
                }));
        });

        let client = ZendeskClient::new("admin@cam.ac.uk", "secret", server.base_url().as_str());
        let response = client
            .create_user("Ada Lovelace", "ada@cam.ac.uk")
            .await
            .unwrap();

        create_mock.assert();
        assert_eq!(response.status, 201);
        assert_eq!(response.user.unwrap().id, 900);
    }

    #[tokio::test]
    async fn test_create_user_non_201_returns_status_without_user() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v2/users.json");
            then.status(422)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"error": "RecordInvalid"}));
        });

        let client = ZendeskClient::new("admin@cam.ac.uk", "secret", server.base_url().as_str());
        let response = client
            .create_user("Ada Lovelace", "ada@cam.ac.uk")
            .await
            .unwrap();

        assert_eq!(response.status, 422);
        assert!(response.user.is_none());
    }

    #[tokio::test]
    async fn test_create_ticket_posts_envelope() {
        let server = MockServer::start();
        let ticket_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/tickets.json")
                .json_body(serde_json::json!({
                    "ticket": {
                        "group_id": 1,
                        "requester_id": 900,
                        "external_id": "OA-42",
                        "subject": "Open Access enquiry OA-42",
                        "description": "body text"
                    }
                }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ticket": {"id": 4242}}));
        });

        let client = ZendeskClient::new("admin@cam.ac.uk", "secret", server.base_url().as_str());
        let created = client
            .create_ticket(&NewTicket {
                group_id: 1,
                requester_id: 900,
                external_id: "OA-42".to_string(),
                subject: "Open Access enquiry OA-42".to_string(),
                body: "body text".to_string(),
            })
            .await
            .unwrap();

        ticket_mock.assert();
        assert_eq!(created.id, 4242);
    }

    #[tokio::test]
    async fn test_add_private_comment_puts_non_public_body() {
        let server = MockServer::start();
        let comment_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v2/tickets/4242.json")
                .json_body(serde_json::json!({
                    "ticket": {"comment": {"body": "private note", "public": false}}
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ticket": {"id": 4242}}));
        });

        let client = ZendeskClient::new("admin@cam.ac.uk", "secret", server.base_url().as_str());
        client.add_private_comment(4242, "private note").await.unwrap();

        comment_mock.assert();
    }
}
