use crate::domain::model::{
    Content, CreatedTicket, HelpdeskUser, NewTicket, Principal, Publication, Ticket,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait TicketStore: Send + Sync {
    fn get_ticket(&self, id: &str) -> impl std::future::Future<Output = Result<Ticket>> + Send;
}

pub trait PublicationStore: Send + Sync {
    fn get_publication(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Publication>> + Send;
}

pub trait ContentStore: Send + Sync {
    fn get_content(&self, id: &str) -> impl std::future::Future<Output = Result<Content>> + Send;
}

pub trait PrincipalStore: Send + Sync {
    fn get_principal(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Principal>> + Send;
}

/// Raw response from the user-create call. ZenDesk is documented to answer
/// 201 Created; anything else comes back for the caller to reject, with the
/// user body only present when creation actually happened.
#[derive(Debug, Clone)]
pub struct UserCreateResponse {
    pub status: u16,
    pub user: Option<HelpdeskUser>,
}

#[async_trait]
pub trait Helpdesk: Send + Sync {
    /// Search remote users. An email query matches email addresses exactly.
    async fn search_users(&self, query: &str) -> Result<Vec<HelpdeskUser>>;

    async fn create_user(&self, name: &str, email: &str) -> Result<UserCreateResponse>;

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<CreatedTicket>;

    /// Attach a non-public comment to an existing remote ticket.
    async fn add_private_comment(&self, ticket_id: u64, body: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn group_id(&self) -> u64;
    fn download_base_url(&self) -> &str;
}
