pub mod render;
pub mod resolver;
pub mod sync;
pub mod users;

pub use crate::domain::ports::{
    ConfigProvider, ContentStore, Helpdesk, PrincipalStore, PublicationStore, TicketStore,
};
pub use crate::utils::error::Result;
