use crate::core::{
    render, resolver, users, ConfigProvider, ContentStore, Helpdesk, PrincipalStore,
    PublicationStore, TicketStore,
};
use crate::domain::model::{NewTicket, TicketView};
use crate::utils::error::{Result, SyncError};

/// What a completed run produced on the remote side.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub external_id: String,
    pub zendesk_ticket_id: u64,
    pub zendesk_user_id: u64,
}

/// Drives one enquiry through the whole workflow: fetch and compose the
/// record, resolve the ZenDesk user, create the remote ticket, attach the
/// private comment. Strictly sequential; the first error at any stage ends
/// the run, and a ticket created before a failed comment stays as-is.
pub struct SyncEngine<S, H, C> {
    stores: S,
    helpdesk: H,
    config: C,
}

/// The address the submitter should be contacted at: the one given on the
/// submission form, or the account email when the form left it blank.
fn contact_email(view: &TicketView) -> Option<&str> {
    view.publication
        .contact_email
        .as_deref()
        .filter(|email| !email.is_empty())
        .or_else(|| {
            view.requester
                .email
                .as_deref()
                .filter(|email| !email.is_empty())
        })
}

impl<S, H, C> SyncEngine<S, H, C>
where
    S: TicketStore + PublicationStore + ContentStore + PrincipalStore,
    H: Helpdesk,
    C: ConfigProvider,
{
    pub fn new(stores: S, helpdesk: H, config: C) -> Self {
        Self {
            stores,
            helpdesk,
            config,
        }
    }

    pub async fn run(&self, ticket_id: &str) -> Result<SyncOutcome> {
        tracing::info!("Fetching enquiry {}", ticket_id);
        let view = resolver::resolve_ticket_view(&self.stores, ticket_id).await?;

        let email = contact_email(&view).ok_or_else(|| SyncError::ProcessingError {
            message: format!(
                "no contact or account email for principal {}",
                view.requester.id
            ),
        })?;

        tracing::info!("Resolving ZenDesk user for {}", email);
        let user =
            users::get_or_create_user(&self.helpdesk, &view.requester.display_name, email).await?;

        let draft = render::render_ticket(&view, Some(email), self.config.download_base_url());

        tracing::info!("Creating ZenDesk ticket for {}", view.ticket.external_id);
        let created = self
            .helpdesk
            .create_ticket(&NewTicket {
                group_id: self.config.group_id(),
                requester_id: user.id,
                external_id: view.ticket.external_id.clone(),
                subject: draft.subject.clone(),
                body: draft.body.clone(),
            })
            .await?;

        tracing::info!("Commenting on ZenDesk ticket {}", created.id);
        self.helpdesk
            .add_private_comment(created.id, &draft.comment_body)
            .await?;

        Ok(SyncOutcome {
            external_id: view.ticket.external_id.clone(),
            zendesk_ticket_id: created.id,
            zendesk_user_id: user.id,
        })
    }
}
