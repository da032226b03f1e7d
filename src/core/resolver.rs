use crate::core::{ContentStore, PrincipalStore, PublicationStore, TicketStore};
use crate::domain::model::TicketView;
use crate::utils::error::Result;

/// Compose the full view of one enquiry: ticket, then its publication, then
/// the publication's linked content, then the requesting principal. Lookups
/// run strictly in that order and the first miss or store error ends the run,
/// so a partially composed view never reaches the formatter.
pub async fn resolve_ticket_view<S>(stores: &S, ticket_id: &str) -> Result<TicketView>
where
    S: TicketStore + PublicationStore + ContentStore + PrincipalStore,
{
    let ticket = stores.get_ticket(ticket_id).await?;
    tracing::debug!("Got ticket data: {}", ticket.external_id);

    let publication = stores.get_publication(&ticket.publication_id).await?;
    tracing::debug!(
        "Got publication data: {} - {}",
        publication.id,
        publication.display_name
    );

    let content = stores.get_content(&publication.linked_content_id).await?;
    let requester = stores.get_principal(&ticket.created_by).await?;

    Ok(TicketView {
        ticket,
        publication,
        content,
        requester,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Content, Principal, Publication, RecordKind, Ticket};
    use crate::utils::error::SyncError;
    use std::collections::HashMap;

    struct MemoryStores {
        tickets: HashMap<String, Ticket>,
        publications: HashMap<String, Publication>,
        contents: HashMap<String, Content>,
        principals: HashMap<String, Principal>,
    }

    fn not_found(kind: RecordKind, id: &str) -> SyncError {
        SyncError::NotFoundError {
            kind,
            id: id.to_string(),
        }
    }

    impl TicketStore for MemoryStores {
        async fn get_ticket(&self, id: &str) -> Result<Ticket> {
            self.tickets
                .get(id)
                .cloned()
                .ok_or_else(|| not_found(RecordKind::Ticket, id))
        }
    }

    impl PublicationStore for MemoryStores {
        async fn get_publication(&self, id: &str) -> Result<Publication> {
            self.publications
                .get(id)
                .cloned()
                .ok_or_else(|| not_found(RecordKind::Publication, id))
        }
    }

    impl ContentStore for MemoryStores {
        async fn get_content(&self, id: &str) -> Result<Content> {
            self.contents
                .get(id)
                .cloned()
                .ok_or_else(|| not_found(RecordKind::Content, id))
        }
    }

    impl PrincipalStore for MemoryStores {
        async fn get_principal(&self, id: &str) -> Result<Principal> {
            self.principals
                .get(id)
                .cloned()
                .ok_or_else(|| not_found(RecordKind::Principal, id))
        }
    }

    fn sample_ticket() -> Ticket {
        Ticket {
            id: "t:cam:1".to_string(),
            external_id: "OA-42".to_string(),
            publication_id: "p:cam:1".to_string(),
            created_by: "u:cam:1".to_string(),
        }
    }

    fn sample_publication() -> Publication {
        Publication {
            id: "p:cam:1".to_string(),
            display_name: "A Paper".to_string(),
            journal_name: None,
            department: None,
            funders: vec![],
            authors: vec![],
            acceptance_date: None,
            comments: None,
            use_cambridge_addendum: None,
            contact_email: None,
            linked_content_id: "c:cam:1".to_string(),
        }
    }

    fn full_stores() -> MemoryStores {
        let mut stores = MemoryStores {
            tickets: HashMap::new(),
            publications: HashMap::new(),
            contents: HashMap::new(),
            principals: HashMap::new(),
        };
        stores
            .tickets
            .insert("t:cam:1".to_string(), sample_ticket());
        stores
            .publications
            .insert("p:cam:1".to_string(), sample_publication());
        stores.contents.insert(
            "c:cam:1".to_string(),
            Content {
                id: "c:cam:1".to_string(),
                download_path: Some("/files/42.pdf".to_string()),
            },
        );
        stores.principals.insert(
            "u:cam:1".to_string(),
            Principal {
                id: "u:cam:1".to_string(),
                display_name: "Ada Lovelace".to_string(),
                email: Some("ada@cam.ac.uk".to_string()),
            },
        );
        stores
    }

    #[tokio::test]
    async fn test_resolve_composes_full_view() {
        let stores = full_stores();

        let view = resolve_ticket_view(&stores, "t:cam:1").await.unwrap();

        assert_eq!(view.ticket.external_id, "OA-42");
        assert_eq!(view.publication.display_name, "A Paper");
        assert_eq!(view.content.download_path.as_deref(), Some("/files/42.pdf"));
        assert_eq!(view.requester.display_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_resolve_missing_ticket_names_stage() {
        let stores = full_stores();

        let err = resolve_ticket_view(&stores, "t:cam:nope").await.unwrap_err();

        match err {
            SyncError::NotFoundError { kind, id } => {
                assert_eq!(kind, RecordKind::Ticket);
                assert_eq!(id, "t:cam:nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_missing_publication_names_stage() {
        let mut stores = full_stores();
        stores.publications.clear();

        let err = resolve_ticket_view(&stores, "t:cam:1").await.unwrap_err();

        match err {
            SyncError::NotFoundError { kind, .. } => assert_eq!(kind, RecordKind::Publication),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_missing_content_names_stage() {
        let mut stores = full_stores();
        stores.contents.clear();

        let err = resolve_ticket_view(&stores, "t:cam:1").await.unwrap_err();

        match err {
            SyncError::NotFoundError { kind, id } => {
                assert_eq!(kind, RecordKind::Content);
                assert_eq!(id, "c:cam:1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
