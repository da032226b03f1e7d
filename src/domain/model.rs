use serde::{Deserialize, Serialize};

/// The record types the resolver reads, used to name the failed lookup stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Ticket,
    Publication,
    Content,
    Principal,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Ticket => "ticket",
            RecordKind::Publication => "publication",
            RecordKind::Content => "content",
            RecordKind::Principal => "principal",
        };
        write!(f, "{}", name)
    }
}

/// An internal Open Access enquiry record, mirrored into ZenDesk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub external_id: String,
    pub publication_id: String,
    pub created_by: String,
}

/// Metadata about a submitted work, linked to optional uploaded content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub journal_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub funders: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    /// Raw value from the export; only numeric values count as epoch ms.
    #[serde(default)]
    pub acceptance_date: Option<serde_json::Value>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub use_cambridge_addendum: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    pub linked_content_id: String,
}

impl Publication {
    pub fn acceptance_date_millis(&self) -> Option<i64> {
        let value = self.acceptance_date.as_ref()?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|millis| millis as i64))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: String,
    #[serde(default)]
    pub download_path: Option<String>,
}

/// The account that raised the enquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Fully composed view of one enquiry: ticket, publication, the publication's
/// linked content and the requesting principal. Assembled in full by the
/// resolver before anything is rendered or sent remotely.
#[derive(Debug, Clone)]
pub struct TicketView {
    pub ticket: Ticket,
    pub publication: Publication,
    pub content: Content,
    pub requester: Principal,
}

/// A remote ZenDesk user, created lazily and keyed by email uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpdeskUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Payload for the ticket-creation call.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub group_id: u64,
    pub requester_id: u64,
    pub external_id: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTicket {
    pub id: u64,
}

/// Rendered output of the formatting stage.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub subject: String,
    pub body: String,
    pub comment_body: String,
}
