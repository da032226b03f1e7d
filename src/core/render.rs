use chrono::{Datelike, Local, TimeZone};

use crate::domain::model::{TicketDraft, TicketView};

const NONE_PROVIDED: &str = "(none provided)";
const NO_FILE_ATTACHED: &str = "(no file attached)";

const REMARKS_TOP: &str =
    "┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓";
const REMARKS_BOTTOM: &str =
    "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛";

/// Render a field value, substituting the fallback literal for an absent or
/// empty value.
fn field(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NONE_PROVIDED,
    }
}

/// The portion of a funder string after the `other:` tag, or `None` if the
/// string is untagged or the tag has an empty suffix.
fn strip_other_funder_prefix(funder: &str) -> Option<&str> {
    funder.strip_prefix("other:").filter(|rest| !rest.is_empty())
}

/// Join the funders that were picked from the predefined list (everything not
/// tagged `other:`), preserving their original order.
pub fn format_funders(funders: &[String]) -> String {
    funders
        .iter()
        .filter(|funder| strip_other_funder_prefix(funder).is_none())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join the stripped values of the `other:`-tagged funders, or `None` when no
/// tagged entry carries a value.
pub fn other_funders(funders: &[String]) -> Option<String> {
    let others: Vec<&str> = funders
        .iter()
        .filter_map(|funder| strip_other_funder_prefix(funder))
        .collect();
    if others.is_empty() {
        None
    } else {
        Some(others.join(", "))
    }
}

/// Format an epoch-millisecond timestamp as d/m/yyyy on the local calendar,
/// month numbered from 1, no zero-padding. `None` for timestamps outside
/// chrono's representable range.
pub fn format_acceptance_date(millis: i64) -> Option<String> {
    let date = Local.timestamp_millis_opt(millis).earliest()?;
    Some(format!("{}/{}/{}", date.day(), date.month(), date.year()))
}

/// The public-facing download URL for a publication's uploaded file, if any.
pub fn download_url(base_url: &str, download_path: Option<&str>) -> Option<String> {
    let path = download_path.filter(|p| !p.is_empty())?;
    Some(format!("{}{}", base_url.trim_end_matches('/'), path))
}

/// Render the public ticket description and the private operator comment for
/// a fully composed enquiry view. `email` is the address the submitter should
/// be contacted at (form address, falling back to account email).
pub fn render_ticket(view: &TicketView, email: Option<&str>, base_url: &str) -> TicketDraft {
    let publication = &view.publication;

    let funders = format_funders(&publication.funders);
    let others = other_funders(&publication.funders);
    let authors = publication.authors.join(", ");
    let acceptance_date = publication
        .acceptance_date_millis()
        .and_then(format_acceptance_date);

    let base = base_url.trim_end_matches('/');
    let body = [
        format!(
            "Open Access enquiry {} has been received by Cambridge University ({}/).",
            view.ticket.external_id, base
        ),
        String::new(),
        "The information received was as follows:".to_string(),
        String::new(),
        "User information:".to_string(),
        format!("  name: {}", field(Some(&view.requester.display_name))),
        format!("  department: {}", field(publication.department.as_deref())),
        format!("  email: {}", field(email)),
        String::new(),
        "Publishing information:".to_string(),
        format!(
            "  article title: {}",
            field(Some(&publication.display_name))
        ),
        format!(
            "  journal title: {}",
            field(publication.journal_name.as_deref())
        ),
        format!("  funders: {}", field(Some(&funders))),
        format!("  other funder(s): {}", field(others.as_deref())),
        format!("  corresponding author: {}", field(Some(&authors))),
        format!("  acceptance date: {}", field(acceptance_date.as_deref())),
        format!(
            "  use Cambridge Addendum?: {}",
            field(publication.use_cambridge_addendum.as_deref())
        ),
        "  remarks:".to_string(),
        REMARKS_TOP.to_string(),
        field(publication.comments.as_deref()).to_string(),
        REMARKS_BOTTOM.to_string(),
    ]
    .join("\n");

    let url = download_url(base_url, view.content.download_path.as_deref());
    let comment_body = [
        "Submitted file download link:".to_string(),
        format!("  {}", url.as_deref().unwrap_or(NO_FILE_ATTACHED)),
        "For debugging purposes only:".to_string(),
        format!("  The internal user ID: {}", view.requester.id),
    ]
    .join("\n");

    TicketDraft {
        subject: format!("Open Access enquiry {}", view.ticket.external_id),
        body,
        comment_body,
    }
}
