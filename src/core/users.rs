use crate::core::Helpdesk;
use crate::domain::model::HelpdeskUser;
use crate::utils::error::{Result, SyncError};

/// Find the ZenDesk user with the given email, creating one if the search
/// comes back empty. An email query is matched exactly by the remote search,
/// so the first hit is the user. The name only matters when a create is
/// needed. A create answered with anything other than 201 stops the run
/// before any ticket is written.
pub async fn get_or_create_user<H: Helpdesk>(
    helpdesk: &H,
    name: &str,
    email: &str,
) -> Result<HelpdeskUser> {
    let matches = helpdesk.search_users(email).await?;
    if let Some(user) = matches.into_iter().next() {
        tracing::debug!("Found existing ZenDesk user {} for {}", user.id, email);
        return Ok(user);
    }

    tracing::info!("No ZenDesk user for {}, creating one", email);
    let response = helpdesk.create_user(name, email).await?;
    if response.status != 201 {
        return Err(SyncError::UserCreateError {
            status: response.status,
        });
    }

    response.user.ok_or_else(|| SyncError::ProcessingError {
        message: "ZenDesk returned 201 Created without a user body".to_string(),
    })
}
