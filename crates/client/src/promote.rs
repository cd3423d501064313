//! The role-assignment operation

use {
    crate::backend::AdminBackend,
    ::tracing::{info, instrument},
    thiserror::Error,
};

/// The role granted by this utility.
pub const ADMIN_ROLE: &str = "admin";

/// Failure legs of the role-assignment operation.
///
/// Both wrap the backend's error unchanged, so the message the operator
/// sees is the backend's own.
#[derive(Debug, Error)]
pub enum PromoteError {
    /// The identity lookup failed (unknown account, network, auth).
    #[error("{0:#}")]
    Lookup(anyhow::Error),

    /// The role write failed (permission, network, backend unavailable).
    #[error("{0:#}")]
    Write(anyhow::Error),
}

/// Grants the admin role to the account registered under `email`.
///
/// Resolves the email to a uid, then overwrites the account's stored role
/// list with `["admin"]`. Re-running converges on the same stored state.
/// Exactly one lookup is issued and, only if it succeeds, exactly one
/// write. No retries.
///
/// Returns the resolved uid.
#[instrument(name = "fireadmin.promote", skip(backend), fields(email = %email), err)]
pub async fn assign_admin_role<B: AdminBackend + ?Sized>(
    backend: &B,
    email: &str,
) -> Result<String, PromoteError> {
    let uid = backend
        .resolve_user_id(email)
        .await
        .map_err(PromoteError::Lookup)?;

    backend
        .set_roles(&uid, &[ADMIN_ROLE.to_string()])
        .await
        .map_err(PromoteError::Write)?;

    info!("granted {} to {} ({})", ADMIN_ROLE, email, uid);

    Ok(uid)
}
