//! Backend capability interface

use {crate::http::FirebaseAdminClient, async_trait::async_trait};

/// The two backend capabilities the role-assignment operation needs.
///
/// The live implementation talks to the identity service and the realtime
/// database; tests substitute an in-memory implementation. The handle is
/// passed explicitly to the operation rather than held in process-wide
/// state.
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// Resolves an email address to the account's unique identifier.
    async fn resolve_user_id(&self, email: &str) -> anyhow::Result<String>;

    /// Overwrites the role list stored for a user.
    async fn set_roles(&self, uid: &str, roles: &[String]) -> anyhow::Result<()>;
}

#[async_trait]
impl AdminBackend for FirebaseAdminClient {
    async fn resolve_user_id(&self, email: &str) -> anyhow::Result<String> {
        FirebaseAdminClient::resolve_user_id(self, email).await
    }

    async fn set_roles(&self, uid: &str, roles: &[String]) -> anyhow::Result<()> {
        FirebaseAdminClient::set_roles(self, uid, roles).await
    }
}
