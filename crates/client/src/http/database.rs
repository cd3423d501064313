//! Realtime-database node operations

use {
    super::response::extract_error_message,
    ::tracing::{debug, error, instrument},
    anyhow::Context,
    serde_json::Value,
};

/// Database node operations for the Firebase admin client
impl super::client::FirebaseAdminClient {
    /// Overwrites the value stored at a database node.
    ///
    /// This is a full-value `set`: whatever the node held before is
    /// replaced, never merged.
    #[instrument(
        name = "firebase.database.set",
        skip(self, value),
        fields(path = %segments.join("/")),
        err
    )]
    pub async fn set_node(&self, segments: &[&str], value: &Value) -> anyhow::Result<()> {
        let uri = self
            .database_url()
            .node(segments)
            .query("print", "silent")
            .build_node();

        debug!("PUT {}", &uri);

        let res = self
            .http
            .put(uri)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .json(value)
            .send()
            .await
            .context("failed to reach realtime database")?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            error!("database write failed with status {}", status);

            let error_text = res.text().await?;
            anyhow::bail!("{}", extract_error_message(&error_text));
        }

        debug!("wrote {}", segments.join("/"));

        Ok(())
    }

    /// Overwrites the role list stored for a user.
    ///
    /// Stored under `users/{uid}/roles`; prior roles are discarded.
    #[instrument(
        name = "firebase.database.set_roles",
        skip(self),
        fields(uid = %uid, roles = ?roles),
        err
    )]
    pub async fn set_roles(&self, uid: &str, roles: &[String]) -> anyhow::Result<()> {
        let value = serde_json::to_value(roles).context("failed to serialize role list")?;

        self.set_node(&["users", uid, "roles"], &value).await
    }
}
