//! Identity-service account operations

use {
    super::response::extract_error_message,
    ::tracing::{debug, error, instrument},
    anyhow::Context,
    serde::{Deserialize, Serialize},
};

/// A user record as returned by the identity service.
///
/// Only the attributes this utility reads are deserialised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Service-assigned unique identifier
    #[serde(rename = "localId")]
    pub uid: String,
    /// Registered email address
    #[serde(default)]
    pub email: Option<String>,
}

/// Account lookup request body
#[derive(Debug, Serialize)]
struct AccountsLookupRequest<'a> {
    email: Vec<&'a str>,
}

/// Account lookup response
#[derive(Debug, Deserialize)]
struct AccountsLookupResponse {
    #[serde(default)]
    users: Vec<UserRecord>,
}

/// Identity operations for the Firebase admin client
impl super::client::FirebaseAdminClient {
    /// Resolves an email address to the account's unique identifier.
    ///
    /// Fails distinctly when the identity service knows no account for the
    /// address. Syntactic validation of the email is left entirely to the
    /// service.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use fireadmin_client::*;
    /// # async fn example(client: FirebaseAdminClient) -> anyhow::Result<()> {
    /// let uid = client.resolve_user_id("user@example.com").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(
        name = "firebase.identity.lookup",
        skip(self),
        fields(email = %email),
        err
    )]
    pub async fn resolve_user_id(&self, email: &str) -> anyhow::Result<String> {
        let uri = self
            .identity_url()
            .path("v1")
            .path("projects")
            .path(&self.project_id)
            .path("accounts:lookup")
            .build();

        debug!("POST {}", &uri);

        let request = AccountsLookupRequest { email: vec![email] };

        let res = self
            .http
            .post(uri)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("failed to reach identity service")?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            error!("account lookup failed with status {}", status);

            let error_text = res.text().await?;
            anyhow::bail!("{}", extract_error_message(&error_text));
        }

        let response: AccountsLookupResponse = self.parse_response(res).await?;

        let record = response
            .users
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("no user record found for {}", email))?;

        debug!("resolved {} to uid {}", email, record.uid);

        Ok(record.uid)
    }
}
