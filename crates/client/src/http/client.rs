//! Core HTTP client struct and constructors

use {
    crate::{credentials::ServiceAccountKey, token},
    ::tracing::debug,
    reqwest::Client,
    std::path::Path,
    url::Url,
};

use super::url_builder::UrlBuilder;

/// Identity-service endpoint.
const IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Authenticated client for the two admin surfaces: the identity service
/// and the realtime database.
#[derive(Clone, Debug)]
pub struct FirebaseAdminClient {
    pub(crate) http: Client,
    /// project the service-account key belongs to
    pub(crate) project_id: String,
    /// bearer token for both API surfaces
    pub(crate) token: String,
    pub identity_endpoint: Url,
    pub database_endpoint: Url,
}

impl FirebaseAdminClient {
    /// Creates a client from an already-loaded service-account key.
    ///
    /// Performs the one-time token exchange; the token is held unchanged for
    /// the rest of the process. When `database_url` is `None` the project's
    /// conventional realtime-database URL is used.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use fireadmin_client::*;
    /// # async fn example() -> anyhow::Result<()> {
    /// let key = ServiceAccountKey::from_file("service-account-key.json")?;
    /// let client = FirebaseAdminClient::connect(key, None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(
        key: ServiceAccountKey,
        database_url: Option<Url>,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let token = token::fetch_access_token(&http, &key).await?;

        let identity_endpoint =
            Url::parse(IDENTITY_ENDPOINT).expect("identity endpoint is a valid URL");
        let database_endpoint = database_url.unwrap_or_else(|| key.default_database_url());

        debug!(
            "connected for project {} (database: {})",
            key.project_id, database_endpoint
        );

        Ok(Self {
            http,
            project_id: key.project_id,
            token,
            identity_endpoint,
            database_endpoint,
        })
    }

    /// Convenience constructor: load the key file, then connect.
    pub async fn from_key_file(
        path: impl AsRef<Path>,
        database_url: Option<Url>,
    ) -> anyhow::Result<Self> {
        let key = ServiceAccountKey::from_file(path)?;
        Self::connect(key, database_url).await
    }

    /// Centralized URL builder for identity-service endpoints.
    pub(crate) fn identity_url(&self) -> UrlBuilder {
        UrlBuilder::new(&self.identity_endpoint)
    }

    /// Centralized URL builder for realtime-database node paths.
    pub(crate) fn database_url(&self) -> UrlBuilder {
        UrlBuilder::new(&self.database_endpoint)
    }
}
