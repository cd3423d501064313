//! OAuth2 access-token exchange for service accounts

use {
    crate::credentials::ServiceAccountKey,
    ::tracing::{debug, instrument},
    anyhow::Context,
    jsonwebtoken::{Algorithm, EncodingKey, Header},
    serde::{Deserialize, Serialize},
    std::time::{SystemTime, UNIX_EPOCH},
};

/// Scopes covering the identity lookup and the database write.
const SCOPES: &str = "https://www.googleapis.com/auth/identitytoolkit \
     https://www.googleapis.com/auth/firebase.database \
     https://www.googleapis.com/auth/userinfo.email";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Claim set of the signed assertion sent to the token endpoint.
#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    pub token_type: String,
}

/// Exchanges a signed service-account assertion for a bearer access token.
///
/// One round trip to the key's `token_uri`. The caller holds the token for
/// the lifetime of the process; there is no refresh.
#[instrument(
    name = "firebase.token.exchange",
    skip(http, key),
    fields(client_email = %key.client_email),
    err
)]
pub(crate) async fn fetch_access_token(
    http: &reqwest::Client,
    key: &ServiceAccountKey,
) -> anyhow::Result<String> {
    let iat = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs();

    let claims = Claims {
        iss: &key.client_email,
        scope: SCOPES,
        aud: &key.token_uri,
        iat,
        exp: iat + 3600,
    };

    let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .context("service account private key is not a valid RSA PEM")?;

    let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
        .context("failed to sign token request")?;

    debug!("POST {}", &key.token_uri);

    let res = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
        .send()
        .await
        .context("failed to reach token endpoint")?;

    if !res.status().is_success() {
        let status = res.status().as_u16();
        let error_text = res.text().await?;
        anyhow::bail!("token exchange failed (status {}): {}", status, error_text);
    }

    let token: AccessToken = res.json().await.context("malformed token response")?;

    debug!(
        "obtained {} token valid for {}s",
        token.token_type, token.expires_in
    );

    Ok(token.access_token)
}
