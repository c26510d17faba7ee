//! Access to the credential the login flow leaves behind. Token issuance
//! itself happens elsewhere; this module only reads the result.

#[cfg(not(feature = "mock"))]
use web_sys::window;

/// Storage slot the login flow writes the admin token into.
#[cfg(not(feature = "mock"))]
const ACCESS_TOKEN_KEY: &str = "subdesk_access_token";

/// Token handed back by the authentication provider, absent when the
/// admin is signed out.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessTokenResponse {
    pub access_token: Option<String>,
}

/// Look up the current admin access token.
pub async fn get_access_token() -> AccessTokenResponse {
    #[cfg(feature = "mock")]
    {
        AccessTokenResponse {
            access_token: Some("mock-access-token".to_string()),
        }
    }

    #[cfg(not(feature = "mock"))]
    {
        let access_token = window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(ACCESS_TOKEN_KEY).ok().flatten())
            .filter(|token| !token.trim().is_empty());

        AccessTokenResponse { access_token }
    }
}
