//! Session token handling for the login gate.
//!
//! Credential checking sits behind [`CredentialVerifier`]. The bundled
//! [`StaticCredentials`] compares against one configured pair and is only a
//! placeholder for a real identity service. The token stored after login is
//! an opaque random identifier and never contains the credentials.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::validation::{self, FieldErrors};

pub const SESSION_COOKIE: &str = "token";
pub const SESSION_DAYS: i64 = 1;

const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub trait CredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<(), FieldErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub username: String,
    pub password: String,
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, credentials: &Credentials) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if credentials.username != self.username {
            errors.insert("username", "Wrong username");
        }
        if credentials.password != self.password {
            errors.insert("password", "Wrong password");
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn issue() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates the form, checks the credentials and issues a fresh token.
pub fn login(
    verifier: &impl CredentialVerifier,
    credentials: &Credentials,
) -> Result<SessionToken, FieldErrors> {
    validation::validate_login(credentials)?;
    verifier.verify(credentials)?;
    Ok(SessionToken::issue())
}

/// `document.cookie` assignment storing `value` for `days` days from `now`.
pub fn set_cookie(key: &str, value: &str, days: i64, now: DateTime<Utc>) -> String {
    let expires = now + Duration::days(days);
    format!(
        "{key}={value}; expires={}; path=/",
        expires.format(COOKIE_DATE_FORMAT)
    )
}

/// `document.cookie` assignment that expires `key` immediately.
pub fn delete_cookie(key: &str) -> String {
    format!("{key}=; expires={EXPIRED}; path=/")
}

/// Looks `key` up in a `document.cookie` string. Empty values count as absent.
pub fn read_cookie(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .filter_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn admin() -> StaticCredentials {
        StaticCredentials {
            username: "admin".into(),
            password: "admin".into(),
        }
    }

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn token_does_not_leak_credentials() {
        let token = login(&admin(), &credentials("admin", "admin")).unwrap();
        assert!(!token.as_str().contains("admin"));
        assert_eq!(token.as_str().len(), 32);
        assert_ne!(token, SessionToken::issue());
    }

    #[test]
    fn wrong_credentials_are_field_errors() {
        let errors = login(&admin(), &credentials("root", "admin")).unwrap_err();
        assert_eq!(errors.get("username"), Some("Wrong username"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn required_fields_are_checked_first() {
        let errors = login(&admin(), &credentials("", "")).unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required"));
    }

    #[test]
    fn cookie_uses_expires_attribute() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(
            set_cookie("token", "abc", 1, now),
            "token=abc; expires=Sun, 02 Mar 2025 10:30:00 GMT; path=/"
        );
        assert_eq!(
            set_cookie("token", "abc", 30, now),
            "token=abc; expires=Mon, 31 Mar 2025 10:30:00 GMT; path=/"
        );
    }

    #[test]
    fn delete_writes_epoch_expiry() {
        assert_eq!(
            delete_cookie("token"),
            "token=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
        );
    }

    #[test]
    fn reads_cookie_among_others() {
        let jar = "theme=dark; token=f00d; tokenizer=x";
        assert_eq!(read_cookie(jar, "token"), Some("f00d".into()));
        assert_eq!(read_cookie("tokenizer=x", "token"), None);
        assert_eq!(read_cookie("token=; a=b", "token"), None);
        assert_eq!(read_cookie("", "token"), None);
    }
}
