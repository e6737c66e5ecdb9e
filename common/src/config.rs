//! Portal configuration: backend base URLs, the storage host rewrite for
//! download links, placeholder credentials and page size.
//!
//! Values come from a key lookup so the frontend can feed compile-time
//! environment variables and tests can feed literals.

use url::Url;

use crate::error::PortalError;
use crate::session::StaticCredentials;

pub const STUDENT_SERVICE_URL: &str = "STUDENT_SERVICE_URL";
pub const VACCINE_SERVICE_URL: &str = "VACCINE_SERVICE_URL";
pub const STORAGE_HOST_INTERNAL: &str = "STORAGE_HOST_INTERNAL";
pub const STORAGE_HOST_PUBLIC: &str = "STORAGE_HOST_PUBLIC";
pub const PORTAL_USERNAME: &str = "PORTAL_USERNAME";
pub const PORTAL_PASSWORD: &str = "PORTAL_PASSWORD";
pub const PAGE_SIZE: &str = "PAGE_SIZE";

#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub student_service_url: String,
    pub vaccine_service_url: String,
    pub storage_host_internal: String,
    pub storage_host_public: String,
    pub credentials: StaticCredentials,
    pub page_size: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            student_service_url: "http://localhost:8081".to_string(),
            vaccine_service_url: "http://localhost:8080".to_string(),
            storage_host_internal: "minio-school".to_string(),
            storage_host_public: "localhost".to_string(),
            credentials: StaticCredentials {
                username: "admin".to_string(),
                password: "admin".to_string(),
            },
            page_size: 5,
        }
    }
}

fn base_url(key: &'static str, raw: &str) -> Result<String, PortalError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|_| PortalError::InvalidConfig {
        key,
        value: raw.to_string(),
    })?;
    Ok(trimmed.to_string())
}

impl PortalConfig {
    /// Builds the config, falling back to defaults for unset keys.
    pub fn from_lookup<'a>(
        lookup: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<Self, PortalError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(STUDENT_SERVICE_URL) {
            config.student_service_url = base_url(STUDENT_SERVICE_URL, raw)?;
        }
        if let Some(raw) = lookup(VACCINE_SERVICE_URL) {
            config.vaccine_service_url = base_url(VACCINE_SERVICE_URL, raw)?;
        }
        if let Some(host) = lookup(STORAGE_HOST_INTERNAL) {
            config.storage_host_internal = host.trim().to_string();
        }
        if let Some(host) = lookup(STORAGE_HOST_PUBLIC) {
            config.storage_host_public = host.trim().to_string();
        }
        if let Some(username) = lookup(PORTAL_USERNAME) {
            config.credentials.username = username.to_string();
        }
        if let Some(password) = lookup(PORTAL_PASSWORD) {
            config.credentials.password = password.to_string();
        }
        if let Some(raw) = lookup(PAGE_SIZE) {
            config.page_size = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(PortalError::InvalidConfig {
                    key: PAGE_SIZE,
                    value: raw.to_string(),
                })?;
        }

        Ok(config)
    }

    pub fn student_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.student_service_url, path)
    }

    pub fn vaccine_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.vaccine_service_url, path)
    }

    /// Points a storage link at the publicly reachable host. Links on any
    /// other host, or that do not parse, are returned unchanged.
    pub fn public_link(&self, link: &str) -> String {
        let Ok(mut url) = Url::parse(link) else {
            return link.to_string();
        };
        if url.host_str() != Some(self.storage_host_internal.as_str()) {
            return link.to_string();
        }
        match url.set_host(Some(&self.storage_host_public)) {
            Ok(()) => url.to_string(),
            Err(_) => link.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> + 'a {
        move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = PortalConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn overrides_trim_trailing_slash() {
        let pairs = [
            (STUDENT_SERVICE_URL, "https://students.school.test/"),
            (PAGE_SIZE, "20"),
        ];
        let config = PortalConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(
            config.student_endpoint("/students"),
            "https://students.school.test/students"
        );
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn invalid_values_are_reported() {
        let pairs = [(VACCINE_SERVICE_URL, "not a url")];
        assert!(matches!(
            PortalConfig::from_lookup(lookup(&pairs)),
            Err(PortalError::InvalidConfig { key: VACCINE_SERVICE_URL, .. })
        ));
        let pairs = [(PAGE_SIZE, "0")];
        assert!(PortalConfig::from_lookup(lookup(&pairs)).is_err());
    }

    #[test]
    fn storage_links_are_rewritten() {
        let config = PortalConfig::default();
        assert_eq!(
            config.public_link("http://minio-school:9000/reports/r1.xlsx"),
            "http://localhost:9000/reports/r1.xlsx"
        );
        assert_eq!(
            config.public_link("https://cdn.example.org/minio-school.xlsx"),
            "https://cdn.example.org/minio-school.xlsx"
        );
        assert_eq!(config.public_link("relative/path"), "relative/path");
    }
}
