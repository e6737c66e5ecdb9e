//! Portal configuration baked in at build time.
//!
//! Every key of [`common::config`] can be overridden through an environment
//! variable of the same name when running `trunk build`.

use std::sync::OnceLock;

use common::config::{self, PortalConfig};
use gloo_console::error;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        config::STUDENT_SERVICE_URL => option_env!("STUDENT_SERVICE_URL"),
        config::VACCINE_SERVICE_URL => option_env!("VACCINE_SERVICE_URL"),
        config::STORAGE_HOST_INTERNAL => option_env!("STORAGE_HOST_INTERNAL"),
        config::STORAGE_HOST_PUBLIC => option_env!("STORAGE_HOST_PUBLIC"),
        config::PORTAL_USERNAME => option_env!("PORTAL_USERNAME"),
        config::PORTAL_PASSWORD => option_env!("PORTAL_PASSWORD"),
        config::PAGE_SIZE => option_env!("PAGE_SIZE"),
        _ => None,
    }
}

pub fn portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        PortalConfig::from_lookup(build_env).unwrap_or_else(|err| {
            error!(format!("{err}; falling back to default configuration"));
            PortalConfig::default()
        })
    })
}
