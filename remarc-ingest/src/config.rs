//! Configuration resolution for remarc-ingest
//!
//! Content URLs are resolved per item group:
//! 1. Base: `<override> + content_dir` if the override variable is set and
//!    non-empty, else the configured default base URL
//! 2. Append the path segment for the group's dominant kind

use crate::models::ResourceKind;
use remarc_common::config::{FolderConfig, TomlConfig, UrlConfig};
use remarc_common::EnvLookup;

/// Settings consumed by the ingestion pipeline
#[derive(Debug, Clone, Default)]
pub struct IngestSettings {
    pub folders: FolderConfig,
    pub urls: UrlConfig,
}

impl From<&TomlConfig> for IngestSettings {
    fn from(config: &TomlConfig) -> Self {
        Self {
            folders: config.folders.clone(),
            urls: config.urls.clone(),
        }
    }
}

/// Resolve the content base URL, before the kind-specific path is appended
pub fn resolve_base_url(urls: &UrlConfig, env: &dyn EnvLookup) -> String {
    match env.var(&urls.base_url_env).filter(|v| !v.is_empty()) {
        Some(base) => {
            tracing::debug!(base = %base, "Content base URL from environment override");
            base + &urls.content_dir
        }
        None => urls.default_base_url.clone(),
    }
}

/// URL prefix for content files of a group with the given dominant kind
pub fn content_url_prefix(urls: &UrlConfig, env: &dyn EnvLookup, kind: ResourceKind) -> String {
    let mut prefix = resolve_base_url(urls, env);
    match kind {
        ResourceKind::Image => prefix.push_str(&urls.image_path),
        ResourceKind::Audio => prefix.push_str(&urls.audio_path),
        ResourceKind::Video => prefix.push_str(&urls.video_path),
        ResourceKind::Properties | ResourceKind::Information => {}
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use remarc_common::MapEnv;

    #[test]
    fn test_default_base_url_without_override() {
        let urls = UrlConfig::default();
        let env = MapEnv::new();

        assert_eq!(resolve_base_url(&urls, &env), "/content/");
        assert_eq!(
            content_url_prefix(&urls, &env, ResourceKind::Image),
            "/content/images/"
        );
        assert_eq!(
            content_url_prefix(&urls, &env, ResourceKind::Audio),
            "/content/audio/"
        );
        assert_eq!(
            content_url_prefix(&urls, &env, ResourceKind::Video),
            "/content/video/"
        );
    }

    #[test]
    fn test_env_override_appends_content_dir() {
        let urls = UrlConfig::default();
        let env = MapEnv::new().with("REMARC_BASE_URL", "https://cdn.example.org/");

        assert_eq!(
            content_url_prefix(&urls, &env, ResourceKind::Video),
            "https://cdn.example.org/content/video/"
        );
    }

    #[test]
    fn test_empty_override_uses_default() {
        let urls = UrlConfig::default();
        let env = MapEnv::new().with("REMARC_BASE_URL", "");

        assert_eq!(resolve_base_url(&urls, &env), "/content/");
    }

    #[test]
    fn test_non_content_kind_has_no_kind_path() {
        let urls = UrlConfig::default();
        let env = MapEnv::new();

        assert_eq!(
            content_url_prefix(&urls, &env, ResourceKind::Information),
            "/content/"
        );
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = TomlConfig {
            folders: FolderConfig {
                video: "clips".to_string(),
                ..FolderConfig::default()
            },
            ..TomlConfig::default()
        };

        let settings = IngestSettings::from(&toml);
        assert_eq!(settings.folders.video, "clips");
        assert_eq!(settings.urls, UrlConfig::default());
    }
}
