use crate::assets;
use crate::error::ConfigError;
use pixel_stylize::StylizeOptions;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_PROFILE: &str = "default";
const SCENE_VIEW_KEY: &str = "apply_to_scene_view";

/// Application configuration loaded from config.yaml
///
/// Profiles are resolved (and clamped) once at load time, so lookups hand
/// out ready-to-use [`StylizeOptions`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Profile used when none is requested
    pub default_profile: String,

    /// Scene-view policy for profiles that do not set their own
    pub apply_to_scene_view: bool,

    /// Named stylization profiles
    pub profiles: BTreeMap<String, StylizeOptions>,
}

/// On-disk layout; profile bodies stay untyped until the top-level
/// scene-view default has been merged in.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_profile")]
    default_profile: String,

    #[serde(default)]
    apply_to_scene_view: bool,

    #[serde(default)]
    profiles: BTreeMap<String, serde_yaml::Mapping>,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(content)?;

        let mut profiles = BTreeMap::new();
        for (name, mut body) in raw.profiles {
            let key = serde_yaml::Value::from(SCENE_VIEW_KEY);
            if !body.contains_key(&key) {
                body.insert(key, serde_yaml::Value::Bool(raw.apply_to_scene_view));
            }
            let options: StylizeOptions =
                serde_yaml::from_value(serde_yaml::Value::Mapping(body))?;
            tracing::debug!(profile = %name, ?options, "Resolved profile");
            profiles.insert(name, options);
        }

        if profiles.is_empty() {
            profiles.insert(
                raw.default_profile.clone(),
                StylizeOptions::default().with_apply_to_scene_view(raw.apply_to_scene_view),
            );
        }

        Ok(Self {
            default_profile: raw.default_profile,
            apply_to_scene_view: raw.apply_to_scene_view,
            profiles,
        })
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            profiles = config.profiles.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the embedded default.
    ///
    /// A failing file falls back to the embedded default with a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&StylizeOptions> {
        self.profiles.get(name)
    }

    /// The requested profile, or the default profile when `name` is `None`.
    pub fn resolve_profile<'a>(
        &'a self,
        name: Option<&'a str>,
    ) -> Result<(&'a str, &'a StylizeOptions), ConfigError> {
        let name = name.unwrap_or(self.default_profile.as_str());
        self.profile(name)
            .map(|options| (name, options))
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    /// Profile names in sorted order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

impl Default for AppConfig {
    /// The embedded default configuration.
    fn default() -> Self {
        let embedded = assets::default_config_yaml()
            .map_err(|e| e.to_string())
            .and_then(|yaml| Self::from_yaml_str(&yaml).map_err(|e| e.to_string()));
        match embedded {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Embedded config unusable, using built-in defaults");
                let mut profiles = BTreeMap::new();
                profiles.insert(DEFAULT_PROFILE.to_string(), StylizeOptions::default());
                Self {
                    default_profile: DEFAULT_PROFILE.to_string(),
                    apply_to_scene_view: false,
                    profiles,
                }
            }
        }
    }
}
