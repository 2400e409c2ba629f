use crate::adapters::http::{expand_url, CANTEEN_PLACEHOLDER, WEEK_PLACEHOLDER};
use crate::domain::model::Canteen;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_URL_TEMPLATE: &str =
    "http://www.stwno.de/infomax/daten-extern/csv/{canteen}/{week}.csv";
pub const DEFAULT_CANTEEN: &str = "pa";

/// Feed location, canteen registry and defaults.
///
/// Every section is optional in the TOML file; missing values fall back to
/// the built-in STWNO settings and file canteens are merged over the
/// built-in ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub canteens: BTreeMap<String, CanteenEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_canteen")]
    pub canteen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanteenEntry {
    pub source: String,
    pub name: String,
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_canteen() -> String {
    DEFAULT_CANTEEN.to_string()
}

fn builtin_canteens() -> BTreeMap<String, CanteenEntry> {
    [
        ("pa", "UNI-P", "Mensa Uni Passau"),
        (
            "pa-nk",
            "Cafeteria Nikolakloster",
            "Uni Passau Cafeteria Nikolakloster",
        ),
        ("rgbg", "UNI-R", "Mensa Uni Regensburg (mittags)"),
    ]
    .into_iter()
    .map(|(key, source, name)| {
        (
            key.to_string(),
            CanteenEntry {
                source: source.to_string(),
                name: name.to_string(),
            },
        )
    })
    .collect()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            canteen: default_canteen(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            defaults: DefaultsConfig::default(),
            canteens: builtin_canteens(),
        }
    }
}

impl MenuConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: MenuConfig =
            toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        // file entries override built-ins with the same key
        let mut canteens = builtin_canteens();
        canteens.append(&mut config.canteens);
        config.canteens = canteens;

        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unknown vars are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        let template = &self.feed.url_template;
        validation::validate_contains("feed.url_template", template, CANTEEN_PLACEHOLDER)?;
        validation::validate_contains("feed.url_template", template, WEEK_PLACEHOLDER)?;
        validation::validate_url("feed.url_template", &expand_url(template, "X", 1))?;

        for (key, entry) in &self.canteens {
            validation::validate_non_empty_string(&format!("canteens.{}.source", key), &entry.source)?;
            validation::validate_non_empty_string(&format!("canteens.{}.name", key), &entry.name)?;
        }

        if !self.canteens.contains_key(&self.defaults.canteen) {
            return Err(MenuError::UnknownCanteenError {
                key: self.defaults.canteen.clone(),
                known: self.canteen_keys().join(", "),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for MenuConfig {
    fn url_template(&self) -> &str {
        &self.feed.url_template
    }

    fn default_canteen(&self) -> &str {
        &self.defaults.canteen
    }

    fn canteen(&self, key: &str) -> Option<Canteen> {
        self.canteens.get(key).map(|entry| Canteen {
            key: key.to_string(),
            source: entry.source.clone(),
            name: entry.name.clone(),
        })
    }

    fn canteen_keys(&self) -> Vec<String> {
        self.canteens.keys().cloned().collect()
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
