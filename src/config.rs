use serde::Deserialize;
use std::collections::HashMap;

/// Case policy of an encoding's alphabet.
///
/// `None` means case canonicalization does not apply (the alphabet has no
/// letters or only one published form); `Both` marks case-mixed alphabets
/// such as base58 and base64.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Lower,
    Upper,
    Both,
    #[default]
    None,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BaseConfig {
    pub prefix: String,
    pub alphabet: String,
    #[serde(default)]
    pub padding: Option<String>,
    #[serde(default)]
    pub case: Case,
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Deserialized form of the embedded catalog data.
#[derive(Debug, Deserialize)]
pub struct BasesConfig {
    pub bases: HashMap<String, BaseConfig>,
}

impl BasesConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, toml::de::Error> {
        Self::from_toml(include_str!("../bases.toml"))
    }

    pub fn get_base(&self, name: &str) -> Option<&BaseConfig> {
        self.bases.get(name)
    }
}
