use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::landing::{ColorError, CursorConfig, IntroConfig, Palette, DEFAULT_BREAKPOINT_PX};

static SITE_JSON: &str = include_str!("../content/site.json");

pub static SITE: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::load);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Bad intro palette: {0}")]
    Palette(#[from] ColorError),
    #[error("Breakpoint must be a positive width, got {0}")]
    Breakpoint(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    /// CSS color for the group's labels and bars.
    pub color: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "hello@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub resume_url: String,
    pub breakpoint_px: f64,
    pub intro: IntroConfig,
    pub cursor: CursorConfig,
    pub contact: ContactConfig,
    pub links: Vec<SocialLink>,
    pub skills: Vec<SkillGroup>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            tagline: "Software developer".to_string(),
            about: Vec::new(),
            resume_url: "/resume.pdf".to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            intro: IntroConfig::default(),
            cursor: CursorConfig::default(),
            contact: ContactConfig::default(),
            links: Vec::new(),
            skills: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.palette()?;
        if !(config.breakpoint_px.is_finite() && config.breakpoint_px > 0.0) {
            return Err(ConfigError::Breakpoint(config.breakpoint_px));
        }
        Ok(config)
    }

    /// The embedded `content/site.json`, or defaults if it doesn't validate.
    pub fn load() -> Self {
        match Self::from_json(SITE_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette::parse(&self.intro.palette)?)
    }
}
