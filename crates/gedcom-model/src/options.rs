//! Configuration options for the engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::enums::TraditionKind;
use crate::error::{GedcomError, Result};

const DEFAULT_PARTICLE_LEN: usize = 4;

fn default_particle_len() -> usize {
    DEFAULT_PARTICLE_LEN
}

/// Rule deciding which leading surname tokens are prefix particles.
///
/// The final token of a surname group is never a particle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum ParticleRule {
    /// Any token of 1..=`max_len` ASCII lowercase letters (`de`, `van`, `la`).
    Lowercase {
        #[serde(default = "default_particle_len")]
        max_len: usize,
    },
    /// Case-insensitive membership in an explicit list.
    List { particles: Vec<String> },
}

impl Default for ParticleRule {
    fn default() -> Self {
        ParticleRule::Lowercase {
            max_len: DEFAULT_PARTICLE_LEN,
        }
    }
}

impl ParticleRule {
    /// Whether `token` is a surname prefix particle under this rule.
    pub fn is_particle(&self, token: &str) -> bool {
        match self {
            ParticleRule::Lowercase { max_len } => {
                !token.is_empty()
                    && token.len() <= *max_len
                    && token.bytes().all(|b| b.is_ascii_lowercase())
            }
            ParticleRule::List { particles } => {
                particles.iter().any(|p| p.eq_ignore_ascii_case(token))
            }
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            ParticleRule::Lowercase { max_len: 0 } => Err(GedcomError::InvalidConfig(
                "particles.max_len must be at least 1".to_string(),
            )),
            ParticleRule::List { particles } if particles.iter().any(|p| p.trim().is_empty()) => {
                Err(GedcomError::InvalidConfig(
                    "particles.particles must not contain empty entries".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Engine configuration, selected once per genealogical dataset.
///
/// ```toml
/// tradition = "matrilineal"
///
/// [particles]
/// rule = "list"
/// particles = ["de", "la", "van", "der"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub tradition: TraditionKind,
    #[serde(default)]
    pub particles: ParticleRule,
}

impl EngineConfig {
    pub fn new(tradition: TraditionKind) -> Self {
        Self {
            tradition,
            particles: ParticleRule::default(),
        }
    }

    #[must_use]
    pub fn with_particles(mut self, particles: ParticleRule) -> Self {
        self.particles = particles;
        self
    }

    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.particles.validate()
    }
}

/// Options for controlled-value canonicalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Decode HTML entities (`&amp;`, `&lt;`, ...) before matching.
    /// Default: false. Enable when values come from HTML-escaped storage.
    pub unescape_entities: bool,

    /// Caller value mappings (raw -> canonical code), consulted before the
    /// built-in remap. Keys are matched as given, then case-folded.
    pub custom_maps: HashMap<String, String>,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unescape_entities(mut self, enable: bool) -> Self {
        self.unescape_entities = enable;
        self
    }

    pub fn with_custom_map(mut self, map: HashMap<String, String>) -> Self {
        self.custom_maps = map;
        self
    }
}
