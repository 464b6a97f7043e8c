//! Site configuration.
//!
//! Every field has a default, so a partial (or absent) JSON document still
//! yields a complete configuration.

use serde::{Deserialize, Serialize};

/// Errors raised while loading a [`SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(&'static str),
}

/// Durations of the dive transition phases, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    /// Cover fade-in while the ghost element expands.
    pub expand_ms: u32,
    /// Delay after the route change that lets the new view lay out.
    pub mount_settle_ms: u32,
    /// Cover fade-out once the new view is in place.
    pub fade_out_ms: u32,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            expand_ms: 800,
            mount_settle_ms: 50,
            fade_out_ms: 400,
        }
    }
}

impl TransitionTimings {
    /// Time from the route change until the transition ends.
    pub fn settle_total_ms(&self) -> u32 {
        self.mount_settle_ms.saturating_add(self.fade_out_ms)
    }
}

/// Responsive breakpoints in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Viewports at or below this width use the mobile layout.
    pub mobile_max_width: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max_width: 768.0,
        }
    }
}

/// Intro loader settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    pub duration_ms: u32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 2400,
        }
    }
}

impl IntroConfig {
    /// Whether the loader should play, given the session's intro flag.
    pub fn is_visible(&self, has_seen_intro: bool) -> bool {
        self.enabled && !has_seen_intro
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timings: TransitionTimings,
    pub breakpoints: Breakpoints,
    pub intro: IntroConfig,
}

impl SiteConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.breakpoints.mobile_max_width.is_finite()
            || self.breakpoints.mobile_max_width < 0.0
        {
            return Err(ConfigError::Invalid(
                "breakpoints.mobile_max_width must be a non-negative number",
            ));
        }
        Ok(())
    }
}
