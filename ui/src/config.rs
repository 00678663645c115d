//! Chrome content (brand, nav items, footer copy).
//!
//! The document is compiled into the bundle from `config/chrome.json` and
//! parsed once at startup; the result is provided to the tree as context.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CHROME_JSON: &str = include_str!("../config/chrome.json");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub brand: Brand,
    pub nav_items: Vec<NavItem>,
    pub footer: FooterConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    /// leading word of `name` drawn in the primary colour
    pub accent: String,
    pub primary: String,
    pub primary_dark: String,
}

impl Brand {
    /// `name` split into (accent, rest). Falls back to no accent when
    /// `accent` isn't a prefix of `name`.
    pub fn split_name(&self) -> (&str, &str) {
        match self.name.strip_prefix(self.accent.as_str()) {
            Some(rest) if !self.accent.is_empty() => (self.accent.as_str(), rest),
            _ => ("", self.name.as_str()),
        }
    }

    /// CSS custom properties consumed by `bg-[var(--brand)]` style classes.
    pub fn css_vars(&self) -> String {
        format!(
            "--brand:{};--brand-dark:{};",
            self.primary, self.primary_dark
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub blurb: String,
    pub socials: Vec<SocialLink>,
    pub quick_links: Vec<String>,
    pub support_links: Vec<String>,
    pub contact: Contact,
    pub payment_methods: Vec<String>,
    pub newsletter_reset_ms: u32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            blurb: String::new(),
            socials: Vec::new(),
            quick_links: Vec::new(),
            support_links: Vec::new(),
            contact: Contact::default(),
            payment_methods: Vec::new(),
            newsletter_reset_ms: 3000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: SocialIcon,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Twitter,
    Instagram,
    Facebook,
    Youtube,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ChromeConfig {
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).context("invalid chrome config")
    }

    /// The configuration compiled into the bundle.
    pub fn embedded() -> Result<Self> {
        Self::from_json(CHROME_JSON)
    }
}
