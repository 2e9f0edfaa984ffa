//! Visual variants, title color themes and the CSS class contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stylesheet owns every visual detail; components only pick class names.
//! The constants in [`class`] must stay byte-identical to the selectors in
//! `blocky-ui.css`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a variant or title color from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseThemeError {
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
    #[error("unknown title color: {0}")]
    UnknownTitleColor(String),
}

/// Color variant shared by buttons, dropdowns, cards and tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Secondary,
    Danger,
}

impl Variant {
    pub const ALL: [Self; 4] = [Self::Default, Self::Primary, Self::Secondary, Self::Danger];

    /// Class name the stylesheet keys the variant on.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseThemeError::UnknownVariant(s.to_owned()))
    }
}

/// Header color theme of the info overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleColor {
    Yellow,
    Green,
    Blue,
    Purple,
    Red,
}

impl TitleColor {
    pub const ALL: [Self; 5] = [Self::Yellow, Self::Green, Self::Blue, Self::Purple, Self::Red];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }

    /// Wrapper class selecting the color theme, e.g. `theme-yellow`.
    #[must_use]
    pub fn theme_class(self) -> String {
        format!("theme-{}", self.as_str())
    }
}

impl fmt::Display for TitleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TitleColor {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseThemeError::UnknownTitleColor(s.to_owned()))
    }
}

/// CSS class names used by the components.
pub mod class {
    pub const GRADIENT: &str = "blocky-gradient";
    pub const THREE_D: &str = "blocky-3d";

    pub const BUTTON_WRAPPER: &str = "blocky-btn-wrapper";
    pub const BUTTON: &str = "blocky-btn";

    pub const DROPDOWN_WRAPPER: &str = "blocky-dropdown-wrapper";
    pub const DROPDOWN_LABEL: &str = "blocky-dropdown-label";
    pub const DROPDOWN: &str = "blocky-dropdown";

    pub const CARD_WRAPPER: &str = "blocky-card-wrapper";
    pub const CARD: &str = "blocky-card";
    pub const CARD_TITLE: &str = "blocky-card-title";
    pub const CARD_CONTENT: &str = "blocky-card-content";

    pub const TAG_WRAPPER: &str = "blocky-tag-wrapper";
    pub const TAG_CONTENT: &str = "blocky-tag-content";
    pub const TAG_HEADER: &str = "blocky-tag-header";
    pub const TAG_TITLE: &str = "blocky-tag-title";
    pub const TAG_BODY: &str = "blocky-tag-body";

    pub const INFO_OVERLAY: &str = "blocky-info-overlay";
    pub const INFO_WRAPPER: &str = "blocky-info-wrapper";
    pub const INFO_TITLE: &str = "blocky-info-title";
    pub const INFO_BODY: &str = "blocky-info-body";

    pub const MODAL_OVERLAY: &str = "blocky-modal-overlay";
    pub const MODAL_WRAPPER: &str = "blocky-modal-wrapper";
    pub const MODAL_BODY: &str = "blocky-modal-body";
    pub const MODAL_FOOTER: &str = "blocky-modal-footer";

    pub const CONTENT: &str = "blocky-content";
    pub const HEADER_BORDERED: &str = "blocky-header-bordered";
    pub const TITLE_ENHANCED: &str = "blocky-title-enhanced";
    pub const CLOSE_BUTTON: &str = "blocky-close-btn";

    pub const PAGE_OVERLAY: &str = "blocky-page-overlay";
    pub const PAGE_CONTENT: &str = "blocky-page-content";
    pub const PAGE_WRAPPER: &str = "blocky-page-wrapper";
    pub const CUSTOM_SCROLLBAR: &str = "custom-scrollbar";
    pub const SCROLLING: &str = "scrolling";

    /// Footer buttons whose class contains this marker keep the modal open.
    pub const NO_AUTO_CLOSE: &str = "no-auto-close";
}

/// Join base classes with an optional caller-supplied class string.
///
/// Empty parts are skipped; the extra string is trimmed and appended last.
#[must_use]
pub fn class_list(base: &[&str], extra: Option<&str>) -> String {
    base.iter()
        .copied()
        .chain(extra.map(str::trim))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
