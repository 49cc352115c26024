#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Voice command routing.
//!
//! Commands are matched by case-insensitive substring containment against
//! three keyword sets, checked in priority order: emergency, then
//! reporting, then navigation. The first set with any hit wins, so
//! "report an emergency" raises an SOS rather than opening the report form.

use strum_macros::{AsRefStr, Display};

/// Phrases that raise an SOS.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "help",
    "emergency",
    "sos",
    "save me",
    "danger",
    "help me",
    "security",
];

/// Phrases that open the incident report form.
pub const REPORTING_KEYWORDS: &[&str] = &["report", "incident", "harassment", "theft"];

/// Phrases that make a command a navigation request.
pub const NAVIGATION_KEYWORDS: &[&str] = &["dashboard", "map", "safety", "profile", "shop", "walk"];

/// Page a navigation command leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum Destination {
    /// Home dashboard.
    #[strum(serialize = "dashboard")]
    Dashboard,
    /// Campus safety heatmap.
    #[strum(serialize = "safety_map")]
    SafetyMap,
    /// User profile.
    #[strum(serialize = "profile")]
    Profile,
    /// Safety shop.
    #[strum(serialize = "shop")]
    Shop,
    /// Accompanied walk.
    #[strum(serialize = "safewalk")]
    SafeWalk,
}

impl Destination {
    /// Feedback shown to the user while navigating.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Dashboard => "Going to dashboard...",
            Self::SafetyMap => "Opening safety map...",
            Self::Profile => "Opening profile...",
            Self::Shop => "Opening safety shop...",
            Self::SafeWalk => "Starting safe walk...",
        }
    }

    /// Picks a destination for a lowercased command that already matched
    /// [`NAVIGATION_KEYWORDS`].
    fn for_command(command: &str) -> Option<Self> {
        if contains_any(command, &["dashboard", "home"]) {
            Some(Self::Dashboard)
        } else if command.contains("map") {
            Some(Self::SafetyMap)
        } else if command.contains("profile") {
            Some(Self::Profile)
        } else if contains_any(command, &["shop", "store"]) {
            Some(Self::Shop)
        } else if contains_any(command, &["walk", "safe walk"]) {
            Some(Self::SafeWalk)
        } else {
            None
        }
    }
}

/// What a voice command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceIntent {
    /// Raise an SOS.
    Emergency,
    /// Open the incident report form.
    Report,
    /// Go to a page.
    Navigate(Destination),
    /// Nothing actionable.
    Unmatched,
}

/// Routes a spoken command to an intent.
#[must_use]
pub fn route(command: &str) -> VoiceIntent {
    let command = command.to_lowercase();

    if contains_any(&command, EMERGENCY_KEYWORDS) {
        VoiceIntent::Emergency
    } else if contains_any(&command, REPORTING_KEYWORDS) {
        VoiceIntent::Report
    } else if contains_any(&command, NAVIGATION_KEYWORDS) {
        Destination::for_command(&command).map_or(VoiceIntent::Unmatched, VoiceIntent::Navigate)
    } else {
        VoiceIntent::Unmatched
    }
}

fn contains_any(command: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| command.contains(keyword))
}
