//! Icon lookup: string keys from API payloads map to an `IconName`,
//! and every `IconName` maps to its glyph through a single table.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Shield,
    Star,
    MapPin,
    Clock,
    Wrench,
    Zap,
    Sparkles,
    Leaf,
    Paintbrush,
    Snowflake,
    Key,
    TrendingUp,
    Tag,
    User,
    Search,
    Refresh,
}

/// Single source of truth: (variant, API key, glyph)
const ICON_TABLE: &[(IconName, &str, &str)] = &[
    (IconName::Shield, "Shield", "🛡️"),
    (IconName::Star, "Star", "⭐"),
    (IconName::MapPin, "MapPin", "📍"),
    (IconName::Clock, "Clock", "🕒"),
    (IconName::Wrench, "Wrench", "🔧"),
    (IconName::Zap, "Zap", "⚡"),
    (IconName::Sparkles, "Sparkles", "✨"),
    (IconName::Leaf, "Leaf", "🌿"),
    (IconName::Paintbrush, "Paintbrush", "🖌️"),
    (IconName::Snowflake, "Snowflake", "❄️"),
    (IconName::Key, "Key", "🔑"),
    (IconName::TrendingUp, "TrendingUp", "📈"),
    (IconName::Tag, "Tag", "🏷️"),
    (IconName::User, "User", "👤"),
    (IconName::Search, "Search", "🔍"),
    (IconName::Refresh, "RefreshCw", "🔄"),
];

impl IconName {
    pub const FALLBACK: IconName = IconName::Sparkles;

    fn entry(&self) -> &'static (IconName, &'static str, &'static str) {
        ICON_TABLE
            .iter()
            .find(|(name, _, _)| name == self)
            .unwrap_or(&ICON_TABLE[6])
    }

    pub fn glyph(&self) -> &'static str {
        self.entry().2
    }

    pub fn key(&self) -> &'static str {
        self.entry().1
    }

    /// Parse an API key, falling back to the default icon
    pub fn from_key(key: &str) -> IconName {
        key.parse().unwrap_or(Self::FALLBACK)
    }

    /// Icon for a service tag such as "plomberie"
    pub fn for_tag(tag: &str) -> IconName {
        const TAG_TABLE: &[(&str, IconName)] = &[
            ("plomb", IconName::Wrench),
            ("électri", IconName::Zap),
            ("electri", IconName::Zap),
            ("ménage", IconName::Sparkles),
            ("nettoyage", IconName::Sparkles),
            ("jardin", IconName::Leaf),
            ("peinture", IconName::Paintbrush),
            ("clim", IconName::Snowflake),
            ("serrur", IconName::Key),
        ];
        let tag = tag.to_lowercase();
        TAG_TABLE
            .iter()
            .find(|(prefix, _)| tag.contains(prefix))
            .map(|(_, icon)| *icon)
            .unwrap_or(Self::FALLBACK)
    }
}

impl FromStr for IconName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ICON_TABLE
            .iter()
            .find(|(_, key, _)| key.eq_ignore_ascii_case(s))
            .map(|(name, _, _)| *name)
            .ok_or_else(|| format!("Unknown icon: {}", s))
    }
}
