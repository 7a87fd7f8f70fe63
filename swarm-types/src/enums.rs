use serde::{Deserialize, Serialize};

/// Social network a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
    Youtube,
    Pinterest,
    Tiktok,
    Twitch,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 8] = [
        SocialNetwork::Twitter,
        SocialNetwork::Facebook,
        SocialNetwork::Instagram,
        SocialNetwork::Linkedin,
        SocialNetwork::Youtube,
        SocialNetwork::Pinterest,
        SocialNetwork::Tiktok,
        SocialNetwork::Twitch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialNetwork::Twitter => "twitter",
            SocialNetwork::Facebook => "facebook",
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Linkedin => "linkedin",
            SocialNetwork::Youtube => "youtube",
            SocialNetwork::Pinterest => "pinterest",
            SocialNetwork::Tiktok => "tiktok",
            SocialNetwork::Twitch => "twitch",
        }
    }

    /// Human readable name for badges and headings
    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Linkedin => "LinkedIn",
            SocialNetwork::Youtube => "YouTube",
            SocialNetwork::Pinterest => "Pinterest",
            SocialNetwork::Tiktok => "TikTok",
            SocialNetwork::Twitch => "Twitch",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|network| network.as_str() == s)
    }
}

impl std::fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    #[default]
    Default,
    Dark,
    Light,
    Solarized,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Default => "Default",
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::Solarized => "Solarized",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(ColorScheme::Default),
            "dark" => Some(ColorScheme::Dark),
            "light" => Some(ColorScheme::Light),
            "solarized" => Some(ColorScheme::Solarized),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ColorScheme::Default => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Solarized,
            ColorScheme::Solarized => ColorScheme::Default,
        }
    }
}

/// Sort key for the group list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GroupSortKey {
    #[default]
    Name,
    Created,
    ProfileCount,
}

impl GroupSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupSortKey::Name => "Name",
            GroupSortKey::Created => "Created",
            GroupSortKey::ProfileCount => "Profiles",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            GroupSortKey::Name => GroupSortKey::Created,
            GroupSortKey::Created => GroupSortKey::ProfileCount,
            GroupSortKey::ProfileCount => GroupSortKey::Name,
        }
    }
}

/// Sort key for profile lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProfileSortKey {
    #[default]
    Name,
    Network,
}

impl ProfileSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSortKey::Name => "Name",
            ProfileSortKey::Network => "Network",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ProfileSortKey::Name => ProfileSortKey::Network,
            ProfileSortKey::Network => ProfileSortKey::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow glyph shown next to the active sort key
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}
