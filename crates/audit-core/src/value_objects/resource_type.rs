//! Audit resource types - the kind of entity an audit event targets

use serde::{Deserialize, Serialize};

use super::UnknownCodeError;

/// Audit resource type, numbered 1-18 without gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
#[repr(i16)]
pub enum ResourceType {
    Settings = 1,
    Panel = 2,
    MultiPanel = 3,
    SupportHours = 4,
    Form = 5,
    FormInput = 6,
    Tag = 7,
    Team = 8,
    TeamMember = 9,
    StaffOverride = 10,
    Blacklist = 11,
    Ticket = 12,
    GuildIntegration = 13,
    Import = 14,
    Premium = 15,
    UserIntegration = 16,
    Whitelabel = 17,
    BotStaff = 18,
}

impl ResourceType {
    /// Every known resource type, in ascending code order
    pub const ALL: [Self; 18] = [
        Self::Settings,
        Self::Panel,
        Self::MultiPanel,
        Self::SupportHours,
        Self::Form,
        Self::FormInput,
        Self::Tag,
        Self::Team,
        Self::TeamMember,
        Self::StaffOverride,
        Self::Blacklist,
        Self::Ticket,
        Self::GuildIntegration,
        Self::Import,
        Self::Premium,
        Self::UserIntegration,
        Self::Whitelabel,
        Self::BotStaff,
    ];

    #[inline]
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        self as i16
    }

    /// Look up a resource type by code, `None` if the code is not known
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        if code < 1 || code > Self::ALL.len() as i64 {
            return None;
        }
        Some(Self::ALL[(code - 1) as usize])
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Panel => "Panel",
            Self::MultiPanel => "Multi-Panel",
            Self::SupportHours => "Support Hours",
            Self::Form => "Form",
            Self::FormInput => "Form Input",
            Self::Tag => "Tag",
            Self::Team => "Team",
            Self::TeamMember => "Team Member",
            Self::StaffOverride => "Staff Override",
            Self::Blacklist => "Blacklist",
            Self::Ticket => "Ticket",
            Self::GuildIntegration => "Guild Integration",
            Self::Import => "Import",
            Self::Premium => "Premium",
            Self::UserIntegration => "User Integration",
            Self::Whitelabel => "Whitelabel",
            Self::BotStaff => "Bot Staff",
        }
    }
}

impl TryFrom<i16> for ResourceType {
    type Error = UnknownCodeError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(value)).ok_or(UnknownCodeError::Resource(value))
    }
}

impl From<ResourceType> for i16 {
    fn from(resource: ResourceType) -> Self {
        resource as i16
    }
}
