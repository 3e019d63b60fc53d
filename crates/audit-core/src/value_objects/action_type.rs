//! Audit action types - what kind of operation an audit event recorded
//!
//! Codes are grouped in bands of ten per subsystem (panels 10-19, multi-panels
//! 20-29, ...). Gaps inside a band are reserved by the backend for future
//! actions of that subsystem.

use serde::{Deserialize, Serialize};

use super::{ResourceType, UnknownCodeError};

/// Audit action type, stored as a SMALLINT by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
#[repr(i16)]
pub enum ActionType {
    SettingsUpdate = 1,

    PanelCreate = 10,
    PanelUpdate = 11,
    PanelDelete = 12,
    PanelResend = 13,

    MultiPanelCreate = 20,
    MultiPanelUpdate = 21,
    MultiPanelDelete = 22,
    MultiPanelResend = 23,

    SupportHoursSet = 30,
    SupportHoursDelete = 31,

    FormCreate = 40,
    FormUpdate = 41,
    FormDelete = 42,
    FormInputsUpdate = 45,

    TagCreate = 50,
    TagDelete = 51,

    TeamCreate = 60,
    TeamDelete = 61,
    TeamMemberAdd = 65,
    TeamMemberRemove = 66,

    StaffOverrideCreate = 70,
    StaffOverrideDelete = 71,

    BlacklistAdd = 80,
    BlacklistRemoveUser = 81,
    BlacklistRemoveRole = 82,

    TicketSendMessage = 90,
    TicketSendTag = 91,
    TicketClose = 92,

    IntegrationActivate = 100,
    IntegrationUpdateSecrets = 101,
    IntegrationDeactivate = 102,

    ImportTrigger = 110,

    PremiumSetActiveGuilds = 120,

    UserIntegrationCreate = 200,
    UserIntegrationUpdate = 201,
    UserIntegrationDelete = 202,
    UserIntegrationSetPublic = 203,

    WhitelabelCreate = 210,
    WhitelabelDelete = 211,
    WhitelabelCreateInteractions = 212,
    WhitelabelStatusSet = 213,
    WhitelabelStatusDelete = 214,

    BotStaffAdd = 300,
    BotStaffRemove = 301,
}

impl ActionType {
    /// Every known action type, in ascending code order
    pub const ALL: [Self; 45] = [
        Self::SettingsUpdate,
        Self::PanelCreate,
        Self::PanelUpdate,
        Self::PanelDelete,
        Self::PanelResend,
        Self::MultiPanelCreate,
        Self::MultiPanelUpdate,
        Self::MultiPanelDelete,
        Self::MultiPanelResend,
        Self::SupportHoursSet,
        Self::SupportHoursDelete,
        Self::FormCreate,
        Self::FormUpdate,
        Self::FormDelete,
        Self::FormInputsUpdate,
        Self::TagCreate,
        Self::TagDelete,
        Self::TeamCreate,
        Self::TeamDelete,
        Self::TeamMemberAdd,
        Self::TeamMemberRemove,
        Self::StaffOverrideCreate,
        Self::StaffOverrideDelete,
        Self::BlacklistAdd,
        Self::BlacklistRemoveUser,
        Self::BlacklistRemoveRole,
        Self::TicketSendMessage,
        Self::TicketSendTag,
        Self::TicketClose,
        Self::IntegrationActivate,
        Self::IntegrationUpdateSecrets,
        Self::IntegrationDeactivate,
        Self::ImportTrigger,
        Self::PremiumSetActiveGuilds,
        Self::UserIntegrationCreate,
        Self::UserIntegrationUpdate,
        Self::UserIntegrationDelete,
        Self::UserIntegrationSetPublic,
        Self::WhitelabelCreate,
        Self::WhitelabelDelete,
        Self::WhitelabelCreateInteractions,
        Self::WhitelabelStatusSet,
        Self::WhitelabelStatusDelete,
        Self::BotStaffAdd,
        Self::BotStaffRemove,
    ];

    /// Get the numeric value
    #[inline]
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        self as i16
    }

    /// Look up an action type by code
    ///
    /// Accepts any integer; codes outside the known set (including values
    /// that do not fit in an `i16`) yield `None`.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        let action = match code {
            1 => Self::SettingsUpdate,
            10 => Self::PanelCreate,
            11 => Self::PanelUpdate,
            12 => Self::PanelDelete,
            13 => Self::PanelResend,
            20 => Self::MultiPanelCreate,
            21 => Self::MultiPanelUpdate,
            22 => Self::MultiPanelDelete,
            23 => Self::MultiPanelResend,
            30 => Self::SupportHoursSet,
            31 => Self::SupportHoursDelete,
            40 => Self::FormCreate,
            41 => Self::FormUpdate,
            42 => Self::FormDelete,
            45 => Self::FormInputsUpdate,
            50 => Self::TagCreate,
            51 => Self::TagDelete,
            60 => Self::TeamCreate,
            61 => Self::TeamDelete,
            65 => Self::TeamMemberAdd,
            66 => Self::TeamMemberRemove,
            70 => Self::StaffOverrideCreate,
            71 => Self::StaffOverrideDelete,
            80 => Self::BlacklistAdd,
            81 => Self::BlacklistRemoveUser,
            82 => Self::BlacklistRemoveRole,
            90 => Self::TicketSendMessage,
            91 => Self::TicketSendTag,
            92 => Self::TicketClose,
            100 => Self::IntegrationActivate,
            101 => Self::IntegrationUpdateSecrets,
            102 => Self::IntegrationDeactivate,
            110 => Self::ImportTrigger,
            120 => Self::PremiumSetActiveGuilds,
            200 => Self::UserIntegrationCreate,
            201 => Self::UserIntegrationUpdate,
            202 => Self::UserIntegrationDelete,
            203 => Self::UserIntegrationSetPublic,
            210 => Self::WhitelabelCreate,
            211 => Self::WhitelabelDelete,
            212 => Self::WhitelabelCreateInteractions,
            213 => Self::WhitelabelStatusSet,
            214 => Self::WhitelabelStatusDelete,
            300 => Self::BotStaffAdd,
            301 => Self::BotStaffRemove,
            _ => return None,
        };
        Some(action)
    }

    /// Human-readable label shown in the dashboard
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SettingsUpdate => "Settings Update",
            Self::PanelCreate => "Panel Create",
            Self::PanelUpdate => "Panel Update",
            Self::PanelDelete => "Panel Delete",
            Self::PanelResend => "Panel Resend",
            Self::MultiPanelCreate => "Multi-Panel Create",
            Self::MultiPanelUpdate => "Multi-Panel Update",
            Self::MultiPanelDelete => "Multi-Panel Delete",
            Self::MultiPanelResend => "Multi-Panel Resend",
            Self::SupportHoursSet => "Support Hours Set",
            Self::SupportHoursDelete => "Support Hours Delete",
            Self::FormCreate => "Form Create",
            Self::FormUpdate => "Form Update",
            Self::FormDelete => "Form Delete",
            Self::FormInputsUpdate => "Form Inputs Update",
            Self::TagCreate => "Tag Create",
            Self::TagDelete => "Tag Delete",
            Self::TeamCreate => "Team Create",
            Self::TeamDelete => "Team Delete",
            Self::TeamMemberAdd => "Team Member Add",
            Self::TeamMemberRemove => "Team Member Remove",
            Self::StaffOverrideCreate => "Staff Override Create",
            Self::StaffOverrideDelete => "Staff Override Delete",
            Self::BlacklistAdd => "Blacklist Add",
            Self::BlacklistRemoveUser => "Blacklist Remove User",
            Self::BlacklistRemoveRole => "Blacklist Remove Role",
            Self::TicketSendMessage => "Ticket Send Message",
            Self::TicketSendTag => "Ticket Send Tag",
            Self::TicketClose => "Ticket Close",
            Self::IntegrationActivate => "Integration Activate",
            Self::IntegrationUpdateSecrets => "Integration Update Secrets",
            Self::IntegrationDeactivate => "Integration Deactivate",
            Self::ImportTrigger => "Import Trigger",
            Self::PremiumSetActiveGuilds => "Premium Set Active Guilds",
            Self::UserIntegrationCreate => "User Integration Create",
            Self::UserIntegrationUpdate => "User Integration Update",
            Self::UserIntegrationDelete => "User Integration Delete",
            Self::UserIntegrationSetPublic => "User Integration Set Public",
            Self::WhitelabelCreate => "Whitelabel Create",
            Self::WhitelabelDelete => "Whitelabel Delete",
            Self::WhitelabelCreateInteractions => "Whitelabel Create Interactions",
            Self::WhitelabelStatusSet => "Whitelabel Status Set",
            Self::WhitelabelStatusDelete => "Whitelabel Status Delete",
            Self::BotStaffAdd => "Bot Staff Add",
            Self::BotStaffRemove => "Bot Staff Remove",
        }
    }

    /// The kind of entity this action is recorded against
    #[must_use]
    pub const fn resource_type(self) -> ResourceType {
        match self {
            Self::SettingsUpdate => ResourceType::Settings,
            Self::PanelCreate | Self::PanelUpdate | Self::PanelDelete | Self::PanelResend => {
                ResourceType::Panel
            }
            Self::MultiPanelCreate
            | Self::MultiPanelUpdate
            | Self::MultiPanelDelete
            | Self::MultiPanelResend => ResourceType::MultiPanel,
            Self::SupportHoursSet | Self::SupportHoursDelete => ResourceType::SupportHours,
            Self::FormCreate | Self::FormUpdate | Self::FormDelete => ResourceType::Form,
            Self::FormInputsUpdate => ResourceType::FormInput,
            Self::TagCreate | Self::TagDelete => ResourceType::Tag,
            Self::TeamCreate | Self::TeamDelete => ResourceType::Team,
            Self::TeamMemberAdd | Self::TeamMemberRemove => ResourceType::TeamMember,
            Self::StaffOverrideCreate | Self::StaffOverrideDelete => ResourceType::StaffOverride,
            Self::BlacklistAdd | Self::BlacklistRemoveUser | Self::BlacklistRemoveRole => {
                ResourceType::Blacklist
            }
            Self::TicketSendMessage | Self::TicketSendTag | Self::TicketClose => {
                ResourceType::Ticket
            }
            Self::IntegrationActivate
            | Self::IntegrationUpdateSecrets
            | Self::IntegrationDeactivate => ResourceType::GuildIntegration,
            Self::ImportTrigger => ResourceType::Import,
            Self::PremiumSetActiveGuilds => ResourceType::Premium,
            Self::UserIntegrationCreate
            | Self::UserIntegrationUpdate
            | Self::UserIntegrationDelete
            | Self::UserIntegrationSetPublic => ResourceType::UserIntegration,
            Self::WhitelabelCreate
            | Self::WhitelabelDelete
            | Self::WhitelabelCreateInteractions
            | Self::WhitelabelStatusSet
            | Self::WhitelabelStatusDelete => ResourceType::Whitelabel,
            Self::BotStaffAdd | Self::BotStaffRemove => ResourceType::BotStaff,
        }
    }
}

impl TryFrom<i16> for ActionType {
    type Error = UnknownCodeError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(value)).ok_or(UnknownCodeError::Action(value))
    }
}

impl From<ActionType> for i16 {
    fn from(action: ActionType) -> Self {
        action as i16
    }
}
