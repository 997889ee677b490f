//! Which control the scratch-org card shows.

use crate::i18n::Translator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchOrg {
    pub id: String,
    pub owner: String,
}

#[derive(Debug, Clone, Default)]
pub struct OrgActionInput {
    pub org: Option<ScratchOrg>,
    pub owned_by_current_user: bool,
    pub assigned_to_current_user: bool,
    /// Org for this task that belongs to someone other than the assignee.
    pub owned_by_wrong_user: Option<ScratchOrg>,
    pub is_creating: bool,
    pub is_deleting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgAction {
    /// Disabled button with a spinner.
    Creating { label: String },
    /// Dropdown with a single "Delete Org" entry.
    DeleteMenu { label: String, option: String },
    CreateButton { label: String },
    None,
}

pub fn org_action(input: &OrgActionInput, t: &dyn Translator) -> OrgAction {
    if input.is_creating {
        return OrgAction::Creating {
            label: t.translate("Creating Org…"),
        };
    }

    let owns_existing = input.org.is_some() && input.owned_by_current_user;
    if !input.is_deleting && (input.owned_by_wrong_user.is_some() || owns_existing) {
        return OrgAction::DeleteMenu {
            label: t.translate("Org Actions"),
            option: t.translate("Delete Org"),
        };
    }

    if input.org.is_none() && input.assigned_to_current_user {
        return OrgAction::CreateButton {
            label: t.translate("Create Org"),
        };
    }

    OrgAction::None
}
