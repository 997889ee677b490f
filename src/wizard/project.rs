//! The "Create Project" wizard.

use std::sync::Arc;

use crate::form::{sanitize_repo_name, FieldValue, Fields, MemoryFormStore, ObjectType};
use crate::i18n::Translator;

use super::controller::{StepFormWizard, WizardError};
use super::step::{FieldSpec, Gate, StepContent, StepDefinition};
use super::sync::{first_entry, DerivedFieldRule};

pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_REPO_NAME: &str = "repo_name";
pub const FIELD_GITHUB_USERS: &str = "github_users";
pub const FIELD_ORGANIZATION: &str = "organization";
pub const FIELD_DEPENDENCIES: &str = "dependencies";

/// Synchronizer input holding the organizations the user may pick from.
pub const INPUT_ORGANIZATIONS: &str = "organizations";

const PLACEHOLDER: &str = "This is a placeholder.";

pub fn initial_fields() -> Fields {
    Fields::from([
        (FIELD_NAME.to_string(), FieldValue::empty_text()),
        (FIELD_DESCRIPTION.to_string(), FieldValue::empty_text()),
        (FIELD_REPO_NAME.to_string(), FieldValue::empty_text()),
        (FIELD_GITHUB_USERS.to_string(), FieldValue::empty_list()),
        (FIELD_ORGANIZATION.to_string(), FieldValue::empty_text()),
        (FIELD_DEPENDENCIES.to_string(), FieldValue::empty_list()),
    ])
}

pub fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(
            0,
            "Enter Project Details",
            StepContent::Details {
                fields: vec![
                    FieldSpec::text(FIELD_NAME, "Project Name").required(),
                    FieldSpec::text(FIELD_DESCRIPTION, "Description"),
                    FieldSpec::select(FIELD_ORGANIZATION, "Organization", INPUT_ORGANIZATIONS)
                        .required(),
                    FieldSpec::text(FIELD_REPO_NAME, "Repository Name").required(),
                ],
            },
        )
        .with_heading("Create Project")
        .with_gate(Gate::required(&[
            FIELD_NAME,
            FIELD_ORGANIZATION,
            FIELD_REPO_NAME,
        ])),
        StepDefinition::new(
            1,
            "Add Project Collaborators",
            StepContent::Collaborators {
                field: FIELD_GITHUB_USERS.to_string(),
            },
        ),
        StepDefinition::new(
            2,
            "Add Dependencies",
            StepContent::Placeholder {
                message: PLACEHOLDER.to_string(),
            },
        ),
        StepDefinition::new(3, "Create Project", StepContent::Confirm),
    ]
}

/// `repo_name` follows the sanitized project name; `organization` follows
/// the first available organization.
pub fn rules() -> Vec<DerivedFieldRule> {
    vec![
        DerivedFieldRule::from_input(INPUT_ORGANIZATIONS, FIELD_ORGANIZATION, first_entry),
        DerivedFieldRule::from_field(FIELD_NAME, FIELD_REPO_NAME, |name| {
            FieldValue::Text(sanitize_repo_name(name.as_text().unwrap_or("")))
        }),
    ]
}

pub fn create_project_wizard(
    organizations: Vec<String>,
    translator: Arc<dyn Translator>,
) -> Result<StepFormWizard<MemoryFormStore>, WizardError> {
    let mut wizard = StepFormWizard::new(
        steps(),
        MemoryFormStore::new(initial_fields()),
        ObjectType::Project,
    )?
    .with_rules(rules())
    .with_translator(translator)
    .with_submit_labels("Create Project", "Creating…");
    wizard.set_input(INPUT_ORGANIZATIONS, FieldValue::List(organizations));
    Ok(wizard)
}
