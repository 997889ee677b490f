//! Footer buttons and the progress indicator.
//!
//! Hosts receive these as plain data and draw them however they like.
//! Per-button customisation goes through [`ButtonOverrides`] instead of
//! forwarding arbitrary attributes.

use crate::i18n::Translator;

use super::step::StepDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    Cancel,
    Back,
    Next,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Neutral,
    Outline,
    Brand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonOptions {
    pub action: FooterAction,
    pub label: String,
    pub variant: ButtonVariant,
    pub disabled: bool,
    /// Show a spinner next to the label.
    pub busy: bool,
}

/// Fields to replace on a base [`ButtonOptions`]. `None` keeps the base value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonOverrides {
    pub label: Option<String>,
    pub variant: Option<ButtonVariant>,
    pub disabled: Option<bool>,
    pub busy: Option<bool>,
}

impl ButtonOverrides {
    pub fn disabled(disabled: bool) -> Self {
        Self {
            disabled: Some(disabled),
            ..Self::default()
        }
    }
}

impl ButtonOptions {
    pub fn cancel(t: &dyn Translator) -> Self {
        Self {
            action: FooterAction::Cancel,
            label: t.translate("Cancel"),
            variant: ButtonVariant::Neutral,
            disabled: false,
            busy: false,
        }
    }

    pub fn back(t: &dyn Translator) -> Self {
        Self {
            action: FooterAction::Back,
            label: t.translate("Go Back"),
            variant: ButtonVariant::Outline,
            disabled: false,
            busy: false,
        }
    }

    pub fn next(t: &dyn Translator) -> Self {
        Self {
            action: FooterAction::Next,
            label: t.translate("Save & Next"),
            variant: ButtonVariant::Brand,
            disabled: false,
            busy: false,
        }
    }

    pub fn submit(t: &dyn Translator, label: &str) -> Self {
        Self {
            action: FooterAction::Submit,
            label: t.translate(label),
            variant: ButtonVariant::Brand,
            disabled: false,
            busy: false,
        }
    }

    pub fn merged(self, overrides: ButtonOverrides) -> Self {
        Self {
            action: self.action,
            label: overrides.label.unwrap_or(self.label),
            variant: overrides.variant.unwrap_or(self.variant),
            disabled: overrides.disabled.unwrap_or(self.disabled),
            busy: overrides.busy.unwrap_or(self.busy),
        }
    }
}

/// Footer of the visible step: one control on each side of the progress
/// indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub leading: ButtonOptions,
    pub trailing: ButtonOptions,
}

impl Footer {
    pub fn button(&self, action: FooterAction) -> Option<&ButtonOptions> {
        [&self.leading, &self.trailing]
            .into_iter()
            .find(|button| button.action == action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Selected,
    Disabled,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStep {
    pub id: usize,
    pub label: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressIndicator {
    pub steps: Vec<ProgressStep>,
}

impl ProgressIndicator {
    /// Steps before `selected` are completed. While the entry gate is closed
    /// every step after the first is disabled.
    pub fn build(
        steps: &[StepDefinition],
        selected: usize,
        entry_gate_open: bool,
        t: &dyn Translator,
    ) -> Self {
        let steps = steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let status = if index < selected {
                    StepStatus::Completed
                } else if index == selected {
                    StepStatus::Selected
                } else if !entry_gate_open {
                    StepStatus::Disabled
                } else {
                    StepStatus::Pending
                };
                ProgressStep {
                    id: step.id,
                    label: t.translate(&step.label),
                    status,
                }
            })
            .collect();
        Self { steps }
    }

    pub fn status(&self, index: usize) -> Option<StepStatus> {
        self.steps.get(index).map(|step| step.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Passthrough;
    use crate::wizard::step::StepContent;

    fn steps(count: usize) -> Vec<StepDefinition> {
        (0..count)
            .map(|id| StepDefinition::new(id, &format!("Step {id}"), StepContent::Confirm))
            .collect()
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let next = ButtonOptions::next(&Passthrough).merged(ButtonOverrides::disabled(true));
        assert!(next.disabled);
        assert_eq!(next.label, "Save & Next");
        assert_eq!(next.variant, ButtonVariant::Brand);

        let relabeled = ButtonOptions::cancel(&Passthrough).merged(ButtonOverrides {
            label: Some("Close".into()),
            ..ButtonOverrides::default()
        });
        assert_eq!(relabeled.label, "Close");
        assert!(!relabeled.disabled);
    }

    #[test]
    fn progress_disables_later_steps_while_gate_closed() {
        let progress = ProgressIndicator::build(&steps(4), 0, false, &Passthrough);
        assert_eq!(progress.status(0), Some(StepStatus::Selected));
        assert_eq!(progress.status(1), Some(StepStatus::Disabled));
        assert_eq!(progress.status(3), Some(StepStatus::Disabled));
    }

    #[test]
    fn progress_marks_completed_steps() {
        let progress = ProgressIndicator::build(&steps(4), 2, true, &Passthrough);
        assert_eq!(progress.status(0), Some(StepStatus::Completed));
        assert_eq!(progress.status(1), Some(StepStatus::Completed));
        assert_eq!(progress.status(2), Some(StepStatus::Selected));
        assert_eq!(progress.status(3), Some(StepStatus::Pending));
    }
}
