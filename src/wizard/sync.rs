//! Derived-field defaults.
//!
//! A rule proposes a value for a target field on every sync cycle. The
//! proposal is written only while the target still holds the value the rule
//! wrote last (or, before the first write, while the target is blank). Once
//! the user types something else the rule leaves the field alone.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::form::{FieldValue, Fields, FormStore};

/// Values that rules may read besides the form fields, e.g. the list of
/// organizations the user can pick from.
pub type SyncInputs = BTreeMap<String, FieldValue>;

type DeriveFn = Arc<dyn Fn(&Fields, &SyncInputs) -> FieldValue + Send + Sync>;

#[derive(Clone)]
pub struct DerivedFieldRule {
    target: String,
    derive: DeriveFn,
}

impl DerivedFieldRule {
    /// `target := transform(fields[source])`. A missing source reads as an
    /// empty text value.
    pub fn from_field<F>(source: &str, target: &str, transform: F) -> Self
    where
        F: Fn(&FieldValue) -> FieldValue + Send + Sync + 'static,
    {
        let source = source.to_string();
        let empty = FieldValue::default();
        Self {
            target: target.to_string(),
            derive: Arc::new(move |fields: &Fields, _: &SyncInputs| {
                transform(fields.get(&source).unwrap_or(&empty))
            }),
        }
    }

    /// `target := transform(inputs[input])`, for defaults fed from outside
    /// the form.
    pub fn from_input<F>(input: &str, target: &str, transform: F) -> Self
    where
        F: Fn(&FieldValue) -> FieldValue + Send + Sync + 'static,
    {
        let input = input.to_string();
        let empty = FieldValue::empty_list();
        Self {
            target: target.to_string(),
            derive: Arc::new(move |_: &Fields, inputs: &SyncInputs| {
                transform(inputs.get(&input).unwrap_or(&empty))
            }),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn propose(&self, fields: &Fields, inputs: &SyncInputs) -> FieldValue {
        (self.derive)(fields, inputs)
    }
}

impl fmt::Debug for DerivedFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedFieldRule")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct RuleMemory {
    last_proposed: Option<FieldValue>,
    last_applied: Option<FieldValue>,
}

#[derive(Debug, Clone, Default)]
pub struct DefaultValueSynchronizer {
    rules: Vec<DerivedFieldRule>,
    memory: Vec<RuleMemory>,
}

impl DefaultValueSynchronizer {
    pub fn new(rules: Vec<DerivedFieldRule>) -> Self {
        let memory = vec![RuleMemory::default(); rules.len()];
        Self { rules, memory }
    }

    pub fn rules(&self) -> &[DerivedFieldRule] {
        &self.rules
    }

    /// Value most recently written for `target`, if any.
    pub fn last_applied(&self, target: &str) -> Option<&FieldValue> {
        self.rules
            .iter()
            .position(|rule| rule.target == target)
            .and_then(|index| self.memory[index].last_applied.as_ref())
    }

    /// Run one sync cycle. All writes go to the store in a single
    /// `set_fields` call. Returns the number of fields written.
    pub fn sync<S>(&mut self, store: &mut S, inputs: &SyncInputs) -> usize
    where
        S: FormStore + ?Sized,
    {
        let mut updates = Fields::new();
        {
            let fields = store.fields();
            for (rule, memory) in self.rules.iter().zip(self.memory.iter_mut()) {
                let proposed = rule.propose(fields, inputs);
                if memory.last_proposed.as_ref() == Some(&proposed) {
                    continue;
                }
                memory.last_proposed = Some(proposed.clone());

                let current = fields.get(&rule.target);
                let follows = match &memory.last_applied {
                    Some(applied) => current == Some(applied),
                    None => current.map_or(true, FieldValue::is_blank),
                };
                if !follows {
                    tracing::debug!(field = %rule.target, "Field diverged from default, not overwriting");
                    continue;
                }

                if current != Some(&proposed) {
                    updates.insert(rule.target.clone(), proposed.clone());
                }
                memory.last_applied = Some(proposed);
            }
        }

        let written = updates.len();
        if written > 0 {
            tracing::debug!(fields = ?updates.keys().collect::<Vec<_>>(), "Applying derived defaults");
            store.set_fields(updates);
        }
        written
    }

    /// Forget all bookkeeping, as if no rule had ever applied.
    pub fn reset(&mut self) {
        for memory in &mut self.memory {
            *memory = RuleMemory::default();
        }
    }
}

/// First entry of a list input, or empty text.
pub fn first_entry(value: &FieldValue) -> FieldValue {
    let first = value
        .as_list()
        .and_then(|items| items.first())
        .cloned()
        .unwrap_or_default();
    FieldValue::Text(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{sanitize_repo_name, MemoryFormStore};

    fn repo_rule() -> DerivedFieldRule {
        DerivedFieldRule::from_field("name", "repo_name", |value| {
            FieldValue::Text(sanitize_repo_name(value.as_text().unwrap_or("")))
        })
    }

    fn store() -> MemoryFormStore {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::empty_text());
        fields.insert("repo_name".into(), FieldValue::empty_text());
        fields.insert("organization".into(), FieldValue::empty_text());
        MemoryFormStore::new(fields)
    }

    #[test]
    fn follows_source_until_user_diverges() {
        let mut store = store();
        let mut sync = DefaultValueSynchronizer::new(vec![repo_rule()]);
        let inputs = SyncInputs::new();

        sync.sync(&mut store, &inputs);
        store.set_field("name", "My Proj!!".into());
        assert_eq!(sync.sync(&mut store, &inputs), 1);
        assert_eq!(store.state().text("repo_name"), "My-Proj--");

        store.set_field("repo_name", "custom".into());
        store.set_field("name", "Other".into());
        assert_eq!(sync.sync(&mut store, &inputs), 0);
        assert_eq!(store.state().text("repo_name"), "custom");
    }

    #[test]
    fn second_cycle_is_a_no_op() {
        let mut store = store();
        let mut sync = DefaultValueSynchronizer::new(vec![repo_rule()]);
        let inputs = SyncInputs::new();
        store.set_field("name", "demo".into());
        assert_eq!(sync.sync(&mut store, &inputs), 1);
        assert_eq!(sync.sync(&mut store, &inputs), 0);
        assert_eq!(store.state().text("repo_name"), "demo");
    }

    #[test]
    fn prefilled_target_is_not_overwritten_before_first_application() {
        let mut store = store();
        store.set_field("repo_name", "keep-me".into());
        store.set_field("name", "demo".into());
        let mut sync = DefaultValueSynchronizer::new(vec![repo_rule()]);
        assert_eq!(sync.sync(&mut store, &SyncInputs::new()), 0);
        assert_eq!(store.state().text("repo_name"), "keep-me");
    }

    #[test]
    fn input_rule_picks_first_organization() {
        let mut store = store();
        let rule = DerivedFieldRule::from_input("organizations", "organization", first_entry);
        let mut sync = DefaultValueSynchronizer::new(vec![rule]);
        let mut inputs = SyncInputs::new();

        sync.sync(&mut store, &inputs);
        assert_eq!(store.state().text("organization"), "");

        inputs.insert(
            "organizations".into(),
            FieldValue::List(vec!["acme".into(), "globex".into()]),
        );
        sync.sync(&mut store, &inputs);
        assert_eq!(store.state().text("organization"), "acme");
    }

    #[test]
    fn reset_clears_bookkeeping() {
        let mut store = store();
        let mut sync = DefaultValueSynchronizer::new(vec![repo_rule()]);
        store.set_field("name", "demo".into());
        sync.sync(&mut store, &SyncInputs::new());
        assert!(sync.last_applied("repo_name").is_some());
        sync.reset();
        assert!(sync.last_applied("repo_name").is_none());
    }
}
