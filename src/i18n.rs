//! Label translation.
//!
//! Translators are injected into the wizard and the detail resolver instead
//! of being looked up globally. Keys are the English source strings.

use std::collections::HashMap;

pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Lookup table translator, falling back to the key when no entry exists.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_falls_back_to_key() {
        let catalog = Catalog::new(HashMap::from([(
            "Cancel".to_string(),
            "Abbrechen".to_string(),
        )]));
        assert_eq!(catalog.translate("Cancel"), "Abbrechen");
        assert_eq!(catalog.translate("Go Back"), "Go Back");
    }
}
