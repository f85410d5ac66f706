//! Declarative dialog descriptions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use securities_provider::SchemeType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogField {
    /// `(value, label)` options
    Select {
        name: String,
        label: String,
        options: Vec<(String, String)>,
    },
    TextArea {
        name: String,
        label: String,
    },
}

impl DialogField {
    pub fn name(&self) -> &str {
        match self {
            Self::Select { name, .. } | Self::TextArea { name, .. } => name,
        }
    }
}

/// Modal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDialog {
    pub title: String,
    pub confirm_label: String,
    pub fields: Vec<DialogField>,
}

impl InputDialog {
    /// Form for loading new securities from an external scheme.
    pub fn add_securities() -> Self {
        Self {
            title: "Add Securities".to_string(),
            confirm_label: "OK".to_string(),
            fields: vec![
                DialogField::Select {
                    name: "scheme_type".to_string(),
                    label: "Scheme Type".to_string(),
                    options: SchemeType::ALL
                        .into_iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect(),
                },
                DialogField::TextArea {
                    name: "identifiers".to_string(),
                    label: "Identifiers".to_string(),
                },
            ],
        }
    }
}

/// Yes/no confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

impl ConfirmDialog {
    pub fn delete_security() -> Self {
        Self {
            title: "Delete Security?".to_string(),
            message: "Are you sure you want to permanently delete this security?".to_string(),
            confirm_label: "Delete".to_string(),
        }
    }
}

/// Values submitted from an [`InputDialog`], keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogValues(BTreeMap<String, String>);

impl DialogValues {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_dialog_offers_every_scheme() {
        let dialog = InputDialog::add_securities();
        let DialogField::Select { options, .. } = &dialog.fields[0] else {
            panic!("first field should be the scheme select");
        };
        assert_eq!(options.len(), SchemeType::ALL.len());
        assert_eq!(options[0], ("BLOOMBERG_TICKER".to_string(), "Bloomberg Ticker".to_string()));
        assert!(options.contains(&("CSEDOL1".to_string(), "SEDOL".to_string())));
        assert_eq!(dialog.fields[1].name(), "identifiers");
    }
}
