use super::definition::AutomatedData;
use super::FieldMap;
use serde::{Deserialize, Serialize};

/// One automation an Automated node can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationEntry {
    pub id: String,
    pub label: String,
    /// Declared parameter names, in form order.
    pub params: Vec<String>,
}

impl AutomationEntry {
    pub fn new(id: &str, label: &str, params: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A source of automation definitions.
///
/// Only the editing side consults a provider; simulation works from the already
/// resolved `action_label` and `parameters` on each node.
pub trait AutomationProvider {
    fn list_automations(&self) -> Vec<AutomationEntry>;
}

/// The built-in automation catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomationCatalog {
    entries: Vec<AutomationEntry>,
}

impl Default for AutomationCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                AutomationEntry::new("send_email", "Send Email", &["to", "subject", "body"]),
                AutomationEntry::new(
                    "generate_doc",
                    "Generate Document",
                    &["template", "recipient"],
                ),
                AutomationEntry::new(
                    "create_ticket",
                    "Create Support Ticket",
                    &["title", "priority", "assignee"],
                ),
                AutomationEntry::new("send_slack", "Send Slack Message", &["channel", "message"]),
                AutomationEntry::new(
                    "update_database",
                    "Update Database",
                    &["table", "record_id", "fields"],
                ),
                AutomationEntry::new(
                    "generate_pdf",
                    "Generate PDF Report",
                    &["template", "data_source"],
                ),
                AutomationEntry::new("send_sms", "Send SMS", &["phone_number", "message"]),
            ],
        }
    }
}

impl AutomationCatalog {
    /// Builds a catalog from any provider's listing.
    pub fn from_provider(provider: &dyn AutomationProvider) -> Self {
        Self {
            entries: provider.list_automations(),
        }
    }

    pub fn entries(&self) -> &[AutomationEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&AutomationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Fills in `action_label` and re-keys `parameters` to the action's declared names.
    ///
    /// Values already present for a declared name are kept; undeclared keys are dropped.
    /// Returns `false` and leaves `data` untouched if the action is not in the catalog.
    pub fn resolve(&self, data: &mut AutomatedData) -> bool {
        let Some(entry) = self.get(&data.action) else {
            return false;
        };
        data.action_label = entry.label.clone();
        data.parameters = entry
            .params
            .iter()
            .map(|name| {
                let value = data.parameters.get(name).unwrap_or_default().to_string();
                (name.clone(), value)
            })
            .collect::<FieldMap>();
        true
    }
}

impl AutomationProvider for AutomationCatalog {
    fn list_automations(&self) -> Vec<AutomationEntry> {
        self.entries.clone()
    }
}
