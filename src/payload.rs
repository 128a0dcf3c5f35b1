use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field values written to every row of the cards table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePayload {
    /// Marks the card as work in progress.
    pub is_wip: bool,
    /// Spells attached to the card.
    pub spells: Vec<Value>,
    /// Tags attached to the card.
    pub tags: Vec<Value>,
    /// Talent; always sent as an explicit `null`.
    pub talent: Option<Value>,
}

impl UpdatePayload {
    /// The reset payload: WIP flag set, spells and tags emptied, talent cleared.
    pub fn reset() -> Self {
        Self {
            is_wip: true,
            spells: Vec::new(),
            tags: Vec::new(),
            talent: None,
        }
    }
}

impl Default for UpdatePayload {
    fn default() -> Self {
        Self::reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reset_serializes_explicit_null_talent() {
        let value = serde_json::to_value(UpdatePayload::reset()).unwrap();
        assert_eq!(
            value,
            json!({ "is_wip": true, "spells": [], "tags": [], "talent": null })
        );
    }

    #[test]
    fn test_reset_is_stable() {
        assert_eq!(UpdatePayload::reset(), UpdatePayload::default());
        assert_eq!(
            serde_json::to_string(&UpdatePayload::reset()).unwrap(),
            r#"{"is_wip":true,"spells":[],"tags":[],"talent":null}"#
        );
    }
}
