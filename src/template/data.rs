//! Stored reply template records

use serde::{Deserialize, Serialize};

/// One block of canned text within a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTemplateItem {
    /// Raw text, possibly containing `{variable}` tokens
    pub body: String,

    /// Sort key; may be sparse, ties keep insertion order
    #[serde(default)]
    pub order: i32,

    /// Inactive items are kept in storage but never rendered
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// A named, ordered collection of reply items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTemplate {
    pub name: String,
    pub items: Vec<ReplyTemplateItem>,
}

impl ReplyTemplate {
    /// Active items in render order (sort key ascending, insertion order on ties)
    pub fn active_items(&self) -> Vec<&ReplyTemplateItem> {
        let mut items: Vec<&ReplyTemplateItem> =
            self.items.iter().filter(|i| i.active).collect();
        items.sort_by_key(|i| i.order);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(body: &str, order: i32, active: bool) -> ReplyTemplateItem {
        ReplyTemplateItem {
            body: body.to_string(),
            order,
            active,
        }
    }

    #[test]
    fn test_active_items_sorted_with_stable_ties() {
        let template = ReplyTemplate {
            name: "welcome".to_string(),
            items: vec![
                item("third", 10, true),
                item("skipped", 5, false),
                item("first", 1, true),
                item("second", 1, true),
            ],
        };

        let bodies: Vec<&str> = template
            .active_items()
            .iter()
            .map(|i| i.body.as_str())
            .collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_json_round_trip_defaults() {
        let json = r#"{"name":"welcome","items":[{"body":"Hi {name}"}]}"#;
        let template: ReplyTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.items.len(), 1);
        assert!(template.items[0].active);
        assert_eq!(template.items[0].order, 0);
    }
}
