//! # Update Expression Builder
//!
//! Builds the store's "set these named fields to these values" update from
//! a field mapping. Every field gets its own placeholder pair, so attribute
//! names never collide with words reserved by the store's query language.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// A `SET`-style update expression: one `#fN = :vN` assignment per field.
///
/// Placeholder numbering follows the mapping's iteration order, which is
/// sorted by key, so the same field mapping always renders the same
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    expression: String,
    attribute_names: HashMap<String, String>,
    attribute_values: Map<String, Value>,
}

impl UpdateExpression {
    /// Build the expression for the given field mapping.
    ///
    /// An empty mapping renders a structurally invalid `SET` with no
    /// assignments; callers reject empty mappings before building.
    pub fn set_fields(fields: &Map<String, Value>) -> Self {
        let mut clauses = Vec::with_capacity(fields.len());
        let mut attribute_names = HashMap::with_capacity(fields.len());
        let mut attribute_values = Map::new();

        for (index, (field, value)) in fields.iter().enumerate() {
            clauses.push(format!("#f{index} = :v{index}"));
            attribute_names.insert(format!("#f{index}"), field.clone());
            attribute_values.insert(format!(":v{index}"), value.clone());
        }

        Self {
            expression: format!("SET {}", clauses.join(", ")),
            attribute_names,
            attribute_values,
        }
    }

    /// The rendered expression string sent to the store.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Number of field assignments in the expression.
    pub fn len(&self) -> usize {
        self.attribute_names.len()
    }

    /// True when the expression carries no assignments.
    pub fn is_empty(&self) -> bool {
        self.attribute_names.is_empty()
    }

    /// Assignment pairs in expression order, with placeholders resolved back
    /// to attribute names and values.
    pub fn assignments(&self) -> Vec<(&str, &Value)> {
        (0..self.len())
            .filter_map(|index| {
                let name = self.attribute_names.get(&format!("#f{index}"))?;
                let value = self.attribute_values.get(&format!(":v{index}"))?;
                Some((name.as_str(), value))
            })
            .collect()
    }
}
