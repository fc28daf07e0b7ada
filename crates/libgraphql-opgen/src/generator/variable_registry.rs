use crate::types::Parameter;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Document-wide mapping from variable name to the argument it feeds.
///
/// Every argument rendered anywhere in a document gets a variable here.
/// Names are unique within the registry: when two different arguments share a
/// raw name, later ones get a numeric suffix (`id1`, `id2`, ...). An argument
/// that is registered again reuses the variable it already has.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableRegistry<'schema> {
    duplicate_counts: HashMap<String, usize>,
    variables: IndexMap<String, &'schema Parameter>,
}
impl<'schema> VariableRegistry<'schema> {
    pub fn get(&self, variable_name: &str) -> Option<&'schema Parameter> {
        self.variables.get(variable_name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variable names and their arguments in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'schema Parameter)> {
        self.variables.iter()
            .map(|(name, param)| (name.as_str(), *param))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `param` a variable name and returns it.
    pub fn register(&mut self, param: &'schema Parameter) -> String {
        if let Some((existing_name, _)) = self.variables.iter()
            .find(|(_, existing)| **existing == param) {
            return existing_name.to_owned();
        }

        let raw_name = param.name();
        if !self.variables.contains_key(raw_name) {
            self.variables.insert(raw_name.to_string(), param);
            return raw_name.to_string();
        }

        let counter = self.duplicate_counts
            .entry(raw_name.to_string())
            .or_insert(0);
        let variable_name = loop {
            *counter += 1;
            let candidate = format!("{raw_name}{counter}");
            if !self.variables.contains_key(candidate.as_str()) {
                break candidate;
            }
        };
        log::trace!(
            "Renamed `{}.{}({raw_name}:)` to `${variable_name}` to avoid a \
            collision.",
            param.owner_type_name(),
            param.field_name(),
        );
        self.variables.insert(variable_name.to_owned(), param);
        variable_name
    }
}
