use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{FieldDescriptor, SchemaError};

/// The ordered sequence of field descriptors that makes up a form.
///
/// Order determines rendering order. Every non-empty id (descriptor ids and
/// radio option ids alike) is expected to be unique across the whole schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSchema {
    fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    /// Create a schema from the given descriptors.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Create an empty schema.
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Parse a schema from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the schema as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<FieldDescriptor> {
        &mut self.fields
    }

    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    /// All non-empty ids in the schema, in rendering order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .flat_map(|field| {
                let own = (!field.is_radio()).then_some(field.id.as_str());
                let options = field
                    .options
                    .iter()
                    .flatten()
                    .filter(|_| field.is_radio())
                    .map(|option| option.id.as_str());
                own.into_iter().chain(options)
            })
            .filter(|id| !id.is_empty())
    }

    /// Ids that occur more than once, each reported once, in order of first repeat.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for id in self.ids() {
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id.to_string());
            }
        }
        duplicates
    }

    /// Check the id uniqueness invariant.
    pub fn validate(&self) -> Result<(), SchemaError> {
        match self.duplicate_ids().into_iter().next() {
            Some(id) => Err(SchemaError::DuplicateId(id)),
            None => Ok(()),
        }
    }
}

impl From<Vec<FieldDescriptor>> for FormSchema {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self::new(fields)
    }
}

impl IntoIterator for FormSchema {
    type Item = FieldDescriptor;
    type IntoIter = std::vec::IntoIter<FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
