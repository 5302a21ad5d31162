use crate::core::FieldId;
use indexmap::IndexMap;

/// Collected answers for one panel session, keyed by field id.
///
/// The map is threaded explicitly through the engine; nothing global holds
/// answers between sessions. Insertion order is kept so records read back in
/// the order fields were answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: IndexMap<FieldId, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the answer for `id`, replacing any previous one. No other key
    /// is touched.
    pub fn answer(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every answer. A fresh panel session starts from here.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }
}

/// Immutable snapshot of a completed form, produced by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: IndexMap<FieldId, String>,
}

impl Record {
    pub(crate) fn snapshot(state: &FormState) -> Self {
        Self {
            values: state.values.clone(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Flat JSON object of the collected answers, ready for a delivery sink.
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (id, value) in &self.values {
            object.insert(id.to_string(), serde_json::Value::String(value.clone()));
        }
        serde_json::Value::Object(object)
    }
}
