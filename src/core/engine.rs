use crate::core::FieldId;
use crate::core::field::{FieldKind, FieldSpec};
use crate::core::schema::FormSchema;
use crate::core::state::{FormState, Record};
use crate::render::plan::{RenderPlan, Row, RowWidget};
use indexmap::IndexSet;
use std::fmt;

/// Pure functions from schema plus state to panel pages and records.
///
/// Nothing here performs I/O or holds data between calls; the caller owns the
/// `FormState` and threads it through explicitly.
pub struct PanelEngine;

impl PanelEngine {
    /// Derive the form page for the current answers.
    ///
    /// Fixed (non-modifiable) fields are written into `state` first, so a
    /// field requiring one shows up on the very first render. Repeating the
    /// call with unchanged answers yields the same plan and the same state.
    pub fn render_plan(schema: &FormSchema, state: &mut FormState) -> RenderPlan {
        for field in schema.fields() {
            if !field.is_modifiable() && field.collects_value() {
                state.answer(field.id().clone(), field.placeholder());
            }
        }

        let mut rows = Vec::new();
        for field in schema.fields() {
            if !field.is_visible() || !field.requires_met(state) {
                continue;
            }
            rows.push(Self::field_row(field, state));
        }
        RenderPlan::new(rows)
    }

    /// The option page for a choice field: its prompt, then one row per
    /// option. Empty for any other field kind.
    pub fn options_plan(field: &FieldSpec) -> RenderPlan {
        let FieldKind::Choice { options } = field.kind() else {
            return RenderPlan::default();
        };

        let mut rows = Vec::with_capacity(options.len() + 1);
        rows.push(Row::Prompt {
            text: field.prompt().to_string(),
        });
        for (index, option) in options.iter().enumerate() {
            rows.push(Row::Option {
                field: field.id().clone(),
                index,
                label: option.clone(),
            });
        }
        RenderPlan::new(rows)
    }

    /// Ids of visible, modifiable fields whose requirements are met but which
    /// have no answer yet, in schema order. Submit actions collect no value
    /// and never appear here; neither do hidden fields or fields still
    /// waiting on a requirement.
    pub fn missing_fields(schema: &FormSchema, state: &FormState) -> IndexSet<FieldId> {
        schema
            .fields()
            .iter()
            .filter(|field| field.collects_value())
            .filter(|field| field.is_visible() && field.is_modifiable())
            .filter(|field| field.requires_met(state))
            .filter(|field| !state.contains(field.id().as_str()))
            .map(|field| field.id().clone())
            .collect()
    }

    /// Snapshot the answers into a record, or report which fields still need
    /// one. The state is left untouched either way; the session decides what
    /// happens after a successful submit.
    pub fn submit(schema: &FormSchema, state: &FormState) -> Result<Record, MissingFieldsError> {
        let missing = Self::missing_fields(schema, state);
        if missing.is_empty() {
            Ok(Record::snapshot(state))
        } else {
            Err(MissingFieldsError { missing })
        }
    }

    fn field_row(field: &FieldSpec, state: &FormState) -> Row {
        let widget = match field.kind() {
            FieldKind::Submit => {
                return Row::Submit {
                    id: field.id().clone(),
                    label: field.labels().blank().to_string(),
                };
            }
            FieldKind::Choice { .. } => RowWidget::Choice,
            FieldKind::Text { .. } => RowWidget::Text,
        };

        // Fixed fields were filled in above; they render as plain text so the
        // panel offers nothing to tap.
        if !field.is_modifiable() {
            return Row::Prompt {
                text: Self::display_text(field, state).unwrap_or_default(),
            };
        }

        let answered = state.contains(field.id().as_str());
        let label = if answered {
            field.labels().filled()
        } else {
            field.labels().blank()
        };

        Row::Field {
            id: field.id().clone(),
            widget,
            label: label.to_string(),
            text: Self::display_text(field, state),
        }
    }

    fn display_text(field: &FieldSpec, state: &FormState) -> Option<String> {
        if let Some(value) = state.value(field.id().as_str()) {
            if field.prefix().is_empty() {
                Some(value.to_string())
            } else {
                Some(format!("{} {}", field.prefix(), value))
            }
        } else if field.shows_placeholder() {
            Some(field.placeholder().to_string())
        } else {
            None
        }
    }
}

/// Submit was attempted while at least one eligible field had no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFieldsError {
    missing: IndexSet<FieldId>,
}

impl MissingFieldsError {
    pub fn missing(&self) -> &IndexSet<FieldId> {
        &self.missing
    }
}

impl fmt::Display for MissingFieldsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.missing.iter().map(FieldId::as_str).collect();
        write!(f, "missing required fields: {}", ids.join(", "))
    }
}

impl std::error::Error for MissingFieldsError {}
