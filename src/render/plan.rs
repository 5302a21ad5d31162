use crate::core::FieldId;
use unicode_width::UnicodeWidthStr;

/// Which widget an actionable field row maps to on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowWidget {
    Choice,
    Text,
}

/// One row of a rendered panel page, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Static text; tapping it does nothing.
    Prompt { text: String },
    /// An actionable field: optional value cell plus a button caption.
    Field {
        id: FieldId,
        widget: RowWidget,
        label: String,
        text: Option<String>,
    },
    /// One pickable option on a choice field's option page.
    Option {
        field: FieldId,
        index: usize,
        label: String,
    },
    /// The submit action.
    Submit { id: FieldId, label: String },
}

impl Row {
    /// Caption of the row's button, if the row has one.
    pub fn button_label(&self) -> Option<&str> {
        match self {
            Row::Prompt { .. } => None,
            Row::Field { label, .. } => Some(label),
            Row::Option { label, .. } => Some(label),
            Row::Submit { label, .. } => Some(label),
        }
    }

    /// Display text shown next to or instead of a button.
    pub fn text(&self) -> Option<&str> {
        match self {
            Row::Prompt { text } => Some(text),
            Row::Field { text, .. } => text.as_deref(),
            Row::Option { .. } | Row::Submit { .. } => None,
        }
    }
}

/// Ordered rows for one panel page. Pure data; hosts decide how to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    rows: Vec<Row>,
}

impl RenderPlan {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when the plan has an actionable row for `id`.
    pub fn contains_field(&self, id: &str) -> bool {
        self.rows.iter().any(|row| match row {
            Row::Field { id: row_id, .. } | Row::Submit { id: row_id, .. } => {
                row_id.as_str() == id
            }
            Row::Prompt { .. } | Row::Option { .. } => false,
        })
    }

    /// Display width of the widest button caption, for column alignment.
    pub fn widest_label(&self) -> usize {
        self.rows
            .iter()
            .filter_map(Row::button_label)
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    }
}
