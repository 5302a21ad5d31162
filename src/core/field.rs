use crate::core::FieldId;
use crate::core::state::FormState;
use crate::core::validators::{self, ValidationError, Validator};
use indexmap::IndexSet;

/// Keyboard flavour the host's text dialog should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextInputKind {
    #[default]
    SingleLine,
    Numeric,
    Password,
    Pin,
}

/// What a field is, and the data that comes with being it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Pick one of a fixed set of options on a dedicated page.
    Choice { options: Vec<String> },
    /// Free text entered through the host's text dialog.
    Text { input: TextInputKind },
    /// The action that turns collected answers into a record.
    Submit,
}

/// Button caption pair: one wording before the field has an answer, another
/// once it does ("Enter Name" vs "Change Name").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabels {
    blank: String,
    filled: String,
}

impl FieldLabels {
    pub fn new(blank: impl Into<String>, filled: impl Into<String>) -> Self {
        Self {
            blank: blank.into(),
            filled: filled.into(),
        }
    }

    /// Same caption in both states; submit actions use this.
    pub fn fixed(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            blank: label.clone(),
            filled: label,
        }
    }

    pub fn blank(&self) -> &str {
        self.blank.as_str()
    }

    pub fn filled(&self) -> &str {
        self.filled.as_str()
    }
}

/// Declarative description of one form field.
///
/// A field only ever reaches the panel when it is visible and every id in
/// `requires` already has an answer. Non-modifiable fields carry a fixed
/// value in `placeholder` and are filled in by the engine, never the user.
pub struct FieldSpec {
    id: FieldId,
    kind: FieldKind,
    requires: IndexSet<FieldId>,
    visible: bool,
    modifiable: bool,
    placeholder: String,
    prompt: String,
    prefix: String,
    show_placeholder: bool,
    labels: FieldLabels,
    validators: Vec<Validator>,
}

impl FieldSpec {
    fn new(id: impl Into<FieldId>, kind: FieldKind, labels: FieldLabels) -> Self {
        Self {
            id: id.into(),
            kind,
            requires: IndexSet::new(),
            visible: true,
            modifiable: true,
            placeholder: String::new(),
            prompt: String::new(),
            prefix: String::new(),
            show_placeholder: true,
            labels,
            validators: Vec::new(),
        }
    }

    pub fn choice(id: impl Into<FieldId>, options: Vec<String>) -> Self {
        Self::new(
            id,
            FieldKind::Choice { options },
            FieldLabels::new("Select", "Change"),
        )
    }

    pub fn text(id: impl Into<FieldId>) -> Self {
        Self::new(
            id,
            FieldKind::Text {
                input: TextInputKind::default(),
            },
            FieldLabels::new("Enter", "Change"),
        )
    }

    pub fn submit(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Submit, FieldLabels::fixed(label))
    }

    // ── Builders ────────────────────────────────────────────────────────────

    pub fn with_requires<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldId>,
    {
        self.requires.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_modifiable(mut self, modifiable: bool) -> Self {
        self.modifiable = modifiable;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Text glued in front of the stored value when the field is rendered,
    /// e.g. `Name:` in front of `Bob`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_show_placeholder(mut self, show: bool) -> Self {
        self.show_placeholder = show;
        self
    }

    pub fn with_labels(mut self, labels: FieldLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Keyboard flavour for text fields; no effect on other kinds.
    pub fn with_input(mut self, input: TextInputKind) -> Self {
        if let FieldKind::Text { input: current } = &mut self.kind {
            *current = input;
        }
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn requires(&self) -> &IndexSet<FieldId> {
        &self.requires
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_modifiable(&self) -> bool {
        self.modifiable
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder.as_str()
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn shows_placeholder(&self) -> bool {
        self.show_placeholder
    }

    pub fn labels(&self) -> &FieldLabels {
        &self.labels
    }

    /// Choice and text fields store an answer; submit actions do not.
    pub fn collects_value(&self) -> bool {
        !matches!(self.kind, FieldKind::Submit)
    }

    /// True when every id this field requires already has an answer.
    /// An id that no field can ever answer keeps this false forever.
    pub fn requires_met(&self, state: &FormState) -> bool {
        self.requires.iter().all(|id| state.contains(id.as_str()))
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        validators::run_validators(&self.validators, value)
    }
}
