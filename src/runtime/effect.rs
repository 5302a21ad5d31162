use crate::core::FieldId;
use crate::core::field::TextInputKind;
use crate::core::state::Record;
use crate::render::plan::RenderPlan;

/// Everything the host needs to open its text dialog for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    pub field: FieldId,
    pub title: String,
    pub prompt: String,
    pub placeholder: String,
    pub input: TextInputKind,
    /// Current answer to prefill, when the field is being changed.
    pub initial: Option<String>,
}

/// Instructions handed back to the host after each event.
/// These flow outward from the session; the session itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the panel with this plan.
    Render(RenderPlan),
    /// Open the text dialog.
    PromptText(TextPrompt),
    /// Show a transient notice (rejected input, missing answers).
    Notify { title: String, message: String },
    /// Take the panel down; the form is done.
    ClosePanel,
    /// Hand the completed record to the delivery sink.
    Deliver(Record),
}
