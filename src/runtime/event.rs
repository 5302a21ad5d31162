use crate::core::FieldId;

/// Discrete inputs a host feeds into a session.
/// These flow inward from the device surface to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The panel was opened; any previous answers are gone.
    Opened,
    /// A field or submit widget on the form page was tapped.
    WidgetPressed { id: FieldId },
    /// An option row on a choice field's option page was tapped.
    OptionPicked { field: FieldId, index: usize },
    /// The text dialog for `field` came back with input.
    TextEntered { field: FieldId, text: String },
}
