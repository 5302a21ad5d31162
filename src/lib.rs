pub mod config;
pub mod core;
pub mod demo;
pub mod render;
pub mod runtime;

pub use crate::core::FieldId;
pub use crate::core::engine::{MissingFieldsError, PanelEngine};
pub use crate::core::field::{FieldKind, FieldLabels, FieldSpec, TextInputKind};
pub use crate::core::schema::FormSchema;
pub use crate::core::state::{FormState, Record};
pub use crate::core::validators::{ValidationError, Validator};
pub use crate::render::plan::{RenderPlan, Row, RowWidget};
pub use crate::runtime::effect::{Effect, TextPrompt};
pub use crate::runtime::event::PanelEvent;
pub use crate::runtime::session::FormSession;
