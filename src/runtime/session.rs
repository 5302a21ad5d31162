use crate::core::FieldId;
use crate::core::engine::PanelEngine;
use crate::core::field::FieldKind;
use crate::core::schema::FormSchema;
use crate::core::state::FormState;
use crate::render::plan::RenderPlan;
use crate::runtime::effect::{Effect, TextPrompt};
use crate::runtime::event::PanelEvent;
use log::{debug, warn};

/// Which page the panel is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Form,
    Options(FieldId),
}

/// One user's trip through a form: owns the schema, the answers and the
/// current page, and turns each `PanelEvent` into effects for the host.
///
/// Events that make no sense for the current page or schema are logged and
/// dropped rather than treated as errors; panels routinely deliver stale
/// presses.
pub struct FormSession {
    schema: FormSchema,
    state: FormState,
    page: Page,
}

impl FormSession {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            state: FormState::new(),
            page: Page::Form,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Plan for whatever page the session is on.
    pub fn render(&mut self) -> RenderPlan {
        if let Page::Options(id) = &self.page {
            if let Some(field) = self.schema.lookup(id.as_str()) {
                return PanelEngine::options_plan(field);
            }
        }
        PanelEngine::render_plan(&self.schema, &mut self.state)
    }

    pub fn handle(&mut self, event: PanelEvent) -> Vec<Effect> {
        match event {
            PanelEvent::Opened => {
                debug!("panel opened, starting a fresh session");
                self.state.reset();
                self.page = Page::Form;
                vec![Effect::Render(self.render())]
            }
            PanelEvent::WidgetPressed { id } => self.widget_pressed(id),
            PanelEvent::OptionPicked { field, index } => self.option_picked(field, index),
            PanelEvent::TextEntered { field, text } => self.text_entered(field, text),
        }
    }

    fn widget_pressed(&mut self, id: FieldId) -> Vec<Effect> {
        if self.page != Page::Form {
            warn!("ignoring press on {id}, the form page is not showing");
            return vec![];
        }
        let Some(field) = self.schema.lookup(id.as_str()) else {
            warn!("ignoring press on unknown widget {id}");
            return vec![];
        };

        match field.kind() {
            FieldKind::Choice { .. } => {
                if !field.is_modifiable() {
                    warn!("ignoring press on fixed field {id}");
                    return vec![];
                }
                debug!("opening option page for {id}");
                self.page = Page::Options(id);
                vec![Effect::Render(self.render())]
            }
            FieldKind::Text { input } => {
                if !field.is_modifiable() {
                    warn!("ignoring press on fixed field {id}");
                    return vec![];
                }
                debug!("opening text dialog for {id}");
                let prompt = TextPrompt {
                    field: id.clone(),
                    title: self.schema.title().to_string(),
                    prompt: field.prompt().to_string(),
                    placeholder: field.placeholder().to_string(),
                    input: *input,
                    initial: self.state.value(id.as_str()).map(str::to_string),
                };
                vec![Effect::PromptText(prompt)]
            }
            FieldKind::Submit => self.try_submit(),
        }
    }

    fn option_picked(&mut self, field_id: FieldId, index: usize) -> Vec<Effect> {
        let Page::Options(current) = &self.page else {
            warn!("ignoring option pick, no option page is showing");
            return vec![];
        };
        if *current != field_id {
            warn!("ignoring option pick for {field_id}, option page shows {current}");
            return vec![];
        }
        let Some(field) = self.schema.lookup(field_id.as_str()) else {
            warn!("ignoring option pick for unknown field {field_id}");
            return vec![];
        };
        let FieldKind::Choice { options } = field.kind() else {
            warn!("ignoring option pick for non-choice field {field_id}");
            return vec![];
        };
        let Some(value) = options.get(index) else {
            warn!("option index {index} is out of range for {field_id}");
            return vec![];
        };

        debug!("option {index} picked for {field_id}");
        let value = value.clone();
        self.state.answer(field_id, value);
        self.page = Page::Form;
        vec![Effect::Render(self.render())]
    }

    fn text_entered(&mut self, field_id: FieldId, text: String) -> Vec<Effect> {
        let Some(field) = self.schema.lookup(field_id.as_str()) else {
            warn!("ignoring text for unknown field {field_id}");
            return vec![];
        };
        let FieldKind::Text { input } = field.kind() else {
            warn!("ignoring text for non-text field {field_id}");
            return vec![];
        };
        if !field.is_modifiable() {
            warn!("ignoring text for fixed field {field_id}");
            return vec![];
        }

        if let Err(error) = field.validate(&text) {
            debug!("rejected answer for {field_id}: {error}");
            let prompt = TextPrompt {
                field: field_id.clone(),
                title: self.schema.title().to_string(),
                prompt: field.prompt().to_string(),
                placeholder: field.placeholder().to_string(),
                input: *input,
                initial: Some(text),
            };
            return vec![
                Effect::Notify {
                    title: self.schema.title().to_string(),
                    message: error,
                },
                Effect::PromptText(prompt),
            ];
        }

        debug!("field {field_id} answered");
        self.state.answer(field_id, text);
        // The dialog may have been up while an option page opened; an accepted
        // answer always lands back on the form page.
        self.page = Page::Form;
        vec![Effect::Render(self.render())]
    }

    fn try_submit(&mut self) -> Vec<Effect> {
        match PanelEngine::submit(&self.schema, &self.state) {
            Ok(record) => {
                debug!("submitting a record with {} answers", record.len());
                self.state.reset();
                self.page = Page::Form;
                vec![Effect::ClosePanel, Effect::Deliver(record)]
            }
            Err(err) => {
                warn!("submit blocked: {err}");
                vec![
                    Effect::Notify {
                        title: self.schema.title().to_string(),
                        message: err.to_string(),
                    },
                    Effect::Render(self.render()),
                ]
            }
        }
    }
}
