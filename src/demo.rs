use crate::core::field::{FieldLabels, FieldSpec};
use crate::core::schema::FormSchema;

// ── Report Issue ──────────────────────────────────────────────────────────────

/// The built-in demo form: a meeting-room issue report. One choice field
/// gates a name field and the submit action; a hidden fixed field stamps
/// every record with where it came from.
pub fn report_issue_schema() -> FormSchema {
    FormSchema::new("Report Issue")
        .field(
            FieldSpec::choice(
                "category",
                vec![
                    "Technical Issue with Incoming Audio/Video".to_string(),
                    "Technical Issue with Outgoing Audio/Video".to_string(),
                    "Can't connect to my meeting".to_string(),
                    "Request for a technician".to_string(),
                ],
            )
            .with_prompt("Please select a category below:")
            .with_placeholder("eg. Please select category")
            .with_labels(FieldLabels::new("Select Category", "Change Category")),
        )
        .field(
            FieldSpec::text("name")
                .with_requires(["category"])
                .with_prompt("Please enter your name")
                .with_placeholder("eg. John Smith")
                .with_prefix("Name:")
                .with_labels(FieldLabels::new("Enter Name", "Change Name")),
        )
        .field(
            FieldSpec::text("reported_via")
                .with_visible(false)
                .with_modifiable(false)
                .with_placeholder("room panel"),
        )
        .field(FieldSpec::submit("submit", "Submit Issue").with_requires(["category"]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::PanelEngine;
    use crate::core::state::FormState;

    #[test]
    fn the_demo_form_opens_with_just_the_category() {
        let schema = report_issue_schema();
        let mut state = FormState::new();

        let plan = PanelEngine::render_plan(&schema, &mut state);
        assert_eq!(plan.len(), 1);
        assert!(plan.contains_field("category"));
    }

    #[test]
    fn demo_records_carry_the_hidden_origin_stamp() {
        let schema = report_issue_schema();
        let mut state = FormState::new();

        PanelEngine::render_plan(&schema, &mut state);
        state.answer("category", "Request for a technician");
        state.answer("name", "Bob");

        let record = PanelEngine::submit(&schema, &state).expect("all answers present");
        assert_eq!(record.get("reported_via"), Some("room panel"));
        assert_eq!(record.len(), 3);
    }
}
