//! Schema files on disk.
//!
//! Forms can be described in YAML or JSON instead of built in code. The file
//! shape mirrors `FieldSpec` field for field; loading converts it and reports
//! anything the engine could not work with.

use crate::core::field::{FieldLabels, FieldSpec, TextInputKind};
use crate::core::schema::FormSchema;
use crate::core::validators;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFile {
    pub id: String,
    #[serde(flatten)]
    pub kind: FieldKindFile,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub modifiable: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_true")]
    pub show_placeholder: bool,
    #[serde(default)]
    pub labels: Option<LabelsFile>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKindFile {
    Choice {
        options: Vec<String>,
    },
    Text {
        #[serde(default)]
        input: InputKindFile,
    },
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKindFile {
    #[default]
    SingleLine,
    Numeric,
    Password,
    Pin,
}

impl InputKindFile {
    fn into_kind(self) -> TextInputKind {
        match self {
            InputKindFile::SingleLine => TextInputKind::SingleLine,
            InputKindFile::Numeric => TextInputKind::Numeric,
            InputKindFile::Password => TextInputKind::Password,
            InputKindFile::Pin => TextInputKind::Pin,
        }
    }
}

/// Button captions; a single string serves both the blank and filled state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelsFile {
    Fixed(String),
    Pair { blank: String, filled: String },
}

impl LabelsFile {
    fn into_labels(self) -> FieldLabels {
        match self {
            LabelsFile::Fixed(label) => FieldLabels::fixed(label),
            LabelsFile::Pair { blank, filled } => FieldLabels::new(blank, filled),
        }
    }
}

impl SchemaFile {
    /// Convert the parsed file into an engine schema.
    ///
    /// A `requires` id that no field declares is accepted as written; the
    /// engine treats such a field as permanently hidden.
    pub fn into_schema(self) -> Result<FormSchema, SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        let mut seen = HashSet::new();
        let mut schema = FormSchema::new(self.title);
        for field in self.fields {
            if !seen.insert(field.id.clone()) {
                return Err(SchemaError::DuplicateField(field.id));
            }
            schema = schema.field(field.into_spec()?);
        }
        Ok(schema)
    }
}

impl FieldFile {
    fn into_spec(self) -> Result<FieldSpec, SchemaError> {
        let FieldFile {
            id,
            kind,
            requires,
            visible,
            modifiable,
            placeholder,
            prompt,
            prefix,
            show_placeholder,
            labels,
            pattern,
            min_length,
            max_length,
        } = self;

        let mut spec = match kind {
            FieldKindFile::Choice { options } => FieldSpec::choice(id.clone(), options),
            FieldKindFile::Text { input } => {
                FieldSpec::text(id.clone()).with_input(input.into_kind())
            }
            FieldKindFile::Submit => FieldSpec::submit(id.clone(), "Submit"),
        };

        spec = spec
            .with_requires(requires)
            .with_visible(visible)
            .with_modifiable(modifiable)
            .with_placeholder(placeholder)
            .with_prompt(prompt)
            .with_prefix(prefix)
            .with_show_placeholder(show_placeholder);

        if let Some(labels) = labels {
            spec = spec.with_labels(labels.into_labels());
        }
        if let Some(pattern) = pattern {
            let validator = validators::pattern(&pattern)
                .map_err(|source| SchemaError::BadPattern { field: id, source })?;
            spec = spec.with_validator(validator);
        }
        if let Some(min) = min_length {
            spec = spec.with_validator(validators::min_length(min));
        }
        if let Some(max) = max_length {
            spec = spec.with_validator(validators::max_length(max));
        }
        Ok(spec)
    }
}

pub fn load_yaml(input: &str) -> Result<FormSchema, SchemaError> {
    let file: SchemaFile = serde_yaml::from_str(input)?;
    file.into_schema()
}

pub fn load_json(input: &str) -> Result<FormSchema, SchemaError> {
    let file: SchemaFile = serde_json::from_str(input)?;
    file.into_schema()
}

/// Load a schema file, picking the format from the extension. Anything that
/// is not `.json` is read as YAML.
pub fn load_path(path: &Path) -> Result<FormSchema, SchemaError> {
    let input = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        load_json(&input)
    } else {
        load_yaml(&input)
    }
}

#[derive(Debug)]
pub enum SchemaError {
    EmptySchema,
    DuplicateField(String),
    BadPattern { field: String, source: regex::Error },
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptySchema => write!(f, "schema has no fields"),
            SchemaError::DuplicateField(id) => write!(f, "duplicate field id: {id}"),
            SchemaError::BadPattern { field, source } => {
                write!(f, "invalid pattern for field {field}: {source}")
            }
            SchemaError::Yaml(err) => write!(f, "invalid schema yaml: {err}"),
            SchemaError::Json(err) => write!(f, "invalid schema json: {err}"),
            SchemaError::Io(err) => write!(f, "cannot read schema file: {err}"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::EmptySchema | SchemaError::DuplicateField(_) => None,
            SchemaError::BadPattern { source, .. } => Some(source),
            SchemaError::Yaml(err) => Some(err),
            SchemaError::Json(err) => Some(err),
            SchemaError::Io(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for SchemaError {
    fn from(err: serde_yaml::Error) -> Self {
        SchemaError::Yaml(err)
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Json(err)
    }
}

impl From<io::Error> for SchemaError {
    fn from(err: io::Error) -> Self {
        SchemaError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldKind;

    const ISSUE_YAML: &str = r#"
title: Report Issue
fields:
  - id: category
    kind: choice
    options:
      - Technical Issue with Incoming Audio/Video
      - Technical Issue with Outgoing Audio/Video
    prompt: "Please select a category below:"
    placeholder: eg. Please select category
    labels:
      blank: Select Category
      filled: Change Category
  - id: name
    kind: text
    requires: [category]
    prompt: Please enter your name
    placeholder: eg. John Smith
    prefix: "Name:"
    labels:
      blank: Enter Name
      filled: Change Name
  - id: submit
    kind: submit
    requires: [category]
    labels: Submit Issue
"#;

    #[test]
    fn loads_the_report_issue_schema_from_yaml() {
        let schema = load_yaml(ISSUE_YAML).expect("schema should load");
        assert_eq!(schema.title(), "Report Issue");
        assert_eq!(schema.len(), 3);

        let category = schema.lookup("category").expect("category exists");
        let FieldKind::Choice { options } = category.kind() else {
            panic!("expected a choice field");
        };
        assert_eq!(options.len(), 2);
        assert_eq!(category.labels().blank(), "Select Category");
        assert_eq!(category.labels().filled(), "Change Category");

        let name = schema.lookup("name").expect("name exists");
        assert!(name.requires().contains("category"));
        assert_eq!(name.prefix(), "Name:");
        assert!(name.is_visible());
        assert!(name.is_modifiable());
    }

    #[test]
    fn minimal_fields_fall_back_to_defaults() {
        let schema = load_yaml(
            "title: Demo\nfields:\n  - id: note\n    kind: text\n",
        )
        .expect("schema should load");

        let note = schema.lookup("note").expect("note exists");
        assert!(note.is_visible());
        assert!(note.is_modifiable());
        assert!(note.shows_placeholder());
        assert_eq!(note.placeholder(), "");
        assert!(matches!(
            note.kind(),
            FieldKind::Text {
                input: TextInputKind::SingleLine
            }
        ));
    }

    #[test]
    fn a_single_caption_serves_both_states() {
        let schema = load_yaml(ISSUE_YAML).expect("schema should load");
        let submit = schema.lookup("submit").expect("submit exists");
        assert_eq!(submit.labels().blank(), "Submit Issue");
        assert_eq!(submit.labels().filled(), "Submit Issue");
    }

    #[test]
    fn hidden_fixed_fields_load_as_written() {
        let schema = load_yaml(
            "title: Demo\nfields:\n  - id: via\n    kind: text\n    visible: false\n    modifiable: false\n    placeholder: room panel\n",
        )
        .expect("schema should load");

        let via = schema.lookup("via").expect("via exists");
        assert!(!via.is_visible());
        assert!(!via.is_modifiable());
        assert_eq!(via.placeholder(), "room panel");
    }

    #[test]
    fn length_and_pattern_entries_become_validators() {
        let schema = load_yaml(
            "title: Demo\nfields:\n  - id: pin\n    kind: text\n    input: pin\n    pattern: \"^\\\\d+$\"\n    min_length: 4\n",
        )
        .expect("schema should load");

        let pin = schema.lookup("pin").expect("pin exists");
        assert!(matches!(
            pin.kind(),
            FieldKind::Text {
                input: TextInputKind::Pin
            }
        ));
        assert!(pin.validate("1234").is_ok());
        assert!(pin.validate("12a4").is_err());
        assert!(pin.validate("12").is_err());
    }

    #[test]
    fn bad_pattern_is_reported_with_its_field() {
        let Err(err) = load_yaml(
            "title: Demo\nfields:\n  - id: pin\n    kind: text\n    pattern: \"[unclosed\"\n",
        ) else {
            panic!("pattern should not compile");
        };

        let SchemaError::BadPattern { field, .. } = &err else {
            panic!("expected a pattern error, got {err}");
        };
        assert_eq!(field, "pin");
        assert!(err.to_string().contains("pin"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let Err(err) = load_yaml(
            "title: Demo\nfields:\n  - id: a\n    kind: text\n  - id: a\n    kind: text\n",
        ) else {
            panic!("duplicate should fail");
        };
        assert!(matches!(err, SchemaError::DuplicateField(id) if id == "a"));
    }

    #[test]
    fn an_empty_field_list_is_rejected() {
        let Err(err) = load_yaml("title: Demo\nfields: []\n") else {
            panic!("empty should fail");
        };
        assert!(matches!(err, SchemaError::EmptySchema));
    }

    #[test]
    fn a_requirement_nobody_declares_is_accepted() {
        let schema = load_yaml(
            "title: Demo\nfields:\n  - id: note\n    kind: text\n    requires: [no_such_field]\n",
        )
        .expect("schema should load");
        assert!(schema.lookup("note").is_some());
    }

    #[test]
    fn json_schemas_load_too() {
        let schema = load_json(
            r#"{
                "title": "Demo",
                "fields": [
                    {"id": "category", "kind": "choice", "options": ["A", "B"]},
                    {"id": "submit", "kind": "submit", "labels": "Send"}
                ]
            }"#,
        )
        .expect("schema should load");
        assert_eq!(schema.len(), 2);
        assert_eq!(
            schema.lookup("submit").expect("submit exists").labels().blank(),
            "Send"
        );
    }

    #[test]
    fn unreadable_files_surface_the_io_error() {
        let Err(err) = load_path(Path::new("no/such/schema.yaml")) else {
            panic!("file is missing");
        };
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
