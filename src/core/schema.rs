use crate::core::field::FieldSpec;

/// Ordered collection of field specs making up one panel form.
///
/// Field order here is the order rows appear on the panel; dependency
/// filtering happens at render time, not here.
pub struct FormSchema {
    title: String,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn lookup(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id().as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_fields_by_id() {
        let schema = FormSchema::new("Demo")
            .field(FieldSpec::text("name"))
            .field(FieldSpec::submit("submit", "Send"));

        assert!(schema.lookup("name").is_some());
        assert!(schema.lookup("submit").is_some());
        assert!(schema.lookup("age").is_none());
    }

    #[test]
    fn fields_keep_declaration_order() {
        let schema = FormSchema::new("Demo")
            .field(FieldSpec::text("b"))
            .field(FieldSpec::text("a"));

        let ids: Vec<&str> = schema.fields().iter().map(|f| f.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
