//! Building form controls from field descriptors.

use tracing::{debug, error, warn};

use crate::dom::NodeId;
use crate::events::{EventKind, Listener};
use crate::page::FormPage;
use crate::{FieldDescriptor, FormSchema, FormTransport, RenderError};

impl<T: FormTransport> FormPage<T> {
    /// Fetch the schema and render it into the container.
    ///
    /// A failed fetch renders an empty form (the status area already says why).
    /// Returns the number of wrappers rendered.
    pub async fn render_form(&mut self) -> Result<usize, RenderError> {
        let questions = self.fetch_questions().await;
        self.render_schema(FormSchema::from(questions))
    }

    /// Clear the container and render one wrapper per descriptor, in order.
    ///
    /// Rendering stops at the first descriptor the renderer cannot build;
    /// wrappers rendered before it stay in place.
    pub fn render_schema(&mut self, schema: FormSchema) -> Result<usize, RenderError> {
        for id in schema.duplicate_ids() {
            warn!(%id, "Duplicate id in form schema; lookups resolve to the first element");
        }

        self.document.clear_children(self.container);
        self.listeners.retain_only(self.form);
        self.alerts.clear();
        self.fields.clear();

        for question in schema {
            let wrapper = self.document.create_element("div");
            let index = self.fields.len();
            let built = if question.is_radio() {
                self.create_radio_group(wrapper, &question)
            } else {
                self.create_input_field(wrapper, &question, index);
                Ok(())
            };
            if let Err(err) = built {
                self.document.discard(wrapper);
                error!(error = %err, "Failed to render form field");
                return Err(err);
            }
            self.document.append_child(self.container, wrapper);
            self.fields.push(question);
        }

        debug!(count = self.fields.len(), "Rendered form");
        Ok(self.fields.len())
    }

    fn create_radio_group(
        &mut self,
        container: NodeId,
        question: &FieldDescriptor,
    ) -> Result<(), RenderError> {
        let options = question
            .options
            .as_ref()
            .ok_or_else(|| RenderError::MissingOptions {
                name: question.name.clone(),
            })?;

        let document = &mut self.document;
        let fieldset = document.create_element("fieldset");
        let legend = document.create_element("legend");
        document.set_text(legend, question.legend.clone().unwrap_or_default());
        document.append_child(fieldset, legend);

        for option in options {
            let input = document.create_element("input");
            document.set_attribute(input, "type", "radio");
            document.set_attribute(input, "name", question.name.as_str());
            document.set_attribute(input, "value", option.value.as_str());
            document.set_attribute(input, "id", option.id.as_str());
            document.toggle_attribute(input, "required", question.required);

            let label = document.create_element("label");
            document.set_attribute(label, "for", option.id.as_str());
            document.set_text(label, option.label.as_str());

            document.append_child(fieldset, input);
            document.append_child(fieldset, label);
        }

        document.append_child(container, fieldset);
        Ok(())
    }

    fn create_input_field(&mut self, container: NodeId, question: &FieldDescriptor, index: usize) {
        let document = &mut self.document;
        let label = document.create_element("label");
        document.set_text(label, question.label.clone().unwrap_or_default());
        document.set_attribute(label, "for", question.id.as_str());

        let input = document.create_element("input");
        document.set_attribute(input, "type", question.input_type.as_str());
        document.set_attribute(input, "id", question.id.as_str());
        document.set_attribute(input, "name", question.name.as_str());
        document.toggle_attribute(input, "required", question.required);
        if let Some(pattern) = question.pattern() {
            document.set_attribute(input, "pattern", pattern);
        }
        // Compile now so a bad pattern is reported once, at render time.
        let _ = document.constraints(input);

        self.listeners
            .add(input, EventKind::Input, Listener::LiveInput { field: index });
        self.listeners
            .add(input, EventKind::Invalid, Listener::InlineAlert);
        self.listeners
            .add(input, EventKind::Blur, Listener::ValidateOnBlur);

        let document = &mut self.document;
        document.append_child(container, label);
        document.append_child(container, input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RadioOption, TestTransport};

    fn page() -> FormPage<TestTransport> {
        FormPage::new(TestTransport::new())
    }

    #[test]
    fn input_field_copies_descriptor_attributes() {
        let mut page = page();
        let schema = FormSchema::new(vec![
            FieldDescriptor::input("zip", "text", "Zip code")
                .required()
                .with_pattern("[0-9]{5}"),
        ]);

        assert_eq!(page.render_schema(schema).unwrap(), 1);

        let document = page.document();
        let wrapper = page.wrappers()[0];
        let [label, input] = document.children(wrapper) else {
            panic!("expected label and input");
        };
        assert_eq!(document.tag(*label), Some("label"));
        assert_eq!(document.attribute(*label, "for"), Some("zip"));
        assert_eq!(document.text_content(*label), "Zip code");
        assert_eq!(document.attribute(*input, "type"), Some("text"));
        assert_eq!(document.attribute(*input, "name"), Some("zip"));
        assert!(document.has_attribute(*input, "required"));
        assert_eq!(document.attribute(*input, "pattern"), Some("[0-9]{5}"));
    }

    #[test]
    fn unknown_type_is_copied_verbatim() {
        let mut page = page();
        page.render_schema(FormSchema::new(vec![FieldDescriptor::input(
            "fav", "Flavour", "Favourite",
        )]))
        .unwrap();

        let input = page.control("fav").unwrap();
        assert_eq!(page.document().attribute(input, "type"), Some("Flavour"));
    }

    #[test]
    fn radio_without_options_stops_rendering() {
        let mut page = page();
        let mut broken = FieldDescriptor::radio("color", "Color", Vec::new());
        broken.options = None;
        let schema = FormSchema::new(vec![
            FieldDescriptor::input("name", "text", "Name"),
            broken,
            FieldDescriptor::input("after", "text", "After"),
        ]);

        let result = page.render_schema(schema);

        assert!(matches!(
            result,
            Err(RenderError::MissingOptions { name }) if name == "color"
        ));
        assert_eq!(page.wrappers().len(), 1);
        assert!(page.control("after").is_err());
    }

    #[test]
    fn rerender_replaces_previous_fields() {
        let mut page = page();
        page.render_schema(FormSchema::new(vec![
            FieldDescriptor::input("a", "text", "A"),
            FieldDescriptor::input("b", "text", "B"),
        ]))
        .unwrap();
        page.render_schema(FormSchema::new(vec![FieldDescriptor::radio(
            "c",
            "C",
            vec![RadioOption::new("1", "c-1", "One")],
        )]))
        .unwrap();

        assert_eq!(page.wrappers().len(), 1);
        assert_eq!(page.fields().len(), 1);
        assert!(page.control("a").is_err());
        assert!(page.control("c-1").is_ok());
    }
}
