//! HTML serialization of the UI tree.

use crate::FormTransport;
use crate::dom::{Document, NodeId};
use crate::page::FormPage;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the page body.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }
}

impl Document {
    /// Serialize a node and its subtree as indented HTML.
    ///
    /// Controls are written with their current state: a non-empty value as
    /// `value`, a checked radio as `checked`.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut html = String::new();
        self.write_html(node, 0, &mut html);
        html
    }

    fn write_html(&self, node: NodeId, indent: usize, html: &mut String) {
        let ind = "  ".repeat(indent);

        if let Some(text) = self.text(node) {
            html.push_str(&format!("{ind}{}\n", escape_html(text)));
            return;
        }
        let Some(tag) = self.tag(node) else {
            return;
        };

        let mut attrs = String::new();
        for (name, value) in self.attributes(node) {
            attrs.push_str(&format_attribute(name, value));
        }
        if !self.classes(node).is_empty() {
            attrs.push_str(&format_attribute("class", &self.classes(node).join(" ")));
        }
        if self.is_control(node) {
            if self.is_radio(node) {
                if self.is_checked(node) && !self.has_attribute(node, "checked") {
                    attrs.push_str(" checked");
                }
            } else if let Some(value) = self.value(node).filter(|v| !v.is_empty())
                && !self.has_attribute(node, "value")
            {
                attrs.push_str(&format_attribute("value", value));
            }
        }

        if VOID_ELEMENTS.contains(&tag) {
            html.push_str(&format!("{ind}<{tag}{attrs}>\n"));
            return;
        }

        let children = self.children(node);
        match children {
            [] => html.push_str(&format!("{ind}<{tag}{attrs}></{tag}>\n")),
            [only] if self.text(*only).is_some() => {
                let text = escape_html(self.text(*only).unwrap_or_default());
                html.push_str(&format!("{ind}<{tag}{attrs}>{text}</{tag}>\n"));
            }
            _ => {
                html.push_str(&format!("{ind}<{tag}{attrs}>\n"));
                for &child in children {
                    self.write_html(child, indent + 1, html);
                }
                html.push_str(&format!("{ind}</{tag}>\n"));
            }
        }
    }
}

impl<T: FormTransport> FormPage<T> {
    /// Render the page (form and status area) as HTML.
    pub fn to_html_document(&self, options: &HtmlOptions) -> String {
        let mut html = String::new();

        if options.full_document {
            html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
            html.push_str("  <meta charset=\"UTF-8\">\n");
            html.push_str(
                "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            );
            if let Some(title) = &options.title {
                html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
            }
            if options.include_styles {
                html.push_str(&generate_styles());
            }
            html.push_str("</head>\n");
        }

        let document = self.document();
        html.push_str("<body>\n");
        if let Some(title) = &options.title {
            html.push_str(&format!("  <h1>{}</h1>\n", escape_html(title)));
        }
        for &child in document.children(document.root()) {
            document.write_html(child, 1, &mut html);
        }
        html.push_str("</body>\n");

        if options.full_document {
            html.push_str("</html>\n");
        }

        html
    }
}

fn format_attribute(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!(" {name}")
    } else {
        format!(" {name}=\"{}\"", escape_html(value))
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles() -> String {
    r#"  <style>
    #user-form {
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }
    #form-container > div {
      margin: 0.5rem 0;
    }
    #form-container label {
      display: block;
      margin-bottom: 0.25rem;
    }
    #form-container fieldset label {
      display: inline;
      margin-right: 1rem;
    }
    input.error {
      border: 2px solid red;
    }
    [role="alert"] {
      color: red;
      font-size: 0.9rem;
    }
    #status-message {
      max-width: 600px;
      margin: 1rem auto;
      font-family: sans-serif;
    }
  </style>
"#
    .to_string()
}
