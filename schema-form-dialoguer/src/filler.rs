//! Dialoguer prompts for a rendered form page.

use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use schema_form::{FieldDescriptor, FormPage, FormTransport, InputType, PageError};
use thiserror::Error;
use tracing::debug;

/// Entry offered for optional radio groups.
const SKIP_ITEM: &str = "(skip)";

/// Error type for the Dialoguer filler.
#[derive(Debug, Error)]
pub enum FillError {
    /// User cancelled (e.g., pressed Ctrl+C or Escape).
    #[error("Form filling cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The page has no control for a rendered field.
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> FillError {
    if is_cancelled(&err) {
        FillError::Cancelled
    } else {
        FillError::Dialoguer(err)
    }
}

/// Fills form pages through interactive CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerFiller {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerFiller {
    /// Create a filler with the colorful theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a filler with plain (no color) prompts.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Prompt for every rendered field, in form order.
    ///
    /// Text fields are asked again until the control validates; the page's
    /// status message is shown between attempts.
    pub fn fill<T: FormTransport>(&self, page: &mut FormPage<T>) -> Result<(), FillError> {
        let fields = page.fields().to_vec();
        for field in &fields {
            if field.is_radio() {
                self.ask_radio(page, field)?;
            } else {
                self.ask_input(page, field)?;
            }
        }
        Ok(())
    }

    fn ask_input<T: FormTransport>(
        &self,
        page: &mut FormPage<T>,
        field: &FieldDescriptor,
    ) -> Result<(), FillError> {
        let control = page.control(&field.id)?;
        let prompt = field.display_label().to_string();

        loop {
            let value = match field.kind() {
                InputType::Password => self.read_password(&prompt)?,
                _ => self.read_text(&prompt, page.document().value(control).unwrap_or_default())?,
            };

            if apply_text(page, field, &value)? {
                return Ok(());
            }
            println!("Error: {}", page.status().text);
        }
    }

    fn ask_radio<T: FormTransport>(
        &self,
        page: &mut FormPage<T>,
        field: &FieldDescriptor,
    ) -> Result<(), FillError> {
        let items = radio_items(field);
        if items.is_empty() {
            return Ok(());
        }

        let _theme;
        let mut builder: Select;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }
        builder = builder
            .with_prompt(field.display_label())
            .items(&items)
            .default(0);

        let selection = builder.interact().map_err(prompt_error)?;

        apply_selection(page, field, selection)
    }

    fn read_text(&self, prompt: &str, initial: &str) -> Result<String, FillError> {
        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }
        builder = builder.with_prompt(prompt).allow_empty(true);
        if !initial.is_empty() {
            builder = builder.with_initial_text(initial);
        }
        builder.interact_text().map_err(prompt_error)
    }

    fn read_password(&self, prompt: &str) -> Result<String, FillError> {
        let _theme;
        let mut builder: Password;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Password::with_theme(&_theme);
        } else {
            builder = Password::new();
        }
        builder
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }
}

/// Type an answer into a field and leave it. Returns whether it was accepted.
fn apply_text<T: FormTransport>(
    page: &mut FormPage<T>,
    field: &FieldDescriptor,
    value: &str,
) -> Result<bool, FillError> {
    let control = page.control(&field.id)?;
    page.type_text(&field.id, value)?;
    page.blur(&field.id)?;

    let accepted = page.document().validity(control).valid();
    if accepted {
        debug!(field = %field.name, "Field accepted");
    }
    Ok(accepted)
}

/// Select entries for a radio field: the option labels, then a skip entry
/// if the group is optional. Empty when the field has no options.
fn radio_items(field: &FieldDescriptor) -> Vec<&str> {
    let options = field.options.as_deref().unwrap_or_default();
    if options.is_empty() {
        return Vec::new();
    }
    let mut items: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    if !field.required {
        items.push(SKIP_ITEM);
    }
    items
}

/// Check the option picked from `radio_items`. The skip entry checks nothing.
fn apply_selection<T: FormTransport>(
    page: &mut FormPage<T>,
    field: &FieldDescriptor,
    selection: usize,
) -> Result<(), FillError> {
    let options = field.options.as_deref().unwrap_or_default();
    if let Some(option) = options.get(selection) {
        page.select_radio(&option.id)?;
        page.blur(&option.id)?;
    }
    Ok(())
}
