//! schema-form CLI
//!
//! Fetch a form schema, render it, fill it in the terminal, and submit it.
//!
//! # Usage
//!
//! ```bash
//! schema-form schema
//! schema-form render --title "Contact us" > contact.html
//! schema-form --base-url http://localhost:8080 fill
//! schema-form --config form.toml fill --plain
//! ```

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use schema_form::{
    FormConfig, FormPage, FormSchema, FormTransport, HtmlOptions, HttpTransport, SubmitOutcome,
};
use schema_form_dialoguer::{DialoguerFiller, FillError};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "schema-form")]
#[command(version)]
#[command(about = "Render, fill and submit forms described by a remote schema", long_about = None)]
struct Cli {
    /// Base URL of the form service
    #[arg(long, env = "SCHEMA_FORM_BASE_URL")]
    base_url: Option<String>,

    /// TOML config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the schema and print the rendered page as HTML
    Render {
        /// Page title
        #[arg(long)]
        title: Option<String>,
        /// Print only the body, without head or styles
        #[arg(long)]
        fragment: bool,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Fill the form interactively and submit it
    Fill {
        /// Plain prompts without colors
        #[arg(long)]
        plain: bool,
    },
    /// Print the fetched schema as JSON
    Schema,
}

/// Defaults, then the config file, then env and flags.
fn load_config(cli: &Cli) -> anyhow::Result<FormConfig> {
    let mut config = match &cli.config {
        Some(path) => FormConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FormConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config = config
            .with_base_url(base_url)
            .context("Invalid --base-url")?;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config = config.with_timeout_secs(timeout_secs);
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(base_url = %config.base_url, "schema-form v{}", env!("CARGO_PKG_VERSION"));

    let transport = HttpTransport::new(&config).context("Failed to set up HTTP client")?;

    match cli.command {
        Commands::Schema => {
            let questions = transport
                .fetch_questions()
                .await
                .context("Failed to fetch form questions")?;
            let schema = FormSchema::from(questions);
            if let Err(err) = schema.validate() {
                warn!(error = %err, "Schema has problems");
            }
            println!("{}", schema.to_json_pretty()?);
        }

        Commands::Render {
            title,
            fragment,
            output,
        } => {
            let mut page = FormPage::new(transport);
            page.render_form().await.context("Failed to render form")?;

            let mut options = HtmlOptions::new().full_document(!fragment);
            if fragment {
                options = options.with_styles(false);
            }
            if let Some(title) = title {
                options = options.with_title(title);
            }
            let html = page.to_html_document(&options);

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Wrote form page");
                }
                None => print!("{html}"),
            }
        }

        Commands::Fill { plain } => {
            let mut page = FormPage::new(transport);
            page.render_form().await.context("Failed to render form")?;
            if page.status().is_error() {
                bail!("{}", page.status().text);
            }
            if page.fields().is_empty() {
                println!("The form has no fields.");
                return Ok(());
            }

            let filler = if plain {
                DialoguerFiller::plain()
            } else {
                DialoguerFiller::new()
            };
            match filler.fill(&mut page) {
                Ok(()) => {}
                Err(FillError::Cancelled) => {
                    println!("Cancelled.");
                    return Ok(());
                }
                Err(err) => return Err(err).context("Failed to fill form"),
            }

            match page.submit().await {
                SubmitOutcome::Submitted(payload) => {
                    info!(fields = payload.len(), "Submitted");
                    println!("{}", page.status().text);
                }
                SubmitOutcome::Invalid | SubmitOutcome::Failed => {
                    bail!("{}", page.status().text)
                }
                SubmitOutcome::Unhandled => bail!("The form has no submit handler"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "schema-form",
            "--base-url",
            "http://localhost:9000",
            "--timeout-secs",
            "3",
            "render",
            "--fragment",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
        assert!(matches!(cli.command, Commands::Render { fragment: true, .. }));

        let config = load_config(&cli).unwrap();
        assert_eq!(
            config.questions_url().unwrap().as_str(),
            "http://localhost:9000/questions"
        );
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn flags_override_config_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("schema-form-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "base_url = \"http://config.example\"\ntimeout_secs = 12\n",
        )?;

        let cli = Cli::try_parse_from([
            "schema-form",
            "--config",
            path.to_str().unwrap(),
            "--timeout-secs",
            "4",
            "schema",
        ])?;
        let config = load_config(&cli)?;
        std::fs::remove_file(&path)?;

        assert_eq!(config.base_url.as_str(), "http://config.example/");
        assert_eq!(config.timeout_secs, 4);
        Ok(())
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = Cli::try_parse_from([
            "schema-form",
            "--config",
            "/nonexistent/schema-form.toml",
            "schema",
        ])
        .unwrap();

        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
