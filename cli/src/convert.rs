#![deny(missing_docs)]

//! # Convert Command
//!
//! Runs the conversion pipeline against a help page and writes the document.

use crate::error::CliResult;
use help2oas_core::{convert, ConvertOptions, OpenApiInfo, PageSource};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Serialization of the generated document.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the conversion.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// URL of the ASP.NET help page (e.g. http://host/Help).
    #[clap(env = "HELP2OAS_URL")]
    pub url: String,

    /// Output file. Prints to stdout when omitted.
    #[clap(short, long, env = "HELP2OAS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Fetch every API's detail page for extra parameters and samples (slow).
    #[clap(long, env = "HELP2OAS_FETCH_DETAILS")]
    pub fetch_details: bool,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json, env = "HELP2OAS_FORMAT")]
    pub format: OutputFormat,

    /// Overrides `info.title`.
    #[clap(long, env = "HELP2OAS_TITLE")]
    pub title: Option<String>,

    /// Overrides `info.version`.
    #[clap(long, env = "HELP2OAS_API_VERSION")]
    pub api_version: Option<String>,
}

impl ConvertArgs {
    fn options(&self) -> ConvertOptions {
        let mut info = OpenApiInfo::default();
        if let Some(title) = &self.title {
            info = info.with_title(title);
        }
        if let Some(version) = &self.api_version {
            info = info.with_version(version);
        }
        ConvertOptions {
            fetch_details: self.fetch_details,
            info,
        }
    }
}

/// Executes the conversion.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `source` - Transport used to load the pages.
pub fn execute(args: &ConvertArgs, source: &impl PageSource) -> CliResult<()> {
    let doc = convert(source, &args.url, &args.options())?;
    info!(
        paths = doc.paths.len(),
        operations = doc.operation_count(),
        "document assembled"
    );

    let rendered = match args.format {
        OutputFormat::Json => doc.to_json_pretty()?,
        OutputFormat::Yaml => doc.to_yaml()?,
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            info!(path = %path.display(), "document saved");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use help2oas_core::{AppError, AppResult, OpenApiDocument};
    use tempfile::tempdir;

    struct OnePage(&'static str);

    impl PageSource for OnePage {
        fn fetch(&self, url: &str) -> AppResult<String> {
            if url == "http://h/Help" {
                Ok(self.0.to_string())
            } else {
                Err(AppError::Fetch(format!("unexpected {}", url)))
            }
        }
    }

    const INDEX: &str = r#"<h2 id="Values">Values</h2><p>Value store</p>
        <table class="help-page-table"><tbody>
            <tr><td><a href="Help/Api/PUT-api-values-id">PUT api/values/{id}</a></td>
                <td class="api-documentation">Replaces a value</td></tr>
        </tbody></table>"#;

    fn args(output: Option<PathBuf>, format: OutputFormat) -> ConvertArgs {
        ConvertArgs {
            url: "http://h/Help".into(),
            output,
            fetch_details: false,
            format,
            title: Some("Values API".into()),
            api_version: None,
        }
    }

    #[test]
    fn test_writes_json_into_new_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/openapi.json");

        execute(&args(Some(out.clone()), OutputFormat::Json), &OnePage(INDEX)).unwrap();

        let doc = OpenApiDocument::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(doc.info.title, "Values API");
        assert_eq!(doc.info.version, "1.0.0");
        assert_eq!(doc.tags[0].description, "Value store");
        let op = doc
            .operation("/api/values/{id}", help2oas_core::HttpMethod::Put)
            .unwrap();
        assert_eq!(op.operation_id, "put_api_values_id");
        assert_eq!(op.description, "Replaces a value");
    }

    #[test]
    fn test_writes_yaml() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("openapi.yaml");

        execute(&args(Some(out.clone()), OutputFormat::Yaml), &OnePage(INDEX)).unwrap();

        let yaml = fs::read_to_string(&out).unwrap();
        assert!(yaml.contains("operationId: put_api_values_id"));
        assert!(yaml.contains("/api/values/{id}"));
    }

    #[test]
    fn test_fetch_failure_is_reported() {
        let mut bad = args(None, OutputFormat::Json);
        bad.url = "http://elsewhere/Help".into();
        let err = execute(&bad, &OnePage(INDEX)).unwrap_err();
        assert!(matches!(err, CliError::App(AppError::Fetch(_))));
    }
}
