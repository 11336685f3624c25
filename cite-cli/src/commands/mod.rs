//! CLI command implementations

use clap::Parser;

pub mod format;

/// Top-level command line
#[derive(Debug, Parser)]
#[command(
    name = "cite",
    version,
    about = "Format citations through an external citation formatter",
    override_usage = "cite [OPTIONS]"
)]
pub struct Cli {
    #[command(flatten)]
    pub format: format::FormatArgs,
}

impl Cli {
    /// Run the command
    pub fn execute(&self) -> anyhow::Result<()> {
        self.format.execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use cite_core::{OutputStyle, SourceType};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cite", "-t", "Q1"]).unwrap();
        let args = &cli.format;

        assert_eq!(args.text.as_deref(), Some("Q1"));
        assert_eq!(args.input, None);
        assert_eq!(args.url, None);
        assert_eq!(args.output, None);
        assert!(!args.output_non_real);
        assert_eq!(args.output_type, SourceType::Json);
        assert_eq!(args.output_style, OutputStyle::Csl);
        assert_eq!(args.output_language, "en-US");
        assert!(!args.quiet);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "cite", "-i", "refs.bib", "-o", "out.", "-R", "-f", "html", "-s", "citation-apa",
            "-l", "fr-FR", "-q", "-vv",
        ])
        .unwrap();
        let args = &cli.format;

        assert_eq!(args.input, Some(PathBuf::from("refs.bib")));
        assert_eq!(args.output, Some(PathBuf::from("out.")));
        assert!(args.output_non_real);
        assert_eq!(args.output_type, SourceType::Html);
        assert_eq!(args.output_style, OutputStyle::Citation("apa".to_string()));
        assert_eq!(args.output_language, "fr-FR");
        assert!(args.quiet);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "cite",
            "--url",
            "https://example.org/refs.json",
            "--output-non-real",
            "--output-type",
            "string",
            "--output-style",
            "bibtex",
            "--output-language",
            "nl-NL",
        ])
        .unwrap();
        let args = &cli.format;

        assert_eq!(args.url.as_deref(), Some("https://example.org/refs.json"));
        assert!(args.output_non_real);
        assert_eq!(args.output_type, SourceType::String);
        assert_eq!(args.output_style, OutputStyle::Bibtex);
        assert_eq!(args.output_language, "nl-NL");
    }

    #[test]
    fn test_unknown_type_is_accepted() {
        let cli = Cli::try_parse_from(["cite", "-t", "x", "-f", "yaml"]).unwrap();
        assert_eq!(cli.format.output_type, SourceType::Other("yaml".to_string()));
    }

    #[test]
    fn test_empty_input_path_is_kept() {
        let cli = Cli::try_parse_from(["cite", "-i", ""]).unwrap();
        assert_eq!(cli.format.input, Some(PathBuf::new()));
    }
}
