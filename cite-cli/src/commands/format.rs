//! Format command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{write_output, OutputTarget};
use crate::progress::ProgressReporter;
use anyhow::Result;
use cite_core::{
    maybe_wrap_html, output_path, resolve_extension, FormatRequest, Formatter, OutputStyle,
    SourceType,
};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Args;
use std::path::PathBuf;

/// Arguments for formatting citations
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Input file
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub input: Option<PathBuf>,

    /// Input text
    #[arg(short, long, value_name = "STRING")]
    pub text: Option<String>,

    /// Deprecated in favor of -t, --text
    #[arg(short, long, value_name = "STRING")]
    pub url: Option<String>,

    /// Output file (omit file extension). If this option is omitted, the output is written to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output as a text file
    #[arg(short = 'R', long)]
    pub output_non_real: bool,

    /// Output structure type: string, html, json
    #[arg(short = 'f', long, value_name = "OPTION", default_value = "json")]
    pub output_type: SourceType,

    /// Output scheme. Options: csl (Citation Style Language JSON), bibtex, citation-* (where * is any formatting style)
    #[arg(short = 's', long, value_name = "OPTION", default_value = "csl")]
    pub output_style: OutputStyle,

    /// Output language. RFC 5646 codes
    #[arg(short = 'l', long, value_name = "OPTION", default_value = cite_core::DEFAULT_LANGUAGE)]
    pub output_language: String,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        // Input problems are reported before any configuration is read
        let source = self.input_source()?;

        let config = CliConfig::load(self.config.as_deref())?;
        let formatter = config.backend.formatter();
        log::info!("Using formatter {}", formatter.program().display());

        self.format_source(source, &formatter, &config)
    }

    /// Resolve input, format it with `formatter` and write the result
    pub fn run<F: Formatter>(&self, formatter: &F, config: &CliConfig) -> Result<()> {
        let source = self.input_source()?;
        self.format_source(source, formatter, config)
    }

    /// Pick the input source from `--input`, `--url` and `--text`
    pub fn input_source(&self) -> Result<InputSource> {
        InputSource::resolve(
            self.input.as_deref(),
            self.text.as_deref(),
            self.url.as_deref(),
        )
    }

    fn format_source<F: Formatter>(
        &self,
        source: InputSource,
        formatter: &F,
        config: &CliConfig,
    ) -> Result<()> {
        log::info!("Reading input from {}", source.describe());
        let input = source.read()?;

        let request = self.request();
        // Resolve the target before formatting so a bad type fails fast
        let target = self.output_target(&request, config)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start("Formatting citations");
        let formatted = formatter
            .format(&input, &request.options())
            .map_err(|e| CliError::FormatterError(e.to_string()));
        progress.finish();
        let formatted = formatted?;

        // Formatter stderr is held back until the spinner is gone
        if !formatted.diagnostics().is_empty() {
            eprint!("{}", formatted.diagnostics());
        }

        let output = maybe_wrap_html(formatted.get(), &request);
        write_output(target, &output)
    }

    /// Build the format request from the flags
    pub fn request(&self) -> FormatRequest {
        FormatRequest::new()
            .source_type(self.output_type.clone())
            .style(self.output_style.clone())
            .language(self.output_language.clone())
            .plain_text(self.output_non_real)
    }

    /// Where the output goes
    pub fn output_target(&self, request: &FormatRequest, config: &CliConfig) -> Result<OutputTarget> {
        let Some(prefix) = &self.output else {
            return Ok(OutputTarget::Stdout);
        };

        let extension = resolve_extension(request)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(OutputTarget::File(output_path(
            prefix,
            extension,
            config.output.separator(),
        )))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
