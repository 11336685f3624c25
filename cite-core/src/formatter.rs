//! Formatter contract
//!
//! Parsing bibliographic input and rendering citation styles is done by an
//! external formatter. This module defines the narrow contract the CLI relies
//! on and a [`CommandFormatter`] that reaches a formatter program through a
//! subprocess: the input goes in as an argument or on stdin, the formatted
//! text comes back on stdout.

use crate::error::FormatError;
use crate::request::FormatOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Result of a single format call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    text: String,
    diagnostics: String,
}

impl Formatted {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            diagnostics: String::new(),
        }
    }

    /// Attach messages the formatter printed besides its output
    pub fn with_diagnostics(mut self, diagnostics: impl Into<String>) -> Self {
        self.diagnostics = diagnostics.into();
        self
    }

    /// Messages the formatter printed on stderr, empty if none
    pub fn diagnostics(&self) -> &str {
        &self.diagnostics
    }

    /// The formatted text
    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Something that turns raw bibliographic input into formatted output
pub trait Formatter {
    /// Format `input` according to `options`.
    ///
    /// `input` is file content, literal text or a URL; interpreting it is
    /// entirely up to the implementation.
    fn format(&self, input: &str, options: &FormatOptions) -> Result<Formatted, FormatError>;
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn format(&self, input: &str, options: &FormatOptions) -> Result<Formatted, FormatError> {
        (**self).format(input, options)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, input: &str, options: &FormatOptions) -> Result<Formatted, FormatError> {
        (**self).format(input, options)
    }
}

/// Formatter backed by an external program.
///
/// Every argument is a template; these placeholders are substituted:
///
/// | placeholder | value |
/// |---|---|
/// | `{input}` | the raw input |
/// | `{type}` | output structure type |
/// | `{style}` | output style |
/// | `{lang}` | output language |
/// | `{format}` | always `string` |
/// | `{options}` | all options as a JSON object |
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: PathBuf,
    args: Vec<String>,
    stdin: bool,
}

impl CommandFormatter {
    /// Create a formatter running `program` with no arguments
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: false,
        }
    }

    /// Set the argument templates
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Write the input to the program's stdin
    pub fn stdin(mut self, stdin: bool) -> Self {
        self.stdin = stdin;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Expand the argument templates for one call
    pub fn render_args(
        &self,
        input: &str,
        options: &FormatOptions,
    ) -> Result<Vec<String>, FormatError> {
        let needs_json = self.args.iter().any(|arg| arg.contains("{options}"));
        let options_json = if needs_json {
            serde_json::to_string(options)?
        } else {
            String::new()
        };

        Ok(self
            .args
            .iter()
            .map(|template| {
                expand(template, |name| match name {
                    "input" => Some(input),
                    "type" => Some(options.source_type.as_str()),
                    "style" => Some(options.style.as_str()),
                    "lang" => Some(options.lang.as_str()),
                    "format" => Some(options.format.as_str()),
                    "options" => Some(options_json.as_str()),
                    _ => None,
                })
            })
            .collect())
    }
}

/// Expand `{name}` placeholders in one left-to-right pass.
///
/// Substituted values are copied as-is and never rescanned. Braces that do
/// not form a known placeholder are kept.
fn expand<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        expanded.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after
            .find('}')
            .and_then(|close| lookup(&after[..close]).map(|value| (value, close)));
        match value {
            Some((value, close)) => {
                expanded.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                expanded.push('{');
                rest = after;
            }
        }
    }

    expanded.push_str(rest);
    expanded
}

impl Formatter for CommandFormatter {
    fn format(&self, input: &str, options: &FormatOptions) -> Result<Formatted, FormatError> {
        let args = self.render_args(input, options)?;
        log::debug!(
            "Running formatter {} with {} argument(s)",
            self.program.display(),
            args.len()
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(if self.stdin {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        // Feed stdin from a separate thread so a chatty formatter cannot fill
        // its stdout pipe while we are still writing
        let writer = child.stdin.take().map(|mut stdin| {
            let input = input.to_owned();
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|source| FormatError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        let diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(FormatError::NonZeroExit {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: diagnostics,
            });
        }

        if let Some(writer) = writer {
            let written = writer
                .join()
                .map_err(|_| FormatError::Other("stdin writer thread panicked".to_string()))?;
            match written {
                // The formatter succeeded without reading all of its input
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    log::debug!("Formatter closed stdin early");
                }
                Err(source) => {
                    return Err(FormatError::StdinWriteFailed {
                        program: self.program.clone(),
                        source,
                    });
                }
                Ok(()) => {}
            }
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|_| FormatError::InvalidUtf8Output(self.program.clone()))?;
        log::debug!("Formatter produced {} bytes", text.len());

        Ok(Formatted::new(text).with_diagnostics(diagnostics))
    }
}
