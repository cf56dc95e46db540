//! Command-line options.
//!
//! Five positive integers with defaults, each settable through a short and a
//! long flag. Values follow getopt conventions: attached or separate, always
//! taken from the next argument, and `-` keeps the current value.
//!
//! ```text
//! triangle -w 800 --height=600 -x - -z3
//! ```

use std::ffi::OsString;
use std::fmt;
use std::io::Write;
use std::num::NonZeroU32;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

/// Program name shown in usage and diagnostics.
pub const PROGRAM: &str = "triangle";

/// Value meaning "leave this option as it is".
pub const PLACEHOLDER: &str = "-";

const fn positive(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(v) => v,
        None => panic!("option defaults must be positive"),
    }
}

// ── Config ────────────────────────────────────────────────────────────────

/// Resolved configuration. Every field is strictly positive by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub window_width: NonZeroU32,
    pub window_height: NonZeroU32,
    pub cells_in_x: NonZeroU32,
    pub cells_in_y: NonZeroU32,
    pub layers: NonZeroU32,
}

impl Config {
    pub const DEFAULT: Self = Self {
        window_width: positive(1024),
        window_height: positive(768),
        cells_in_x: positive(16),
        cells_in_y: positive(12),
        layers: positive(4),
    };

    /// One `label: value` line per field, in declaration order.
    pub fn report(&self) -> String {
        format!(
            "window width: {}\nwindow height: {}\ncells in x: {}\ncells in y: {}\nlayers: {}\n",
            self.window_width, self.window_height, self.cells_in_x, self.cells_in_y, self.layers
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ── Errors ────────────────────────────────────────────────────────────────

/// A numeric option received something other than a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    /// Long name of the offending option, without dashes.
    pub option: &'static str,
    pub value: String,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` must be a number greater than zero!", self.option)
    }
}

impl std::error::Error for InvalidValue {}

/// Why option parsing did not produce a `Config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `-h`/`--help` was reached.
    Help,
    /// Unknown option or missing value; carries the parser's one-line diagnostic.
    Usage(String),
    Invalid(InvalidValue),
}

impl OptionsError {
    pub fn exit_code(&self) -> i32 {
        match self {
            OptionsError::Help => 0,
            OptionsError::Usage(_) | OptionsError::Invalid(_) => 1,
        }
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Help => f.write_str("help requested"),
            OptionsError::Usage(detail) => f.write_str(detail),
            OptionsError::Invalid(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<clap::Error> for OptionsError {
    fn from(err: clap::Error) -> Self {
        if err.kind() == ErrorKind::DisplayHelp {
            return OptionsError::Help;
        }

        let invalid = std::error::Error::source(&err)
            .and_then(|source| source.downcast_ref::<InvalidValue>());
        if let Some(invalid) = invalid {
            return OptionsError::Invalid(invalid.clone());
        }

        let rendered = err.to_string();
        let detail = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        OptionsError::Usage(detail)
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────

/// One occurrence of a numeric option.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Setting {
    Keep,
    Set(NonZeroU32),
}

/// Builds the value parser for the option called `option`.
///
/// Errors carry the option name so the validation message can cite it.
fn setting(
    option: &'static str,
) -> impl Fn(&str) -> Result<Setting, InvalidValue> + Clone + Send + Sync + 'static {
    move |raw: &str| {
        if raw == PLACEHOLDER {
            return Ok(Setting::Keep);
        }
        raw.parse::<NonZeroU32>()
            .map(Setting::Set)
            .map_err(|_| InvalidValue {
                option,
                value: raw.to_string(),
            })
    }
}

fn fold(current: NonZeroU32, settings: &[Setting]) -> NonZeroU32 {
    settings.iter().fold(current, |acc, s| match s {
        Setting::Keep => acc,
        Setting::Set(v) => *v,
    })
}

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM,
    disable_help_flag = true,
    infer_long_args = true,
    override_usage = "triangle [OPTION]..."
)]
struct Args {
    #[arg(short = 'w', long = "width", value_name = "WIDTH",
          allow_hyphen_values = true, value_parser = setting("width"))]
    width: Vec<Setting>,

    #[arg(short = 'g', long = "height", value_name = "HEIGHT",
          allow_hyphen_values = true, value_parser = setting("height"))]
    height: Vec<Setting>,

    #[arg(short = 'x', long = "cells-in-x", value_name = "X",
          allow_hyphen_values = true, value_parser = setting("cells-in-x"))]
    cells_in_x: Vec<Setting>,

    #[arg(short = 'y', long = "cells-in-y", value_name = "Y",
          allow_hyphen_values = true, value_parser = setting("cells-in-y"))]
    cells_in_y: Vec<Setting>,

    #[arg(short = 'z', long = "layers", value_name = "Z",
          allow_hyphen_values = true, value_parser = setting("layers"))]
    layers: Vec<Setting>,

    #[arg(short = 'h', long = "help", action = ArgAction::Help)]
    _help: Option<bool>,

    /// Non-option operands; accepted and ignored.
    #[arg(hide = true)]
    operands: Vec<OsString>,
}

/// Parses `args` (program name first) into a `Config`.
///
/// Options are applied left to right onto `Config::DEFAULT`. The first
/// problem encountered in that order is returned; nothing is printed and
/// the process is never terminated here.
pub fn parse_args<I, T>(args: I) -> Result<Config, OptionsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;

    if !args.operands.is_empty() {
        log::warn!("ignoring {} non-option argument(s): {:?}", args.operands.len(), args.operands);
    }

    let d = Config::DEFAULT;
    Ok(Config {
        window_width: fold(d.window_width, &args.width),
        window_height: fold(d.window_height, &args.height),
        cells_in_x: fold(d.cells_in_x, &args.cells_in_x),
        cells_in_y: fold(d.cells_in_y, &args.cells_in_y),
        layers: fold(d.layers, &args.layers),
    })
}

/// Usage text listing each flag, its argument and its default.
pub fn usage() -> String {
    let d = Config::DEFAULT;
    let rows = [
        ("-w, --width=WIDTH", format!("the window width in pixels, default: {}", d.window_width)),
        ("-g, --height=HEIGHT", format!("the window height in pixels, default: {}", d.window_height)),
        ("-x, --cells-in-x=X", format!("the number of grid cells in horizontal, default: {}", d.cells_in_x)),
        ("-y, --cells-in-y=Y", format!("the number of grid cells in vertical, default: {}", d.cells_in_y)),
        ("-z, --layers=Z", format!("the number of layers, default: {}", d.layers)),
        ("-h, --help", "show this help".to_string()),
    ];

    let mut out = format!("Usage: {PROGRAM} [OPTION]...\nOptions:\n");
    for (flags, text) in rows {
        out.push_str(&format!("  {flags:<25}{text}\n"));
    }
    out
}

/// Parses the process arguments, terminating on help or error.
///
/// - help: usage on stdout, exit 0
/// - unknown option / missing value: diagnostic on stderr, usage on stdout, exit 1
/// - invalid value: message on stderr, exit 1
///
/// On success the resolved values are printed to stdout before returning.
pub fn resolve_or_exit<I, T>(args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse_args(args) {
        Ok(config) => {
            print!("{}", config.report());
            config
        }
        Err(err) => {
            match &err {
                OptionsError::Help => print!("{}", usage()),
                OptionsError::Usage(detail) => {
                    eprintln!("{PROGRAM}: {detail}");
                    print!("{}", usage());
                }
                OptionsError::Invalid(e) => eprintln!("{e}"),
            }
            let _ = std::io::stdout().flush();
            std::process::exit(err.exit_code());
        }
    }
}
