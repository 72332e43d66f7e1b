use std::path::PathBuf;

use thiserror::Error;

use crate::render::RenderStyle;

/// Largest board accepted, in cells. Each of the two boards takes `MAX_CELLS / 8` bytes.
pub const MAX_CELLS: usize = 1 << 30;

pub const USAGE: &str = "usage: bitlife [--braille] <width> <height> <pattern-file>";

/// Startup configuration. Dimensions are validated here, before any board is allocated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub pattern: PathBuf,
    pub style: RenderStyle,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Unknown flag \"{flag}\"\n{}", USAGE)]
    UnknownFlag { flag: String },

    #[error("Unexpected argument \"{arg}\"\n{}", USAGE)]
    UnexpectedArgument { arg: String },

    #[error("Invalid {name} \"{value}\": expected a positive integer")]
    InvalidDimension { name: &'static str, value: String },

    #[error("A board of {width}x{height} cells is too large (at most {} cells)", MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

impl Config {
    /// Parse the arguments that follow the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut style = RenderStyle::Blocks;
        let mut positional = Vec::with_capacity(3);

        for arg in args {
            let arg = arg.into();

            match arg.as_str() {
                "--braille" => style = RenderStyle::Braille,
                "-h" | "--help" => return Err(ConfigError::Usage),
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag { flag: arg });
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let (Some(width), Some(height), Some(pattern)) =
            (positional.next(), positional.next(), positional.next())
        else {
            return Err(ConfigError::Usage);
        };

        if let Some(arg) = positional.next() {
            return Err(ConfigError::UnexpectedArgument { arg });
        }

        let width = parse_dimension("width", &width)?;
        let height = parse_dimension("height", &height)?;

        if width.checked_mul(height).is_none_or(|size| size > MAX_CELLS) {
            return Err(ConfigError::TooLarge { width, height });
        }

        Ok(Self {
            width,
            height,
            pattern: PathBuf::from(pattern),
            style,
        })
    }
}

fn parse_dimension(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidDimension {
            name,
            value: value.to_string(),
        }),
    }
}
