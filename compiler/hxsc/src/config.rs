//! Runner configuration.
//!
//! Settings come from the environment first, then from `--name=value`
//! command-line flags, which win.

use hxs_eval::DEFAULT_MAX_DEPTH;

use crate::CliError;

/// Environment variable overriding the evaluation depth limit.
pub const MAX_DEPTH_ENV: &str = "HXS_MAX_DEPTH";

const MAX_DEPTH_FLAG: &str = "--max-depth=";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Limit on nested reductions before a `RangeError`.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` finds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let mut config = Config::default();
        if let Some(value) = lookup(MAX_DEPTH_ENV) {
            config.max_depth = parse_depth(MAX_DEPTH_ENV, &value)?;
        }
        Ok(config)
    }

    /// Consume recognised flags from `args`, returning the rest in order.
    pub fn apply_flags(&mut self, args: &[String]) -> Result<Vec<String>, CliError> {
        let mut rest = Vec::with_capacity(args.len());
        for arg in args {
            if let Some(value) = arg.strip_prefix(MAX_DEPTH_FLAG) {
                self.max_depth = parse_depth("--max-depth", value)?;
            } else {
                rest.push(arg.clone());
            }
        }
        tracing::debug!(max_depth = self.max_depth, "configuration");
        Ok(rest)
    }
}

fn parse_depth(name: &str, value: &str) -> Result<usize, CliError> {
    match value.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(CliError::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
