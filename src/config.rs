//! Runtime configuration for the terminal runner.
//!
//! Values come from defaults, then environment variables, then command-line flags.

use std::env;

use anyhow::{anyhow, Result};

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// RNG seed; `None` seeds from the clock at startup
    pub seed: Option<u32>,
    /// Frame interval for rendering, input polling and ticking
    pub frame_ms: u32,
    /// Append JSON-lines lock events to this path
    pub event_log: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            event_log: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables (`TETRIS_SEED`, `TETRIS_FRAME_MS`,
    /// `TETRIS_EVENT_LOG`). Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let seed = env::var("TETRIS_SEED").ok().and_then(|s| s.parse().ok());
        let frame_ms = env::var("TETRIS_FRAME_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.frame_ms);
        let event_log = env::var("TETRIS_EVENT_LOG")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            frame_ms,
            event_log,
        }
    }
}

/// Apply command-line flags on top of `base`.
///
/// Accepts `--seed <u32>`, `--frame-ms <u32>` and `--event-log <path>`.
pub fn parse_args(args: &[String], base: RunConfig) -> Result<RunConfig> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match flag {
            "--seed" => {
                let v = value()?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--frame-ms" => {
                let v = value()?;
                let ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --frame-ms value: {}", v))?;
                if ms == 0 {
                    return Err(anyhow!("--frame-ms must be positive"));
                }
                config.frame_ms = ms;
            }
            "--event-log" => {
                config.event_log = Some(value()?.clone());
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 2;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_keeps_base() {
        let base = RunConfig {
            seed: Some(9),
            ..RunConfig::default()
        };
        assert_eq!(parse_args(&[], base.clone()).unwrap(), base);
    }

    #[test]
    fn flags_override_base() {
        let config = parse_args(
            &args(&["--seed", "42", "--frame-ms", "8", "--event-log", "/tmp/ev.jsonl"]),
            RunConfig::default(),
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frame_ms, 8);
        assert_eq!(config.event_log.as_deref(), Some("/tmp/ev.jsonl"));
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse_args(&args(&["--seed"]), RunConfig::default()).is_err());
        assert!(parse_args(&args(&["--seed", "abc"]), RunConfig::default()).is_err());
        assert!(parse_args(&args(&["--frame-ms", "0"]), RunConfig::default()).is_err());
        let err = parse_args(&args(&["--fast"]), RunConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }
}
