//! Command-line configuration.

use thiserror::Error;

use crate::app::AppConfig;

pub const USAGE: &str = "\
usage: gesture_particles [options]

  --particles N     particles per shape (default 4000)
  --blend-rate R    blend speed per second (default 4.0)
  --spin-rate R     planet spin, radians per second (default 0.2)
  --text STR        literal shown by the victory gesture
  --seed N          fixed RNG seed for the shape library
  --log FILTER      tracing filter, e.g. debug or particle_morph=debug
  --quick           start with defaults
  --help            print this message";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("{0} needs a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("particle count must be at least 1")]
    ZeroParticles,

    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidRate { name: &'static str, value: f32 },
}

/// Apply flags from `args` (program name excluded) on top of the defaults.
pub fn parse_args(args: &[String]) -> Result<AppConfig, ConfigError> {
    let mut cfg = AppConfig::default();
    let mut it = args.iter();
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--quick"      => {}
            "--particles"  => cfg.particle_count = value(&mut it, flag)?,
            "--blend-rate" => cfg.blend_rate     = value(&mut it, flag)?,
            "--spin-rate"  => cfg.spin_rate      = value(&mut it, flag)?,
            "--seed"       => cfg.seed           = Some(value(&mut it, flag)?),
            "--text"       => cfg.text           = raw(&mut it, flag)?.to_string(),
            "--log"        => cfg.log_filter     = raw(&mut it, flag)?.to_string(),
            other          => return Err(ConfigError::UnknownFlag(other.to_string())),
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn raw<'a>(it: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str, ConfigError> {
    it.next()
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn value<'a, T: std::str::FromStr>(
    it: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<T, ConfigError> {
    let v = raw(it, flag)?;
    v.trim().parse().map_err(|_| ConfigError::InvalidValue {
        flag:  flag.to_string(),
        value: v.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn no_flags_gives_defaults() {
        let cfg = parse_args(&[]).unwrap();
        assert_eq!(cfg.particle_count, 4000);
        assert_eq!(cfg.blend_rate, 4.0);
        assert_eq!(cfg.spin_rate, 0.2);
        assert_eq!(cfg.text, "I  LOVE  YOU");
        assert_eq!(cfg.seed, None);
        assert_eq!(parse_args(&args(&["--quick"])).unwrap().particle_count, 4000);
    }

    #[test]
    fn flags_override() {
        let cfg = parse_args(&args(&[
            "--particles", "1200", "--blend-rate", "2.5", "--spin-rate", "0",
            "--text", "HI THERE", "--log", "debug", "--seed", "7",
        ])).unwrap();
        assert_eq!(cfg.particle_count, 1200);
        assert_eq!(cfg.blend_rate, 2.5);
        assert_eq!(cfg.spin_rate, 0.0);
        assert_eq!(cfg.text, "HI THERE");
        assert_eq!(cfg.log_filter, "debug");
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse_args(&args(&["--particles", "lots"])).unwrap_err(),
            ConfigError::InvalidValue { flag: "--particles".into(), value: "lots".into() },
        );
        assert_eq!(
            parse_args(&args(&["--text"])).unwrap_err(),
            ConfigError::MissingValue("--text".into()),
        );
        assert_eq!(
            parse_args(&args(&["--fast"])).unwrap_err(),
            ConfigError::UnknownFlag("--fast".into()),
        );
    }

    #[test]
    fn validation_runs_after_parsing() {
        assert_eq!(
            parse_args(&args(&["--particles", "0"])).unwrap_err(),
            ConfigError::ZeroParticles,
        );
        assert!(matches!(
            parse_args(&args(&["--blend-rate", "-1"])).unwrap_err(),
            ConfigError::InvalidRate { name: "blend rate", .. },
        ));
        assert!(matches!(
            parse_args(&args(&["--spin-rate", "NaN"])).unwrap_err(),
            ConfigError::InvalidRate { name: "spin rate", .. },
        ));
    }
}
