//! Config file commands.

use std::path::Path;

use crate::config::{self, Config};
use crate::error::{Error, ResultExt};

/// Print where the config file lives
pub fn cmd_config_path(explicit: Option<&Path>) -> anyhow::Result<()> {
    match explicit.map(Path::to_path_buf).or_else(config::config_path) {
        Some(path) => {
            let state = if path.exists() { "exists" } else { "not created" };
            println!("{} ({})", path.display(), state);
        }
        None => println!("Could not determine config directory"),
    }
    Ok(())
}

/// Print the effective configuration as TOML
pub fn cmd_config_show(effective: &Config) -> anyhow::Result<()> {
    print!("{}", config::to_toml(effective).with_context("rendering config")?);
    println!("# User-Agent: {}", effective.musicbrainz.user_agent());
    Ok(())
}

/// Write a default config file
pub fn cmd_config_init(explicit: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let defaults = Config::default();
    let path = match explicit {
        Some(path) => {
            refuse_overwrite(path, force)?;
            config::save_to(&defaults, path).with_context("writing config")?;
            path.to_path_buf()
        }
        None => {
            if let Some(path) = config::config_path() {
                refuse_overwrite(&path, force)?;
            }
            config::save(&defaults).with_context("writing config")?
        }
    };
    println!("✓ Wrote default config to {}", path.display());
    println!("  Set musicbrainz.contact to your email or project URL.");
    Ok(())
}

fn refuse_overwrite(path: &Path, force: bool) -> crate::error::Result<()> {
    if std::fs::exists(path)? && !force {
        return Err(Error::invalid_input(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        cmd_config_init(Some(&path), false).unwrap();
        assert_eq!(config::load_from(&path), Config::default());

        assert!(cmd_config_init(Some(&path), false).is_err());
        assert!(cmd_config_init(Some(&path), true).is_ok());
    }

    #[test]
    fn test_refuse_overwrite_only_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(refuse_overwrite(&path, false).is_ok());
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            refuse_overwrite(&path, false),
            Err(Error::InvalidInput(_))
        ));
        assert!(refuse_overwrite(&path, true).is_ok());
    }

    #[test]
    fn test_show_renders() {
        assert!(cmd_config_show(&Config::default()).is_ok());
    }
}
