//! `quire init` — First-time setup.

use quire_config::AppConfig;
use std::path::Path;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();

    println!("Quire — First-Time Setup");
    println!("========================\n");

    if write_default_config(&config_dir)? {
        println!("✅ Created {}", config_dir.join("config.toml").display());
        println!("\nNext steps:");
        println!("   1. Translate the [editor.text] strings if needed");
        println!("   2. Run: quire serve");
    } else {
        println!(
            "⚠️  Config already exists at: {}",
            config_dir.join("config.toml").display()
        );
        println!("   Edit it manually or delete and re-run init.\n");
    }

    Ok(())
}

/// Write `config.toml` into `dir` unless one exists. Returns whether it wrote.
fn write_default_config(dir: &Path) -> std::io::Result<bool> {
    let config_path = dir.join("config.toml");
    if config_path.exists() {
        return Ok(false);
    }

    std::fs::create_dir_all(dir)?;
    std::fs::write(&config_path, AppConfig::default_toml())?;
    tracing::info!(path = %config_path.display(), "Default config written");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_once_then_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(".quire");

        assert!(write_default_config(&base).unwrap());
        let written = AppConfig::load_from(&base.join("config.toml")).unwrap();
        assert_eq!(written.gateway.port, AppConfig::default().gateway.port);

        assert!(!write_default_config(&base).unwrap());
    }
}
