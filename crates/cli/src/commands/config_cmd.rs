//! `quire config` — Configuration management commands.

use quire_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let warnings = warnings(&config);
            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!(
                "   Gateway:      {}:{}",
                config.gateway.host, config.gateway.port
            );
            println!("   Role header:  {}", config.gateway.role_header);
            println!("   Default role: {}", config.gateway.default_role);
            println!("   View limit:   {} bytes", config.editor.max_view_bytes);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}

/// Settings that load fine but are probably mistakes.
fn warnings(config: &AppConfig) -> Vec<&'static str> {
    let mut warnings = Vec::new();

    if config.gateway.default_role == "admin" {
        warnings.push("default_role is admin: requests without a role header see delete controls");
    }

    if config.gateway.host == "0.0.0.0" {
        warnings.push("Gateway bound to 0.0.0.0; role headers must be set by a trusted proxy");
    }

    if config.editor.max_view_bytes < 16 * 1024 {
        warnings.push("max_view_bytes is below 16 KiB; most edit views will fail to render");
    }

    warnings
}
