//! `quire serve` — Start the admin HTTP gateway.

use quire_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("Quire Gateway");
    println!("   Listening:    {}:{}", config.gateway.host, config.gateway.port);
    println!("   Role header:  {}", config.gateway.role_header);
    println!("   Default role: {}", config.gateway.default_role);

    quire_gateway::start(config).await?;

    Ok(())
}
