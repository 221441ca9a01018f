//! Web server command.

use crate::config::{Settings, DEFAULT_PORT};

/// Start the web server.
pub async fn cmd_serve(mut settings: Settings, bind: Option<&str>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        let (host, port) = parse_bind_address(bind, &settings.server.host);
        settings.server.host = host;
        settings.server.port = port;
    }

    crate::server::serve(&settings).await
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> {default_host}:3030
/// - Just a host: "127.0.0.1" -> 127.0.0.1:3001
/// - Host and port: "127.0.0.1:3030" -> 127.0.0.1:3030
fn parse_bind_address(bind: &str, default_host: &str) -> (String, u16) {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return (default_host.to_string(), port);
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    // Must be just a host, use default port
    (bind.to_string(), DEFAULT_PORT)
}
