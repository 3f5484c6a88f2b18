//! Server settings from the environment.
//!
//! HOST (default 0.0.0.0), PORT (8080), TOURNAMENT_DATA (data/tournaments.json),
//! SESSION_KEY (optional, at least 64 bytes). The tournament revalidation window
//! is fixed at 60 seconds and not configurable.

/// Minimum length of a session signing key.
pub const SESSION_KEY_MIN_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub tournament_data: String,
    /// Cookie signing key; a random one is generated when unset.
    pub session_key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_tournament_data() -> String {
    "data/tournaments.json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tournament_data: default_tournament_data(),
            session_key: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let tournament_data = lookup("TOURNAMENT_DATA").unwrap_or_else(default_tournament_data);
        let session_key = lookup("SESSION_KEY").filter(|k| {
            let long_enough = k.len() >= SESSION_KEY_MIN_LEN;
            if !long_enough {
                log::warn!(
                    "SESSION_KEY shorter than {} bytes, using a random key",
                    SESSION_KEY_MIN_LEN
                );
            }
            long_enough
        });
        Self {
            host,
            port,
            tournament_data,
            session_key,
        }
    }
}
