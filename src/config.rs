use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Static files read per request.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// passwd-style account file for /api/users.
    #[serde(default = "default_accounts_path")]
    pub accounts_path: String,
    /// dpkg status database for /api/software.
    #[serde(default = "default_packages_path")]
    pub packages_path: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            accounts_path: default_accounts_path(),
            packages_path: default_packages_path(),
        }
    }
}

fn default_accounts_path() -> String {
    "/etc/passwd".into()
}

fn default_packages_path() -> String {
    "/var/lib/dpkg/status".into()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.files.accounts_path.is_empty(),
            "files.accounts_path must be non-empty"
        );
        anyhow::ensure!(
            !self.files.packages_path.is_empty(),
            "files.packages_path must be non-empty"
        );
        Ok(())
    }
}
