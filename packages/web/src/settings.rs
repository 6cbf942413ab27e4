use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use sha2::{Digest, Sha512};
use tower_sessions::cookie::Key;

/// Used when `NOTIONISH_SECRET` is unset. Anyone who knows it can forge session
/// cookies, so startup warns loudly when it is in effect.
pub const INSECURE_DEFAULT_SECRET: &str = "replace-with-a-secure-random-key";

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Database {
    pub url: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://notes.db".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[allow(unused)]
pub struct Session {
    /// Mark the cookie `Secure`; turn on behind HTTPS.
    pub secure: bool,
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Settings {
    pub secret: String,
    pub database: Database,
    pub server: Server,
    pub session: Session,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secret: INSECURE_DEFAULT_SECRET.into(),
            database: Database::default(),
            server: Server::default(),
            session: Session::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("secret", INSECURE_DEFAULT_SECRET)?
            .set_default("database.url", "sqlite://notes.db")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("session.secure", false)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("NOTIONISH").separator("_"))
            .build()?;

        config.try_deserialize()
    }

    pub fn uses_insecure_secret(&self) -> bool {
        self.secret == INSECURE_DEFAULT_SECRET
    }

    /// Cookie signing key. The secret is stretched to the 64 bytes the signer needs.
    pub fn signing_key(&self) -> Key {
        let digest = Sha512::digest(self.secret.as_bytes());
        Key::from(digest.as_slice())
    }
}
