use crate::{
    modules::{
        account::repository::Account, booking::repository::Booking, menu::repository::MenuItem,
        resource::repository::Repository,
    },
    utils::database::{self, memory::MemoryDatabase},
};
use async_trait::async_trait;
use std::{env, fmt, sync::Arc};

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

/// Anything that can serve as the storage engine for every resource.
pub trait Backend:
    Repository<Account> + Repository<MenuItem> + Repository<Booking> + Clone + 'static
{
}

impl<T> Backend for T where
    T: Repository<Account> + Repository<MenuItem> + Repository<Booking> + Clone + 'static
{
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub accounts: Arc<dyn Repository<Account>>,
    pub menu: Arc<dyn Repository<MenuItem>>,
    pub bookings: Arc<dyn Repository<Booking>>,
}

impl Context {
    pub fn new<B: Backend>(app: AppContext, backend: B) -> Self {
        Self {
            app,
            accounts: Arc::new(backend.clone()),
            menu: Arc::new(backend.clone()),
            bookings: Arc::new(backend),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseConfig {
    Postgres { url: String },
    Memory,
}

impl DatabaseConfig {
    pub fn from(url: String) -> Self {
        match url.starts_with("memory:") {
            true => Self::Memory,
            false => Self::Postgres { url },
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug)]
pub enum Error {
    MissingVariable(&'static str),
    InvalidVariable(&'static str, String),
    Database(sqlx::Error),
    Migration(sqlx::migrate::MigrateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariable(name) => write!(f, "{} not set", name),
            Self::InvalidVariable(name, value) => write!(f, "Invalid {}: {}", name, value),
            Self::Database(err) => write!(f, "Failed to connect to database: {}", err),
            Self::Migration(err) => write!(f, "Failed to run database migrations: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| Error::MissingVariable("DATABASE_URL"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let raw_port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| Error::InvalidVariable("PORT", raw_port.clone()))?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        Ok(Self {
            database: DatabaseConfig::from(database_url),
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let app = AppContext {
            host: self.app.host,
            environment: self.app.environment,
            port: self.app.port,
            url: self.app.url,
        };

        match self.database {
            DatabaseConfig::Postgres { url } => {
                let db_conn = database::connect(url.as_str())
                    .await
                    .map_err(Error::Database)?;
                database::migrate(&db_conn).await.map_err(Error::Migration)?;
                Ok(Context::new(app, db_conn))
            }
            DatabaseConfig::Memory => {
                tracing::warn!("Using the in-memory store, nothing will be persisted");
                Ok(Context::new(app, MemoryDatabase::new()))
            }
        }
    }
}
