use clap::Parser;
use larder_core::domain::common::{DatabaseConfig, LarderConfig};

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Larder API server", long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    /// Port the HTTP server listens on
    #[clap(long, env = "PORT", default_value = "3333")]
    pub port: u16,

    /// Origins allowed by the CORS layer, comma separated
    #[clap(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Prefix every route is mounted under
    #[clap(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[clap(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[clap(long = "db-port", env = "DATABASE_PORT", default_value = "5432")]
    pub port: u16,

    #[clap(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[clap(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[clap(long = "db-name", env = "DATABASE_NAME", default_value = "larder")]
    pub name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct LogArgs {
    /// Default tracing filter, overridden by RUST_LOG
    #[clap(long, env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    /// Emit logs as JSON lines
    #[clap(long, env = "LOG_JSON", default_value = "false")]
    pub json: bool,
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.username,
                password: args.db.password,
                name: args.db.name,
            },
        }
    }
}
