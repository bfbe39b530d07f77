//! application entry point

use crate::server::model::config::ServerConfig;
use log::{error, info, warn};
use std::env;
use std::path::Path;
use std::str::FromStr;
use derive_more::Display;

mod server;

const DOTENV_PATH: &str = ".env.dev";

#[actix_web::main()]
async fn main() -> std::io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv_result = match env {
        Env::Prod | Env::Stg => Ok(()), // set by the deployment
        Env::Dev => dotenvy::from_path(Path::new(DOTENV_PATH)),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv_result {
        warn!("skipped loading {}, {}", DOTENV_PATH, e);
    }

    // c. run app
    let config = ServerConfig::from_lookup(|key| env::var(key).ok()).map_err(|e| {
        error!("invalid server config, aborting: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("App is starting in env={}", env);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
