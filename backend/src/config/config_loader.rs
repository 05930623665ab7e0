use anyhow::{Context, Result};
use std::{env, str::FromStr};

use super::{
    config_model::{BackendServer, Database, DotEnvyConfig, Supabase},
    stage::Stage,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: parse_var("SERVER_PORT_BACKEND")?,
        body_limit: parse_var("SERVER_BODY_LIMIT")?,
        timeout: parse_var("SERVER_TIMEOUT")?,
    };

    let database = Database {
        url: required_var("DATABASE_URL")?,
    };

    let supabase = Supabase {
        jwt_secret: required_var("SUPABASE_JWT_SECRET")?,
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        supabase,
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}

fn required_var(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} is invalid"))
}

fn parse_var<T>(key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    required_var(key)?
        .trim()
        .parse::<T>()
        .with_context(|| format!("{key} is invalid"))
}
