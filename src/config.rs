use figment::{
    providers::{Env, Serialized},
    util::map,
    Figment,
};
use serde::Deserialize;
use std::net::IpAddr;

const ENV_PREFIX: &str = "FONOTECA_";

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: Server,
}

impl Config {
    pub fn new() -> Self {
        Figment::new()
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .join(Serialized::default(
                "server",
                map!["host" => "127.0.0.1", "port" => "3000"],
            ))
            .extract()
            .expect("can not parse initial config")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
