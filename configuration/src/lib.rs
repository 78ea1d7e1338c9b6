use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use serde::Deserialize;

pub const DEFAULT_RESOLVER_IP: &str = "127.0.0.1";
pub const DEFAULT_RESOLVER_PORT: u16 = 2053;
pub const DEFAULT_DOMAIN: &str = "google.com";
pub const DEFAULT_TTL: u32 = 60;

/// Loads `T` from the TOML file at `config_path`, on top of `defaults`.
///
/// A missing file is not an error; every key then comes from `defaults`.
pub fn get_config<T, I, K, V>(config_path: PathBuf, defaults: I) -> Result<T, config::ConfigError>
where
    T: for<'de> Deserialize<'de>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<config::Value>,
{
    let mut builder = config::Config::builder();
    for (key, value) in defaults {
        builder = builder.set_default(key.as_ref(), value)?;
    }

    let f = config::File::from(config_path)
        .format(config::FileFormat::Toml)
        .required(false);
    let config = builder.add_source(f).build()?;

    config.try_deserialize::<T>()
}

pub fn get_client_config(config_path: PathBuf) -> Result<ClientConfiguration, config::ConfigError> {
    get_config(config_path, client_defaults())
}

pub fn get_stub_server_config(config_path: PathBuf) -> Result<StubServerConfiguration, config::ConfigError> {
    get_config(config_path, stub_server_defaults())
}

fn client_defaults() -> Vec<(&'static str, config::Value)> {
    vec![
        ("resolver.ip_address", DEFAULT_RESOLVER_IP.into()),
        ("resolver.port", i64::from(DEFAULT_RESOLVER_PORT).into()),
        ("query.domain", DEFAULT_DOMAIN.into()),
    ]
}

fn stub_server_defaults() -> Vec<(&'static str, config::Value)> {
    vec![
        ("server.ip_address", DEFAULT_RESOLVER_IP.into()),
        ("server.port", i64::from(DEFAULT_RESOLVER_PORT).into()),
        ("ttl", i64::from(DEFAULT_TTL).into()),
    ]
}

#[derive(Debug, Deserialize)]
pub struct ClientConfiguration {
    pub resolver: ResolverConfiguration,
    pub query: QueryConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct ResolverConfiguration {
    pub ip_address: IpAddr,
    pub port: u16,
    // no timeout unless set: the receive blocks until a datagram arrives
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ResolverConfiguration {
    pub fn server_address(&self) -> SocketAddr {
        SocketAddr::new(self.ip_address, self.port)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryConfiguration {
    pub domain: String,
}

#[derive(Debug, Deserialize)]
pub struct StubServerConfiguration {
    pub server: ServerConfiguration,
    pub ttl: u32,
    // domain => address answered for A queries
    #[serde(default)]
    pub records: HashMap<String, Ipv4Addr>,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfiguration {
    ip_address: IpAddr,
    port: u16,
}

impl ServerConfiguration {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.ip_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn client_defaults_without_file() {
        let path = std::env::temp_dir().join("no-such-dig-config.toml");
        let c = get_client_config(path).unwrap();

        assert_eq!(c.resolver.server_address(), "127.0.0.1:2053".parse::<SocketAddr>().unwrap());
        assert_eq!(c.resolver.timeout(), None);
        assert_eq!(c.query.domain, "google.com");
    }

    #[test]
    fn client_file_overrides_defaults() {
        let path = write_config(
            "dig-config",
            r#"
            [resolver]
            ip_address = "::1"
            port = 53
            timeout_ms = 1500

            [query]
            domain = "z.cn"
            "#,
        );
        let c = get_client_config(path.clone()).unwrap();
        let _ = std::fs::remove_file(path);

        assert_eq!(c.resolver.server_address(), "[::1]:53".parse::<SocketAddr>().unwrap());
        assert_eq!(c.resolver.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(c.query.domain, "z.cn");
    }

    #[test]
    fn client_rejects_bad_address() {
        let path = write_config(
            "dig-bad-config",
            r#"
            [resolver]
            ip_address = "not an ip"
            "#,
        );
        let ret = get_client_config(path.clone());
        let _ = std::fs::remove_file(path);

        assert!(ret.is_err());
    }

    #[test]
    fn stub_server_records() {
        let path = write_config(
            "stub-server-config",
            r#"
            ttl = 300

            [server]
            port = 5353

            [records]
            "google.com" = "142.250.72.14"
            "#,
        );
        let c = get_stub_server_config(path.clone()).unwrap();
        let _ = std::fs::remove_file(path);

        assert_eq!(c.server.bind_address(), "127.0.0.1:5353".parse::<SocketAddr>().unwrap());
        assert_eq!(c.ttl, 300);
        assert_eq!(c.records.get("google.com"), Some(&Ipv4Addr::new(142, 250, 72, 14)));
    }
}
