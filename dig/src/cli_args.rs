use std::net::IpAddr;
use std::path::PathBuf;
use argh::FromArgs;
use configuration::ClientConfiguration;

fn default_config_path() -> PathBuf {
    PathBuf::from("./dig_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "send one A query over UDP and print the raw response")]
pub struct CliArgs {
    #[argh(
        option,
        description = "config file path, default: './dig_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,

    #[argh(option, description = "resolver address, default: 127.0.0.1")]
    pub server: Option<IpAddr>,

    #[argh(option, description = "resolver port, default: 2053")]
    pub port: Option<u16>,

    #[argh(option, description = "domain to query, default: google.com")]
    pub domain: Option<String>,

    #[argh(option, description = "give up after this many milliseconds, default: wait forever")]
    pub timeout_ms: Option<u64>,
}

impl CliArgs {
    // flags win over the config file
    pub fn apply(&self, c: &mut ClientConfiguration) {
        if let Some(ip_address) = self.server {
            c.resolver.ip_address = ip_address;
        }
        if let Some(port) = self.port {
            c.resolver.port = port;
        }
        if let Some(domain) = &self.domain {
            c.query.domain = domain.clone();
        }
        if self.timeout_ms.is_some() {
            c.resolver.timeout_ms = self.timeout_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::from_args(&["dig"], args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        assert_eq!(args.config, PathBuf::from("./dig_config.toml"));
        assert!(args.server.is_none());
        assert!(args.port.is_none());
        assert!(args.domain.is_none());
        assert!(args.timeout_ms.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let path = std::env::temp_dir().join("no-such-dig-cli-config.toml");
        let mut c = configuration::get_client_config(path).unwrap();

        let args = parse(&["--server", "10.0.0.53", "--port", "53", "--domain", "z.cn"]);
        args.apply(&mut c);

        assert_eq!(c.resolver.server_address(), "10.0.0.53:53".parse::<SocketAddr>().unwrap());
        assert_eq!(c.query.domain, "z.cn");
        assert_eq!(c.resolver.timeout(), None);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(CliArgs::from_args(&["dig"], &["--port", "70000"]).is_err());
    }
}
