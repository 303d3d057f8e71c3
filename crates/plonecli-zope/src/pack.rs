//! ZEO storage-pack parameter normalization
//!
//! `zeopack` connects either over TCP (host + port) or over a unix socket;
//! the two are mutually exclusive, with the socket winning. The shared-blob
//! flag is derived from whether a blob directory was given at all.

use camino::Utf8PathBuf;

use plonecli_core::CommandSpec;

/// Default host used for TCP connections
const DEFAULT_HOST: &str = "127.0.0.1";

/// Raw pack options as parsed from the command line
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Host to connect to (TCP mode)
    pub host: String,
    /// Port to connect to (TCP mode)
    pub port: Option<u16>,
    /// Unix-domain-socket server spec, of the form path[:name]
    pub unix: Option<String>,
    /// Pack objects older than this number of days
    pub days: u32,
    /// Storage name to pack
    pub storage: String,
    /// Path to the shared blobstorage directory
    pub blob_dir: Option<Utf8PathBuf>,
    /// ZEO authentication username
    pub username: Option<String>,
    /// ZEO authentication password
    pub password: Option<String>,
    /// ZEO authentication realm
    pub realm: Option<String>,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: None,
            unix: None,
            days: 1,
            storage: "1".to_string(),
            blob_dir: None,
            username: None,
            password: None,
            realm: None,
        }
    }
}

/// The nine normalized parameters handed to the pack entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub unix: Option<String>,
    pub days: u32,
    pub username: Option<String>,
    pub password: Option<String>,
    pub realm: Option<String>,
    pub blob_dir: Option<Utf8PathBuf>,
    pub storage: String,
    pub shared_blob_dir: bool,
}

impl PackParams {
    /// Normalize raw options into pack parameters
    ///
    /// A unix-socket spec discards host and port regardless of what was
    /// passed; `shared_blob_dir` is true iff a blob directory was given.
    pub fn normalize(opts: PackOptions) -> Self {
        let (host, port) = if opts.unix.is_some() {
            (None, None)
        } else {
            (Some(opts.host), opts.port)
        };
        Self {
            host,
            port,
            unix: opts.unix,
            days: opts.days,
            username: opts.username,
            password: opts.password,
            realm: opts.realm,
            shared_blob_dir: opts.blob_dir.is_some(),
            blob_dir: opts.blob_dir,
            storage: opts.storage,
        }
    }

    /// Render the parameters onto a zeopack argument vector, in fixed order
    pub fn to_command(&self) -> CommandSpec {
        let mut spec = CommandSpec::new("zeopack");
        if let Some(host) = &self.host {
            spec = spec.args(["--host", host.as_str()]);
        }
        if let Some(port) = self.port {
            spec = spec.args(["--port".to_string(), port.to_string()]);
        }
        if let Some(unix) = &self.unix {
            spec = spec.args(["--unix", unix.as_str()]);
        }
        spec = spec.args(["--days".to_string(), self.days.to_string()]);
        if let Some(username) = &self.username {
            spec = spec.args(["--username", username.as_str()]);
        }
        if let Some(password) = &self.password {
            spec = spec.args(["--password", password.as_str()]);
        }
        if let Some(realm) = &self.realm {
            spec = spec.args(["--realm", realm.as_str()]);
        }
        if let Some(blob_dir) = &self.blob_dir {
            spec = spec.args(["--blob-dir", blob_dir.as_str()]);
        }
        spec = spec.args(["--storage", self.storage.as_str()]);
        if self.shared_blob_dir {
            spec = spec.arg("--shared-blob-dir");
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_socket_discards_host_and_port() {
        let params = PackParams::normalize(PackOptions {
            host: "zeo.example.org".to_string(),
            port: Some(8100),
            unix: Some("/var/run/zeo.sock:main".to_string()),
            ..PackOptions::default()
        });
        assert_eq!(params.host, None);
        assert_eq!(params.port, None);
        assert_eq!(params.unix.as_deref(), Some("/var/run/zeo.sock:main"));
    }

    #[test]
    fn test_tcp_mode_keeps_host_and_port() {
        let params = PackParams::normalize(PackOptions {
            port: Some(8100),
            ..PackOptions::default()
        });
        assert_eq!(params.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(params.port, Some(8100));
        assert_eq!(params.unix, None);
    }

    #[test]
    fn test_blob_dir_presence_drives_shared_blob_flag() {
        let with = PackParams::normalize(PackOptions {
            blob_dir: Some(Utf8PathBuf::from("var/blobstorage")),
            ..PackOptions::default()
        });
        assert!(with.shared_blob_dir);

        let without = PackParams::normalize(PackOptions::default());
        assert!(!without.shared_blob_dir);
        assert_eq!(without.blob_dir, None);
    }

    #[test]
    fn test_defaults() {
        let params = PackParams::normalize(PackOptions::default());
        assert_eq!(params.days, 1);
        assert_eq!(params.storage, "1");
        assert_eq!(params.username, None);
    }

    #[test]
    fn test_command_vector_tcp() {
        let params = PackParams::normalize(PackOptions {
            port: Some(8100),
            ..PackOptions::default()
        });
        let spec = params.to_command();
        assert_eq!(spec.program, "zeopack");
        assert_eq!(
            spec.args,
            vec![
                "--host",
                "127.0.0.1",
                "--port",
                "8100",
                "--days",
                "1",
                "--storage",
                "1",
            ]
        );
    }

    #[test]
    fn test_command_vector_unix_with_blobs() {
        let params = PackParams::normalize(PackOptions {
            unix: Some("/var/run/zeo.sock".to_string()),
            blob_dir: Some(Utf8PathBuf::from("var/blobstorage")),
            days: 7,
            ..PackOptions::default()
        });
        let spec = params.to_command();
        assert_eq!(
            spec.args,
            vec![
                "--unix",
                "/var/run/zeo.sock",
                "--days",
                "7",
                "--blob-dir",
                "var/blobstorage",
                "--storage",
                "1",
                "--shared-blob-dir",
            ]
        );
    }
}
