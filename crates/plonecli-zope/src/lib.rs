//! # plonecli-zope
//!
//! Optional Zope/ZEO server integration. The `instance`, `zeoserver`, and
//! `zeopack` subcommands delegate to the Zope/ZEO console scripts, which
//! are only present when the server stack is installed. Availability is
//! probed once at startup; the commands stay visible but fail with a
//! structured error when the scripts are missing.

pub mod pack;

use camino::Utf8Path;
use tracing::debug;

use plonecli_core::CommandSpec;

pub use pack::{PackOptions, PackParams};

/// Console scripts the server integration needs on PATH
const SERVER_SCRIPTS: &[&str] = &["zconsole", "runzeo", "zeopack"];

/// Probe whether the Zope/ZEO console scripts are installed
///
/// Resolved once at process start; commands are gated on the result.
pub fn server_scripts_available() -> bool {
    for script in SERVER_SCRIPTS {
        if which::which(script).is_err() {
            debug!("server script '{}' not found on PATH", script);
            return false;
        }
    }
    true
}

/// Options forwarded to the instance entry point
#[derive(Debug, Clone, Default)]
pub struct InstanceOptions {
    /// Do not set up a REQUEST
    pub no_request: bool,
    /// Do not log in the system user
    pub no_login: bool,
    /// Traverse to this path from the app and expose it as `obj`
    pub object_path: Option<String>,
    /// Path of the zope.conf for the instance
    pub zope_conf: Option<String>,
}

/// Plan an instance invocation: raw actions first, then the flags as given
///
/// The entry point owns all interpretation; this layer only rebuilds the
/// token list.
pub fn instance(opts: &InstanceOptions, actions: &[String]) -> CommandSpec {
    let mut spec = CommandSpec::new("zconsole").args(actions.iter().cloned());
    if opts.no_request {
        spec = spec.arg("-R");
    }
    if opts.no_login {
        spec = spec.arg("-L");
    }
    if let Some(path) = &opts.object_path {
        spec = spec.args(["-O", path.as_str()]);
    }
    if let Some(conf) = &opts.zope_conf {
        spec = spec.args(["-C", conf.as_str()]);
    }
    spec
}

/// Plan a foreground ZEO server invocation
///
/// Supervised-process mode is enabled through explicit per-spawn
/// environment rather than mutating the CLI's own environment.
pub fn zeoserver(zeo_conf: Option<&Utf8Path>, extra: &[String]) -> CommandSpec {
    let mut spec = CommandSpec::new("runzeo").env("SUPERVISOR_ENABLED", "1");
    if let Some(conf) = zeo_conf {
        spec = spec.args(["-C", conf.as_str()]);
    }
    spec.args(extra.iter().cloned())
}
