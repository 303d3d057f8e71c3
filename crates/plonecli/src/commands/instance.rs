//! `plonecli instance` command handler

use anyhow::Result;
use plonecli_core::{exec, Error};
use plonecli_zope::InstanceOptions;

use crate::cli::InstanceArgs;

pub fn run(server_available: bool, args: &InstanceArgs) -> Result<i32> {
    if !server_available {
        return Err(Error::server_unavailable("instance").into());
    }
    let opts = InstanceOptions {
        no_request: args.no_request,
        no_login: args.no_login,
        object_path: args.object_path.clone(),
        zope_conf: args.zope_conf.clone(),
    };
    let spec = plonecli_zope::instance(&opts, &args.action);
    Ok(exec::run(&spec)?)
}
