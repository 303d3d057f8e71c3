//! `plonecli zeoserver` command handler

use anyhow::Result;
use plonecli_core::{exec, Error};

use crate::cli::ZeoserverArgs;

pub fn run(server_available: bool, args: &ZeoserverArgs) -> Result<i32> {
    if !server_available {
        return Err(Error::server_unavailable("zeoserver").into());
    }
    let spec = plonecli_zope::zeoserver(args.zeo_conf.as_deref(), &args.args);
    Ok(exec::run(&spec)?)
}
