//! `plonecli zeopack` command handler

use anyhow::Result;
use plonecli_core::{exec, Error};
use plonecli_zope::{PackOptions, PackParams};

use crate::cli::ZeopackArgs;

pub fn run(server_available: bool, args: &ZeopackArgs) -> Result<i32> {
    if !server_available {
        return Err(Error::server_unavailable("zeopack").into());
    }
    let params = PackParams::normalize(PackOptions {
        host: args.host.clone(),
        port: args.port,
        unix: args.unix.clone(),
        days: args.days,
        storage: args.storage.clone(),
        blob_dir: args.blob_dir.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
        realm: args.realm.clone(),
    });
    Ok(exec::run(&params.to_command())?)
}
