//! `plonecli buildout` command handler

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext};

use crate::cli::BuildoutArgs;
use crate::output;

pub fn run(ctx: &InvocationContext, args: &BuildoutArgs) -> Result<i32> {
    let spec = dispatch::buildout(ctx, args.clean > 0)?;
    output::run_line(&spec);
    Ok(exec::run(&spec)?)
}
