//! `plonecli virtualenv` command handler

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext};

use crate::cli::VirtualenvArgs;
use crate::output;

pub fn run(ctx: &InvocationContext, args: &VirtualenvArgs) -> Result<i32> {
    let spec = dispatch::virtualenv(ctx, args.clean)?;
    output::run_line(&spec);
    Ok(exec::run(&spec)?)
}
