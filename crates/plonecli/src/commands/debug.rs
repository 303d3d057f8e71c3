//! `plonecli debug` command handler

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext};

use crate::cli::DebugArgs;
use crate::output;

pub fn run(ctx: &InvocationContext, args: &DebugArgs) -> Result<i32> {
    let _ = args;
    let spec = dispatch::debug(ctx)?;
    output::run_line(&spec);
    output::info("You can stop it by pressing CTRL + c");
    Ok(exec::run(&spec)?)
}
