//! `plonecli requirements` command handler

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext};

use crate::cli::RequirementsArgs;
use crate::output;

pub fn run(ctx: &InvocationContext, args: &RequirementsArgs) -> Result<i32> {
    let _ = args;
    let spec = dispatch::requirements(ctx)?;
    output::run_line(&spec);
    Ok(exec::run(&spec)?)
}
