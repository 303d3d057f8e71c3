//! `plonecli build` command handler: virtualenv, requirements, buildout

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext};

use crate::cli::BuildArgs;
use crate::output;

pub fn run(ctx: &InvocationContext, args: &BuildArgs) -> Result<i32> {
    let steps = dispatch::build(ctx, args.clean > 0)?;
    for spec in &steps {
        output::run_line(spec);
    }
    Ok(exec::run_all(&steps)?)
}
