//! `plonecli create` command handler

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext, TemplateRegistry};

use crate::cli::CreateArgs;
use crate::output;

pub fn run(
    registry: &TemplateRegistry,
    ctx: &InvocationContext,
    args: &CreateArgs,
) -> Result<i32> {
    let spec = dispatch::create(registry, ctx, &args.template, &args.name)?;
    if ctx.is_verbose() {
        output::run_line(&spec);
    }
    Ok(exec::run(&spec)?)
}
