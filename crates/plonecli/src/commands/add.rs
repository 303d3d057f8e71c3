//! `plonecli add` command handler

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext, TemplateRegistry};

use crate::cli::AddArgs;
use crate::output;

pub fn run(registry: &TemplateRegistry, ctx: &InvocationContext, args: &AddArgs) -> Result<i32> {
    let spec = dispatch::add(registry, ctx, &args.template)?;
    if ctx.is_verbose() {
        output::run_line(&spec);
    }
    Ok(exec::run(&spec)?)
}
