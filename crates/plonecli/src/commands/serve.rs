//! `plonecli serve` command handler

use anyhow::Result;
use plonecli_core::{dispatch, exec, InvocationContext};

use crate::cli::ServeArgs;
use crate::output;

pub fn run(ctx: &InvocationContext, args: &ServeArgs) -> Result<i32> {
    let _ = args;
    let spec = dispatch::serve(ctx)?;
    output::run_line(&spec);
    println!();
    output::info("Open this in a Web Browser: http://localhost:8080");
    output::info("You can stop it by pressing CTRL + c");
    println!();
    Ok(exec::run(&spec)?)
}
