//! Plone CLI - command line front end for creating and managing Plone packages
//!
//! Every substantive action is delegated to an external tool (mrbob,
//! virtualenv, pip, buildout, the Zope/ZEO console scripts); this binary
//! resolves template aliases, validates the invocation context, and mirrors
//! the delegated process's exit status.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use plonecli_core::{InvocationContext, TemplateRegistry};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(verbosity(&cli));

    match run(cli) {
        Ok(code) => exit_code(code),
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let registry = TemplateRegistry::builtin();
    let ctx = InvocationContext::detect(verbosity(&cli))?;

    if cli.list_templates {
        output::header("Available templates");
        for alias in registry.aliases() {
            println!("  {}", alias);
        }
    }

    let Some(command) = cli.command else {
        return Ok(0);
    };

    // Zope/ZEO availability is probed once; the server commands are the
    // only consumers.
    let server_available = matches!(
        command,
        Commands::Instance(_) | Commands::Zeoserver(_) | Commands::Zeopack(_)
    ) && plonecli_zope::server_scripts_available();

    match command {
        Commands::Create(args) => commands::create::run(&registry, &ctx, &args),
        Commands::Add(args) => commands::add::run(&registry, &ctx, &args),
        Commands::Virtualenv(args) => commands::virtualenv::run(&ctx, &args),
        Commands::Requirements(args) => commands::requirements::run(&ctx, &args),
        Commands::Buildout(args) => commands::buildout::run(&ctx, &args),
        Commands::Serve(args) => commands::serve::run(&ctx, &args),
        Commands::Debug(args) => commands::debug::run(&ctx, &args),
        Commands::Build(args) => commands::build::run(&ctx, &args),
        Commands::Instance(args) => commands::instance::run(server_available, &args),
        Commands::Zeoserver(args) => commands::zeoserver::run(server_available, &args),
        Commands::Zeopack(args) => commands::zeopack::run(server_available, &args),
    }
}

/// Extract the per-command verbosity counter
fn verbosity(cli: &Cli) -> u8 {
    match &cli.command {
        Some(Commands::Create(args)) => args.verbose.into(),
        Some(Commands::Add(args)) => args.verbose.into(),
        Some(Commands::Virtualenv(args)) => args.verbose.into(),
        Some(Commands::Requirements(args)) => args.verbose.into(),
        Some(Commands::Buildout(args)) => args.verbose,
        Some(Commands::Serve(args)) => args.verbose,
        Some(Commands::Debug(args)) => args.verbose,
        Some(Commands::Build(args)) => args.verbose,
        _ => 0,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Mirror a delegated process's exit code as our own
fn exit_code(code: i32) -> ExitCode {
    if code == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(u8::try_from(code).unwrap_or(1))
    }
}
