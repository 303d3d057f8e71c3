//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Plone Command Line Interface (CLI)
#[derive(Parser, Debug)]
#[command(name = "plonecli")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// List all registered template aliases
    #[arg(short = 'l', long = "list-templates")]
    pub list_templates: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Plone package from a template
    Create(CreateArgs),

    /// Add features to an existing Plone package
    Add(AddArgs),

    /// Create or update the local virtual environment for the package
    Virtualenv(VirtualenvArgs),

    /// Install the local package requirements
    Requirements(RequirementsArgs),

    /// Run the package buildout
    Buildout(BuildoutArgs),

    /// Run the Plone client in foreground mode
    Serve(ServeArgs),

    /// Run the Plone client in debug mode
    Debug(DebugArgs),

    /// Bootstrap and build the package (virtualenv, requirements, buildout)
    Build(BuildArgs),

    /// Serve, debug or script a Plone instance
    Instance(InstanceArgs),

    /// Serve a ZEO server in foreground
    Zeoserver(ZeoserverArgs),

    /// Pack ZEO server storage (blocking)
    Zeopack(ZeopackArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Template alias (see --list-templates)
    pub template: String,

    /// Name of the package to create
    pub name: String,

    /// Echo the command before running it
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Template alias (see --list-templates)
    pub template: String,

    /// Echo the command before running it
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct VirtualenvArgs {
    /// Echo the command before running it
    #[arg(short, long)]
    pub verbose: bool,

    /// Recreate the virtualenv from scratch
    #[arg(short, long)]
    pub clean: bool,
}

#[derive(Args, Debug)]
pub struct RequirementsArgs {
    /// Echo the command before running it
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct BuildoutArgs {
    /// Increase verbosity (-v, -vv, ...)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run a non-incremental buildout
    #[arg(short, long, action = ArgAction::Count)]
    pub clean: u8,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Increase verbosity (-v, -vv, ...)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug)]
pub struct DebugArgs {
    /// Increase verbosity (-v, -vv, ...)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Increase verbosity (-v, -vv, ...)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Rebuild the virtualenv from scratch first
    #[arg(short, long, action = ArgAction::Count)]
    pub clean: u8,
}

#[derive(Args, Debug)]
pub struct InstanceArgs {
    /// Instance actions (fg, stop, debug, run <script>, ...)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub action: Vec<String>,

    /// Do not set up a REQUEST
    #[arg(short = 'R', long = "no-request")]
    pub no_request: bool,

    /// Do not login the system user
    #[arg(short = 'L', long = "no-login")]
    pub no_login: bool,

    /// Traverse to <path> from the app and make it available as `obj`
    #[arg(short = 'O', long = "object-path", value_name = "path")]
    pub object_path: Option<String>,

    /// Path of the zope.conf for the instance
    #[arg(short = 'C', value_name = "path")]
    pub zope_conf: Option<String>,
}

#[derive(Args, Debug)]
pub struct ZeoserverArgs {
    /// Path of the zeo.conf for the server
    #[arg(short = 'C', value_name = "path")]
    pub zeo_conf: Option<Utf8PathBuf>,

    /// Extra tokens forwarded to the server entry point
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ZeopackArgs {
    /// Used with --port and --unix, specifies the host to connect to
    #[arg(long, value_name = "host", default_value = "127.0.0.1")]
    pub host: String,

    /// Used with --host, specifies the port to connect to
    #[arg(long, value_name = "port")]
    pub port: Option<u16>,

    /// A unix-domain-socket server to connect to, of the form: path[:name]
    #[arg(long, value_name = "unix")]
    pub unix: Option<String>,

    /// Pack objects that are older than this number of days
    #[arg(long, value_name = "days", default_value_t = 1)]
    pub days: u32,

    /// Storage name to pack. Defaults to 1
    #[arg(long, value_name = "storage", default_value = "1")]
    pub storage: String,

    /// Path to the shared blobstorage directory
    #[arg(long, value_name = "blob-dir")]
    pub blob_dir: Option<Utf8PathBuf>,

    /// ZEO authentication username
    #[arg(long, value_name = "username")]
    pub username: Option<String>,

    /// ZEO authentication password
    #[arg(long, value_name = "password")]
    pub password: Option<String>,

    /// ZEO authentication realm
    #[arg(long, value_name = "realm")]
    pub realm: Option<String>,
}
