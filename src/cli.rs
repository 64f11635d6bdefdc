// this_file: fontresolve/src/cli.rs
//
// Command-line interface for fontresolve

use crate::{
    installer::{CommandPackageManager, PackageManagerKind},
    name::DEFAULT_SCOPE,
    resolver::{resolve, ResolverConfig},
    Result,
};
use clap::{ArgAction, CommandFactory, Parser};
use log::debug;
use std::{env, io, path::PathBuf};

const EXAMPLES: &str = "\
Examples:
  $ fontresolve open-sans
  $ fontresolve https://fontsource.org/fonts/noto-sans-mono -o ./public
  $ fontresolve roboto -o /absolute/path/to/assets
  $ fontresolve \"noto-sans-jp\" --output ../../shared";

/// Command-line arguments for fontresolve
#[derive(Parser, Debug)]
#[command(
    version,
    disable_version_flag = true,
    about = "Downloads font files from Fontsource packages and copies them to a local directory",
    long_about = "fontresolve installs the Fontsource package for a font name or fontsource.org URL, \
                  copies its font files to <output>/fonts/<font-name>/ and removes the package \
                  from node_modules again.",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Font name or Fontsource URL
    #[arg(
        value_name = "FONT_NAME_OR_URL",
        help = "Font name or Fontsource URL",
        long_help = "Font name (e.g. \"Noto Sans JP\", open-sans) or a Fontsource catalog URL \
                    such as https://fontsource.org/fonts/noto-sans-mono. \
                    Without it the help text is shown."
    )]
    pub input: Option<String>,

    /// Base output directory
    #[arg(
        short,
        long,
        default_value = ".",
        help = "Base output directory",
        long_help = "Base output directory. Fonts are always placed in <output>/fonts/<font-name>/. \
                    Relative paths are resolved against the current directory."
    )]
    pub output: PathBuf,

    /// Package manager used to fetch the font package
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = PackageManagerKind::Bun,
        help = "Package manager used to fetch the font package"
    )]
    pub package_manager: PackageManagerKind,

    /// npm scope of the font packages
    #[arg(
        long,
        default_value = DEFAULT_SCOPE,
        help = "npm scope of the font packages",
        long_help = "npm scope the font package is looked up in, \
                    e.g. @fontsource-variable for variable font builds."
    )]
    pub scope: String,

    /// Output as JSON
    #[arg(
        long,
        help = "Output as JSON",
        long_help = "Print a JSON description of the copied fonts to stdout. \
                    Progress messages go to stderr instead."
    )]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version")]
    _version: Option<bool>,
}

impl Cli {
    /// Build the resolver configuration for a run in `cwd`
    pub fn config(&self, cwd: PathBuf) -> ResolverConfig {
        ResolverConfig::new(&cwd)
            .with_output(self.output.clone())
            .with_scope(self.scope.clone())
    }
}

/// Execute the command
pub fn execute(cli: Cli) -> Result<()> {
    let Some(input) = cli.input.as_deref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let cwd = env::current_dir()?;
    let config = cli.config(cwd.clone());
    let manager =
        CommandPackageManager::new(cli.package_manager, &cwd).with_stdout_to_stderr(cli.json);
    debug!("resolving {:?} with {:?}", input, manager.kind());

    if cli.json {
        let resolution = resolve(&config, &manager, input, &mut io::stderr())?;
        let json = serde_json::to_string_pretty(&resolution)?;
        println!("{}", json);
    } else {
        resolve(&config, &manager, input, &mut io::stdout())?;
    }

    Ok(())
}
