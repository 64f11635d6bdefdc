// this_file: fontresolve/src/installer.rs
//
// Package manager invocation and dependency cache lookup

use crate::{name::PackageId, FontResolveError, Result};
use clap::ValueEnum;
use log::{debug, info};
use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Directory where JavaScript package managers materialize installed packages
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Subdirectory of a Fontsource package that holds the font binaries
pub const FONT_FILES_DIR: &str = "files";

/// Something that can install a package into a local dependency cache
pub trait PackageManager {
    /// Install the package, blocking until done
    fn install(&self, package: &PackageId) -> Result<()>;

    /// Root of the dependency cache the package lands in
    fn cache_root(&self) -> &Path;

    /// Cache entry for a package
    fn cache_entry(&self, package: &PackageId) -> PathBuf {
        self.cache_root()
            .join(package.scope())
            .join(package.name().as_str())
    }
}

/// Supported package manager executables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PackageManagerKind {
    #[default]
    Bun,
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManagerKind {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManagerKind::Bun => "bun",
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Pnpm => "pnpm",
            PackageManagerKind::Yarn => "yarn",
        }
    }

    /// Subcommand that adds a package to the current project
    pub fn add_subcommand(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "install",
            _ => "add",
        }
    }
}

/// Package manager run as a child process in a project directory
#[derive(Debug, Clone)]
pub struct CommandPackageManager {
    kind: PackageManagerKind,
    project_root: PathBuf,
    cache_root: PathBuf,
    stdout_to_stderr: bool,
}

impl CommandPackageManager {
    pub fn new(kind: PackageManagerKind, project_root: &Path) -> Self {
        Self {
            kind,
            project_root: project_root.to_path_buf(),
            cache_root: project_root.join(DEPENDENCY_CACHE_DIR),
            stdout_to_stderr: false,
        }
    }

    /// Send the child's stdout to our stderr, keeping our stdout free for
    /// machine-readable output
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn child_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }

    pub fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    /// The command line that installs `package`, for display
    pub fn command_line(&self, package: &PackageId) -> String {
        format!(
            "{} {} {}",
            self.kind.program(),
            self.kind.add_subcommand(),
            package
        )
    }
}

impl PackageManager for CommandPackageManager {
    fn install(&self, package: &PackageId) -> Result<()> {
        let command_line = self.command_line(package);
        debug!("running `{}` in {}", command_line, self.project_root.display());

        // The user sees the package manager's own progress
        let status = Command::new(self.kind.program())
            .arg(self.kind.add_subcommand())
            .arg(package.to_string())
            .current_dir(&self.project_root)
            .stdin(Stdio::inherit())
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                FontResolveError::Subprocess(format!("could not run `{}`: {}", command_line, e))
            })?;

        if !status.success() {
            let code = status
                .code()
                .map_or_else(|| "a signal".to_string(), |c| format!("code {}", c));
            return Err(FontResolveError::Subprocess(format!(
                "`{}` exited with {}",
                command_line, code
            )));
        }

        info!("installed {}", package);
        Ok(())
    }

    fn cache_root(&self) -> &Path {
        &self.cache_root
    }
}

/// Install a package and return its font files directory in the cache
pub fn fetch<P: PackageManager + ?Sized>(manager: &P, package: &PackageId) -> Result<PathBuf> {
    manager.install(package)?;

    let files_dir = manager.cache_entry(package).join(FONT_FILES_DIR);
    if !files_dir.is_dir() {
        return Err(FontResolveError::MissingFontFiles { path: files_dir });
    }

    debug!("font files located at {}", files_dir.display());
    Ok(files_dir)
}
