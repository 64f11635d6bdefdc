// this_file: fontresolve/src/resolver.rs
//
// The resolve pipeline: parse, normalize, locate, install, copy, clean up

use crate::{
    cleanup::remove_cache_entry,
    copier::{copy_font_files, FontSummary},
    input::extract_font_name,
    installer::{fetch, PackageManager},
    name::{FontName, PackageId, DEFAULT_SCOPE},
    paths::{font_output_dir, relative_to},
    Result,
};
use log::{debug, warn};
use serde::Serialize;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Settings for one resolver run
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Directory relative output paths are resolved against
    pub cwd: PathBuf,

    /// Base output directory; fonts land in `<output>/fonts/<name>`
    pub output: PathBuf,

    /// npm scope of the font packages
    pub scope: String,
}

impl ResolverConfig {
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            output: PathBuf::from("."),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

/// Everything known about a font before anything is installed
#[derive(Debug, Clone)]
pub struct Plan {
    pub input: String,
    pub extracted: String,
    pub font: FontName,
    pub package: PackageId,
    pub output_dir: PathBuf,
}

impl Plan {
    /// Parse and normalize the input and work out where files go.
    ///
    /// Has no side effects.
    pub fn new(config: &ResolverConfig, input: &str) -> Result<Self> {
        let extracted = extract_font_name(input)?;
        let font = FontName::normalize(&extracted)?;
        let package = PackageId::new(&config.scope, font.clone())?;
        let output_dir = font_output_dir(&config.cwd, &config.output, &font);

        Ok(Self {
            input: input.to_string(),
            extracted,
            font,
            package,
            output_dir,
        })
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub input: String,
    pub extracted: String,
    pub font: FontName,
    pub package: String,
    pub output_dir: PathBuf,
    pub relative_dir: PathBuf,
    pub files_copied: usize,
    pub summary: FontSummary,
}

/// Resolve `input` to a font package, fetch it with `manager` and copy its
/// font files into the output directory, writing progress to `out`.
///
/// The dependency cache entry is removed on success and on any failure
/// after installation was attempted. A failure to clean up while handling
/// another error is only logged; the original error is returned.
pub fn resolve<P, W>(
    config: &ResolverConfig,
    manager: &P,
    input: &str,
    out: &mut W,
) -> Result<Resolution>
where
    P: PackageManager + ?Sized,
    W: Write,
{
    let plan = Plan::new(config, input)?;

    writeln!(out, "🔍 Input: {}", plan.input)?;
    writeln!(out, "📝 Extracted font: {}", plan.extracted)?;
    writeln!(out, "🔧 Normalized: {}", plan.font)?;
    writeln!(out, "📦 Package: {}", plan.package)?;
    writeln!(out, "📁 Base output: {}", config.output.display())?;
    writeln!(out, "📂 Font output: {}", plan.output_dir.display())?;

    match install_and_copy(config, manager, &plan, out) {
        Ok(resolution) => Ok(resolution),
        Err(err) => {
            debug!("run failed after install started: {}", err);
            match remove_cache_entry(manager, &plan.package) {
                Ok(true) => {
                    let _ = writeln!(out, "🧹 Cleaned up node_modules.");
                }
                Ok(false) => {}
                Err(cleanup_err) => {
                    warn!(
                        "could not clean up {}: {}",
                        manager.cache_entry(&plan.package).display(),
                        cleanup_err
                    );
                    let _ = writeln!(out, "⚠️ Could not clean up node_modules.");
                }
            }
            Err(err)
        }
    }
}

fn install_and_copy<P, W>(
    config: &ResolverConfig,
    manager: &P,
    plan: &Plan,
    out: &mut W,
) -> Result<Resolution>
where
    P: PackageManager + ?Sized,
    W: Write,
{
    writeln!(out, "\n📦 Installing Fontsource package...")?;
    // The package manager writes straight to the inherited stdout
    out.flush()?;
    let files_dir = fetch(manager, &plan.package)?;

    writeln!(out, "📋 Creating output directory...")?;
    writeln!(out, "📋 Copying font files...")?;
    let files_copied = copy_font_files(&files_dir, &plan.output_dir)?;
    writeln!(out, "✅ Fonts copied to: {}", plan.output_dir.display())?;

    let summary = FontSummary::from_dir(&plan.output_dir)?;
    summary.render(out)?;

    if remove_cache_entry(manager, &plan.package)? {
        writeln!(out, "🧹 Cleaned up node_modules.")?;
    }

    let relative_dir = relative_to(&config.cwd, &plan.output_dir);
    let hint = relative_dir.display().to_string().replace('\\', "/");
    writeln!(out, "\n📂 Fonts available at: ./{}", hint)?;
    writeln!(out, "\n💡 To reference these fonts in CSS, use:")?;
    writeln!(out, "   url(\"./{}/[font-file.woff2]\")", hint)?;

    Ok(Resolution {
        input: plan.input.clone(),
        extracted: plan.extracted.clone(),
        font: plan.font.clone(),
        package: plan.package.to_string(),
        output_dir: plan.output_dir.clone(),
        relative_dir,
        files_copied,
        summary,
    })
}
