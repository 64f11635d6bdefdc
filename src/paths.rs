// this_file: fontresolve/src/paths.rs
//
// Output directory layout: <base>/fonts/<font name>

use crate::name::FontName;
use std::path::{Component, Path, PathBuf};

/// Directory under the base output path that holds all fetched fonts
pub const FONTS_DIR: &str = "fonts";

/// Resolve `base` against `cwd` and drop `.` and `..` components lexically
pub fn resolve_base(cwd: &Path, base: &Path) -> PathBuf {
    let joined = if base.is_absolute() {
        base.to_path_buf()
    } else {
        cwd.join(base)
    };
    clean(&joined)
}

/// Get the font output directory with strict format `<base>/fonts/<font name>`.
///
/// Pure path arithmetic; nothing is created or checked on disk.
pub fn font_output_dir(cwd: &Path, base: &Path, font: &FontName) -> PathBuf {
    resolve_base(cwd, base).join(FONTS_DIR).join(font.as_str())
}

/// Relative path from `from` to `to`, both expected to be absolute.
///
/// Returns `.` when they are the same directory.
pub fn relative_to(from: &Path, to: &Path) -> PathBuf {
    let from = clean(from);
    let to = clean(to);
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !cleaned.pop() && !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(name: &str) -> FontName {
        FontName::normalize(name).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn test_font_output_dir() {
        let cwd = Path::new("/tmp/proj");
        assert_eq!(
            font_output_dir(cwd, Path::new("."), &font("roboto")),
            PathBuf::from("/tmp/proj/fonts/roboto")
        );
        assert_eq!(
            font_output_dir(cwd, Path::new("./public"), &font("Open_Sans!!")),
            PathBuf::from("/tmp/proj/public/fonts/open-sans")
        );
        assert_eq!(
            font_output_dir(cwd, Path::new("../../shared"), &font("noto-sans-jp")),
            PathBuf::from("/shared/fonts/noto-sans-jp")
        );
        assert_eq!(
            font_output_dir(cwd, Path::new("/srv/assets/"), &font("inter")),
            PathBuf::from("/srv/assets/fonts/inter")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_base_above_root() {
        assert_eq!(
            resolve_base(Path::new("/tmp"), Path::new("../../..")),
            PathBuf::from("/")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_to() {
        assert_eq!(
            relative_to(Path::new("/tmp/proj"), Path::new("/tmp/proj/fonts/roboto")),
            PathBuf::from("fonts/roboto")
        );
        assert_eq!(
            relative_to(Path::new("/tmp/proj"), Path::new("/tmp/shared/fonts/roboto")),
            PathBuf::from("../shared/fonts/roboto")
        );
        assert_eq!(
            relative_to(Path::new("/tmp/proj"), Path::new("/tmp/proj")),
            PathBuf::from(".")
        );
    }
}
