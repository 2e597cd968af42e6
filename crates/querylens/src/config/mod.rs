use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};

pub const DB_PATH_ENV: &str = "QUERYLENS_DB";
pub const DEFAULT_MIRROR_DIR: &str = ".querylens";
pub const DEFAULT_MIRROR_FILE: &str = "mirror.sqlite";

/// Which input chose the mirror database, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorPathSource {
    Flag,
    Environment,
    Default,
}

impl MirrorPathSource {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Environment => "env",
            Self::Default => "default",
        }
    }
}

/// The SQLite mirror whose tables are introspected for live columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorPath {
    pub path: PathBuf,
    pub source: MirrorPathSource,
}

/// Picks the mirror database: `--db`, then a non-blank `QUERYLENS_DB`, then
/// `<home>/.querylens/mirror.sqlite`.
///
/// Relative paths resolve against `cwd` and a leading `~` against
/// `home_dir`. The file may be missing (introspection reports that), but an
/// existing non-file target is refused here.
pub fn resolve_mirror_path(
    home_dir: &Path,
    cwd: &Path,
    flag: Option<&Path>,
    env: Option<&OsStr>,
) -> Result<MirrorPath> {
    for (label, dir) in [("home_dir", home_dir), ("cwd", cwd)] {
        if !dir.is_absolute() {
            bail!("{label} must be absolute: {}", dir.display());
        }
    }

    let env = env.filter(|value| !value.is_empty()).map(Path::new);
    let (raw, source) = match (flag, env) {
        (Some(path), _) => (path, MirrorPathSource::Flag),
        (None, Some(path)) => (path, MirrorPathSource::Environment),
        (None, None) => {
            let path = normalize_lexical(
                &home_dir.join(DEFAULT_MIRROR_DIR).join(DEFAULT_MIRROR_FILE),
            );
            return Ok(MirrorPath {
                path,
                source: MirrorPathSource::Default,
            });
        }
    };

    let path = anchor(raw, home_dir, cwd)?;
    if path.exists() && !path.is_file() {
        bail!(
            "mirror database path from {} is not a file: {}",
            source.key(),
            path.display()
        );
    }

    Ok(MirrorPath { path, source })
}

fn anchor(raw: &Path, home_dir: &Path, cwd: &Path) -> Result<PathBuf> {
    let joined = if let Ok(rest) = raw.strip_prefix("~") {
        home_dir.join(rest)
    } else if raw.to_str().is_some_and(|text| text.starts_with('~')) {
        bail!("only `~` and `~/...` are expanded: {}", raw.display());
    } else {
        cwd.join(raw)
    };

    Ok(normalize_lexical(&joined))
}

fn normalize_lexical(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}
