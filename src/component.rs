use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::Template;
use crate::utils::{self, Error, Result};

/// Directory under the project root holding component instances.
pub const COMPONENTS_DIR: &str = "components";

/// Copies `template` into `<dest>/components/<name>` and returns that path.
///
/// Nothing is overwritten: an existing target is a [`Error::CopyConflict`].
/// Files copied before a failure are left in place.
pub fn install(template: &Template, dest: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
    let dest = dest.as_ref();
    utils::check_access(dest)?;
    template.source.check()?;

    let components = dest.join(COMPONENTS_DIR);
    let target = components.join(name);
    if target.symlink_metadata().is_ok() {
        return Err(Error::CopyConflict { path: target });
    }

    // nested names such as `common/Modal` need their intermediate folders
    let parent = target.parent().unwrap_or(&components);
    fs::create_dir_all(parent).map_err(|source| Error::Copy {
        path: parent.to_path_buf(),
        source,
    })?;
    fs::create_dir(&target).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => Error::CopyConflict {
            path: target.clone(),
        },
        _ => Error::Copy {
            path: target.clone(),
            source,
        },
    })?;

    template.source.copy_into(&target)?;
    Ok(target)
}
