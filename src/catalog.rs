use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir, DirEntry};
use indexmap::IndexMap;
use walkdir::WalkDir;

use crate::utils::{Error, Result};

static BUNDLED: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Templates shipped inside the binary, as `(id, description)`.
const BUNDLED_TEMPLATES: &[(&str, &str)] = &[(
    "PrivacyModal",
    "Privacy authorization modal for Mini Programs",
)];

/// Where the files of a template come from.
#[derive(Debug, Clone)]
pub enum Source {
    Bundled(&'static Dir<'static>),
    Local(PathBuf),
}

impl Source {
    /// Fails when a local source is not a readable directory.
    pub fn check(&self) -> Result<()> {
        match self {
            Source::Bundled(_) => Ok(()),
            Source::Local(path) if path.is_dir() => Ok(()),
            Source::Local(path) => Err(Error::TemplateMissing(path.clone())),
        }
    }

    /// Copies every file of the source under `target`, never overwriting.
    /// Returns the number of files written.
    pub fn copy_into(&self, target: impl AsRef<Path>) -> Result<usize> {
        let target = target.as_ref();
        match self {
            Source::Bundled(dir) => copy_bundled(dir, dir.path(), target),
            Source::Local(root) => copy_local(root, target),
        }
    }
}

fn copy_bundled(dir: &Dir<'_>, base: &Path, target: &Path) -> Result<usize> {
    let mut files = 0;
    for entry in dir.entries() {
        let rel = relative(entry.path(), base)?;
        match entry {
            DirEntry::Dir(sub) => {
                create_dir(&target.join(rel))?;
                files += copy_bundled(sub, base, target)?;
            }
            DirEntry::File(file) => {
                write_new(&target.join(rel), file.contents())?;
                files += 1;
            }
        }
    }
    Ok(files)
}

fn copy_local(root: &Path, target: &Path) -> Result<usize> {
    let mut files = 0;
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let rel = relative(entry.path(), root)?;
        let to = target.join(rel);
        if entry.file_type().is_dir() {
            create_dir(&to)?;
        } else {
            let contents = fs::read(entry.path())?;
            write_new(&to, &contents)?;
            files += 1;
        }
    }
    Ok(files)
}

fn relative<'a>(path: &'a Path, base: &Path) -> Result<&'a Path> {
    path.strip_prefix(base).map_err(|err| Error::Copy {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, err),
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::Copy {
        path: path.to_path_buf(),
        source,
    })
}

fn write_new(path: &Path, contents: &[u8]) -> Result<()> {
    let copy_error = |source: io::Error| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            Error::CopyConflict {
                path: path.to_path_buf(),
            }
        } else {
            Error::Copy {
                path: path.to_path_buf(),
                source,
            }
        }
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(copy_error)?;
    file.write_all(contents).map_err(copy_error)
}

#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub source: Source,
}

impl Template {
    pub fn local(
        name: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: Source::Local(path.into()),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} - {}", self.name, self.description)
        }
    }
}

/// Ordered registry of the templates offered to the user.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: IndexMap<String, Template>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates embedded in the binary.
    pub fn bundled() -> Self {
        let mut catalog = Self::new();
        for (name, description) in BUNDLED_TEMPLATES {
            if let Some(dir) = BUNDLED.get_dir(name) {
                catalog.insert(Template {
                    name: name.to_string(),
                    description: description.to_string(),
                    source: Source::Bundled(dir),
                });
            }
        }
        catalog
    }

    /// Registers `template`, replacing (in place) any template with the same name.
    pub fn insert(&mut self, template: Template) -> Option<Template> {
        self.templates.insert(template.name.clone(), template)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn get_index(&self, index: usize) -> Option<&Template> {
        self.templates.get_index(index).map(|(_, template)| template)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
