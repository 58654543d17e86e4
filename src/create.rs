use std::path::{Path, PathBuf};

use colored::Colorize as _;

use crate::catalog::Catalog;
use crate::component;
use crate::manifest::{self, Registration};
use crate::prompt::{self, Prompter, Selection};
use crate::utils::{self, Error, Result};

/// What a successful `create` left behind.
#[derive(Debug, Clone)]
pub struct Created {
    pub selection: Selection,
    pub component: PathBuf,
    pub registration: Registration,
}

/// Prompts for a template and folder name, copies the template into
/// `<dest>/components/` and registers it in `<dest>/app.json`.
///
/// Each step runs only after the previous one succeeded. A failure leaves the
/// effects of earlier steps on disk.
pub fn create(
    dest: impl AsRef<Path>,
    catalog: &Catalog,
    prompter: &impl Prompter,
) -> Result<Created> {
    let dest = utils::normalize(dest);
    utils::check_access(&dest)?;
    println!("{}{}", "[Root Directory] ".cyan(), dest.display());

    let selection = prompt::collect(prompter, catalog)?;
    let template = catalog
        .get(&selection.template)
        .ok_or_else(|| Error::UnknownTemplate(selection.template.clone()))?;

    println!("{}", "Start Copy".on_cyan());
    let component = component::install(template, &dest, &selection.name)?;
    println!("{}", "Copy success.".green());

    println!("{}", "Start Edit App.json".on_cyan());
    let registration = manifest::register(&dest, &selection.name)?;
    println!("{}", "Edit app.json success.".green());

    Ok(Created {
        selection,
        component,
        registration,
    })
}
