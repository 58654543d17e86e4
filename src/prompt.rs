use std::sync::OnceLock;

use dialoguer::theme::SimpleTheme;
use dialoguer::{Input, Select};

use crate::catalog::Catalog;
use crate::utils::{Error, Result};

pub const CHOOSE_COMPONENT: &str = "Choose a component to register";
pub const FOLDER_NAME: &str = "Folder's name for component.";

/// Source of the user's answers.
pub trait Prompter {
    /// Returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Returns the text entered, or `default` when the answer is empty.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

static THEME: OnceLock<SimpleTheme> = OnceLock::new();

impl Prompter for Terminal {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        let theme = THEME.get_or_init(|| SimpleTheme);
        let index = Select::with_theme(theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let theme = THEME.get_or_init(|| SimpleTheme);
        let text = Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Id of the chosen template.
    pub template: String,
    /// Folder name of the new component instance.
    pub name: String,
}

/// Asks which template to use, then which folder name to give it.
pub fn collect(prompter: &impl Prompter, catalog: &Catalog) -> Result<Selection> {
    let items = catalog.iter().map(ToString::to_string).collect::<Vec<_>>();
    let index = prompter.select(CHOOSE_COMPONENT, &items)?;
    let template = catalog
        .get_index(index)
        .ok_or_else(|| Error::UnknownTemplate(index.to_string()))?
        .name
        .clone();
    let name = prompter.input(FOLDER_NAME, &template)?;
    Ok(Selection { template, name })
}
