//! Shared helpers for the integration tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

use component_for_applet::prompt::Prompter;
use component_for_applet::Result;

/// Answers prompts from a fixed script: picks `choice`, then types `name`
/// (or accepts the default when `name` is `None`).
#[allow(dead_code)]
pub struct Scripted {
    pub choice: usize,
    pub name: Option<String>,
}

#[allow(dead_code)]
impl Scripted {
    pub fn defaults() -> Self {
        Self { choice: 0, name: None }
    }

    pub fn named(name: &str) -> Self {
        Self { choice: 0, name: Some(name.to_string()) }
    }
}

impl Prompter for Scripted {
    fn select(&self, _prompt: &str, items: &[String]) -> Result<usize> {
        assert!(self.choice < items.len(), "scripted choice out of range");
        Ok(self.choice)
    }

    fn input(&self, _prompt: &str, default: &str) -> Result<String> {
        Ok(self.name.clone().unwrap_or_else(|| default.to_string()))
    }
}

/// Fails the test if the pipeline ever reaches a prompt.
#[allow(dead_code)]
pub struct NeverAsked;

impl Prompter for NeverAsked {
    fn select(&self, prompt: &str, _items: &[String]) -> Result<usize> {
        panic!("unexpected prompt: {prompt}")
    }

    fn input(&self, prompt: &str, _default: &str) -> Result<String> {
        panic!("unexpected prompt: {prompt}")
    }
}

/// A scratch project directory, with `app.json` when `app_json` is given.
#[allow(dead_code)]
pub fn project(app_json: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp project directory");
    if let Some(contents) = app_json {
        fs::write(dir.path().join("app.json"), contents).expect("Failed to write app.json");
    }
    dir
}

/// Lists every file under `root`, relative and sorted.
#[allow(dead_code)]
pub fn files_under(root: &Path) -> Vec<String> {
    let mut files = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().display().to_string())
        .collect::<Vec<_>>();
    files.sort();
    files
}

/// The compiled binary, isolated from the user's home directory.
#[allow(dead_code)]
pub fn cli(home: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("component-for-applet").expect("Failed to locate binary");
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}
