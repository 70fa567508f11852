use crate::{
    config::{self, Config},
    errors::{FileOperation, IoError},
    materialize::{self, apply_vfs, Summary},
    preview::preview_as_tree,
    prompt::{self, apply_changes},
    vfs::VirtualFS,
};
use std::path::{Path, PathBuf};

/// Sample input shown when the binary is run without an input file.
pub const EXAMPLE_STRUCTURE: &str = "
project/       # Use '#' for comments
    ├──data/   # Folders end with '/'
    ├──src/
    │   ├──main.py
    │   └──utils.py
    ├──tests/
    │   └──test_main.py
    ├──docs/
    │   ├──README.md
    │   └──API.md
    └──requirements.txt
";

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CotreeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] materialize::MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

/// How [`create_tree_from_file`] should treat the planned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: PathBuf,
    pub preview: bool,
    pub dry_run: bool,
    pub confirm: bool,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            preview: false,
            dry_run: false,
            confirm: false,
        }
    }
}
impl Settings {
    /// Settings seeded from a [`Config`], falling back to the defaults for anything it leaves out.
    pub fn from_config(config: Config) -> Self {
        let defaults = Self::default();

        Self {
            output: config.output.unwrap_or(defaults.output),
            preview: config.preview,
            confirm: config.confirm,
            ..defaults
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied(Summary),
    DryRun,
    Declined,
}

/// Creates the directories and empty files described by `text` under `base`.
///
/// Entries are created one at a time in input order. Existing directories are left alone and
/// existing files keep their content.
///
/// # Errors
///
/// Returns a [`CotreeError`] as soon as a directory or file cannot be created. Entries created
/// before the failure are kept.
pub fn create_tree(text: &str, base: impl AsRef<Path>) -> Result<Summary, CotreeError> {
    let vfs = VirtualFS::plan(text, base.as_ref());

    Ok(apply_vfs(&vfs)?)
}

/// Reads a tree from `input` and creates it according to `settings`.
///
/// With `dry_run` the tree is only previewed. With `confirm` the user is asked before
/// anything is created.
///
/// # Errors
///
/// Returns a [`CotreeError`] if:
///
/// - The input file cannot be read. Nothing has been created at that point.
/// - The confirmation prompt fails.
/// - A directory or file cannot be created.
pub fn create_tree_from_file(
    input: impl AsRef<Path>,
    settings: &Settings,
) -> Result<Outcome, CotreeError> {
    let input = input.as_ref();

    let text = std::fs::read_to_string(input)
        .map_err(|error| IoError::new(FileOperation::Read, input.to_path_buf(), error))?;

    log::debug!(
        "building tree from {} into {}",
        input.display(),
        settings.output.display()
    );

    let vfs = VirtualFS::plan(&text, settings.output.as_path());

    if vfs.is_empty() {
        log::warn!("{} describes no entries", input.display());
    }

    if settings.preview || settings.dry_run || settings.confirm {
        preview_as_tree(&vfs);
    }

    if settings.dry_run {
        return Ok(Outcome::DryRun);
    }

    if settings.confirm && !apply_changes()? {
        log::debug!("user declined, nothing created");
        return Ok(Outcome::Declined);
    }

    let summary = apply_vfs(&vfs)?;

    Ok(Outcome::Applied(summary))
}
