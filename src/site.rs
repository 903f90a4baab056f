//! Static site generation.
//!
//! Walks a content directory, renders every Markdown page into an HTML
//! template and mirrors the tree into an output directory. Static assets
//! are copied alongside. Pages are independent, so they render in
//! parallel.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Deserialize;

/// Replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Replaced by the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Extension of source pages.
const MARKDOWN_EXTENSION: &str = "md";

/// Error raised while building a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A page failed to render.
    #[error("failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: crate::Error,
    },
    /// The config file is not valid TOML for [`SiteConfig`].
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Site layout, usually read from `site.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the Markdown pages.
    pub content_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// Directory the site is written to. Wiped on every build.
    pub output_dir: PathBuf,
    /// Assets copied verbatim into the output directory.
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No site config, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(io_error(path, e)),
        };
        toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Counts from a finished build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
}

/// Reset the output directory, copy static assets, render all pages.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport, SiteError> {
    let assets = copy_static(&config.static_dir, &config.output_dir)?;
    let pages =
        generate_pages_recursive(&config.content_dir, &config.template, &config.output_dir)?;
    tracing::info!(pages, assets, output = %config.output_dir.display(), "Site built");
    Ok(BuildReport { pages, assets })
}

/// Substitute every title and content placeholder in `template`.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Render one Markdown page into `template`.
pub fn render_page(markdown: &str, template: &str) -> crate::Result<String> {
    let content = crate::to_html(markdown)?;
    let title = crate::extract_title(markdown)?;
    Ok(fill_template(template, &title, &content))
}

/// Render `from` into the template at `template_path` and write `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), SiteError> {
    let template = read(template_path)?;
    write_page(from, &template, dest)
}

/// Render every `.md` file under `content_dir` to the same relative path
/// under `dest_dir`, with an `.html` extension.
///
/// Returns the number of pages written. The first failing page aborts the run.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<usize, SiteError> {
    let template = read(template_path)?;

    let mut sources = Vec::new();
    walk_dir(content_dir, &mut sources)?;
    sources.retain(|path| path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION));
    sources.sort();

    sources.par_iter().try_for_each(|source| {
        let relative = source.strip_prefix(content_dir).unwrap_or(source);
        let dest = dest_dir.join(relative).with_extension("html");
        write_page(source, &template, &dest)
    })?;

    Ok(sources.len())
}

/// Replace `dst` with a copy of the `src` tree.
///
/// A missing `src` leaves an empty `dst`. Returns the number of files copied.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    if dst.exists() {
        tracing::debug!(path = %dst.display(), "Removing output directory");
        fs::remove_dir_all(dst).map_err(|e| io_error(dst, e))?;
    }
    fs::create_dir_all(dst).map_err(|e| io_error(dst, e))?;

    if !src.is_dir() {
        tracing::warn!(path = %src.display(), "Static directory not found, nothing to copy");
        return Ok(0);
    }

    let mut files = Vec::new();
    walk_dir(src, &mut files)?;
    for file in &files {
        let relative = file.strip_prefix(src).unwrap_or(file);
        let target = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        tracing::debug!(from = %file.display(), to = %target.display(), "Copying asset");
        fs::copy(file, &target).map_err(|e| io_error(file, e))?;
    }
    Ok(files.len())
}

fn write_page(from: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
    tracing::info!(from = %from.display(), dest = %dest.display(), "Generating page");

    let markdown = read(from)?;
    let html = render_page(&markdown, template).map_err(|source| SiteError::Render {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    fs::write(dest, html).map_err(|e| io_error(dest, e))
}

fn walk_dir(current: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(current).map_err(|e| io_error(current, e))?;
    for entry in entries {
        let path = entry.map_err(|e| io_error(current, e))?.path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: io::Error) -> SiteError {
    SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}
