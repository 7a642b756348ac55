//! Line-by-line conversion of C/C++ source files.

pub mod walk;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::convert::{CaseConverter, Mode};

/// One converted line, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedLine {
    pub original: String,
    pub converted: String,
    /// `"\n"`, `"\r\n"` or empty for a last line without terminator
    pub ending: String,
    /// Whether the line was converted as part of a constructor initializer list
    pub initializer_list: bool,
    pub renames: usize,
}

/// A whole file after conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedSource {
    pub lines: Vec<ConvertedLine>,
}

impl ConvertedSource {
    pub fn renames(&self) -> usize {
        self.lines.iter().map(|l| l.renames).sum()
    }

    /// The converted file content, line terminators preserved.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.converted);
            text.push_str(&line.ending);
        }
        text
    }
}

/// Best-effort detection of constructor initializer lists, where `name(`
/// initializes a member instead of calling a function.
#[derive(Debug, Default)]
pub struct InitializerTracker {
    active: bool,
}

impl InitializerTracker {
    /// Mode for `line`, given the line before it.
    pub fn enter(&mut self, line: &str, previous: Option<&str>) -> Mode {
        if opens_initializer_list(line.trim_end(), previous) {
            self.active = true;
        }
        if self.active {
            Mode::InitializerList
        } else {
            Mode::Plain
        }
    }

    /// The list ends at the constructor body.
    pub fn leave(&mut self, line: &str) {
        if self.active && line.contains('{') {
            self.active = false;
        }
    }
}

/// `Foo(int a) : ...` on one line, or a line starting with `:` right after a
/// line ending in `)`. A ` ?` rules out the `:` of a conditional expression.
fn opens_initializer_list(line: &str, previous: Option<&str>) -> bool {
    let Some(colon) = line.find(':') else {
        return false;
    };
    let before = &line[..colon];
    if before.ends_with(") ") && !before.contains(" ?") {
        return true;
    }
    previous.is_some_and(|prev| {
        before.trim().is_empty() && prev.trim_end().ends_with(')') && !prev.contains(" ?")
    })
}

/// Convert a whole source text line by line.
pub fn convert_source(converter: &CaseConverter, content: &str) -> ConvertedSource {
    let mut tracker = InitializerTracker::default();
    let mut previous: Option<&str> = None;
    let mut lines = Vec::new();

    for raw in content.split_inclusive('\n') {
        let (body, ending) = split_ending(raw);
        let mode = tracker.enter(body, previous);
        let conversion = converter.convert_text(body, mode);
        tracker.leave(body);

        for rename in &conversion.renames {
            tracing::debug!("{} => {}", rename.original, rename.replacement);
        }
        lines.push(ConvertedLine {
            original: body.to_string(),
            converted: conversion.text,
            ending: ending.to_string(),
            initializer_list: mode == Mode::InitializerList,
            renames: conversion.renames.len(),
        });
        previous = Some(body);
    }

    ConvertedSource { lines }
}

fn split_ending(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}

/// Convert the file at `path`. With `rewrite`, the file is written back when
/// at least one name changed.
pub fn process_file(converter: &CaseConverter, path: &Path, rewrite: bool) -> Result<ConvertedSource> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let source = convert_source(converter, &content);
    let renames = source.renames();

    if rewrite && renames > 0 {
        std::fs::write(path, source.text())
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        tracing::info!("Rewrote {} ({} names)", path.display(), renames);
    } else {
        tracing::info!("Converted {} ({} names)", path.display(), renames);
    }

    Ok(source)
}

/// Convert each file in turn, handing every outcome to `report`. A file that
/// fails does not stop the batch. Returns the number of failed files.
pub fn process_files<F>(
    converter: &CaseConverter,
    files: &[PathBuf],
    rewrite: bool,
    mut report: F,
) -> usize
where
    F: FnMut(&Path, Result<ConvertedSource>),
{
    let mut failures = 0;
    for file in files {
        let outcome = process_file(converter, file, rewrite);
        if let Err(e) = &outcome {
            tracing::warn!("Skipping {}: {e:#}", file.display());
            failures += 1;
        }
        report(file, outcome);
    }
    failures
}
