//! Markdown report generator
//!
//! Plain Markdown tables; renders well in GitHub, GitLab and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "grades.md", escape = "none")]
struct MarkdownTemplate<'a> {
    report: &'a ReportContext,
}

/// Markdown report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(MarkdownTemplate { report: ctx }.render()?)
    }
}
