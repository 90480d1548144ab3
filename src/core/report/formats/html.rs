//! HTML report generator
//!
//! The page is self-contained: styles are embedded and nothing is fetched.
//! Record text is HTML-escaped by the template engine.

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "grades.html")]
struct HtmlTemplate<'a> {
    report: &'a ReportContext,
}

/// HTML report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(HtmlTemplate { report: ctx }.render()?)
    }
}
