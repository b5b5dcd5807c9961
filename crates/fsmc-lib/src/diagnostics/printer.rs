//! Builder-pattern printer for rendering errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::{Error, Span};

/// Builder for rendering an [`Error`] with various options.
///
/// With a source text and an error that carries a span, the report quotes the
/// offending line. Otherwise it is a single `error: ...` line.
pub struct DiagnosticsPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DiagnosticsPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(span)) = (self.source, self.error.span()) else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(span, source.len()))
                .label(&message),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.path {
            Some(path) => write!(w, "error: {path}: {}", self.error),
            None => write!(w, "error: {}", self.error),
        }
    }
}

/// Widens empty spans to one character so they stay visible.
fn adjust_range(span: Span, limit: usize) -> Span {
    if span.start == span.end {
        return span.start..(span.start + 1).min(limit);
    }
    span
}
