//! Display formatting for question names and texts.
//!
//! In the host LMS this is a service scoped to the permission context of a
//! course module; here it is a seam so the default markup rules can be
//! swapped without touching the query code.

/// The permission scope a string is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    course_module_id: i64,
}

impl RenderContext {
    pub fn for_course_module(course_module_id: i64) -> Self {
        Self { course_module_id }
    }

    pub fn course_module_id(&self) -> i64 {
        self.course_module_id
    }
}

pub trait TextRenderer: Send + Sync {
    /// Render a plain display string: markup is stripped and the remainder
    /// escaped for safe embedding.
    fn format_string(&self, input: &str, ctx: RenderContext) -> String;

    /// Render rich text to its final output form. The result is emitted
    /// as-is by the API, never transformed further.
    fn format_text(&self, input: &str, ctx: RenderContext) -> String;
}

/// Default renderer. The course-module scope does not alter its output, but
/// implementations backed by per-context filters receive it through the same
/// trait.
#[derive(Debug, Default)]
pub struct MarkupRenderer;

impl TextRenderer for MarkupRenderer {
    fn format_string(&self, input: &str, _ctx: RenderContext) -> String {
        escape(&strip_tags(input))
    }

    fn format_text(&self, input: &str, _ctx: RenderContext) -> String {
        input.trim().to_string()
    }
}

fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_string_strips_and_escapes() {
        let renderer = MarkupRenderer;
        let ctx = RenderContext::for_course_module(1);
        assert_eq!(
            renderer.format_string("<b>Salt & water</b>", ctx),
            "Salt &amp; water"
        );
        assert_eq!(renderer.format_string("plain", ctx), "plain");
    }

    #[test]
    fn format_text_keeps_markup() {
        let renderer = MarkupRenderer;
        let ctx = RenderContext::for_course_module(1);
        assert_eq!(
            renderer.format_text("<p>Is water wet?</p>\n", ctx),
            "<p>Is water wet?</p>"
        );
    }
}
