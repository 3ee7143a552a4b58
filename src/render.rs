//! HTML rendering for the board pages.
//!
//! [`render`] turns stored comments into an HTML fragment, either verbatim
//! (the vulnerable board) or through the sanitization policies (the safe
//! board). [`board_page`] and [`index_page`] wrap fragments into the full
//! documents served over HTTP.

use crate::models::Comment;
use crate::sanitize::SanitizationPolicy;

/// One of the two views onto the comment log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMode {
    /// Comments are written into the page exactly as submitted.
    Vulnerable,
    /// Authors are stripped to text and bodies pass through the permissive
    /// allow-list before being written into the page.
    Safe,
}

impl BoardMode {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Vulnerable => "/vulnerable",
            Self::Safe => "/safe",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Vulnerable => "Vulnerable Comments (Stored XSS)",
            Self::Safe => "Safe Comments (Sanitized + Escaped)",
        }
    }

    /// Policy the board renders with; `None` means raw output.
    pub fn render_policy(&self) -> Option<RenderPolicy> {
        match self {
            Self::Vulnerable => None,
            Self::Safe => Some(RenderPolicy::SECURE),
        }
    }
}

/// Which policy applies to each field of a comment when rendering securely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    pub author: SanitizationPolicy,
    pub body: SanitizationPolicy,
}

impl RenderPolicy {
    /// Authors stripped to text, bodies limited to inline formatting and links.
    pub const SECURE: Self = Self {
        author: SanitizationPolicy::Strict,
        body: SanitizationPolicy::Permissive,
    };
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self::SECURE
    }
}

/// Render comments as a sequence of `<div>` rows, oldest first.
///
/// With `policy` set to `None` the author and body are concatenated straight
/// into the markup, so any HTML they contain goes live in the page. With a
/// policy, each field is cleaned first and the result is embedded without
/// further escaping: policy output is already safe inside an element body.
pub fn render(comments: &[Comment], policy: Option<RenderPolicy>) -> String {
    let mut out = String::new();
    for comment in comments {
        match policy {
            None => push_row(&mut out, &comment.author, &comment.body),
            Some(policy) => push_row(
                &mut out,
                &policy.author.clean(&comment.author),
                &policy.body.clean(&comment.body),
            ),
        }
    }
    out
}

fn push_row(out: &mut String, author: &str, body: &str) {
    out.push_str("<div><strong>");
    out.push_str(author);
    out.push_str("</strong>: ");
    out.push_str(body);
    out.push_str("</div>");
}

/// Full page for one board: heading, submission form, and rendered comments.
pub fn board_page(mode: BoardMode, comments: &[Comment]) -> String {
    let rows = render(comments, mode.render_policy());
    let path = mode.path();
    let title = mode.title();

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<h2>{title}</h2>
<form method="POST" action="{path}">
  <input name="name" placeholder="name" /><br/>
  <textarea name="comment" placeholder="comment"></textarea><br/>
  <button>Post</button>
</form>
<hr/>
{rows}
<hr/><a href="/">Back</a>
</body>
</html>
"#
    )
}

/// Landing page linking to both boards.
pub fn index_page() -> String {
    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>XSS Demo</title></head>
<body>
<h1>XSS Demo</h1>
<ul>
  <li><a href="{vulnerable}">Vulnerable Comments</a> (shows XSS)</li>
  <li><a href="{safe}">Safe Comments</a> (sanitized + CSP)</li>
</ul>
</body>
</html>
"#,
        vulnerable = BoardMode::Vulnerable.path(),
        safe = BoardMode::Safe.path(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CommentStore;

    fn comments(rows: &[(&str, &str)]) -> Vec<Comment> {
        let store = CommentStore::new();
        for (author, body) in rows {
            store.append(*author, *body);
        }
        store.all()
    }

    #[test]
    fn empty_log_renders_nothing() {
        assert_eq!(render(&[], None), "");
        assert_eq!(render(&[], Some(RenderPolicy::SECURE)), "");
    }

    #[test]
    fn insecure_render_embeds_markup_verbatim() {
        let rows = comments(&[("<img src=x onerror=alert(1)>", "<script>alert(2)</script>")]);

        assert_eq!(
            render(&rows, None),
            "<div><strong><img src=x onerror=alert(1)></strong>: <script>alert(2)</script></div>"
        );
    }

    #[test]
    fn secure_render_strips_author_and_filters_body() {
        let rows = comments(&[(
            "<b>eve</b><script>x</script>",
            r#"<i>hi</i> <a href="https://example.com" target="_self">link</a><img src=x>"#,
        )]);

        let html = render(&rows, Some(RenderPolicy::SECURE));

        assert!(html.starts_with("<div><strong>eve</strong>: <i>hi</i> <a "));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("_self"));
    }

    #[test]
    fn secure_render_applies_each_field_policy() {
        let rows = comments(&[("<b>eve</b>", "<b>bold</b>")]);
        let all_strict = RenderPolicy {
            author: SanitizationPolicy::Strict,
            body: SanitizationPolicy::Strict,
        };

        assert_eq!(
            render(&rows, Some(all_strict)),
            "<div><strong>eve</strong>: bold</div>"
        );
        assert_eq!(
            render(&rows, Some(RenderPolicy::SECURE)),
            "<div><strong>eve</strong>: <b>bold</b></div>"
        );
    }

    #[test]
    fn rows_keep_insertion_order() {
        let rows = comments(&[("a", "C1"), ("b", "C2"), ("c", "C3")]);

        for policy in [None, Some(RenderPolicy::SECURE)] {
            let html = render(&rows, policy);
            let c1 = html.find("C1").unwrap();
            let c2 = html.find("C2").unwrap();
            let c3 = html.find("C3").unwrap();
            assert!(c1 < c2 && c2 < c3);
        }
    }

    #[test]
    fn board_page_posts_back_to_its_own_path() {
        let vulnerable = board_page(BoardMode::Vulnerable, &[]);
        let safe = board_page(BoardMode::Safe, &[]);

        assert!(vulnerable.contains(r#"action="/vulnerable""#));
        assert!(vulnerable.contains("<h2>Vulnerable Comments (Stored XSS)</h2>"));
        assert!(safe.contains(r#"action="/safe""#));
        assert!(safe.contains("<h2>Safe Comments (Sanitized + Escaped)</h2>"));
    }

    #[test]
    fn board_page_renders_with_its_mode() {
        let rows = comments(&[("<u>x</u>", "<u>y</u>")]);

        assert!(board_page(BoardMode::Vulnerable, &rows).contains("<u>x</u>"));
        assert!(!board_page(BoardMode::Safe, &rows).contains("<u>"));
    }

    #[test]
    fn index_links_to_both_boards() {
        let html = index_page();
        assert!(html.contains(r#"href="/vulnerable""#));
        assert!(html.contains(r#"href="/safe""#));
    }
}
