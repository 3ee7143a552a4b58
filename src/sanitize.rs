//! HTML sanitization policies for untrusted comment text.
//!
//! Two fixed allow-lists cover the board's needs:
//!
//! - [`SanitizationPolicy::Strict`] for author names: every tag and attribute
//!   is removed, leaving escaped text.
//! - [`SanitizationPolicy::Permissive`] for comment bodies: a handful of
//!   inline formatting tags plus links. Every surviving link is forced to
//!   open in a new tab with `rel="noopener noreferrer"`, whatever the author
//!   supplied.
//!
//! Both policies are pure, never fail, and are idempotent: cleaning already
//! cleaned output returns it unchanged. Their output is safe to embed directly
//! into an HTML element body.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::Builder;

/// Tags a comment body may keep.
pub const PERMISSIVE_TAGS: [&str; 5] = ["b", "i", "em", "strong", "a"];

/// Attributes an anchor may carry through from the author's input.
/// `rel` and `target` are never taken from input; see [`FORCED_LINK_REL`]
/// and [`FORCED_LINK_TARGET`].
pub const PERMISSIVE_LINK_ATTRIBUTES: [&str; 1] = ["href"];

/// `rel` written on every anchor that survives [`SanitizationPolicy::Permissive`].
pub const FORCED_LINK_REL: &str = "noopener noreferrer";

/// `target` written on every anchor that survives [`SanitizationPolicy::Permissive`].
pub const FORCED_LINK_TARGET: &str = "_blank";

/// Elements removed together with everything inside them. Their content is
/// never meant to be shown as text. MathML and SVG subtrees are also dropped
/// whole, by ammonia itself.
const DROPPED_WITH_CONTENT: [&str; 6] = [
    "script", "style", "iframe", "object", "noscript", "template",
];

static STRICT: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(HashSet::new())
        .tag_attributes(HashMap::new())
        .generic_attributes(HashSet::new())
        .clean_content_tags(DROPPED_WITH_CONTENT.into_iter().collect())
        .link_rel(None)
        .strip_comments(true);
    builder
});

static PERMISSIVE: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(PERMISSIVE_TAGS.into_iter().collect())
        .tag_attributes(HashMap::from([(
            "a",
            PERMISSIVE_LINK_ATTRIBUTES.into_iter().collect::<HashSet<_>>(),
        )]))
        .generic_attributes(HashSet::new())
        .clean_content_tags(DROPPED_WITH_CONTENT.into_iter().collect())
        // `rel` is written through set_tag_attribute_value instead so that
        // every anchor gets it, not only anchors that kept an href.
        .link_rel(None)
        .set_tag_attribute_value("a", "rel", FORCED_LINK_REL)
        .set_tag_attribute_value("a", "target", FORCED_LINK_TARGET)
        .strip_comments(true);
    builder
});

/// Which allow-list to clean text with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizationPolicy {
    /// No markup at all. Used for author names.
    Strict,
    /// `b`, `i`, `em`, `strong` and `a` with normalized link attributes.
    /// Used for comment bodies.
    Permissive,
}

impl SanitizationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }

    /// Clean `input` according to this policy.
    ///
    /// Malformed markup is parsed the way a browser would parse it and then
    /// filtered, so broken input degrades to text instead of failing.
    pub fn clean(&self, input: &str) -> String {
        let builder = match self {
            Self::Strict => &*STRICT,
            Self::Permissive => &*PERMISSIVE,
        };
        builder.clean(input).to_string()
    }
}
