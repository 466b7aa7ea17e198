//! Rewriting of `@[Name]` placeholders into user-mention markup.
//!
//! A placeholder is `@[` followed by one or more characters other than `]`,
//! then `]`. Placeholders are processed in the order they occur. For each
//! one the user list is searched for an exact display-name match; on a hit
//! every literal occurrence of that placeholder is replaced with an anchor
//! carrying the user's identifier. Misses leave the placeholder untouched
//! and are reported, never raised.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::{find_by_name, MentionResolution, User};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@\[([^\]]+)\]").expect("placeholder pattern is a valid regex")
});

/// Renders the mention anchor for `user`.
///
/// Asana only turns an anchor into a live mention when all four
/// `data-asana-*` attributes are present.
pub fn mention_markup(user: &User) -> String {
    format!(
        r#"<a data-asana-gid="{}" data-asana-accessible="true" data-asana-type="user" data-asana-dynamic="true">@{}</a>"#,
        user.id, user.name
    )
}

/// Replaces every `@[Name]` placeholder whose name matches a user in
/// `users` and reports the names that matched nobody.
pub fn resolve_mentions(text: &str, users: &[User]) -> MentionResolution {
    let mut resolved = text.to_owned();
    let mut unresolved = Vec::new();

    for captures in PLACEHOLDER.captures_iter(text) {
        let placeholder = &captures[0];
        let name = &captures[1];

        match find_by_name(users, name) {
            Some(user) => {
                debug!(mention = name, user_id = %user.id, "resolved mention");
                resolved = resolved.replace(placeholder, &mention_markup(user));
            }
            None => {
                warn!(mention = name, "no user matches mention; placeholder left as-is");
                unresolved.push(name.to_owned());
            }
        }
    }

    MentionResolution {
        text: resolved,
        unresolved,
    }
}
