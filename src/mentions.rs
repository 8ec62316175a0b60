//! `@username` mention extraction.
//!
//! Bodies are scanned for `@`-prefixed word tokens; each token that names an
//! existing user yields a mention record with `[start, end]` character
//! offsets (end inclusive, so `@josh` at position 0 spans `[0, 4]`).
//! Tokens that match no user are skipped.
//!
//! Generation is append-only: the read endpoints regenerate mentions on
//! every fetch without clearing earlier rows, so repeated reads accumulate
//! duplicates. Updating a parent record clears its mentions first.

use crate::store::Fixtures;
use crate::store::models::mentions::{CommentUserMention, PostUserMention, PreviewUserMention};
use crate::store::models::posts::{Comment, Post, Preview};
use crate::types::{CommentId, PostId};

/// One `@token` occurrence in a body, offsets in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionMatch {
    pub username: String,
    /// Character offset of the `@`.
    pub start: i64,
    /// Character offset of the last character of the token, inclusive.
    pub end: i64,
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find every `@word` token in `body`, in order of appearance.
pub fn scan(body: &str) -> Vec<MentionMatch> {
    let chars: Vec<char> = body.chars().collect();
    let mut matches = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '@' {
            let mut j = i + 1;
            while j < chars.len() && is_word(chars[j]) {
                j += 1;
            }
            if j > i + 1 {
                matches.push(MentionMatch {
                    username: chars[i + 1..j].iter().collect(),
                    start: i as i64,
                    end: j as i64 - 1,
                });
                i = j;
                continue;
            }
        }
        i += 1;
    }
    matches
}

/// Append mention rows for every resolvable `@username` in a comment body.
pub fn generate_comment_mentions(fixtures: &mut Fixtures, comment: &Comment) {
    for m in scan(&comment.markdown) {
        let Some(user) = fixtures.user_by_username(&m.username) else {
            continue;
        };
        let (user_id, username) = (user.id, user.username.clone());
        fixtures.comment_user_mentions.insert(|id| CommentUserMention {
            id,
            comment_id: comment.id,
            post_id: comment.post_id,
            user_id,
            username: username.clone(),
            indices: [m.start, m.end],
        });
    }
}

/// Append mention rows for every resolvable `@username` in a post body.
pub fn generate_post_mentions(fixtures: &mut Fixtures, post: &Post) {
    for m in scan(&post.markdown) {
        let Some(user) = fixtures.user_by_username(&m.username) else {
            continue;
        };
        let (user_id, username) = (user.id, user.username.clone());
        fixtures.post_user_mentions.insert(|id| PostUserMention {
            id,
            post_id: post.id,
            user_id,
            username: username.clone(),
            indices: [m.start, m.end],
        });
    }
}

/// Append mention rows for every resolvable `@username` in a preview body.
pub fn generate_preview_mentions(fixtures: &mut Fixtures, preview: &Preview) {
    for m in scan(&preview.markdown) {
        let Some(user) = fixtures.user_by_username(&m.username) else {
            continue;
        };
        let (user_id, username) = (user.id, user.username.clone());
        fixtures.preview_user_mentions.insert(|id| PreviewUserMention {
            id,
            preview_id: preview.id,
            user_id,
            username: username.clone(),
            indices: [m.start, m.end],
        });
    }
}

/// Drop all mention rows for a comment. Called before the comment body changes.
pub fn clear_comment_mentions(fixtures: &mut Fixtures, comment_id: CommentId) {
    fixtures.comment_user_mentions.retain(|m| m.comment_id != comment_id);
}

/// Drop all mention rows for a post. Called before the post body changes.
pub fn clear_post_mentions(fixtures: &mut Fixtures, post_id: PostId) {
    fixtures.post_user_mentions.retain(|m| m.post_id != post_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::users::User;

    fn fixtures_with_user(username: &str) -> Fixtures {
        let mut fixtures = Fixtures::default();
        fixtures.users.insert(|id| User {
            username: username.to_string(),
            ..User::placeholder(id)
        });
        fixtures
    }

    #[test]
    fn test_scan_finds_token_at_start() {
        let matches = scan("@josh hello");
        assert_eq!(
            matches,
            vec![MentionMatch {
                username: "josh".to_string(),
                start: 0,
                end: 4,
            }]
        );
    }

    #[test]
    fn test_scan_repeated_token_gets_distinct_offsets() {
        let matches = scan("@josh and @josh again");
        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].start, matches[0].end), (0, 4));
        assert_eq!((matches[1].start, matches[1].end), (10, 14));
    }

    #[test]
    fn test_scan_ignores_bare_at_and_punctuation() {
        let matches = scan("mail @ home, ping @ann-marie");
        // "-" is not a word character, so only "ann" is captured
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].username, "ann");
    }

    #[test]
    fn test_scan_offsets_are_character_based() {
        // Multibyte char before the token must not skew offsets
        let matches = scan("é @jo");
        assert_eq!((matches[0].start, matches[0].end), (2, 4));
    }

    #[test]
    fn test_generate_skips_unknown_usernames() {
        let mut fixtures = fixtures_with_user("josh");
        let post = fixtures.posts.insert(|id| crate::store::models::posts::Post {
            id,
            project_id: 1,
            user_id: 1,
            number: 1,
            title: "t".to_string(),
            post_type: "task".to_string(),
            status: "open".to_string(),
            markdown: "cc @josh and @nobody".to_string(),
            body: String::new(),
            inserted_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        });
        generate_post_mentions(&mut fixtures, &post);
        let mentions = fixtures.post_user_mentions.all();
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].username, "josh");
        assert_eq!(mentions[0].indices, [3, 7]);
    }

    #[test]
    fn test_generate_is_append_only_until_cleared() {
        let mut fixtures = fixtures_with_user("josh");
        let comment = fixtures.comments.insert(|id| crate::store::models::posts::Comment {
            id,
            post_id: 1,
            user_id: None,
            markdown: "@josh".to_string(),
            body: String::new(),
            inserted_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        });
        generate_comment_mentions(&mut fixtures, &comment);
        generate_comment_mentions(&mut fixtures, &comment);
        assert_eq!(fixtures.comment_user_mentions.len(), 2);

        clear_comment_mentions(&mut fixtures, comment.id);
        assert!(fixtures.comment_user_mentions.is_empty());
    }
}
