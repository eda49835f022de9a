use serde::{Deserialize, Serialize};

/// Find/replace options. Search is either case-sensitive or not, per this
/// flag; case-insensitive matching is ASCII-insensitive so byte offsets stay
/// stable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    pub case_sensitive: bool,
}

impl SearchOptions {
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
        }
    }

    /// Matching ignores ASCII case only: "É" does not match "é". Full
    /// Unicode folding would shift byte offsets and is not supported.
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
        }
    }
}

/// A single match as a byte range into the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

/// All non-overlapping matches of `needle` in `body`, left to right.
pub fn find_all(body: &str, needle: &str, options: SearchOptions) -> Vec<Match> {
    if needle.is_empty() {
        return Vec::new();
    }
    if options.case_sensitive {
        body.match_indices(needle)
            .map(|(start, matched)| Match {
                start,
                end: start + matched.len(),
            })
            .collect()
    } else {
        let mut matches = Vec::new();
        let len = needle.len();
        let mut at = 0;
        while at + len <= body.len() {
            if !body.is_char_boundary(at) {
                at += 1;
                continue;
            }
            if body.is_char_boundary(at + len)
                && body[at..at + len].eq_ignore_ascii_case(needle)
            {
                matches.push(Match {
                    start: at,
                    end: at + len,
                });
                at += len;
            } else {
                at += 1;
            }
        }
        matches
    }
}

/// Replaces every match, returning the rewritten body and the match count.
pub fn replace_all(
    body: &str,
    needle: &str,
    replacement: &str,
    options: SearchOptions,
) -> (String, usize) {
    let matches = find_all(body, needle, options);
    (splice(body, &matches, replacement), matches.len())
}

/// Replaces only the first match, returning the rewritten body and whether a
/// match was found.
pub fn replace_first(
    body: &str,
    needle: &str,
    replacement: &str,
    options: SearchOptions,
) -> (String, bool) {
    let matches = find_all(body, needle, options);
    match matches.first() {
        Some(first) => (splice(body, std::slice::from_ref(first), replacement), true),
        None => (body.to_string(), false),
    }
}

fn splice(body: &str, matches: &[Match], replacement: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut last = 0;
    for m in matches {
        out.push_str(&body[last..m.start]);
        out.push_str(replacement);
        last = m.end;
    }
    out.push_str(&body[last..]);
    out
}

/// A cursor over the matches of one search, cycling with wrap-around the way
/// a find bar's "next" button does.
#[derive(Debug, Clone)]
pub struct Finder {
    matches: Vec<Match>,
    current: Option<usize>,
}

impl Finder {
    pub fn new(body: &str, needle: &str, options: SearchOptions) -> Self {
        Self {
            matches: find_all(body, needle, options),
            current: None,
        }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Advances to the next match, wrapping to the first after the last.
    pub fn find_next(&mut self) -> Option<Match> {
        if self.matches.is_empty() {
            return None;
        }
        let next = match self.current {
            None => 0,
            Some(i) => (i + 1) % self.matches.len(),
        };
        self.current = Some(next);
        Some(self.matches[next])
    }

    pub fn current(&self) -> Option<Match> {
        self.current.map(|i| self.matches[i])
    }
}
