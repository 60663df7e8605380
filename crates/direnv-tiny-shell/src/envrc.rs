use regex::Regex;
use std::iter::Enumerate;
use std::str::Lines;
use std::sync::LazyLock;

static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([[:alnum:]_]+)=(.*)$").expect("declaration regex is valid"));

const QUOTES: [char; 2] = ['"', '\''];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Lazy iterator over the declarations of one `.envrc` file.
///
/// Blank lines and `#` comments are skipped silently. Lines that are not
/// `KEY=VALUE` are logged at warn level and skipped.
pub struct Entries<'a> {
    lines: Enumerate<Lines<'a>>,
}

#[must_use]
pub fn entries(content: &str) -> Entries<'_> {
    Entries {
        lines: content.lines().enumerate(),
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = EnvEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(captures) = DECLARATION.captures(line) else {
                log::warn!("Invalid line {} in .envrc: {line}", index + 1);
                continue;
            };

            let (_, [key, value]) = captures.extract();

            return Some(EnvEntry {
                key,
                value: strip_quotes(value),
            });
        }

        None
    }
}

/// Removes a leading and a trailing `"` or `'`. The two ends are checked
/// independently, so mismatched quotes are stripped too.
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    if value.len() < 2 {
        return value;
    }
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}
