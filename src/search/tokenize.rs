//! Shell-style splitting of search queries into terms.

/// One unit of a tokenized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term<'a> {
    /// A run of characters that are neither whitespace nor `"`.
    Word(&'a str),
    /// A `"`-delimited span, quotes included. May contain whitespace.
    Phrase(&'a str),
}

impl<'a> Term<'a> {
    /// The term exactly as it appeared in the query.
    pub fn raw(&self) -> &'a str {
        match *self {
            Self::Word(text) | Self::Phrase(text) => text,
        }
    }

    /// Lowercased comparison string, with one pair of surrounding quotes removed.
    pub fn needle(&self) -> String {
        let lowered = self.raw().to_lowercase();
        match unquote(&lowered) {
            Some(inner) => inner.to_string(),
            None => lowered,
        }
    }
}

/// Strip exactly one leading and one trailing `"` when the text is at least
/// two characters long and wrapped in quotes.
fn unquote(text: &str) -> Option<&str> {
    if text.len() >= 2 {
        text.strip_prefix('"')?.strip_suffix('"')
    } else {
        None
    }
}

/// Characters that separate terms: the regex `\s` class of the documentation
/// site's query pattern. Unlike [`char::is_whitespace`] this includes U+FEFF
/// and excludes U+0085.
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Split a query into terms, in order.
///
/// - Separators (see [`is_separator`]) end terms and are otherwise discarded.
/// - `"` opens a phrase that runs to the next `"`; the phrase keeps both quotes.
/// - A `"` with no closing partner is skipped, and scanning resumes after it.
/// - Anything else is a bare word that ends at whitespace or `"`.
///
/// `say "hello world" test` yields `say`, `"hello world"`, `test`.
pub fn split_terms(query: &str) -> Vec<Term<'_>> {
    let mut terms = Vec::new();
    let mut rest = query;

    while let Some(c) = rest.chars().next() {
        if is_separator(c) {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '"' {
            if let Some(close) = rest[1..].find('"') {
                let end = close + 2;
                terms.push(Term::Phrase(&rest[..end]));
                rest = &rest[end..];
            } else {
                rest = &rest[1..];
            }
            continue;
        }

        let end = rest
            .find(|ch: char| is_separator(ch) || ch == '"')
            .unwrap_or(rest.len());
        terms.push(Term::Word(&rest[..end]));
        rest = &rest[end..];
    }

    terms
}
