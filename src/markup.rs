//! Inline documentation markup translation.
//!
//! Comment text uses a small HTML dialect plus `{@code ...}` spans. The
//! translator scans the text once, left to right, replacing every token from
//! [`SOURCE_TOKENS`] with its counterpart in the target dialect. Anything else
//! is copied unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToken {
    ParagraphBreak,
    LineBreak,
    EmphasisOpen,
    EmphasisClose,
    BoldOpen,
    BoldClose,
    UnorderedListOpen,
    UnorderedListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    PreformattedOpen,
    PreformattedClose,
}

/// Source spellings, matched ASCII case-insensitively.
pub const SOURCE_TOKENS: &[(&str, InlineToken)] = &[
    ("<p>", InlineToken::ParagraphBreak),
    ("<br>", InlineToken::LineBreak),
    ("<br/>", InlineToken::LineBreak),
    ("<br />", InlineToken::LineBreak),
    ("<i>", InlineToken::EmphasisOpen),
    ("</i>", InlineToken::EmphasisClose),
    ("<em>", InlineToken::EmphasisOpen),
    ("</em>", InlineToken::EmphasisClose),
    ("<b>", InlineToken::BoldOpen),
    ("</b>", InlineToken::BoldClose),
    ("<strong>", InlineToken::BoldOpen),
    ("</strong>", InlineToken::BoldClose),
    ("<ul>", InlineToken::UnorderedListOpen),
    ("</ul>", InlineToken::UnorderedListClose),
    ("<ol>", InlineToken::OrderedListOpen),
    ("</ol>", InlineToken::OrderedListClose),
    ("<li>", InlineToken::ListItemOpen),
    ("</li>", InlineToken::ListItemClose),
    ("<pre>", InlineToken::PreformattedOpen),
    ("</pre>", InlineToken::PreformattedClose),
];

const CODE_SPAN_OPEN: &str = "{@code ";
const CODE_SPAN_CLOSE: char = '}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupDialect {
    Docbook,
    /// HTML as embedded in Markdown documents
    Markdown,
}

impl MarkupDialect {
    pub fn target(self, token: InlineToken) -> &'static str {
        use InlineToken::*;
        match self {
            MarkupDialect::Docbook => match token {
                ParagraphBreak | LineBreak => "</para><para>",
                EmphasisOpen => "<emphasis>",
                EmphasisClose | BoldClose => "</emphasis>",
                BoldOpen => "<emphasis role='bold'>",
                UnorderedListOpen => "<itemizedlist>",
                UnorderedListClose => "</itemizedlist>",
                OrderedListOpen => "<orderedlist>",
                OrderedListClose => "</orderedlist>",
                ListItemOpen => "<listitem><para>",
                ListItemClose => "</para></listitem>",
                PreformattedOpen => "<programlisting>",
                PreformattedClose => "</programlisting>",
            },
            MarkupDialect::Markdown => match token {
                ParagraphBreak => "<p>",
                LineBreak => "<br/>",
                EmphasisOpen => "<em>",
                EmphasisClose => "</em>",
                BoldOpen => "<strong>",
                BoldClose => "</strong>",
                UnorderedListOpen => "<ul>",
                UnorderedListClose => "</ul>",
                OrderedListOpen => "<ol>",
                OrderedListClose => "</ol>",
                ListItemOpen => "<li>",
                ListItemClose => "</li>",
                PreformattedOpen => "<pre>",
                PreformattedClose => "</pre>",
            },
        }
    }

    pub fn code_span(self, content: &str) -> String {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        format!("<code>{}</code>", escaped)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InlineMarkupTranslator {
    dialect: MarkupDialect,
}

impl InlineMarkupTranslator {
    pub fn new(dialect: MarkupDialect) -> Self {
        Self { dialect }
    }

    pub fn translate(&self, source: &str) -> String {
        let mut output = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            if c == '{' {
                if let Some((content, remaining)) = code_span(rest) {
                    output.push_str(&self.dialect.code_span(content));
                    rest = remaining;
                    continue;
                }
            } else if c == '<' {
                if let Some((token, len)) = match_token(rest) {
                    output.push_str(self.dialect.target(token));
                    rest = &rest[len..];
                    continue;
                }
            }
            output.push(c);
            rest = &rest[c.len_utf8()..];
        }

        output
    }
}

fn match_token(text: &str) -> Option<(InlineToken, usize)> {
    SOURCE_TOKENS.iter().find_map(|(spelling, token)| {
        text.get(..spelling.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(spelling))
            .map(|_| (*token, spelling.len()))
    })
}

// Splits `{@code body}rest` into `body` and `rest`.
fn code_span(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_prefix(CODE_SPAN_OPEN)?;
    let end = body.find(CODE_SPAN_CLOSE)?;
    Some((&body[..end], &body[end + CODE_SPAN_CLOSE.len_utf8()..]))
}
