use crate::output::LineSink;
use crate::properties::TypeSignature;
use crate::renderer::traits::*;
use std::io;

/// Zero-width space, lets long names wrap in narrow table cells
pub const BREAK_HINT: &str = "&#x200B;";

/// Text shown in place of an empty property table
pub const NO_PROPERTY_TEXT: &str = "This class does not have any specific property.";

/// Helper for rendering type signatures
pub struct TypeRenderer;

impl TypeRenderer {
    /// Adds a break hint before every dot of a qualified name.
    pub fn hyphenate_dotted(&self, source: &str) -> String {
        source.replace('.', &format!("{}.", BREAK_HINT))
    }

    /// Adds a break hint between a lower-case letter and a following upper-case one.
    pub fn hyphenate_camel_case(&self, source: &str) -> String {
        let mut output = String::with_capacity(source.len());
        let mut chars = source.chars().peekable();
        while let Some(c) = chars.next() {
            output.push(c);
            if let Some(next) = chars.peek() {
                if c.is_lowercase() && next.is_uppercase() {
                    output.push_str(BREAK_HINT);
                }
            }
        }
        output
    }

    /// Renders `Outer<Inner1, Inner2>` with escaped angle brackets, linking
    /// each segment that carries an API documentation link.
    pub fn render_signature<F>(&self, signature: &TypeSignature, link: &F) -> String
    where
        F: Fn(&str, &str) -> String,
    {
        let name = self.hyphenate_camel_case(&signature.simple_name);
        let mut output = match &signature.link {
            Some(url) => link(&name, url),
            None => name,
        };

        if !signature.arguments.is_empty() {
            let arguments: Vec<String> = signature
                .arguments
                .iter()
                .map(|argument| self.render_signature(argument, link))
                .collect();
            output.push_str(&format!("{hint}&lt;{hint}", hint = BREAK_HINT));
            output.push_str(&arguments.join(&format!("{}, ", BREAK_HINT)));
            output.push_str(&format!("{hint}&gt;{hint}", hint = BREAK_HINT));
        }

        output
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    /// Writes `text` at the context's indentation. Embedded newlines become
    /// separate lines; only the first one is indented.
    pub fn write(context: &RenderContext, sink: &mut dyn LineSink, text: &str) -> io::Result<()> {
        let indent = context.indent();
        for (i, line) in text.split('\n').enumerate() {
            if i == 0 {
                sink.write_line(&format!("{}{}", indent, line))?;
            } else {
                sink.write_line(line)?;
            }
        }
        Ok(())
    }

    pub fn write_nested(
        context: &RenderContext,
        levels: usize,
        sink: &mut dyn LineSink,
        text: &str,
    ) -> io::Result<()> {
        Self::write(&context.with_depth(context.depth + levels), sink, text)
    }
}
