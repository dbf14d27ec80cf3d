//! Documentation layout for generated bindings.
//!
//! The same documentation chunk ends up in several generated languages. The
//! chunk text is produced by a [`Renderer`] (with [`DocLang::template_vars`]
//! as extra arguments, see [`DocPrinter::print_entity`]) and then laid out
//! here as a comment or docstring for the target language, wrapped to the
//! available line width.

use std::fmt;

use crate::render::{ExtraArgs, Renderer, Visibility};

/// Maximum length of generated source lines.
pub const LINE_WIDTH: usize = 79;

/// Target language of a documentation chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocLang {
    Ada,
    C,
    Python,
}

impl DocLang {
    /// Language tag passed to documentation templates.
    pub const fn name(self) -> &'static str {
        match self {
            DocLang::Ada => "ada",
            DocLang::C => "c",
            DocLang::Python => "python",
        }
    }

    /// Spelling of the null value.
    pub const fn null_name(self) -> &'static str {
        match self {
            DocLang::Ada => "null",
            DocLang::C => "NULL",
            DocLang::Python => "None",
        }
    }

    /// Marker for unfinished documentation.
    pub const fn todo_marker(self) -> &'static str {
        match self {
            DocLang::Ada => "???",
            DocLang::C | DocLang::Python => "TODO:",
        }
    }

    /// Variables documentation templates expect: `lang`, `null` and `TODO`.
    pub const fn template_vars(self) -> [(&'static str, &'static str); 3] {
        [
            ("lang", self.name()),
            ("null", self.null_name()),
            ("TODO", self.todo_marker()),
        ]
    }

    /// Lay out `text` as a documentation block of this language.
    pub fn format(self, text: &str, column: usize) -> String {
        match self {
            DocLang::Ada => format_ada(text, column),
            DocLang::C => format_c(text, column),
            DocLang::Python => format_python(text, column),
        }
    }
}

impl fmt::Display for DocLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders documentation entities and lays them out for one language.
///
/// Templates see the `lang`, `null` and `TODO` variables of the template
/// language, which is usually the layout language. [`DocPrinter::ada_c`]
/// documents C entities inside Ada sources: C variables, Ada layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocPrinter {
    lang: DocLang,
    template_lang: DocLang,
}

impl DocPrinter {
    pub const fn new(lang: DocLang) -> Self {
        Self {
            lang,
            template_lang: lang,
        }
    }

    /// Ada layout over C template variables.
    pub const fn ada_c() -> Self {
        Self {
            lang: DocLang::Ada,
            template_lang: DocLang::C,
        }
    }

    /// Layout language.
    #[inline]
    pub const fn lang(&self) -> DocLang {
        self.lang
    }

    /// Language whose conventions fill the template variables.
    #[inline]
    pub const fn template_lang(&self) -> DocLang {
        self.template_lang
    }

    /// Format `text` at `column`. Blank text yields an empty string.
    pub fn print(&self, text: &str, column: usize) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        self.lang.format(text, column)
    }

    /// Render the documentation template `entity` and format the result.
    ///
    /// The language variables are passed as extra arguments; entries in
    /// `extra` override them. Documentation has no private part, so the
    /// render is always public.
    pub fn print_entity<R>(
        &self,
        renderer: &R,
        entity: &str,
        env: &R::Env,
        extra: &ExtraArgs,
        column: usize,
    ) -> Result<String, R::Error>
    where
        R: Renderer + ?Sized,
    {
        let mut args: ExtraArgs = self
            .template_lang
            .template_vars()
            .iter()
            .map(|&(name, value)| (name.to_string(), value.to_string()))
            .collect();
        args.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        let text = renderer.render(entity, env, Visibility::Public, &args)?;
        Ok(self.print(&text, column))
    }
}

/// Split text into paragraphs separated by blank lines.
///
/// Lines of a paragraph are stripped and joined with single spaces.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Columns left on a line indented by `column`.
#[inline]
pub const fn available_width(column: usize) -> usize {
    LINE_WIDTH.saturating_sub(column)
}

/// Greedy word wrap.
///
/// Whitespace runs are kept inside a line and dropped at line boundaries.
/// Hyphenated words may break after a hyphen. A chunk longer than `width`
/// is split, its first piece filling whatever room is left on the current
/// line.
fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let text: String = paragraph
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    let mut chunks = split_chunks(&text);
    chunks.reverse();
    let mut lines = Vec::new();

    while !chunks.is_empty() {
        let mut line: Vec<&str> = Vec::new();
        let mut line_len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(&chunk) = chunks.last() {
            let len = chunk.chars().count();
            if line_len + len > width {
                break;
            }
            line.push(chunk);
            line_len += len;
            chunks.pop();
        }

        if chunks.last().is_some_and(|c| c.chars().count() > width) {
            break_long_chunk(&mut chunks, &mut line, width - line_len);
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}

fn is_blank(chunk: &str) -> bool {
    chunk.trim().is_empty()
}

/// Move the head of the oversized chunk on top of `chunks` onto `line`.
///
/// The piece ends after the last hyphen that fits, if any, otherwise at
/// `space_left` characters.
fn break_long_chunk<'a>(chunks: &mut Vec<&'a str>, line: &mut Vec<&'a str>, space_left: usize) {
    let Some(chunk) = chunks.pop() else {
        return;
    };
    let mut end = chunk
        .char_indices()
        .nth(space_left)
        .map_or(chunk.len(), |(i, _)| i);
    if let Some(hyphen) = chunk[..end].rfind('-') {
        if hyphen > 0 && chunk[..hyphen].chars().any(|c| c != '-') {
            end = hyphen + 1;
        }
    }
    line.push(&chunk[..end]);
    chunks.push(&chunk[end..]);
}

/// Split text into alternating whitespace runs and words, with hyphenated
/// words further split after each breakable hyphen.
fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut blank = None;

    for (i, c) in text.char_indices() {
        let is_space = c == ' ';
        if blank.is_some_and(|b| b != is_space) {
            push_run(&text[start..i], blank == Some(true), &mut chunks);
            start = i;
        }
        blank = Some(is_space);
    }
    if start < text.len() {
        push_run(&text[start..], blank == Some(true), &mut chunks);
    }

    chunks
}

fn push_run<'a>(run: &'a str, blank: bool, chunks: &mut Vec<&'a str>) {
    if blank {
        chunks.push(run);
        return;
    }

    // A hyphen is breakable between two letters on its left (or a
    // letter-hyphen-letter sequence) and a letter pair on its right, with
    // an optional hyphen inside that pair.
    let chars: Vec<(usize, char)> = run.char_indices().collect();
    let letter = |k: usize| {
        chars
            .get(k)
            .is_some_and(|&(_, c)| c.is_alphabetic() || c == '_')
    };
    let dash = |k: usize| chars.get(k).is_some_and(|&(_, c)| c == '-');

    let mut start = 0;
    for (k, &(offset, c)) in chars.iter().enumerate() {
        if c != '-' {
            continue;
        }
        let left = (k >= 2 && letter(k - 1) && letter(k - 2))
            || (k >= 3 && letter(k - 1) && dash(k - 2) && letter(k - 3));
        let right = letter(k + 1) && (letter(k + 2) || (dash(k + 2) && letter(k + 3)));
        if left && right {
            chunks.push(&run[start..=offset]);
            start = offset + 1;
        }
    }
    chunks.push(&run[start..]);
}

/// Plain indented text; every line starts at `column`.
pub fn format_text(text: &str, column: usize) -> String {
    let width = available_width(column);
    let indent = " ".repeat(column);
    let mut lines = Vec::new();

    for (i, paragraph) in split_paragraphs(text).iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(wrap(paragraph, width).into_iter().map(|line| format!("{indent}{line}")));
    }

    lines.join("\n")
}

/// Ada comment block. The first line is emitted without indentation.
pub fn format_ada(text: &str, column: usize) -> String {
    let width = available_width(column).saturating_sub(4);
    let mut lines = Vec::new();

    for (i, paragraph) in split_paragraphs(text).iter().enumerate() {
        if i > 0 {
            lines.push("--".to_string());
        }
        lines.extend(wrap(paragraph, width).into_iter().map(|line| format!("--  {line}")));
    }

    lines.join(&format!("\n{}", " ".repeat(column)))
}

/// C block comment. The first line is emitted without indentation.
///
/// The closing marker stays on the last line when it fits; otherwise the
/// last word moves to a new line together with the marker.
pub fn format_c(text: &str, column: usize) -> String {
    let width = available_width(column);
    let mut lines: Vec<String> = Vec::new();

    for (i, paragraph) in split_paragraphs(text).iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        for (j, line) in wrap(paragraph, width.saturating_sub(3)).into_iter().enumerate() {
            let prefix = if i == 0 && j == 0 { "/* " } else { "   " };
            lines.push(format!("{prefix}{line}"));
        }
    }

    let Some(last) = lines.pop() else {
        return String::new();
    };
    if width.saturating_sub(last.chars().count()) >= 4 {
        lines.push(format!("{last}  */"));
    } else if let Some((head, last_word)) = last.trim_end().rsplit_once(char::is_whitespace) {
        let head = head.trim_end();
        if head.trim().is_empty() || head == "/*" {
            lines.push(format!("{}  */", last.trim_end()));
        } else {
            lines.push(head.to_string());
            lines.push(format!("   {last_word}   */"));
        }
    } else {
        lines.push(last);
        lines.push("   */".to_string());
    }

    lines.join(&format!("\n{}", " ".repeat(column)))
}

/// Python docstring, closing quotes aligned at `column`.
pub fn format_python(text: &str, column: usize) -> String {
    let width = available_width(column);
    let indent = " ".repeat(column);
    let mut lines = vec!["\"\"\"".to_string()];

    for (i, paragraph) in split_paragraphs(text).iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(wrap(paragraph, width).into_iter().map(|line| format!("{indent}{line}")));
    }

    lines.push(format!("{indent}\"\"\""));
    lines.join("\n")
}

#[cfg(test)]
mod tests;
