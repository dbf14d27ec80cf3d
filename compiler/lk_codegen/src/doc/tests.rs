#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;

use super::*;
use pretty_assertions::assert_eq;

const TWO_PARAGRAPHS: &str = "First paragraph.\n\nSecond one.";

#[test]
fn paragraphs_are_split_on_blank_lines() {
    let text = "  First line\n  continues here.\n\n\n  Second.\n";
    assert_eq!(
        split_paragraphs(text),
        vec!["First line continues here.", "Second."]
    );
    assert!(split_paragraphs("\n   \n").is_empty());
}

#[test]
fn width_accounts_for_indentation() {
    assert_eq!(available_width(0), 79);
    assert_eq!(available_width(4), 75);
    assert_eq!(available_width(100), 0);
}

#[test]
fn wrap_is_greedy() {
    assert_eq!(wrap("aaa bbb ccc ddd", 10), vec!["aaa bbb", "ccc ddd"]);
    assert_eq!(wrap("aaa   bbb", 80), vec!["aaa   bbb"]);
    assert_eq!(wrap("aaa   bbb", 5), vec!["aaa", "bbb"]);
}

#[test]
fn wrap_fills_line_before_splitting_long_words() {
    assert_eq!(wrap("abcdefghijkl", 5), vec!["abcde", "fghij", "kl"]);
    assert_eq!(wrap("ab abcdefghijkl", 5), vec!["ab ab", "cdefg", "hijkl"]);
}

#[test]
fn wrap_breaks_after_hyphens() {
    assert_eq!(
        wrap("aaaa ref-counted objects", 10),
        vec!["aaaa ref-", "counted", "objects"]
    );
    assert_eq!(split_chunks("ab-cd-ef"), vec!["ab-", "cd-", "ef"]);
    // Digits and single letters next to the hyphen do not allow a break.
    assert_eq!(split_chunks("x-ray 4-byte"), vec!["x-ray", " ", "4-byte"]);
}

#[test]
fn long_word_splits_at_last_fitting_hyphen() {
    assert_eq!(
        wrap("non-overlapping-ranges", 12),
        vec!["non-", "overlapping-", "ranges"]
    );
    assert_eq!(wrap("ab 1-2-3-4-5-6", 6), vec!["ab 1-", "2-3-4-", "5-6"]);
}

#[test]
fn plain_text_is_indented() {
    assert_eq!(
        format_text(TWO_PARAGRAPHS, 2),
        "  First paragraph.\n\n  Second one."
    );
}

#[test]
fn ada_comment() {
    assert_eq!(
        format_ada(TWO_PARAGRAPHS, 3),
        "--  First paragraph.\n   --\n   --  Second one."
    );
}

#[test]
fn c_comment_closes_on_last_line() {
    assert_eq!(
        format_c("Return the node kind.", 0),
        "/* Return the node kind.  */"
    );
    assert_eq!(
        format_c("Para one.\n\nPara two.", 4),
        "/* Para one.\n    \n       Para two.  */"
    );
}

#[test]
fn c_comment_moves_last_word_when_full() {
    let words = ["abcdefghi"; 7].join(" ");
    let text = format!("{words} abcdef");
    assert_eq!(format_c(&text, 0), format!("/* {words}\n   abcdef   */"));
}

#[test]
fn c_comment_of_nothing_is_empty() {
    assert_eq!(format_c("", 0), "");
}

#[test]
fn python_docstring() {
    assert_eq!(
        format_python("Para one.\n\nPara two.", 4),
        "\"\"\"\n    Para one.\n\n    Para two.\n    \"\"\""
    );
}

#[test]
fn long_text_wraps_within_line_width() {
    let text = "Data type for all AST nodes. AST nodes are assembled to make up a \
                tree. See the AST node primitives below to inspect such trees.";
    let formatted = format_ada(text, 6);
    for line in formatted.lines() {
        assert!(line.len() <= LINE_WIDTH, "line too long: {line:?}");
        assert!(line.trim_start().starts_with("--  "));
    }
    assert!(formatted.lines().count() > 1);
}

#[test]
fn language_conventions() {
    assert_eq!(
        DocLang::Ada.template_vars(),
        [("lang", "ada"), ("null", "null"), ("TODO", "???")]
    );
    assert_eq!(DocLang::C.null_name(), "NULL");
    assert_eq!(DocLang::Python.null_name(), "None");
    assert_eq!(DocLang::Python.todo_marker(), "TODO:");
    assert_eq!(DocLang::C.to_string(), "c");
}

#[test]
fn printer_dispatches_on_language() {
    let c = DocPrinter::new(DocLang::C);
    assert_eq!(c.lang(), DocLang::C);
    assert_eq!(c.print("Hello.", 0), "/* Hello.  */");
    assert_eq!(c.print("  \n ", 0), "");

    let ada = DocPrinter::new(DocLang::Ada);
    assert_eq!(ada.print("Hello.", 3), "--  Hello.");

    let py = DocPrinter::new(DocLang::Python);
    assert_eq!(py.print("Hello.", 0), "\"\"\"\nHello.\n\"\"\"");
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum DocError {
    #[error("no documentation for `{0}`")]
    Unknown(String),
}

/// Looks entities up in its environment and substitutes `${name}` variables.
struct Substitute;

impl Renderer for Substitute {
    type Env = BTreeMap<&'static str, &'static str>;
    type Error = DocError;

    fn render(
        &self,
        template: &str,
        env: &Self::Env,
        visibility: Visibility,
        extra: &ExtraArgs,
    ) -> Result<String, DocError> {
        assert_eq!(visibility, Visibility::Public);
        let text = env
            .get(template)
            .ok_or_else(|| DocError::Unknown(template.to_string()))?;
        Ok(extra.iter().fold(text.to_string(), |acc, (name, value)| {
            acc.replace(&format!("${{{name}}}"), value)
        }))
    }
}

fn docs() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("parent", "Return ${null} when the node has no parent."),
        ("binding", "${TODO} describe the ${lang} binding."),
        ("undocumented", "   "),
    ])
}

#[test]
fn entity_rendered_with_language_variables() {
    let c = DocPrinter::new(DocLang::C);
    assert_eq!(
        c.print_entity(&Substitute, "parent", &docs(), &ExtraArgs::new(), 0),
        Ok("/* Return NULL when the node has no parent.  */".to_string())
    );

    let ada = DocPrinter::new(DocLang::Ada);
    assert_eq!(
        ada.print_entity(&Substitute, "binding", &docs(), &ExtraArgs::new(), 3),
        Ok("--  ??? describe the ada binding.".to_string())
    );
}

#[test]
fn ada_layout_with_c_variables() {
    let printer = DocPrinter::ada_c();
    assert_eq!(printer.lang(), DocLang::Ada);
    assert_eq!(printer.template_lang(), DocLang::C);
    assert_eq!(
        printer.print_entity(&Substitute, "parent", &docs(), &ExtraArgs::new(), 0),
        Ok("--  Return NULL when the node has no parent.".to_string())
    );
}

#[test]
fn extra_arguments_override_language_variables() {
    let py = DocPrinter::new(DocLang::Python);
    let extra = ExtraArgs::from([("lang".to_string(), "ocaml".to_string())]);
    assert_eq!(
        py.print_entity(&Substitute, "binding", &docs(), &extra, 0)
            .expect("known entity"),
        "\"\"\"\nTODO: describe the ocaml binding.\n\"\"\""
    );
}

#[test]
fn blank_entity_documentation_is_empty() {
    let c = DocPrinter::new(DocLang::C);
    assert_eq!(
        c.print_entity(&Substitute, "undocumented", &docs(), &ExtraArgs::new(), 4),
        Ok(String::new())
    );
}

#[test]
fn render_error_is_returned() {
    let c = DocPrinter::new(DocLang::C);
    assert_eq!(
        c.print_entity(&Substitute, "missing", &docs(), &ExtraArgs::new(), 0),
        Err(DocError::Unknown("missing".to_string()))
    );
}
