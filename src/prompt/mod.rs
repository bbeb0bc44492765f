//! Prompt text describing the case conversion functions to a language model.

pub mod tools;

use crate::case::CaseStyle;

pub use tools::tool_definitions;

const PREAMBLE: &str = "\
You have access to string case conversion functions. Each one splits its \
input into words, where a word is a maximal run of letters or digits and \
every other character (spaces, punctuation, underscores, hyphens, dots) is a \
separator. Accents and other combining marks stay with the letter they \
follow. The words are then re-cased and joined according to the target \
style. Existing capitalization does not create word breaks, so \"fooBar\" is \
a single word. An empty input, or one made only of separators, produces an \
empty string.";

/// One paragraph describing what converting to `style` does
pub fn describe(style: CaseStyle) -> &'static str {
    match style {
        CaseStyle::Camel => {
            "camelCase: the first word is written in lower case and every \
             following word starts with an upper-case letter, with no \
             separator. Example: \"Hello big WORLD\" becomes \"helloBigWorld\"."
        }
        CaseStyle::Kebab => {
            "kebab-case: every word is written in lower case and the words are \
             joined with hyphens. Example: \"Hello big WORLD\" becomes \
             \"hello-big-world\"."
        }
        CaseStyle::Dot => {
            "dot.case: every word is written in lower case and the words are \
             joined with dots. Example: \"Hello big WORLD\" becomes \
             \"hello.big.world\"."
        }
        CaseStyle::Snake => {
            "snake_case: every word is written in lower case and the words are \
             joined with underscores. Example: \"Hello big WORLD\" becomes \
             \"hello_big_world\"."
        }
        CaseStyle::Pascal => {
            "PascalCase: every word starts with an upper-case letter followed \
             by lower case, with no separator. Example: \"Hello big WORLD\" \
             becomes \"HelloBigWorld\"."
        }
    }
}

/// Build a system prompt covering `styles`, in the order given
pub fn system_prompt(styles: &[CaseStyle]) -> String {
    let mut prompt = String::from(PREAMBLE);
    prompt.push_str("\n\nAvailable functions:\n");

    for style in styles {
        prompt.push_str(&format!(
            "\n- {}: {}\n",
            tools::function_name(*style),
            describe(*style)
        ));
    }

    prompt
}
