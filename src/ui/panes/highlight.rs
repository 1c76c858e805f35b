//! Line-level syntax highlighting shared by the source and output panes
//!
//! A character scanner, not a lexer: it never fails, so half-typed or
//! rejected source still renders.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Which keyword table and comment marker to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
    Python,
}

impl Language {
    fn starts_comment(self, chars: &[char], i: usize) -> bool {
        match self {
            Language::Cpp => chars[i] == '/' && chars.get(i + 1) == Some(&'/'),
            Language::Python => chars[i] == '#',
        }
    }

    fn word_style(self, word: &str, is_call: bool) -> Style {
        if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Style::default().fg(DEFAULT_THEME.number);
        }

        let class = match self {
            Language::Cpp => match word {
                "int" | "float" | "string" => WordClass::Type,
                "class" | "if" | "else" | "for" | "while" | "return" | "namespace" | "using" => {
                    WordClass::Keyword
                }
                "cout" | "endl" | "std" | "iostream" => WordClass::Builtin,
                _ => WordClass::Plain,
            },
            Language::Python => match word {
                "def" | "class" | "if" | "else" | "for" | "in" | "while" | "return" | "and"
                | "or" | "not" => WordClass::Keyword,
                "print" | "range" | "self" | "__init__" | "sep" | "end" => WordClass::Builtin,
                _ => WordClass::Plain,
            },
        };

        match class {
            WordClass::Type => Style::default().fg(DEFAULT_THEME.type_name),
            WordClass::Keyword => Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD),
            WordClass::Builtin => Style::default().fg(DEFAULT_THEME.builtin),
            WordClass::Plain if is_call => Style::default().fg(DEFAULT_THEME.function),
            WordClass::Plain => Style::default().fg(DEFAULT_THEME.fg),
        }
    }
}

enum WordClass {
    Type,
    Keyword,
    Builtin,
    Plain,
}

/// Split one line into styled spans.
pub fn highlight_line(line: &str, language: Language) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut word = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if language.starts_comment(&chars, i) {
            flush_word(&mut word, &mut spans, language, false);
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        if c == '"' || (language == Language::Python && c == '\'') {
            flush_word(&mut word, &mut spans, language, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            i = end;
            continue;
        }

        // `#include` is one unit in C++
        if language == Language::Cpp && c == '#' {
            flush_word(&mut word, &mut spans, language, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end].is_alphabetic() {
                end += 1;
            }
            let directive: String = chars[i..end].iter().collect();
            spans.push(Span::styled(directive, Style::default().fg(DEFAULT_THEME.secondary)));
            i = end;
            continue;
        }

        // A '.' inside a number stays part of it
        let in_number = c == '.' && word.chars().next().is_some_and(|d| d.is_ascii_digit());
        if !c.is_alphanumeric() && c != '_' && !in_number {
            flush_word(&mut word, &mut spans, language, c == '(');
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        word.push(c);
        i += 1;
    }

    flush_word(&mut word, &mut spans, language, false);
    Line::from(spans)
}

fn flush_word(word: &mut String, spans: &mut Vec<Span<'static>>, language: Language, is_call: bool) {
    if !word.is_empty() {
        let style = language.word_style(word, is_call);
        spans.push(Span::styled(std::mem::take(word), style));
    }
}
