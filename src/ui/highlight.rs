use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::theme;

/// Syntax highlighting for fenced code blocks, backed by syntect's bundled
/// syntax definitions and themes.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    pub fn new() -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme = ThemeSet::load_defaults().themes["base16-ocean.dark"].clone();
        Highlighter { syntax_set, theme }
    }

    /// Highlight a fenced code block tagged with `lang`. Unknown languages
    /// fall back to the plain code style.
    pub fn highlight_block(&self, lang: &str, code: &str) -> Vec<Line<'static>> {
        let Some(syntax) = self.syntax_set.find_syntax_by_token(lang) else {
            return plain_block(code);
        };

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut out = Vec::new();
        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(regions) => {
                    let spans: Vec<Span<'static>> = regions
                        .into_iter()
                        .filter_map(|(style, text)| {
                            let text = text.trim_end_matches('\n');
                            if text.is_empty() {
                                None
                            } else {
                                Some(Span::styled(text.to_string(), convert(style)))
                            }
                        })
                        .collect();
                    out.push(Line::from(spans));
                }
                Err(_) => {
                    out.push(Line::from(Span::styled(
                        line.trim_end_matches('\n').to_string(),
                        theme::MD_CODE_BLOCK,
                    )));
                }
            }
        }
        out
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_block(code: &str) -> Vec<Line<'static>> {
    code.lines()
        .map(|l| Line::from(Span::styled(l.to_string(), theme::MD_CODE_BLOCK)))
        .collect()
}

fn convert(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut out = Style::new().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language_produces_one_line_per_code_line() {
        let hl = Highlighter::new();
        let lines = hl.highlight_block("rust", "fn main() {\n    println!(\"hi\");\n}\n");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn unknown_language_falls_back_to_plain_style() {
        let hl = Highlighter::new();
        let lines = hl.highlight_block("nosuchlang", "a\nb\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].style, theme::MD_CODE_BLOCK);
    }
}
