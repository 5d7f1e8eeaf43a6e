use std::path::Path;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::highlight::Highlighter;
use super::theme;

/// Render a note's buffer into styled preview lines.
///
/// Commonmark plus the GFM extensions (strikethrough, tables, task lists).
/// Fenced code blocks with a language tag go through the syntax highlighter;
/// image sources are resolved against `base_dir` and render a visible
/// failure indicator carrying the alt text when the file is missing.
pub fn render(text: &str, base_dir: Option<&Path>, highlighter: &Highlighter) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    enum ListKind {
        Bullet,
        Ordered(u64),
    }

    let mut out: Vec<Line<'static>> = Vec::new();
    let mut line = String::new();
    let mut in_heading = false;
    let mut quote_depth = 0usize;
    let mut list_stack: Vec<ListKind> = Vec::new();
    // (language if fenced, body) of the code block being collected
    let mut code: Option<(Option<String>, String)> = None;
    // (source, alt text) of the image being collected
    let mut image: Option<(String, String)> = None;

    fn flush(line: &mut String, style: Style, out: &mut Vec<Line<'static>>) {
        if !line.is_empty() {
            out.push(Line::from(Span::styled(std::mem::take(line), style)));
        }
    }

    fn block_style(in_heading: bool, quote_depth: usize) -> Style {
        if in_heading {
            theme::MD_HEADING
        } else if quote_depth > 0 {
            theme::MD_QUOTE
        } else {
            theme::MD_NORMAL
        }
    }

    for event in Parser::new_ext(text, options) {
        if code.is_some() {
            match event {
                Event::Text(t) | Event::Code(t) => {
                    if let Some((_, body)) = code.as_mut() {
                        body.push_str(&t);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    let (lang, body) = code.take().unwrap_or((None, String::new()));
                    match lang {
                        Some(lang) if !lang.is_empty() => {
                            out.push(fence_line(&format!("```{lang}")));
                            out.extend(highlighter.highlight_block(&lang, &body));
                            out.push(fence_line("```"));
                        }
                        Some(_) => {
                            out.push(fence_line("```"));
                            out.extend(plain_code_lines(&body));
                            out.push(fence_line("```"));
                        }
                        None => out.extend(plain_code_lines(&body)),
                    }
                    out.push(Line::default());
                }
                _ => {}
            }
            continue;
        }

        if image.is_some() {
            match event {
                Event::Text(t) | Event::Code(t) => {
                    if let Some((_, alt)) = image.as_mut() {
                        alt.push_str(&t);
                    }
                }
                Event::End(TagEnd::Image) => {
                    let (src, alt) = image.take().unwrap_or_default();
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    out.push(image_line(&src, &alt, base_dir));
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {}
                Tag::Heading { level, .. } => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    in_heading = true;
                    line.push_str(&"#".repeat(level as usize));
                    line.push(' ');
                }
                Tag::BlockQuote(_) => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    quote_depth += 1;
                }
                Tag::List(start) => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    match start {
                        Some(n) => list_stack.push(ListKind::Ordered(n)),
                        None => list_stack.push(ListKind::Bullet),
                    }
                }
                Tag::Item => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    for _ in 0..quote_depth {
                        line.push_str("> ");
                    }
                    line.push_str(&"  ".repeat(list_stack.len().saturating_sub(1)));
                    match list_stack.last_mut() {
                        Some(ListKind::Bullet) | None => line.push_str("- "),
                        Some(ListKind::Ordered(n)) => {
                            line.push_str(&format!("{n}. "));
                            *n += 1;
                        }
                    }
                }
                Tag::CodeBlock(kind) => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    code = Some(match kind {
                        CodeBlockKind::Fenced(lang) => (Some(lang.to_string()), String::new()),
                        CodeBlockKind::Indented => (None, String::new()),
                    });
                }
                Tag::Image { dest_url, .. } => {
                    image = Some((dest_url.to_string(), String::new()));
                }
                Tag::Table(_) | Tag::TableHead | Tag::TableRow => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Paragraph => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    out.push(Line::default());
                }
                TagEnd::Heading(_) => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    in_heading = false;
                    out.push(Line::default());
                }
                TagEnd::BlockQuote(_) => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    quote_depth = quote_depth.saturating_sub(1);
                    out.push(Line::default());
                }
                TagEnd::List(_) => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    list_stack.pop();
                    out.push(Line::default());
                }
                TagEnd::Item => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                }
                TagEnd::Table => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                    out.push(Line::default());
                }
                TagEnd::TableHead | TagEnd::TableRow => {
                    flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                }
                TagEnd::TableCell => line.push_str(" | "),
                _ => {}
            },
            Event::Text(t) => line.push_str(&t),
            Event::Code(t) => {
                line.push('`');
                line.push_str(&t);
                line.push('`');
            }
            Event::SoftBreak => line.push(' '),
            Event::HardBreak => flush(&mut line, block_style(in_heading, quote_depth), &mut out),
            Event::Rule => {
                flush(&mut line, block_style(in_heading, quote_depth), &mut out);
                out.push(Line::from(Span::styled("─".repeat(40), theme::MD_RULE)));
                out.push(Line::default());
            }
            Event::TaskListMarker(done) => {
                line.push_str(if done { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }
    flush(&mut line, block_style(in_heading, quote_depth), &mut out);

    while out.last().is_some_and(|l| l.width() == 0) {
        out.pop();
    }
    out
}

fn fence_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), theme::MD_CODE_FENCE))
}

fn plain_code_lines(body: &str) -> Vec<Line<'static>> {
    body.lines()
        .map(|l| Line::from(Span::styled(l.to_string(), theme::MD_CODE_BLOCK)))
        .collect()
}

fn image_line(src: &str, alt: &str, base_dir: Option<&Path>) -> Line<'static> {
    // Remote sources can't be checked without a network layer; render them
    // as plain placeholders.
    let remote = src.starts_with("http://") || src.starts_with("https://");
    let exists = remote || base_dir.map(|d| d.join(src).exists()).unwrap_or(false);
    if exists {
        Line::from(Span::styled(
            format!("[image] {alt} ({src})"),
            theme::MD_IMAGE,
        ))
    } else {
        Line::from(Span::styled(
            format!("Failed to load image: {alt}"),
            theme::MD_IMAGE_ERR,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    fn rendered(input: &str) -> Vec<String> {
        let hl = Highlighter::new();
        render(input, None, &hl).iter().map(text_of).collect()
    }

    #[test]
    fn headings_keep_their_level_markers_and_style() {
        let hl = Highlighter::new();
        let lines = render("## Tasks", None, &hl);
        assert_eq!(text_of(&lines[0]), "## Tasks");
        assert_eq!(lines[0].spans[0].style, theme::MD_HEADING);
    }

    #[test]
    fn fenced_code_with_language_is_framed_and_highlighted() {
        let lines = rendered("```rust\nfn main() {}\n```");
        assert_eq!(lines[0], "```rust");
        assert_eq!(lines[1], "fn main() {}");
        assert_eq!(lines[2], "```");
    }

    #[test]
    fn missing_image_renders_failure_with_alt_text() {
        let dir = tempfile::tempdir().unwrap();
        let hl = Highlighter::new();
        let lines = render("![diagram](missing.png)", Some(dir.path()), &hl);
        let all: Vec<String> = lines.iter().map(text_of).collect();
        assert!(all.contains(&"Failed to load image: diagram".to_string()));
    }

    #[test]
    fn existing_image_renders_placeholder_with_alt_text() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pic.png"), [0u8; 4]).unwrap();
        let hl = Highlighter::new();
        let lines = render("![photo](pic.png)", Some(dir.path()), &hl);
        let all: Vec<String> = lines.iter().map(text_of).collect();
        assert!(all.contains(&"[image] photo (pic.png)".to_string()));
    }

    #[test]
    fn task_lists_and_bullets_render_markers() {
        let lines = rendered("- [x] done\n- [ ] open\n- plain");
        assert_eq!(lines[0], "- [x] done");
        assert_eq!(lines[1], "- [ ] open");
        assert_eq!(lines[2], "- plain");
    }

    #[test]
    fn preview_reflects_buffer_not_disk() {
        // Rendering takes the raw string; no file access besides images.
        let lines = rendered("hello *world*");
        assert_eq!(lines[0], "hello world");
    }
}
