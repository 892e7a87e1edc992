//! Markdown-lite segmentation for bubble text.
//!
//! Exactly two constructs: fenced code blocks and inline backtick spans.
//! Everything else is plain text. An unterminated fence degrades to plain
//! text rather than swallowing the rest of the message.

/// A renderable chunk of a message body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    Code { lang: Option<String>, text: String },
}

/// A run of paragraph text, monospaced when `code` is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub code: bool,
}

pub fn parse(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut fence: Option<(Option<String>, Vec<&str>)> = None;

    for line in input.lines() {
        if let Some(rest) = line.trim_start().strip_prefix("```") {
            match fence.take() {
                None => {
                    flush_paragraph(&mut blocks, &mut paragraph);
                    let lang = rest.trim();
                    let lang = (!lang.is_empty()).then(|| lang.to_string());
                    fence = Some((lang, Vec::new()));
                }
                Some((lang, lines)) => {
                    blocks.push(Block::Code {
                        lang,
                        text: lines.join("\n"),
                    });
                }
            }
        } else if let Some((_, lines)) = fence.as_mut() {
            lines.push(line);
        } else {
            paragraph.push(line);
        }
    }

    if let Some((_, lines)) = fence.take() {
        paragraph.extend(lines);
    }
    flush_paragraph(&mut blocks, &mut paragraph);
    blocks
}

fn flush_paragraph(blocks: &mut Vec<Block>, lines: &mut Vec<&str>) {
    if lines.is_empty() {
        return;
    }
    let text = lines.join("\n");
    lines.clear();
    if text.trim().is_empty() {
        return;
    }
    blocks.push(Block::Paragraph(inline_spans(&text)));
}

/// Split a paragraph on paired backticks. An unmatched backtick stays
/// literal.
fn inline_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('`') {
        match rest[open + 1..].find('`') {
            Some(len) => {
                if open > 0 {
                    spans.push(Span {
                        text: rest[..open].to_string(),
                        code: false,
                    });
                }
                spans.push(Span {
                    text: rest[open + 1..open + 1 + len].to_string(),
                    code: true,
                });
                rest = &rest[open + len + 2..];
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        spans.push(Span {
            text: rest.to_string(),
            code: false,
        });
    }
    spans
}
