use crate::document::TextRun;
use folio_resource::FontTable;

/// A contiguous piece of one run on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFragment {
    pub run_index: usize,
    pub text: String,
    /// Offset from the start of the line.
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub fragments: Vec<LineFragment>,
    /// Width of the set text, without trailing space.
    pub width: f32,
    /// Largest font size on the line.
    pub max_size: f32,
}

struct Piece {
    run_index: usize,
    text: String,
    width: f32,
}

enum Token {
    Word { pieces: Vec<Piece>, width: f32 },
    Space { run_index: usize, width: f32 },
    Break { run_index: usize },
}

fn tokenize(runs: &[TextRun], fonts: &FontTable) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pieces: Vec<Piece> = Vec::new();

    let flush = |pieces: &mut Vec<Piece>, tokens: &mut Vec<Token>| {
        if !pieces.is_empty() {
            let width = pieces.iter().map(|p| p.width).sum();
            tokens.push(Token::Word {
                pieces: std::mem::take(pieces),
                width,
            });
        }
    };

    for (run_index, run) in runs.iter().enumerate() {
        let style = run.style;
        for c in run.text.chars() {
            if c == '\n' {
                flush(&mut pieces, &mut tokens);
                tokens.push(Token::Break { run_index });
            } else if c.is_whitespace() {
                flush(&mut pieces, &mut tokens);
                if !matches!(tokens.last(), Some(Token::Space { .. })) {
                    tokens.push(Token::Space {
                        run_index,
                        width: fonts.char_width(' ', style.font, style.size),
                    });
                }
            } else {
                let width = fonts.char_width(c, style.font, style.size);
                match pieces.last_mut() {
                    Some(piece) if piece.run_index == run_index => {
                        piece.text.push(c);
                        piece.width += width;
                    }
                    _ => pieces.push(Piece {
                        run_index,
                        text: c.to_string(),
                        width,
                    }),
                }
            }
        }
    }
    flush(&mut pieces, &mut tokens);
    tokens
}

struct LineBuilder<'a> {
    runs: &'a [TextRun],
    fragments: Vec<LineFragment>,
    width: f32,
    max_size: f32,
}

impl<'a> LineBuilder<'a> {
    fn new(runs: &'a [TextRun]) -> Self {
        Self {
            runs,
            fragments: Vec::new(),
            width: 0.0,
            max_size: 0.0,
        }
    }

    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Appends text, merging with the previous fragment when it is the same run.
    fn push(&mut self, run_index: usize, text: &str, width: f32) {
        self.max_size = self.max_size.max(self.runs[run_index].style.size);
        match self.fragments.last_mut() {
            Some(last)
                if last.run_index == run_index
                    && (last.x + last.width - self.width).abs() < 0.05 =>
            {
                last.text.push_str(text);
                last.width += width;
            }
            _ => self.fragments.push(LineFragment {
                run_index,
                text: text.to_string(),
                x: self.width,
                width,
            }),
        }
        self.width += width;
    }

    fn finish(&mut self, fallback_size: f32) -> LineLayout {
        let max_size = if self.max_size > 0.0 {
            self.max_size
        } else {
            fallback_size
        };
        self.max_size = 0.0;
        LineLayout {
            fragments: std::mem::take(&mut self.fragments),
            width: std::mem::replace(&mut self.width, 0.0),
            max_size,
        }
    }
}

/// Greedy word wrap over styled runs.
///
/// Words may span runs. A word wider than `max_width` on an empty line is
/// broken between characters. `\n` forces a break; consecutive breaks
/// produce blank lines.
pub fn break_lines(runs: &[TextRun], max_width: f32, fonts: &FontTable) -> Vec<LineLayout> {
    let mut lines = Vec::new();
    let mut line = LineBuilder::new(runs);
    let mut pending_space: Option<(usize, f32)> = None;

    for token in tokenize(runs, fonts) {
        match token {
            Token::Space { run_index, width } => {
                if !line.is_empty() {
                    pending_space = Some((run_index, width));
                }
            }
            Token::Break { run_index } => {
                pending_space = None;
                lines.push(line.finish(runs[run_index].style.size));
            }
            Token::Word { pieces, width } => {
                let space_width = pending_space.map(|(_, w)| w).unwrap_or(0.0);
                if !line.is_empty() && line.width + space_width + width > max_width {
                    lines.push(line.finish(0.0));
                    pending_space = None;
                }
                if let Some((run_index, w)) = pending_space.take() {
                    line.push(run_index, " ", w);
                }

                if line.is_empty() && width > max_width {
                    for piece in pieces {
                        let style = runs[piece.run_index].style;
                        for c in piece.text.chars() {
                            let cw = fonts.char_width(c, style.font, style.size);
                            if !line.is_empty() && line.width + cw > max_width {
                                lines.push(line.finish(0.0));
                            }
                            let mut buf = [0u8; 4];
                            line.push(piece.run_index, c.encode_utf8(&mut buf), cw);
                        }
                    }
                } else {
                    for piece in pieces {
                        line.push(piece.run_index, &piece.text, piece.width);
                    }
                }
            }
        }
    }

    if !line.is_empty() {
        lines.push(line.finish(0.0));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextStyle;
    use folio_resource::fonts;
    use folio_types::Color;

    fn run(text: &str) -> TextRun {
        TextRun::new(text, TextStyle::regular(10.0, Color::BLACK))
    }

    fn line_texts(lines: &[LineLayout]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.fragments.iter().map(|f| f.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let table = fonts().unwrap();
        let lines = break_lines(&[run("alpha beta gamma delta")], 60.0, &table);
        assert_eq!(line_texts(&lines), vec!["alpha beta", "gamma delta"]);
        assert!(lines.iter().all(|l| l.width <= 60.0));
    }

    #[test]
    fn words_can_span_runs() {
        let table = fonts().unwrap();
        let bold = TextRun::new("Bold", TextStyle::bold(10.0, Color::BLACK));
        let lines = break_lines(&[bold, run(": rest of line")], 500.0, &table);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].fragments.len(), 2);
        assert_eq!(lines[0].fragments[0].text, "Bold");
        assert_eq!(lines[0].fragments[1].text, ": rest of line");
        assert!((lines[0].fragments[1].x - lines[0].fragments[0].width).abs() < 1e-4);
    }

    #[test]
    fn overlong_word_is_split() {
        let table = fonts().unwrap();
        let lines = break_lines(&[run("supercalifragilistic")], 30.0, &table);
        assert!(lines.len() > 1);
        let joined: String = line_texts(&lines).concat();
        assert_eq!(joined, "supercalifragilistic");
    }

    #[test]
    fn newlines_force_breaks() {
        let table = fonts().unwrap();
        let lines = break_lines(&[run("one\n\ntwo")], 500.0, &table);
        assert_eq!(line_texts(&lines), vec!["one", "", "two"]);
        assert_eq!(lines[1].max_size, 10.0);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        let table = fonts().unwrap();
        assert!(break_lines(&[run("   ")], 100.0, &table).is_empty());
        assert!(break_lines(&[], 100.0, &table).is_empty());
    }
}
