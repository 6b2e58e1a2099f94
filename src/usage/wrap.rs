use unicode_width::UnicodeWidthStr;

/// Blocks of help text, split at blank lines and at indentation changes.
#[derive(Debug, PartialEq)]
enum Block<'a> {
    /// Unindented lines whose words are reflowed together.
    Paragraph(Vec<&'a str>),
    /// Indented lines kept as written.
    Preformatted(Vec<&'a str>),
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

fn blocks(text: &str) -> Vec<Block<'_>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if is_blank(lines[i]) {
            i += 1;
            continue;
        }
        let start = i;
        if is_indented(lines[i]) {
            // Blank lines stay inside the block when more indented lines follow.
            let mut end = i + 1;
            while i < lines.len() && (is_blank(lines[i]) || is_indented(lines[i])) {
                if !is_blank(lines[i]) {
                    end = i + 1;
                }
                i += 1;
            }
            i = end;
            blocks.push(Block::Preformatted(lines[start..end].to_vec()));
        } else {
            while i < lines.len() && !is_blank(lines[i]) && !is_indented(lines[i]) {
                i += 1;
            }
            blocks.push(Block::Paragraph(lines[start..i].to_vec()));
        }
    }
    blocks
}

/// Leading whitespace shared by every non-blank line.
fn common_indent<'a>(lines: &[&'a str]) -> &'a str {
    let mut indents = lines.iter().filter(|line| !is_blank(line)).map(|&line| {
        let len = line.len() - line.trim_start_matches([' ', '\t']).len();
        &line[..len]
    });
    let Some(mut common) = indents.next() else {
        return "";
    };
    for indent in indents {
        let shared = common
            .bytes()
            .zip(indent.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        common = &common[..shared];
    }
    common
}

/// Greedy fill of `words` into lines of at most `width` display columns.
fn fill<'a>(words: impl Iterator<Item = &'a str>, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in words {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    lines.push(current);
}

/// Wraps help text to `width` display columns.
///
/// Blank lines separate paragraphs. Within a paragraph single newlines are
/// soft: the words are joined and refilled greedily, so runs of whitespace
/// become one space. Indented lines form a preformatted block that is kept
/// verbatim, minus the indentation its lines share, and is never wrapped.
/// Blocks are separated by one empty line. A word wider than `width` is placed
/// on a line by itself, unbroken. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for (i, block) in blocks(text).into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        match block {
            Block::Paragraph(source) => {
                fill(source.iter().flat_map(|line| line.split_whitespace()), width, &mut lines);
            }
            Block::Preformatted(source) => {
                let indent = common_indent(&source);
                lines.extend(source.iter().map(|line| {
                    line.strip_prefix(indent).unwrap_or("").trim_end().to_string()
                }));
            }
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
