/// Line-at-a-time frontmatter stripper.
///
/// Notes may open with a metadata block delimited by two `---` lines:
///
/// ```markdown
/// ---
/// title: My Chapter
/// date: 2024-10-14
/// ---
/// body content
/// ```
///
/// The block is dropped from the output, except that the `title` key is
/// promoted to a level-1 heading. The block is recognized at most once per
/// document; `---` lines after the closing delimiter are ordinary content.
#[derive(Debug)]
pub struct FrontmatterStripper {
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BeforeFrontmatter,
    InFrontmatter,
    AfterFrontmatter,
}

/// What [`FrontmatterStripper::feed`] makes of one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum StrippedLine<'a> {
    /// Heading text taken from the frontmatter `title` key, already trimmed.
    Title(&'a str),
    /// A body line, passed through verbatim.
    Content(&'a str),
}

impl FrontmatterStripper {
    pub fn new() -> Self {
        Self {
            state: State::BeforeFrontmatter,
        }
    }

    /// Feed the next line of the document. Returns `None` when the line
    /// belongs to the metadata block and is dropped. Lines may carry their
    /// trailing newline; delimiter and key detection ignore it, and the
    /// promoted title is trimmed of it.
    pub fn feed<'a>(&mut self, line: &'a str) -> Option<StrippedLine<'a>> {
        match self.state {
            State::BeforeFrontmatter if line.starts_with("---") => {
                self.state = State::InFrontmatter;
                None
            }
            State::InFrontmatter => {
                if line.starts_with("---") {
                    self.state = State::AfterFrontmatter;
                    None
                } else if line.starts_with("title") {
                    let title = line.splitn(2, ':').nth(1).unwrap_or("").trim();
                    Some(StrippedLine::Title(title))
                } else {
                    None
                }
            }
            // BeforeFrontmatter (non-delimiter line) and AfterFrontmatter
            // both pass content through; the machine never re-enters the
            // metadata block.
            _ => Some(StrippedLine::Content(line)),
        }
    }
}

impl Default for FrontmatterStripper {
    fn default() -> Self {
        Self::new()
    }
}
