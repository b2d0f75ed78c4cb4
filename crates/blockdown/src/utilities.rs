//! Text helpers for mrkdwn output.

/// Style delimiters of the mrkdwn inline language
pub const DELIMITERS: &[char] = &['*', '_', '~'];

/// Prefix for quoted lines
pub const QUOTE_PREFIX: &str = "> ";

/// Check if a character is a style delimiter
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Characters after which an opening delimiter is not recognized
fn ends_word(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(c, ')' | ']' | '}' | '.' | ',' | ';' | ':' | '!' | '?' | '%' | '`')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Literal,
    Open { matched: bool },
    Close,
}

/// Char index range of a maximal delimiter sequence
#[derive(Debug, Clone, Copy)]
struct Run {
    start: usize,
    end: usize,
}

/// Rendered mrkdwn that remembers where style delimiters were emitted.
///
/// Delimiter characters pushed as payload (text, code, URLs) stay literal
/// during spacing repair; only those pushed through
/// [`Mrkdwn::push_delimiter`] can open or close a style.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mrkdwn {
    text: String,
    char_len: usize,
    delimiters: Vec<usize>,
}

impl Mrkdwn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append payload text
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
        self.char_len += text.chars().count();
    }

    /// Append a single payload or markup character
    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.char_len += 1;
    }

    /// Append a style delimiter
    pub fn push_delimiter(&mut self, delimiter: char) {
        self.delimiters.push(self.char_len);
        self.push(delimiter);
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The text with boundary spaces inserted around emitted delimiters
    pub fn repaired(&self) -> String {
        let chars: Vec<char> = self.text.chars().collect();
        respace(&chars, &emitted_runs(&self.delimiters))
    }
}

/// Group ascending delimiter positions into runs of adjacent chars
fn emitted_runs(positions: &[usize]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &at in positions {
        match runs.last_mut() {
            Some(run) if run.end == at => run.end += 1,
            _ => runs.push(Run { start: at, end: at + 1 }),
        }
    }
    runs
}

/// Insert boundary spaces so paired delimiters never touch adjacent words.
///
/// `a*b*c` becomes `a *b* c` and `(x)*y*` becomes `(x) *y*`. Every
/// `*`, `_` and `~` outside code spans and link URLs is taken as markup;
/// use [`Mrkdwn::repaired`] when the text mixes markup with literal
/// payload. Unpaired delimiters are left alone. Applying the repair twice
/// gives the same result as applying it once.
pub fn repair_delimiter_spacing(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    respace(&chars, &delimiter_runs(&chars))
}

fn respace(chars: &[char], runs: &[Run]) -> String {
    if runs.is_empty() {
        return chars.iter().collect();
    }
    let roles = pair_delimiters(chars, runs);

    let mut out = String::with_capacity(chars.len() + runs.len());
    let mut cursor = 0;

    for run in runs {
        out.extend(&chars[cursor..run.start]);

        let run_roles = &roles[run.start..run.end];
        let prev = run.start.checked_sub(1).map(|i| chars[i]);
        let next = chars.get(run.end).copied();

        if run_roles[0] == (Role::Open { matched: true }) && prev.is_some_and(ends_word) {
            out.push(' ');
        }
        for (offset, &c) in chars[run.start..run.end].iter().enumerate() {
            if offset > 0
                && run_roles[offset - 1] == Role::Close
                && run_roles[offset] == (Role::Open { matched: true })
            {
                out.push(' ');
            }
            out.push(c);
        }
        if run_roles.last() == Some(&Role::Close) && next.is_some_and(char::is_alphanumeric) {
            out.push(' ');
        }

        cursor = run.end;
    }
    out.extend(&chars[cursor..]);

    out
}

/// Find delimiter runs, skipping code spans and link URLs
fn delimiter_runs(chars: &[char]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => {
                if let Some(close) = find_from(chars, i + 1, '`') {
                    i = close + 1;
                    continue;
                }
            }
            '<' => {
                if let Some(pipe) = link_label_start(chars, i) {
                    i = pipe + 1;
                    continue;
                }
            }
            c if is_delimiter(c) => {
                let start = i;
                while i < chars.len() && is_delimiter(chars[i]) {
                    i += 1;
                }
                runs.push(Run { start, end: i });
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    runs
}

fn find_from(chars: &[char], from: usize, needle: char) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == needle)
        .map(|p| from + p)
}

/// Index of the `|` in `<url|label>` when `open` starts such a link
fn link_label_start(chars: &[char], open: usize) -> Option<usize> {
    let from = open + 1;
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == '|' || c == '>' || c.is_whitespace())
        .map(|p| from + p)
        .filter(|&i| i > from && chars[i] == '|')
}

/// Assign a role to every delimiter character.
///
/// A run can close when preceded by non-whitespace and open when followed
/// by non-whitespace. Closers come before openers within a run, and a
/// closer never pairs with an opener of its own run.
fn pair_delimiters(chars: &[char], runs: &[Run]) -> Vec<Role> {
    let mut roles = vec![Role::Literal; chars.len()];
    // (delimiter, run start, char index)
    let mut stack: Vec<(char, usize, usize)> = Vec::new();

    for run in runs {
        let can_close = run
            .start
            .checked_sub(1)
            .is_some_and(|i| !chars[i].is_whitespace());
        let can_open = chars.get(run.end).is_some_and(|c| !c.is_whitespace());
        let mut opened = false;

        for i in run.start..run.end {
            let c = chars[i];
            let opener = if can_close && !opened {
                stack
                    .iter()
                    .rposition(|&(d, start, _)| d == c && start != run.start)
            } else {
                None
            };

            if let Some(pos) = opener {
                let (_, _, at) = stack[pos];
                stack.truncate(pos);
                roles[at] = Role::Open { matched: true };
                roles[i] = Role::Close;
            } else if can_open {
                stack.push((c, run.start, i));
                roles[i] = Role::Open { matched: false };
                opened = true;
            }
        }
    }

    roles
}

/// Clean an attribute value (trim and handle empty)
pub fn clean_attribute(value: Option<&str>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_default()
}

/// Quote a multi-line text; single-line text is returned unchanged
pub fn quote_multiline(text: &str) -> Option<String> {
    if !text.contains('\n') {
        return None;
    }
    let mut quoted = String::with_capacity(text.len() + QUOTE_PREFIX.len() * 2);
    quoted.push_str(QUOTE_PREFIX);
    quoted.push_str(&text.replace('\n', &format!("\n{QUOTE_PREFIX}")));
    Some(quoted)
}
