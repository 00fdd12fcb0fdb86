//! Pulling a list of strings out of free-form model output.
//!
//! Models asked for "a JSON array of strings" answer in several shapes: a
//! bare array, an array inside a markdown fence, an array buried in prose,
//! or a list written with single quotes. [`extract_list`] accepts all of
//! them. Model output is only ever parsed, never evaluated.

use scribe_error::{ExtractionError, ExtractionErrorKind, ScribeResult};

/// Why a single candidate block was rejected.
enum Rejection {
    /// Not a list of string literals at all
    Syntax(String),
    /// A list, but some element is not a non-empty string
    Invalid(String),
}

/// Extract an ordered list of non-empty strings from a model response.
///
/// Strategy:
/// 1. Trim and strip a leading ```` ```lang ```` fence line and a trailing ```` ``` ```` line
/// 2. If what remains is wrapped in `[` `]`, that is the candidate
/// 3. Otherwise the candidate spans the first `[` to the last `]`
/// 4. Parse as a JSON string array, then as a quoted-literal list
///    (`'single'` or `"double"` quotes, backslash escapes, trailing comma)
/// 5. Every element must be a string that is non-empty after trimming
///
/// When the candidate does not parse, each balanced `[...]` block is tried
/// in order and the first valid one wins. Elements are returned exactly as
/// written, without trimming.
///
/// # Errors
///
/// [`ExtractionErrorKind::NoArrayFound`] when the text has no bracketed span,
/// [`ExtractionErrorKind::Malformed`] when no span yields a valid list.
///
/// # Examples
///
/// ```
/// use scribe_narrative::extract_list;
///
/// let response = "Sure! Here you go:\n```json\n[\"Rise.\", \"Fall.\"]\n```\nEnjoy.";
/// assert_eq!(extract_list(response).unwrap(), vec!["Rise.", "Fall."]);
///
/// let python_style = "['It\\'s late.', 'Still here.',]";
/// assert_eq!(extract_list(python_style).unwrap(), vec!["It's late.", "Still here."]);
/// ```
pub fn extract_list(raw: &str) -> ScribeResult<Vec<String>> {
    let text = strip_fences(raw.trim());

    let candidate = if text.starts_with('[') && text.ends_with(']') {
        text
    } else {
        match (text.find('['), text.rfind(']')) {
            (Some(start), Some(end)) if start < end => &text[start..=end],
            _ => {
                tracing::warn!(
                    response_length = raw.len(),
                    "No bracketed list found in model response"
                );
                return Err(ExtractionError::new(ExtractionErrorKind::NoArrayFound).into());
            }
        }
    };

    let syntax_error = match parse_candidate(candidate) {
        Ok(items) => return Ok(items),
        Err(Rejection::Invalid(reason)) => {
            tracing::warn!(%reason, "Model list failed validation");
            return Err(ExtractionError::new(ExtractionErrorKind::Malformed(reason)).into());
        }
        Err(Rejection::Syntax(reason)) => reason,
    };

    for (start, _) in text.match_indices('[') {
        let Some(block) = balanced_block(&text[start..]) else {
            continue;
        };
        if block == candidate {
            continue;
        }
        if let Ok(items) = parse_candidate(block) {
            tracing::debug!(offset = start, "Recovered list from balanced block");
            return Ok(items);
        }
    }

    tracing::warn!(reason = %syntax_error, "Could not parse list from model response");
    Err(ExtractionError::new(ExtractionErrorKind::Malformed(syntax_error)).into())
}

fn strip_fences(text: &str) -> &str {
    let mut text = text;

    if let Some(rest) = text.strip_prefix("```") {
        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if let Some(body) = rest[tag_len..].strip_prefix('\n') {
            text = body;
        }
    }

    if let Some(body) = text.strip_suffix("\n```") {
        text = body;
    }

    text.trim()
}

fn parse_candidate(candidate: &str) -> Result<Vec<String>, Rejection> {
    let items = match serde_json::from_str::<Vec<serde_json::Value>>(candidate) {
        Ok(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, value)| match value {
                serde_json::Value::String(s) => Ok(s),
                other => Err(Rejection::Invalid(format!(
                    "element {} is not a string: {}",
                    i + 1,
                    other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Err(json_err) => LiteralList::new(candidate).parse().map_err(|literal_err| {
            Rejection::Syntax(format!(
                "not a JSON array ({}) nor a quoted list ({})",
                json_err, literal_err
            ))
        })?,
    };

    if let Some(i) = items.iter().position(|s| s.trim().is_empty()) {
        return Err(Rejection::Invalid(format!("element {} is empty", i + 1)));
    }

    Ok(items)
}

/// The balanced `[...]` block at the start of `text`, quote aware.
fn balanced_block(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escape_next = false;

    for (i, ch) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match (quote, ch) {
            (Some(_), '\\') => escape_next = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            (None, _) => {}
        }
    }

    None
}

/// Recursive-descent reader for `['a', "b", ...]` style lists.
struct LiteralList<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> LiteralList<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<Vec<String>, String> {
        self.skip_whitespace();
        self.expect('[')?;

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some(']') => {
                    self.chars.next();
                    break;
                }
                Some('"' | '\'') => items.push(self.string()?),
                Some(c) => return Err(format!("unexpected '{}' where a string was expected", c)),
                None => return Err("unterminated list".to_string()),
            }

            self.skip_whitespace();
            match self.chars.next() {
                Some(',') => continue,
                Some(']') => break,
                Some(c) => return Err(format!("unexpected '{}' after list element", c)),
                None => return Err("unterminated list".to_string()),
            }
        }

        self.skip_whitespace();
        match self.chars.next() {
            None => Ok(items),
            Some(c) => Err(format!("trailing '{}' after list", c)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn expect(&mut self, wanted: char) -> Result<(), String> {
        match self.chars.next() {
            Some(c) if c == wanted => Ok(()),
            Some(c) => Err(format!("expected '{}', found '{}'", wanted, c)),
            None => Err(format!("expected '{}', found end of input", wanted)),
        }
    }

    /// One quoted literal; adjacent literals concatenate.
    fn string(&mut self) -> Result<String, String> {
        let mut out = String::new();
        loop {
            let Some(quote) = self.chars.next() else {
                return Err("expected a string".to_string());
            };
            self.string_body(quote, &mut out)?;

            self.skip_whitespace();
            if !matches!(self.chars.peek(), Some('"' | '\'')) {
                return Ok(out);
            }
        }
    }

    fn string_body(&mut self, quote: char, out: &mut String) -> Result<(), String> {
        loop {
            match self.chars.next() {
                None | Some('\n') => return Err("unterminated string".to_string()),
                Some(c) if c == quote => return Ok(()),
                Some('\\') => self.escape(out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), String> {
        match self.chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('\n') => {}
            Some('x') => out.push(self.hex_char(2)?),
            Some('u') => out.push(self.hex_char(4)?),
            Some('U') => out.push(self.hex_char(8)?),
            // Unknown escapes keep their backslash.
            Some(c) => {
                out.push('\\');
                out.push(c);
            }
            None => return Err("dangling backslash".to_string()),
        }
        Ok(())
    }

    fn hex_char(&mut self, digits: usize) -> Result<char, String> {
        let hex: String = (0..digits).filter_map(|_| self.chars.next()).collect();
        u32::from_str_radix(&hex, 16)
            .ok()
            .filter(|_| hex.len() == digits)
            .and_then(char::from_u32)
            .ok_or_else(|| format!("invalid escape sequence '{}'", hex))
    }
}
