//! Tokenization for template compilation
//!
//! Provides O(n) tokenization using a state machine.

use crate::template::error::TemplateError;

/// A literal run or a `{name[:spec]}` field, in template order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Verbatim text, with `{{` / `}}` already unescaped
    Literal(String),

    /// `{name}` or `{name:spec}`
    Field {
        name: String,
        /// Text after the first `:`, `None` when absent or empty
        spec: Option<String>,
        /// Character offset of the opening `{`
        position: usize,
    },
}

/// Tokenization state machine
///
/// Braces are ASCII, so scanning bytes never splits a UTF-8 sequence.
///
/// # State Transitions
///
/// ```text
/// Literal ──{───> SeenLBrace ──{───> [literal '{'] → Literal
///    │                │
///    │                └──(other)──> InField ──}───> [Yield Field] → Literal
///    │                                 │
///    │                                 └──{───> error (nested brace)
///    │
///    └──}───> SeenRBrace ──}───> [literal '}'] → Literal
///                  │
///                  └──(other)──> error (unmatched '}')
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Scanning literal text
    Literal,

    /// Seen `{` in literal text, checking for a second `{`
    SeenLBrace {
        /// Byte position of the `{`
        open: usize,
    },

    /// Inside `{...}`, scanning until `}`
    InField {
        /// Byte position of the opening `{`
        open: usize,
        /// Byte position where field content starts
        content_start: usize,
    },

    /// Seen `}` in literal text, checking for a second `}`
    SeenRBrace {
        /// Byte position of the `}`
        close: usize,
    },
}

/// Iterator over the tokens of a template string
///
/// Yields `Err` at most once, then stops.
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    /// Start of the literal run not yet copied into `literal`
    run_start: usize,
    /// Pending literal text
    literal: String,
    done: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Literal,
            run_start: 0,
            literal: String::new(),
            done: false,
        }
    }

    /// Character offset of a byte position, for error messages
    fn char_offset(&self, byte_pos: usize) -> usize {
        self.text[..byte_pos].chars().count()
    }

    fn fail(&mut self, message: &str, byte_pos: usize) -> Option<Result<Token, TemplateError>> {
        self.done = true;
        Some(Err(TemplateError::syntax(
            message,
            self.char_offset(byte_pos),
        )))
    }

    /// Copy the current literal run into the pending literal
    fn flush_run(&mut self, end: usize) {
        self.literal.push_str(&self.text[self.run_start..end]);
    }

    fn take_literal(&mut self) -> Option<Token> {
        if self.literal.is_empty() {
            None
        } else {
            Some(Token::Literal(std::mem::take(&mut self.literal)))
        }
    }

    /// Classify field content: `name` or `name:spec`
    fn classify_field(&self, content: &str, open: usize) -> Result<Token, TemplateError> {
        let position = self.char_offset(open);
        let (name, spec) = match content.split_once(':') {
            Some((name, spec)) => (name, Some(spec)),
            None => (content, None),
        };

        if name.is_empty() {
            return Err(TemplateError::syntax("field without a name", position));
        }

        Ok(Token::Field {
            name: name.to_string(),
            spec: spec.filter(|s| !s.is_empty()).map(str::to_string),
            position,
        })
    }

    /// Handle end of input in the current state
    fn finish(&mut self) -> Option<Result<Token, TemplateError>> {
        match self.state {
            ScanState::Literal => {
                self.done = true;
                self.flush_run(self.bytes.len());
                self.take_literal().map(Ok)
            }
            ScanState::SeenLBrace { open } | ScanState::InField { open, .. } => {
                self.fail("unclosed '{'", open)
            }
            ScanState::SeenRBrace { close } => self.fail("unmatched '}'", close),
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if self.pos >= self.bytes.len() {
                return self.finish();
            }

            let byte = self.bytes[self.pos];
            match self.state {
                ScanState::Literal => {
                    if byte == b'{' {
                        self.flush_run(self.pos);
                        self.state = ScanState::SeenLBrace { open: self.pos };
                    } else if byte == b'}' {
                        self.flush_run(self.pos);
                        self.state = ScanState::SeenRBrace { close: self.pos };
                    }
                    self.pos += 1;
                }
                ScanState::SeenLBrace { open } => {
                    if byte == b'{' {
                        // `{{` is a literal brace
                        self.literal.push('{');
                        self.pos += 1;
                        self.run_start = self.pos;
                        self.state = ScanState::Literal;
                    } else {
                        // Don't increment pos, reprocess this byte as field content
                        self.state = ScanState::InField {
                            open,
                            content_start: self.pos,
                        };
                        if let Some(literal) = self.take_literal() {
                            return Some(Ok(literal));
                        }
                    }
                }
                ScanState::InField {
                    open,
                    content_start,
                } => {
                    if byte == b'}' {
                        let content = &self.text[content_start..self.pos];
                        let token = self.classify_field(content, open);
                        self.pos += 1;
                        self.run_start = self.pos;
                        self.state = ScanState::Literal;
                        if token.is_err() {
                            self.done = true;
                        }
                        return Some(token);
                    } else if byte == b'{' {
                        return self.fail("'{' inside a field", self.pos);
                    }
                    self.pos += 1;
                }
                ScanState::SeenRBrace { close } => {
                    if byte == b'}' {
                        // `}}` is a literal brace
                        self.literal.push('}');
                        self.pos += 1;
                        self.run_start = self.pos;
                        self.state = ScanState::Literal;
                    } else {
                        return self.fail("unmatched '}'", close);
                    }
                }
            }
        }
    }
}
