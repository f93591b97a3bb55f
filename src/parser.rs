//! Recursive-descent JSON parser.
//!
//! Consumes the entire input and produces a single [`Value`]; a bare scalar
//! at top level is permitted. Every object member and array element recurses
//! one level deeper, and a depth counter checked against [`Limits`] aborts
//! the parse before adversarial deeply-nested input can exhaust the stack.
//!
//! The parser threads a structural path (object keys and array indices
//! traversed so far) through every recursive call, so an error raised deep
//! in a document reports where it happened: `Missing closing brace in JSON
//! object at /a/0`.

use crate::decimal::Decimal;
use crate::error::{ParseError, ParseErrorKind};
use crate::escape;
use crate::limits::Limits;
use crate::value::{Object, Value};

/// Parse JSON text with default limits.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_limits(input, Limits::default())
}

/// Parse JSON text with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input, limits);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(parser.error(ParseErrorKind::ExcessCharacters));
    }
    Ok(value)
}

/// One step of the structural path: an object key or an array index.
enum Segment {
    Key(String),
    Index(usize),
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    limits: Limits,
    depth: usize,
    path: Vec<Segment>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, limits: Limits) -> Self {
        Self {
            text,
            pos: 0,
            limits,
            depth: 0,
            path: Vec::new(),
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Consume the byte if it is next in the input.
    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Build an error carrying the structural path of the current position.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pointer())
    }

    /// Render the path stack as a JSON-Pointer-like string, `None` at root.
    fn pointer(&self) -> Option<String> {
        if self.path.is_empty() {
            return None;
        }
        let mut out = String::new();
        for segment in &self.path {
            out.push('/');
            match segment {
                Segment::Key(key) => {
                    // RFC 6901 token escaping.
                    for ch in key.chars() {
                        match ch {
                            '~' => out.push_str("~0"),
                            '/' => out.push_str("~1"),
                            _ => out.push(ch),
                        }
                    }
                }
                Segment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        Some(out)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth() {
            return Err(self.error(ParseErrorKind::MaximumDepthExceeded));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => {
                self.pos += 1;
                Ok(Value::String(self.read_string_body()?))
            }
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            _ => Err(self.error(ParseErrorKind::IllegalSyntax)),
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.pos += 1;
        let mut map = Object::new();
        self.skip_whitespace();
        if self.eat(b'}') {
            self.leave();
            return Ok(Value::Object(map));
        }
        loop {
            if !self.eat(b'"') {
                return Err(self.error(ParseErrorKind::IllegalKey));
            }
            let key = self.read_string_body()?;
            if map.contains_key(&key) {
                return Err(self.error(ParseErrorKind::DuplicateKey(key)));
            }
            self.skip_whitespace();
            if !self.eat(b':') {
                return Err(self.error(ParseErrorKind::MissingColon));
            }
            self.path.push(Segment::Key(key.clone()));
            let value = self.parse_value()?;
            self.path.pop();
            map.insert(key, value);
            self.skip_whitespace();
            if self.eat(b',') {
                self.skip_whitespace();
                continue;
            }
            if self.eat(b'}') {
                break;
            }
            return Err(self.error(ParseErrorKind::MissingClosingBrace));
        }
        self.leave();
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.pos += 1;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.eat(b']') {
            self.leave();
            return Ok(Value::Array(items));
        }
        loop {
            self.path.push(Segment::Index(items.len()));
            let value = self.parse_value()?;
            self.path.pop();
            items.push(value);
            self.skip_whitespace();
            if self.eat(b',') {
                continue;
            }
            if self.eat(b']') {
                break;
            }
            return Err(self.error(ParseErrorKind::MissingClosingBracket));
        }
        self.leave();
        Ok(Value::Array(items))
    }

    /// Read a string body after the opening quote, decoding escapes.
    fn read_string_body(&mut self) -> Result<String, ParseError> {
        let mut result = String::new();
        loop {
            match self.advance() {
                None => return Err(self.error(ParseErrorKind::UnterminatedString)),
                Some(b'"') => return Ok(result),
                Some(b'\\') => {
                    let (ch, next) = escape::decode_escape(self.bytes(), self.pos)
                        .map_err(|kind| self.error(kind))?;
                    result.push(ch);
                    self.pos = next;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.error(ParseErrorKind::IllegalStringCharacter));
                }
                Some(b) if b < 0x80 => result.push(b as char),
                Some(_) => {
                    // Multi-byte sequence: back up to the character boundary
                    // and take the whole character from the source text.
                    self.pos -= 1;
                    match self.text[self.pos..].chars().next() {
                        Some(ch) => {
                            result.push(ch);
                            self.pos += ch.len_utf8();
                        }
                        None => return Err(self.error(ParseErrorKind::UnterminatedString)),
                    }
                }
            }
        }
    }

    /// Scan a number literal and classify it.
    ///
    /// A literal with a fraction or exponent becomes a `Decimal` retaining
    /// its text. A plain integer becomes `Int` when it fits in i32, `Long`
    /// when it fits in i64, and otherwise `Decimal`.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        self.eat(b'-');
        if self.eat(b'0') {
            // A second digit after a leading zero is not a valid literal.
            if let Some(b'0'..=b'9') = self.peek() {
                return Err(self.error(ParseErrorKind::IllegalNumber));
            }
        } else if let Some(b'1'..=b'9') = self.peek() {
            while let Some(b'0'..=b'9') = self.peek() {
                self.pos += 1;
            }
        } else {
            return Err(self.error(ParseErrorKind::IllegalNumber));
        }
        let mut floating = false;
        if self.eat(b'.') {
            floating = true;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.error(ParseErrorKind::IllegalNumber));
            }
            while let Some(b'0'..=b'9') = self.peek() {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            floating = true;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.error(ParseErrorKind::IllegalNumber));
            }
            while let Some(b'0'..=b'9') = self.peek() {
                self.pos += 1;
            }
        }
        let literal = &self.text[start..self.pos];
        if floating {
            let decimal = Decimal::new(literal)
                .map_err(|_| self.error(ParseErrorKind::IllegalNumber))?;
            return Ok(Value::Decimal(decimal));
        }
        match literal.parse::<i64>() {
            Ok(value) => match i32::try_from(value) {
                Ok(i) => Ok(Value::Int(i)),
                Err(_) => Ok(Value::Long(value)),
            },
            // Lexically valid but beyond i64: keep the literal exactly.
            Err(_) => {
                let decimal = Decimal::new(literal)
                    .map_err(|_| self.error(ParseErrorKind::IllegalNumber))?;
                Ok(Value::Decimal(decimal))
            }
        }
    }

    fn parse_literal(&mut self, expected: &[u8], value: Value) -> Result<Value, ParseError> {
        for &b in expected {
            if self.advance() != Some(b) {
                return Err(self.error(ParseErrorKind::IllegalSyntax));
            }
        }
        Ok(value)
    }
}
