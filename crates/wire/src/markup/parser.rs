//! Minimal markup parser
//!
//! Builds an element tree from a document. Only what trace files need is
//! kept: element names, attributes and child elements. Text, comments,
//! CDATA sections and processing instructions are checked for
//! well-formedness and then dropped. Document type declarations are
//! rejected.

use super::error::MalformedTraceError;

/// Deepest element nesting accepted before the document is rejected
const MAX_DEPTH: usize = 256;

/// A parsed element
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    /// Value of the attribute `name`, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All descendants named `name`, in document order
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }
}

/// Parse a complete document and return its root element
pub(crate) fn parse_document(input: &str) -> Result<Element, MalformedTraceError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut parser = MarkupParser::new(input);
    parser.skip_misc()?;

    if parser.peek().is_none() {
        return Err(MalformedTraceError::UnexpectedEnd);
    }
    if parser.peek() != Some('<') {
        return Err(parser.error("expected root element"));
    }

    let root = parser.parse_element(0)?;

    parser.skip_misc()?;
    if parser.peek().is_some() {
        return Err(parser.error("content after root element"));
    }

    Ok(root)
}

struct MarkupParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> MarkupParser<'a> {
    fn new(input: &'a str) -> Self {
        MarkupParser { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        let input: &'a str = self.input;
        &input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn error(&self, message: impl Into<String>) -> MalformedTraceError {
        MalformedTraceError::syntax(self.pos, message)
    }

    fn expect(&mut self, expected: char) -> Result<(), MalformedTraceError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(MalformedTraceError::UnexpectedEnd),
        }
    }

    /// Skip markup whitespace (space, tab, CR, LF), returning true if any was consumed
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                self.advance();
            } else {
                break;
            }
        }
        self.pos > start
    }

    /// Skip the prolog/epilog: whitespace, comments and processing instructions
    fn skip_misc(&mut self) -> Result<(), MalformedTraceError> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.starts_with("<?") {
                self.skip_processing_instruction()?;
            } else if self.starts_with("<!") {
                return Err(self.error("document type declarations are not supported"));
            } else {
                return Ok(());
            }
        }
    }

    /// Consume everything up to and including `terminator`
    fn skip_past(&mut self, terminator: &str) -> Result<&'a str, MalformedTraceError> {
        match self.rest().find(terminator) {
            Some(idx) => {
                let skipped = &self.rest()[..idx];
                self.pos += idx + terminator.len();
                Ok(skipped)
            }
            None => Err(MalformedTraceError::UnexpectedEnd),
        }
    }

    fn skip_comment(&mut self) -> Result<(), MalformedTraceError> {
        let start = self.pos;
        self.pos += "<!--".len();
        let body = self.skip_past("-->")?;
        if body.contains("--") {
            return Err(MalformedTraceError::syntax(start, "'--' inside comment"));
        }
        Ok(())
    }

    fn skip_processing_instruction(&mut self) -> Result<(), MalformedTraceError> {
        self.pos += "<?".len();
        self.parse_name()?;
        self.skip_past("?>")?;
        Ok(())
    }

    fn parse_name(&mut self) -> Result<String, MalformedTraceError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' || c == ':' => self.advance(),
            Some(c) => return Err(self.error(format!("invalid name start '{}'", c))),
            None => return Err(MalformedTraceError::UnexpectedEnd),
        }
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.') {
                self.advance();
            } else {
                break;
            }
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_element(&mut self, depth: usize) -> Result<Element, MalformedTraceError> {
        if depth >= MAX_DEPTH {
            return Err(self.error("elements nested too deeply"));
        }

        self.expect('<')?;
        let name = self.parse_name()?;
        let mut element = Element {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        };

        loop {
            let had_space = self.skip_whitespace();
            match self.peek() {
                None => return Err(MalformedTraceError::UnexpectedEnd),
                Some('/') => {
                    self.advance();
                    self.expect('>')?;
                    return Ok(element);
                }
                Some('>') => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    if !had_space {
                        return Err(self.error("expected whitespace before attribute"));
                    }
                    let attr_start = self.pos;
                    let (key, value) = self.parse_attribute()?;
                    if element.attribute(&key).is_some() {
                        return Err(MalformedTraceError::syntax(
                            attr_start,
                            format!("duplicate attribute '{}'", key),
                        ));
                    }
                    element.attributes.push((key, value));
                }
            }
        }

        self.parse_content(&mut element, depth)?;
        Ok(element)
    }

    fn parse_attribute(&mut self) -> Result<(String, String), MalformedTraceError> {
        let key = self.parse_name()?;
        self.skip_whitespace();
        self.expect('=')?;
        self.skip_whitespace();

        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            Some(c) => return Err(self.error(format!("expected quoted value, found '{}'", c))),
            None => return Err(MalformedTraceError::UnexpectedEnd),
        };
        self.advance();

        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(MalformedTraceError::UnexpectedEnd),
                Some(c) if c == quote => {
                    self.advance();
                    return Ok((key, value));
                }
                Some('<') => return Err(self.error("'<' in attribute value")),
                Some('&') => value.push(self.parse_reference()?),
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Parse an entity or character reference starting at '&'
    fn parse_reference(&mut self) -> Result<char, MalformedTraceError> {
        let start = self.pos;
        self.advance();
        let body = self.skip_past(";")?;

        let resolved = match body {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => {
                let code = if let Some(hex) = body.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = body.strip_prefix('#') {
                    dec.parse::<u32>().ok()
                } else {
                    None
                };
                code.and_then(char::from_u32)
            }
        };

        resolved.ok_or_else(|| {
            MalformedTraceError::syntax(start, format!("invalid reference '&{};'", body))
        })
    }

    fn parse_content(&mut self, element: &mut Element, depth: usize) -> Result<(), MalformedTraceError> {
        loop {
            if self.starts_with("</") {
                let close_start = self.pos;
                self.pos += "</".len();
                let name = self.parse_name()?;
                self.skip_whitespace();
                self.expect('>')?;
                if name != element.name {
                    return Err(MalformedTraceError::syntax(
                        close_start,
                        format!("expected </{}>, found </{}>", element.name, name),
                    ));
                }
                return Ok(());
            } else if self.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.starts_with("<![CDATA[") {
                self.pos += "<![CDATA[".len();
                self.skip_past("]]>")?;
            } else if self.starts_with("<?") {
                self.skip_processing_instruction()?;
            } else if self.starts_with("<!") {
                return Err(self.error("unexpected declaration"));
            } else {
                match self.peek() {
                    None => return Err(MalformedTraceError::UnexpectedEnd),
                    Some('<') => {
                        let child = self.parse_element(depth + 1)?;
                        element.children.push(child);
                    }
                    Some('&') => {
                        self.parse_reference()?;
                    }
                    Some(_) => self.advance(),
                }
            }
        }
    }
}
