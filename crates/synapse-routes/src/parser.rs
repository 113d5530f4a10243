use crate::ast::{Node, Prop, RouteDocument, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Ident(s) => { self.advance(); Ok(s) }
            tok => Err(self.err(format!("expected identifier, got {:?}", tok))),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<RouteDocument, ParseError> {
        let mut nodes = Vec::new();
        while self.peek() != &Token::Eof {
            nodes.push(self.parse_node()?);
        }
        Ok(RouteDocument { nodes })
    }

    // ── Node ──────────────────────────────────────────────────────────────

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let (line, _) = self.current_pos();
        let kind = self.expect_ident()?;

        // Optional name: `Route "heart"` or `Mode sympathetic`. A bare identifier
        // only counts as a name when it is followed by the block.
        let block_follows = self.peek_ahead(1) == &Token::LBrace;
        let name = match self.peek().clone() {
            Token::Str(s) => { self.advance(); Some(s) }
            Token::Ident(s) if block_follows => { self.advance(); Some(s) }
            _ => None,
        };

        let (props, children) = if self.peek() == &Token::LBrace {
            self.parse_block()?
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Node { kind, name, props, children, line })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// Parse `{ item* }` where each item is either a `key: value+` property
    /// or a nested declaration.
    ///
    /// Disambiguation: when we see `Ident`, we look one token ahead:
    /// - `Ident ":"` → property
    /// - `Ident <anything else>` → nested node
    fn parse_block(&mut self) -> Result<(Vec<Prop>, Vec<Node>), ParseError> {
        self.advance(); // consume `{`
        let mut props = Vec::new();
        let mut children = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Eof    => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) => {
                    if self.peek_ahead(1) == &Token::Colon {
                        props.push(self.parse_prop()?);
                    } else {
                        children.push(self.parse_node()?);
                    }
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside block, expected a property (key: value) or a declaration",
                        tok
                    )));
                }
            }
        }

        Ok((props, children))
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, _) = self.current_pos();
        let key = self.expect_ident()?;
        self.advance(); // consume `:`

        let mut values = vec![self.parse_value()?];
        while self.continues_value_list() {
            values.push(self.parse_value()?);
        }
        Ok(Prop { key, values, line })
    }

    /// A value list runs until the closing brace, the next `key:` or a nested declaration.
    fn continues_value_list(&self) -> bool {
        match self.peek() {
            Token::Str(_) | Token::Number(_) | Token::Color(_) => true,
            Token::Ident(_) => !matches!(self.peek_ahead(1), Token::Colon | Token::LBrace | Token::Str(_)),
            _ => false,
        }
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek().clone() {
            Token::Str(s)    => { self.advance(); Ok(Value::Str(s)) }
            Token::Number(n) => { self.advance(); Ok(Value::Number(n)) }
            Token::Color(c)  => { self.advance(); Ok(Value::Color(c)) }
            Token::Ident(s)  => { self.advance(); Ok(Value::Ident(s)) }
            tok => Err(self.err(format!("expected a value, got {:?}", tok))),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.routes` source string into a [`RouteDocument`].
pub fn parse_str(src: &str) -> Result<RouteDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
