#![forbid(unsafe_code)]

//! Syntax highlighting for fenced code blocks.
//!
//! A closed set of [`Language`]s is recognised from fence tags. Each
//! language has a line-oriented [`Tokenizer`]; multi-line strings and block
//! comments carry a [`LineState`] from one line to the next. The
//! [`SyntaxHighlighter`] turns tokens into styled spans using a
//! [`HighlightTheme`] and renders them as a `<pre><code>` element.
//!
//! Spans always cover their line exactly: concatenating every span of a
//! highlighted block gives back the input.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use folio_render::{Element, Node};
use folio_style::{Rgb, Style};

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

/// Languages the highlighter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Bash,
    Dockerfile,
    Go,
    Hcl,
    Ini,
    JavaScript,
    Json,
    Php,
    Python,
    Rust,
    Sql,
    TypeScript,
    Yaml,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Self::Bash,
        Self::Dockerfile,
        Self::Go,
        Self::Hcl,
        Self::Ini,
        Self::JavaScript,
        Self::Json,
        Self::Php,
        Self::Python,
        Self::Rust,
        Self::Sql,
        Self::TypeScript,
        Self::Yaml,
    ];

    /// Recognise a fence tag (case-insensitive, common aliases accepted).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        let lang = match tag.as_str() {
            "bash" | "sh" | "shell" | "zsh" | "console" => Self::Bash,
            "dockerfile" | "docker" => Self::Dockerfile,
            "go" | "golang" => Self::Go,
            "hcl" | "terraform" | "tf" => Self::Hcl,
            "ini" | "toml" | "conf" | "cfg" => Self::Ini,
            "javascript" | "js" | "jsx" | "mjs" => Self::JavaScript,
            "json" => Self::Json,
            "php" => Self::Php,
            "python" | "py" => Self::Python,
            "rust" | "rs" => Self::Rust,
            "sql" | "mysql" | "postgresql" => Self::Sql,
            "typescript" | "ts" | "tsx" => Self::TypeScript,
            "yaml" | "yml" => Self::Yaml,
            _ => return None,
        };
        Some(lang)
    }

    /// Canonical lower-case name, used in `language-*` classes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Dockerfile => "dockerfile",
            Self::Go => "go",
            Self::Hcl => "hcl",
            Self::Ini => "ini",
            Self::JavaScript => "javascript",
            Self::Json => "json",
            Self::Php => "php",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Sql => "sql",
            Self::TypeScript => "typescript",
            Self::Yaml => "yaml",
        }
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Semantic token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    KeywordControl,
    KeywordType,
    String,
    Number,
    /// `true`, `false`, `null`, `None`, ...
    Literal,
    Identifier,
    Type,
    Function,
    /// Sigil variables (`$name`).
    Variable,
    Comment,
    Operator,
    Punctuation,
    Delimiter,
    /// Decorators, attributes, keys.
    Attribute,
    /// Section headers (`[section]`).
    Heading,
    Whitespace,
    Text,
}

/// A token with a byte range in its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "token range must be ordered");
        Self { kind, range }
    }
}

/// Lexical state carried across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineState {
    #[default]
    Normal,
    /// Inside an unclosed string with this quote byte.
    InString(u8),
    /// Inside a triple-quoted string (`"""` / `'''`).
    InTripleString(u8),
    /// Inside a block comment.
    InComment,
}

/// True when tokens are ordered, in bounds, and non-overlapping.
pub fn validate_tokens(source: &str, tokens: &[Token]) -> bool {
    let mut prev_end = 0;
    for token in tokens {
        if token.range.start > token.range.end
            || token.range.end > source.len()
            || token.range.start < prev_end
        {
            return false;
        }
        prev_end = token.range.end;
    }
    true
}

// ---------------------------------------------------------------------------
// Tokenizer trait and registry
// ---------------------------------------------------------------------------

/// Produces tokens for one line given the state left by the previous line.
pub trait Tokenizer: Send + Sync {
    fn language(&self) -> Language;

    /// Token ranges are byte offsets within `line`.
    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState);

    /// Tokenize a whole block; ranges are offsets into `text`.
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut state = LineState::Normal;
        let mut offset = 0usize;
        for line in text.split('\n') {
            let (line_tokens, next) = self.tokenize_line(line, state);
            tokens.extend(line_tokens.into_iter().map(|mut t| {
                t.range.start += offset;
                t.range.end += offset;
                t
            }));
            offset += line.len() + 1;
            state = next;
        }
        tokens
    }
}

/// Tokenizers by language.
#[derive(Default)]
pub struct TokenizerRegistry {
    tokenizers: HashMap<Language, Arc<dyn Tokenizer>>,
}

impl TokenizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a tokenizer for every [`Language`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for lang in Language::ALL {
            match lang {
                Language::Ini => registry.register(Box::new(IniTokenizer)),
                _ => registry.register(Box::new(GenericTokenizer::new(builtin_config(lang)))),
            }
        }
        registry
    }

    /// Later registrations for the same language replace earlier ones.
    pub fn register(&mut self, tokenizer: Box<dyn Tokenizer>) {
        let tokenizer: Arc<dyn Tokenizer> = Arc::from(tokenizer);
        self.tokenizers.insert(tokenizer.language(), tokenizer);
    }

    pub fn get(&self, lang: Language) -> Option<&dyn Tokenizer> {
        self.tokenizers.get(&lang).map(|t| &**t)
    }

    pub fn len(&self) -> usize {
        self.tokenizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokenizers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// GenericTokenizer
// ---------------------------------------------------------------------------

/// Lexical configuration for a [`GenericTokenizer`].
#[derive(Debug, Clone)]
pub struct GenericTokenizerConfig {
    pub language: Language,
    pub keywords: &'static [&'static str],
    pub control_keywords: &'static [&'static str],
    pub type_keywords: &'static [&'static str],
    pub literals: &'static [&'static str],
    /// Keywords match regardless of case (SQL, Dockerfile).
    pub case_insensitive: bool,
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Quote bytes that open strings.
    pub quotes: &'static [u8],
    /// `"""`/`'''` strings.
    pub triple_quotes: bool,
    /// Byte introducing a variable (`$` for PHP and shell).
    pub variable_sigil: Option<u8>,
    /// Byte introducing an attribute or decorator (`@`, `#`).
    pub attribute_sigil: Option<u8>,
}

impl GenericTokenizerConfig {
    const fn base(language: Language) -> Self {
        Self {
            language,
            keywords: &[],
            control_keywords: &[],
            type_keywords: &[],
            literals: &["true", "false"],
            case_insensitive: false,
            line_comments: &[],
            block_comment: None,
            quotes: b"\"'",
            triple_quotes: false,
            variable_sigil: None,
            attribute_sigil: None,
        }
    }
}

/// A configurable tokenizer covering the C-family and script languages.
pub struct GenericTokenizer {
    config: GenericTokenizerConfig,
}

impl GenericTokenizer {
    pub const fn new(config: GenericTokenizerConfig) -> Self {
        Self { config }
    }

    fn matches(&self, set: &[&str], word: &str) -> bool {
        if self.config.case_insensitive {
            set.iter().any(|k| k.eq_ignore_ascii_case(word))
        } else {
            set.contains(&word)
        }
    }

    fn classify_word(&self, word: &str, next: Option<u8>) -> TokenKind {
        if self.matches(self.config.keywords, word) {
            TokenKind::Keyword
        } else if self.matches(self.config.control_keywords, word) {
            TokenKind::KeywordControl
        } else if self.matches(self.config.type_keywords, word) {
            TokenKind::KeywordType
        } else if self.matches(self.config.literals, word) {
            TokenKind::Literal
        } else if next == Some(b'(') {
            TokenKind::Function
        } else if word.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            TokenKind::Type
        } else {
            TokenKind::Identifier
        }
    }

    fn block_end(&self) -> &'static str {
        self.config.block_comment.map_or("", |(_, end)| end)
    }

    fn continue_block_comment(&self, line: &str) -> (Vec<Token>, LineState) {
        let end_pat = self.block_end();
        match line.find(end_pat).filter(|_| !end_pat.is_empty()) {
            Some(end_pos) => {
                let comment_end = end_pos + end_pat.len();
                let mut tokens = vec![Token::new(TokenKind::Comment, 0..comment_end)];
                let (rest, state) = self.tokenize_normal(&line[comment_end..], comment_end);
                tokens.extend(rest);
                (tokens, state)
            }
            None => (
                vec![Token::new(TokenKind::Comment, 0..line.len())],
                LineState::InComment,
            ),
        }
    }

    fn continue_string(&self, line: &str, quote: u8, triple: bool) -> (Vec<Token>, LineState) {
        let (end, closed) = if triple {
            scan_triple(line.as_bytes(), 0, quote)
        } else {
            scan_string(line.as_bytes(), 0, quote)
        };
        let mut tokens = vec![Token::new(TokenKind::String, 0..end)];
        if !closed {
            let state = if triple {
                LineState::InTripleString(quote)
            } else {
                LineState::InString(quote)
            };
            return (tokens, state);
        }
        let (rest, state) = self.tokenize_normal(&line[end..], end);
        tokens.extend(rest);
        (tokens, state)
    }

    fn tokenize_normal(&self, line: &str, base: usize) -> (Vec<Token>, LineState) {
        let bytes = line.as_bytes();
        let mut tokens = Vec::new();
        let mut pos = 0;
        let push = |tokens: &mut Vec<Token>, kind, start: usize, end: usize| {
            tokens.push(Token::new(kind, base + start..base + end));
        };

        while pos < bytes.len() {
            let ch = bytes[pos];
            let rest = &line[pos..];

            if ch.is_ascii_whitespace() {
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                push(&mut tokens, TokenKind::Whitespace, start, pos);
                continue;
            }

            if self.config.line_comments.iter().any(|c| rest.starts_with(c)) {
                push(&mut tokens, TokenKind::Comment, pos, bytes.len());
                return (tokens, LineState::Normal);
            }

            if let Some((open, close)) = self.config.block_comment
                && rest.starts_with(open)
            {
                let after_open = pos + open.len();
                match line[after_open..].find(close) {
                    Some(rel) => {
                        let end = after_open + rel + close.len();
                        push(&mut tokens, TokenKind::Comment, pos, end);
                        pos = end;
                        continue;
                    }
                    None => {
                        push(&mut tokens, TokenKind::Comment, pos, bytes.len());
                        return (tokens, LineState::InComment);
                    }
                }
            }

            if self.config.quotes.contains(&ch) {
                let start = pos;
                let triple = self.config.triple_quotes
                    && bytes.get(pos + 1) == Some(&ch)
                    && bytes.get(pos + 2) == Some(&ch);
                let (end, closed) = if triple {
                    scan_triple(bytes, pos + 3, ch)
                } else {
                    scan_string(bytes, pos + 1, ch)
                };
                push(&mut tokens, TokenKind::String, start, end);
                if !closed {
                    let state = if triple {
                        LineState::InTripleString(ch)
                    } else {
                        LineState::InString(ch)
                    };
                    return (tokens, state);
                }
                pos = end;
                continue;
            }

            if ch.is_ascii_digit() {
                let end = scan_number(bytes, pos);
                push(&mut tokens, TokenKind::Number, pos, end);
                pos = end;
                continue;
            }

            if Some(ch) == self.config.variable_sigil {
                let start = pos;
                pos += 1;
                if bytes.get(pos) == Some(&b'{') {
                    while pos < bytes.len() && bytes[pos] != b'}' {
                        pos += 1;
                    }
                    pos = (pos + 1).min(bytes.len());
                } else {
                    pos = scan_ident(bytes, pos);
                }
                push(&mut tokens, TokenKind::Variable, start, pos);
                continue;
            }

            if Some(ch) == self.config.attribute_sigil {
                let start = pos;
                pos = scan_ident(bytes, pos + 1);
                if bytes.get(pos) == Some(&b'[') {
                    while pos < bytes.len() && bytes[pos] != b']' {
                        pos += 1;
                    }
                    pos = (pos + 1).min(bytes.len());
                }
                push(&mut tokens, TokenKind::Attribute, start, pos);
                continue;
            }

            if ch.is_ascii_alphabetic() || ch == b'_' {
                let end = scan_ident(bytes, pos);
                let next = bytes[end..].iter().copied().find(|b| !b.is_ascii_whitespace());
                let kind = self.classify_word(&line[pos..end], next);
                push(&mut tokens, kind, pos, end);
                pos = end;
                continue;
            }

            if matches!(ch, b'(' | b')' | b'[' | b']' | b'{' | b'}') {
                push(&mut tokens, TokenKind::Delimiter, pos, pos + 1);
                pos += 1;
                continue;
            }

            if is_operator_byte(ch) {
                let start = pos;
                while pos < bytes.len() && is_operator_byte(bytes[pos]) {
                    pos += 1;
                }
                push(&mut tokens, TokenKind::Operator, start, pos);
                continue;
            }

            let char_len = rest.chars().next().map_or(1, char::len_utf8);
            push(&mut tokens, TokenKind::Punctuation, pos, pos + char_len);
            pos += char_len;
        }

        (tokens, LineState::Normal)
    }
}

impl Tokenizer for GenericTokenizer {
    fn language(&self) -> Language {
        self.config.language
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState) {
        match state {
            LineState::InComment => self.continue_block_comment(line),
            LineState::InString(q) => self.continue_string(line, q, false),
            LineState::InTripleString(q) => self.continue_string(line, q, true),
            LineState::Normal => self.tokenize_normal(line, 0),
        }
    }
}

fn scan_ident(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
        pos += 1;
    }
    pos
}

fn scan_number(bytes: &[u8], pos: usize) -> usize {
    let mut end = pos;
    if end + 1 < bytes.len() && bytes[end] == b'0' && (bytes[end + 1] | 0x20) == b'x' {
        end += 2;
        while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
            end += 1;
        }
        return end;
    }
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'_') {
        end += 1;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        end += 1;
    }
    end
}

/// Scan from just after an opening quote. Returns `(end, closed)`.
fn scan_string(bytes: &[u8], mut pos: usize, quote: u8) -> (usize, bool) {
    while pos < bytes.len() {
        if bytes[pos] == b'\\' {
            pos += 2;
        } else if bytes[pos] == quote {
            return (pos + 1, true);
        } else {
            pos += 1;
        }
    }
    (bytes.len(), false)
}

fn scan_triple(bytes: &[u8], mut pos: usize, quote: u8) -> (usize, bool) {
    while pos + 3 <= bytes.len() {
        if bytes[pos..pos + 3].iter().all(|b| *b == quote) {
            return (pos + 3, true);
        }
        pos += if bytes[pos] == b'\\' { 2 } else { 1 };
    }
    (bytes.len(), false)
}

fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'!' | b'<' | b'>' | b'&' | b'|' | b'^' | b'~'
            | b'?'
    )
}

// ---------------------------------------------------------------------------
// IniTokenizer
// ---------------------------------------------------------------------------

/// Tokenizer for INI/TOML-style `key = value` files.
///
/// `[section]` lines are headings, the text before `=` is a key, and the
/// value after it is a string unless it is numeric or a boolean.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniTokenizer;

impl Tokenizer for IniTokenizer {
    fn language(&self) -> Language {
        Language::Ini
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState) {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let mut tokens = Vec::new();
        if indent > 0 {
            tokens.push(Token::new(TokenKind::Whitespace, 0..indent));
        }
        if trimmed.is_empty() {
            return (tokens, state);
        }
        if trimmed.starts_with(';') || trimmed.starts_with('#') {
            tokens.push(Token::new(TokenKind::Comment, indent..line.len()));
            return (tokens, LineState::Normal);
        }
        if trimmed.starts_with('[') {
            tokens.push(Token::new(TokenKind::Heading, indent..line.len()));
            return (tokens, LineState::Normal);
        }
        let Some(eq) = line[indent..].find('=').map(|i| i + indent) else {
            tokens.push(Token::new(TokenKind::Text, indent..line.len()));
            return (tokens, LineState::Normal);
        };
        let key_end = line[..eq].trim_end().len().max(indent);
        tokens.push(Token::new(TokenKind::Attribute, indent..key_end));
        tokens.push(Token::new(TokenKind::Operator, eq..eq + 1));

        let value = line[eq + 1..].trim();
        if !value.is_empty() {
            let start = eq + 1 + line[eq + 1..].find(value).unwrap_or(0);
            let kind = if value.parse::<f64>().is_ok() {
                TokenKind::Number
            } else if matches!(value, "true" | "false" | "on" | "off") {
                TokenKind::Literal
            } else {
                TokenKind::String
            };
            tokens.push(Token::new(kind, start..start + value.len()));
        }
        (tokens, LineState::Normal)
    }
}

// ---------------------------------------------------------------------------
// Built-in language configurations
// ---------------------------------------------------------------------------

/// Lexical configuration for a built-in language.
pub fn builtin_config(lang: Language) -> GenericTokenizerConfig {
    let base = GenericTokenizerConfig::base(lang);
    match lang {
        Language::Rust => GenericTokenizerConfig {
            keywords: &[
                "fn", "let", "mut", "const", "static", "use", "mod", "pub", "crate", "self",
                "super", "impl", "trait", "struct", "enum", "type", "where", "as", "in", "ref",
                "move", "unsafe", "extern", "async", "await", "dyn",
            ],
            control_keywords: &[
                "if", "else", "match", "for", "while", "loop", "break", "continue", "return",
            ],
            type_keywords: &[
                "bool", "char", "str", "u8", "u16", "u32", "u64", "usize", "i32", "i64", "f64",
                "Self", "String", "Vec", "Option", "Result", "Box", "Arc",
            ],
            line_comments: &["//"],
            block_comment: Some(("/*", "*/")),
            quotes: b"\"",
            attribute_sigil: Some(b'#'),
            ..base
        },
        Language::Python => GenericTokenizerConfig {
            keywords: &[
                "def", "class", "import", "from", "as", "lambda", "with", "global", "nonlocal",
                "async", "await", "and", "or", "not", "in", "is", "pass", "del",
            ],
            control_keywords: &[
                "if", "elif", "else", "for", "while", "break", "continue", "return", "try",
                "except", "finally", "raise", "yield",
            ],
            type_keywords: &["int", "str", "float", "bool", "list", "dict", "set", "tuple"],
            literals: &["True", "False", "None"],
            line_comments: &["#"],
            triple_quotes: true,
            attribute_sigil: Some(b'@'),
            ..base
        },
        Language::JavaScript | Language::TypeScript => GenericTokenizerConfig {
            keywords: &[
                "const", "let", "var", "function", "class", "extends", "new", "this", "import",
                "export", "from", "default", "async", "await", "typeof", "instanceof", "of",
                "in", "interface", "type", "enum", "implements", "readonly", "public",
                "private",
            ],
            control_keywords: &[
                "if", "else", "for", "while", "do", "switch", "case", "break", "continue",
                "return", "try", "catch", "finally", "throw",
            ],
            type_keywords: if matches!(lang, Language::TypeScript) {
                &["string", "number", "boolean", "any", "unknown", "void", "never"]
            } else {
                &[]
            },
            literals: &["true", "false", "null", "undefined"],
            line_comments: &["//"],
            block_comment: Some(("/*", "*/")),
            quotes: b"\"'`",
            attribute_sigil: Some(b'@'),
            ..base
        },
        Language::Php => GenericTokenizerConfig {
            keywords: &[
                "function", "class", "new", "public", "private", "protected", "static", "use",
                "namespace", "echo", "require", "require_once", "include", "array", "fn",
            ],
            control_keywords: &[
                "if", "else", "elseif", "foreach", "for", "while", "switch", "case", "break",
                "return", "try", "catch", "throw",
            ],
            literals: &["true", "false", "null", "TRUE", "FALSE", "NULL"],
            line_comments: &["//", "#"],
            block_comment: Some(("/*", "*/")),
            variable_sigil: Some(b'$'),
            ..base
        },
        Language::Bash => GenericTokenizerConfig {
            keywords: &[
                "export", "local", "function", "source", "echo", "set", "unset", "readonly",
                "cd", "sudo",
            ],
            control_keywords: &[
                "if", "then", "else", "elif", "fi", "for", "while", "do", "done", "case",
                "esac", "in", "return", "exit",
            ],
            line_comments: &["#"],
            variable_sigil: Some(b'$'),
            ..base
        },
        Language::Yaml => GenericTokenizerConfig {
            literals: &["true", "false", "null", "yes", "no", "on", "off"],
            line_comments: &["#"],
            ..base
        },
        Language::Json => GenericTokenizerConfig {
            literals: &["true", "false", "null"],
            quotes: b"\"",
            ..base
        },
        Language::Hcl => GenericTokenizerConfig {
            keywords: &[
                "resource", "data", "variable", "output", "module", "provider", "locals",
                "terraform", "backend", "required_providers",
            ],
            control_keywords: &["for", "in", "if", "for_each", "count", "depends_on"],
            type_keywords: &["string", "number", "bool", "list", "map", "object", "set"],
            literals: &["true", "false", "null"],
            line_comments: &["#", "//"],
            block_comment: Some(("/*", "*/")),
            quotes: b"\"",
            ..base
        },
        Language::Dockerfile => GenericTokenizerConfig {
            keywords: &[
                "FROM", "RUN", "CMD", "LABEL", "EXPOSE", "ENV", "ADD", "COPY", "ENTRYPOINT",
                "VOLUME", "USER", "WORKDIR", "ARG", "ONBUILD", "HEALTHCHECK", "SHELL", "AS",
            ],
            case_insensitive: true,
            line_comments: &["#"],
            variable_sigil: Some(b'$'),
            ..base
        },
        Language::Sql => GenericTokenizerConfig {
            keywords: &[
                "select", "from", "where", "insert", "into", "values", "update", "set", "delete",
                "create", "table", "index", "drop", "alter", "join", "left", "right", "inner",
                "on", "group", "by", "order", "having", "limit", "as", "and", "or", "not",
                "grant", "primary", "key",
            ],
            control_keywords: &["case", "when", "then", "else", "end", "begin", "commit"],
            type_keywords: &["int", "integer", "varchar", "text", "boolean", "timestamp"],
            literals: &["true", "false", "null"],
            case_insensitive: true,
            line_comments: &["--"],
            block_comment: Some(("/*", "*/")),
            ..base
        },
        Language::Go => GenericTokenizerConfig {
            keywords: &[
                "package", "import", "func", "var", "const", "type", "struct", "interface",
                "map", "chan", "go", "defer", "range",
            ],
            control_keywords: &[
                "if", "else", "for", "switch", "case", "default", "break", "continue", "return",
                "select", "goto",
            ],
            type_keywords: &[
                "int", "int64", "uint", "float64", "string", "bool", "byte", "rune", "error",
            ],
            literals: &["true", "false", "nil"],
            line_comments: &["//"],
            block_comment: Some(("/*", "*/")),
            quotes: b"\"'`",
            ..base
        },
        Language::Ini => GenericTokenizerConfig {
            line_comments: &[";", "#"],
            ..base
        },
    }
}

// ---------------------------------------------------------------------------
// Highlight theme
// ---------------------------------------------------------------------------

/// Maps token kinds to styles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightTheme {
    pub background: Rgb,
    pub keyword: Style,
    pub keyword_control: Style,
    pub keyword_type: Style,
    pub string: Style,
    pub number: Style,
    pub literal: Style,
    pub identifier: Style,
    pub type_name: Style,
    pub function: Style,
    pub variable: Style,
    pub comment: Style,
    pub operator: Style,
    pub punctuation: Style,
    pub attribute: Style,
    pub heading: Style,
    pub text: Style,
}

impl HighlightTheme {
    /// The fixed dark theme for code blocks.
    pub fn dark() -> Self {
        let blue = Rgb::rgb(86, 156, 214);
        let purple = Rgb::rgb(197, 134, 192);
        let teal = Rgb::rgb(78, 201, 176);
        let orange = Rgb::rgb(206, 145, 120);
        let green = Rgb::rgb(106, 153, 85);
        let sage = Rgb::rgb(181, 206, 168);
        let yellow = Rgb::rgb(220, 220, 170);
        let light_blue = Rgb::rgb(156, 220, 254);
        let fg = Rgb::rgb(212, 212, 212);
        Self {
            background: Rgb::rgb(30, 30, 30),
            keyword: Style::new().fg(blue),
            keyword_control: Style::new().fg(purple),
            keyword_type: Style::new().fg(teal),
            string: Style::new().fg(orange),
            number: Style::new().fg(sage),
            literal: Style::new().fg(blue),
            identifier: Style::new().fg(light_blue),
            type_name: Style::new().fg(teal),
            function: Style::new().fg(yellow),
            variable: Style::new().fg(light_blue),
            comment: Style::new().fg(green).italic(),
            operator: Style::new().fg(fg),
            punctuation: Style::new().fg(fg),
            attribute: Style::new().fg(light_blue),
            heading: Style::new().fg(blue).bold(),
            text: Style::new().fg(fg),
        }
    }

    pub fn style_for(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::KeywordControl => self.keyword_control,
            TokenKind::KeywordType => self.keyword_type,
            TokenKind::String => self.string,
            TokenKind::Number => self.number,
            TokenKind::Literal => self.literal,
            TokenKind::Identifier => self.identifier,
            TokenKind::Type => self.type_name,
            TokenKind::Function => self.function,
            TokenKind::Variable => self.variable,
            TokenKind::Comment => self.comment,
            TokenKind::Operator => self.operator,
            TokenKind::Punctuation | TokenKind::Delimiter => self.punctuation,
            TokenKind::Attribute => self.attribute,
            TokenKind::Heading => self.heading,
            TokenKind::Whitespace | TokenKind::Text => Style::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SyntaxHighlighter
// ---------------------------------------------------------------------------

/// A styled run of source text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Registry plus theme.
pub struct SyntaxHighlighter {
    registry: TokenizerRegistry,
    theme: HighlightTheme,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    /// All built-in tokenizers with the dark theme.
    pub fn new() -> Self {
        Self {
            registry: TokenizerRegistry::with_builtins(),
            theme: HighlightTheme::dark(),
        }
    }

    pub fn with_theme(theme: HighlightTheme) -> Self {
        Self {
            theme,
            ..Self::new()
        }
    }

    pub fn theme(&self) -> &HighlightTheme {
        &self.theme
    }

    pub fn register_tokenizer(&mut self, tokenizer: Box<dyn Tokenizer>) {
        self.registry.register(tokenizer);
    }

    /// Split `code` into lines of spans. Each line's spans cover it exactly.
    pub fn highlight<'a>(&self, code: &'a str, lang: Language) -> Vec<Vec<StyledSpan<'a>>> {
        let mut state = LineState::Normal;
        code.split('\n')
            .map(|line| match self.registry.get(lang) {
                Some(tokenizer) => {
                    let (tokens, next) = tokenizer.tokenize_line(line, state);
                    state = next;
                    tokens_to_spans(line, &tokens)
                }
                None => plain_line(line),
            })
            .collect()
    }

    /// Render `code` as a themed `<pre><code>` block.
    pub fn render(&self, code: &str, lang: Language) -> Node {
        let mut code_el = Element::new("code").class(format!("language-{}", lang.name()));
        for (idx, line) in self.highlight(code, lang).into_iter().enumerate() {
            if idx > 0 {
                code_el.push("\n");
            }
            for span in line {
                let style = self.theme.style_for(span.kind);
                if style.is_empty() {
                    code_el.push(span.text);
                } else {
                    code_el.push(Element::new("span").style(style).text(span.text));
                }
            }
        }
        Element::new("pre")
            .class("folio-code rounded-lg p-4 overflow-x-auto mb-4 text-sm")
            .attr("data-language", lang.name())
            .style(Style::new().bg(self.theme.background).fg(self.theme.text.fg.unwrap_or(Rgb::WHITE)))
            .child(code_el)
            .into()
    }
}

fn plain_line(line: &str) -> Vec<StyledSpan<'_>> {
    if line.is_empty() {
        Vec::new()
    } else {
        vec![StyledSpan {
            text: line,
            kind: TokenKind::Text,
        }]
    }
}

/// Convert tokens to spans, filling gaps so the line is fully covered.
fn tokens_to_spans<'a>(source: &'a str, tokens: &[Token]) -> Vec<StyledSpan<'a>> {
    let mut spans = Vec::with_capacity(tokens.len());
    let mut last_end = 0;
    for token in tokens {
        if token.range.start > last_end
            && let Some(gap) = source.get(last_end..token.range.start)
        {
            spans.push(StyledSpan {
                text: gap,
                kind: TokenKind::Text,
            });
        }
        if let Some(text) = source.get(token.range.clone())
            && !text.is_empty()
        {
            spans.push(StyledSpan {
                text,
                kind: token.kind,
            });
        }
        last_end = last_end.max(token.range.end);
    }
    if last_end < source.len()
        && let Some(tail) = source.get(last_end..)
    {
        spans.push(StyledSpan {
            text: tail,
            kind: TokenKind::Text,
        });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::HtmlPresenter;
    use proptest::prelude::*;

    fn kinds(lang: Language, line: &str) -> Vec<(TokenKind, String)> {
        let registry = TokenizerRegistry::with_builtins();
        let tokenizer = registry.get(lang).unwrap();
        let (tokens, _) = tokenizer.tokenize_line(line, LineState::Normal);
        tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, line[t.range].to_string()))
            .collect()
    }

    #[test]
    fn tags_and_aliases() {
        assert_eq!(Language::from_tag("Python"), Some(Language::Python));
        assert_eq!(Language::from_tag("yml"), Some(Language::Yaml));
        assert_eq!(Language::from_tag("terraform"), Some(Language::Hcl));
        assert_eq!(Language::from_tag("mermaid"), None);
        assert_eq!(Language::from_tag(""), None);
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.name()), Some(lang));
        }
    }

    #[test]
    fn registry_covers_every_language() {
        assert_eq!(TokenizerRegistry::with_builtins().len(), Language::ALL.len());
    }

    #[test]
    fn python_keywords_strings_and_functions() {
        let toks = kinds(Language::Python, "def check(host): return 'ok' # done");
        assert_eq!(toks[0], (TokenKind::Keyword, "def".into()));
        assert_eq!(toks[1], (TokenKind::Function, "check".into()));
        assert!(toks.contains(&(TokenKind::KeywordControl, "return".into())));
        assert!(toks.contains(&(TokenKind::String, "'ok'".into())));
        assert_eq!(toks.last().unwrap(), &(TokenKind::Comment, "# done".into()));
    }

    #[test]
    fn php_variables_use_sigil() {
        let toks = kinds(Language::Php, "$redis->connect('host', 6379);");
        assert_eq!(toks[0], (TokenKind::Variable, "$redis".into()));
        assert!(toks.contains(&(TokenKind::Number, "6379".into())));
    }

    #[test]
    fn sql_keywords_ignore_case() {
        let toks = kinds(Language::Sql, "SELECT id FROM users -- all");
        assert_eq!(toks[0], (TokenKind::Keyword, "SELECT".into()));
        assert_eq!(toks[2], (TokenKind::Keyword, "FROM".into()));
        assert_eq!(toks.last().unwrap().0, TokenKind::Comment);
    }

    #[test]
    fn ini_sections_keys_values() {
        let toks = kinds(Language::Ini, "session.save_handler = redis");
        assert_eq!(
            toks,
            vec![
                (TokenKind::Attribute, "session.save_handler".into()),
                (TokenKind::Operator, "=".into()),
                (TokenKind::String, "redis".into()),
            ]
        );
        assert_eq!(kinds(Language::Ini, "[Session]")[0].0, TokenKind::Heading);
    }

    #[test]
    fn block_comment_spans_lines() {
        let registry = TokenizerRegistry::with_builtins();
        let js = registry.get(Language::JavaScript).unwrap();
        let (_, state) = js.tokenize_line("const a = 1; /* start", LineState::Normal);
        assert_eq!(state, LineState::InComment);
        let (tokens, state) = js.tokenize_line("end */ let b", state);
        assert_eq!(state, LineState::Normal);
        assert_eq!(tokens[0], Token::new(TokenKind::Comment, 0..6));
    }

    #[test]
    fn python_triple_quoted_strings_span_lines() {
        let registry = TokenizerRegistry::with_builtins();
        let py = registry.get(Language::Python).unwrap();
        let (_, state) = py.tokenize_line("doc = \"\"\"first", LineState::Normal);
        assert_eq!(state, LineState::InTripleString(b'"'));
        let (tokens, state) = py.tokenize_line("still \"\"\" + x", state);
        assert_eq!(state, LineState::Normal);
        assert_eq!(tokens[0], Token::new(TokenKind::String, 0..9));
    }

    #[test]
    fn render_uses_language_class_and_dark_background() {
        let hl = SyntaxHighlighter::new();
        let html = HtmlPresenter::new().render_node(&hl.render("x = 1\nprint(x)", Language::Python));
        assert!(html.starts_with("<pre class=\"folio-code"));
        assert!(html.contains("data-language=\"python\""));
        assert!(html.contains("background:#1e1e1e;"));
        assert!(html.contains("<code class=\"language-python\">"));
    }

    proptest! {
        #[test]
        fn spans_reconstruct_source(code in "[ -~\n\t]{0,120}", idx in 0usize..13) {
            let lang = Language::ALL[idx];
            let hl = SyntaxHighlighter::new();
            let rebuilt: Vec<String> = hl
                .highlight(&code, lang)
                .into_iter()
                .map(|line| line.iter().map(|s| s.text).collect())
                .collect();
            prop_assert_eq!(rebuilt.join("\n"), code.clone());

            let registry = TokenizerRegistry::with_builtins();
            let tokens = registry.get(lang).unwrap().tokenize(&code);
            prop_assert!(validate_tokens(&code, &tokens));
        }
    }
}
