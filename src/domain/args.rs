use std::fmt;

/// A single argument token, tracking whether it must be quoted when the
/// command line is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Raw(String),
    Quoted(String),
}

impl Token {
    fn value(&self) -> &str {
        match self {
            Token::Raw(value) | Token::Quoted(value) => value,
        }
    }
}

/// Ordered builder for the argument vector handed to the spawned process.
///
/// Tokens are kept in insertion order. `render` produces the textual
/// command line (quoted tokens wrapped in double quotes), while `to_args`
/// yields the bare tokens for `std::process::Command`, which performs its
/// own platform quoting.
#[derive(Debug, Clone, Default)]
pub struct ArgumentBuilder {
    tokens: Vec<Token>,
}

impl ArgumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw token.
    pub fn append(&mut self, token: impl Into<String>) {
        self.tokens.push(Token::Raw(token.into()));
    }

    /// Append a token that is quoted in the rendered command line.
    pub fn append_quoted(&mut self, token: impl Into<String>) {
        self.tokens.push(Token::Quoted(token.into()));
    }

    /// Append a `--switch value` pair as two raw tokens.
    pub fn append_switch(&mut self, switch: &str, value: impl fmt::Display) {
        self.tokens.push(Token::Raw(switch.to_string()));
        self.tokens.push(Token::Raw(value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The bare tokens, without quoting, for process spawning.
    pub fn to_args(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.value().to_string()).collect()
    }

    /// The full command line as a single space-joined string.
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .tokens
            .iter()
            .map(|token| match token {
                Token::Raw(value) => value.clone(),
                Token::Quoted(value) => format!("\"{value}\""),
            })
            .collect();
        rendered.join(" ")
    }
}

impl fmt::Display for ArgumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_tokens_with_spaces() {
        let mut args = ArgumentBuilder::new();
        args.append("start");
        args.append("--colors");
        assert_eq!(args.render(), "start --colors");
    }

    #[test]
    fn quoted_tokens_are_wrapped_in_render_only() {
        let mut args = ArgumentBuilder::new();
        args.append_quoted("karma.conf.js");
        assert_eq!(args.render(), "\"karma.conf.js\"");
        assert_eq!(args.to_args(), vec!["karma.conf.js".to_string()]);
    }

    #[test]
    fn switch_appends_name_and_value_as_separate_tokens() {
        let mut args = ArgumentBuilder::new();
        args.append_switch("--port", 9876);
        assert_eq!(args.render(), "--port 9876");
        assert_eq!(args.to_args(), vec!["--port".to_string(), "9876".to_string()]);
    }

    #[test]
    fn empty_builder_renders_empty_line() {
        let args = ArgumentBuilder::new();
        assert!(args.is_empty());
        assert_eq!(args.render(), "");
    }
}
