//! Token classification for raw argument strings
//!
//! Each raw token is classified independently of its neighbors: tokens
//! without a leading dash are not options and are dropped, `--name`
//! collapses to `-name`, and a `no`-prefixed name becomes a negation of
//! its base option.

/// A single recognized argument token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `-name` or `-name=value`: a direct assignment to `-name`.
    /// A bare `-name` carries the empty string as its value.
    Direct { name: String, value: String },
    /// `-noname` or `-noname=value`: negates `-name` unless a direct
    /// assignment for `-name` appears anywhere in the same input
    Negation { base: String, value: String },
}

/// Classify one raw token.
///
/// Returns `None` for anything that is not a well-formed option: tokens
/// without a leading dash, and dashes with an empty or dash-leading name
/// (`-`, `--`, `-=v`, `---x`). Malformed tokens never fail the parse;
/// they degrade to "no matching option".
pub fn classify(raw: &str) -> Option<Token> {
    let Some(rest) = raw.strip_prefix('-') else {
        log::debug!("ignoring non-option token {:?}", raw);
        return None;
    };
    // Treat -- the same as -
    let bare = rest.strip_prefix('-').unwrap_or(rest);

    let (name, value) = match bare.split_once('=') {
        Some((name, value)) => (name, value),
        None => (bare, ""),
    };

    if name.is_empty() || name.starts_with('-') {
        log::debug!("ignoring malformed token {:?}", raw);
        return None;
    }

    // -noX negates -X; a lone "no" is an ordinary option named -no
    match name.strip_prefix("no") {
        Some(base) if !base.is_empty() => Some(Token::Negation {
            base: format!("-{}", base),
            value: value.to_string(),
        }),
        _ => Some(Token::Direct {
            name: format!("-{}", name),
            value: value.to_string(),
        }),
    }
}
