//! Kinds of fragment that renderers can style

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Neutral, // default
    Token,
    Collection,
    Constant,
    Separator,
    Extension,
    Optional,
    Punctuation,
    Problem,
    Error,
    Warning,
    Caret,
    Valid,
    Invalid,
}
