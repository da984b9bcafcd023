//! Regular expressions compiled once per process

/// Compile a regular expression the first time it is used and keep it for
/// the life of the program. The pattern must be a literal known to be valid.
#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Split a `collection=token` assignment as given on the command line. The
/// token is taken as is, white space included, so that it can be checked.
pub fn parse_assignment(text: &str) -> Option<(&str, &str)> {
    let captures = regex!(r"^\s*([A-Za-z0-9_\-]+)\s*=(.*)$").captures(text)?;
    let collection_id = captures
        .get(1)?
        .as_str();
    let token = captures
        .get(2)?
        .as_str();
    Some((collection_id, token))
}
