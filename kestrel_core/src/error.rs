use thiserror::Error;

/// Failures that can occur while loading a magic-number file written by the
/// offline search tool (see [`crate::move_gen::magic::Magics::load`]).
///
/// Every variant here is fatal to engine startup: a missing or malformed
/// magic file means the engine cannot build its attack tables at all, so
/// callers at the binary boundary should print the message and exit with a
/// non-zero status rather than trying to continue.
#[derive(Error, Debug)]
pub enum MagicLoadError {
    #[error("failed to read magic file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{family} magic file {path} is malformed: line {line} expected {expected} tokens, found {found}")]
    MalformedLine {
        path: String,
        family: &'static str,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{family} magic file {path} has too few lines: expected 2, found {found}")]
    TooFewLines {
        path: String,
        family: &'static str,
        found: usize,
    },

    #[error("{family} magic file {path} contains a token that is not a valid u64: '{token}'")]
    InvalidNumber {
        path: String,
        family: &'static str,
        token: String,
    },
}
