use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: BEGIN:VCARD while a vCard is still open")]
    NestedBegin { line: usize },
    #[error("line {line}: END:VCARD without a matching BEGIN:VCARD")]
    UnmatchedEnd { line: usize },
    #[error("input ended inside a vCard; missing END:VCARD")]
    MissingEnd,
}

pub type Result<T> = std::result::Result<T, ParseError>;
