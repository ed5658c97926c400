pub mod card;
pub mod clean;
pub mod error;
pub mod merge;
pub mod name;
pub mod parse;
pub mod phone;
pub mod write;

pub use card::{Card, Property};
pub use clean::{clean_cards, dedup_phones, CleanStats};
pub use error::{ParseError, Result};
pub use merge::{merge_by_name, DuplicateGroup, MergeOutcome};
pub use name::normalize_name_for_match;
pub use parse::parse_vcf;
pub use phone::normalize_phone_for_match;
pub use write::{card_to_string, write_vcf};
