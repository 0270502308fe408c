pub mod keywords;
pub mod selector;

pub use keywords::{KeywordSet, FINANCE_KEYWORDS};
pub use selector::{select, select_with_stats, Selection};
