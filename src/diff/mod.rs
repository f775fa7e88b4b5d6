//! Reading, parsing and chunking the working tree diff.

pub mod assemble;
pub mod collect;
pub mod parser;

pub use assemble::{assemble, truncate_chars};
pub use collect::{collect_diff, open_repository};
pub use parser::{FileDiffUnit, parse};
