pub mod lookup;
pub mod records;
pub mod schema;

pub use lookup::CaseInsensitiveSet;
pub use records::{Edition, MatchRecord, Player};
pub use schema::SourceTable;
