use polars::prelude::{DataFrame, StringChunked};
use wcup_model::{CaseInsensitiveSet, SourceTable};

use crate::error::{NormalizeError, Result};

/// Builds the header lookup a normalizer resolves its columns through.
pub(crate) fn header_lookup(df: &DataFrame) -> CaseInsensitiveSet {
    CaseInsensitiveSet::new(df.get_column_names_owned())
}

/// Resolves `column` against the frame's headers without regard to letter
/// case or interior whitespace runs, then borrows it as UTF-8.
///
/// Every loader column is UTF-8, so the `str()` downcast only fails for
/// frames built outside the loader.
pub(crate) fn required_str_column<'a>(
    df: &'a DataFrame,
    lookup: &CaseInsensitiveSet,
    table: SourceTable,
    column: &str,
) -> Result<&'a StringChunked> {
    let Some(actual) = lookup.get(column) else {
        return Err(NormalizeError::MissingColumn {
            table,
            column: column.to_string(),
        });
    };
    Ok(df.column(actual)?.str()?)
}
