//! Search tuning constants.

/// Number of result cards rendered per row of the result grid.
pub const RESULT_BLOCK_SIZE: usize = 3;

/// Shorter query texts are never sent to the backend.
pub const MIN_QUERY_LENGTH: usize = 3;
