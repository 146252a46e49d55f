//! Splits a result list into fixed-size blocks for row-based rendering.

/// Splits `items` into consecutive blocks of `block_size`.
///
/// - `None` gives no blocks at all.
/// - An empty list, or a `block_size` of zero, gives the whole input as a
///   single block.
/// - Otherwise a block is cut at every `start = 0, block_size, ...` while
///   `start <= items.len()`, so a list whose length is a multiple of
///   `block_size` ends with one empty block.
pub fn chunk<T: Clone>(items: Option<&[T]>, block_size: usize) -> Vec<Vec<T>> {
    let Some(items) = items else {
        return Vec::new();
    };
    if items.is_empty() || block_size == 0 {
        return vec![items.to_vec()];
    }

    let mut blocks = Vec::with_capacity(items.len() / block_size + 1);
    let mut start = 0_usize;
    while start <= items.len() {
        let end = start.saturating_add(block_size).min(items.len());
        blocks.push(items[start..end].to_vec());
        match start.checked_add(block_size) {
            Some(next) => start = next,
            None => break,
        }
    }
    blocks
}
