//! Array chunking

/// Split `items` into consecutive chunks of `size`; the final chunk holds
/// the remainder. A zero size or empty input yields no chunks.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}
