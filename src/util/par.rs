//! Fan-out helpers with an optional rayon backend.
//!
//! With the `rayon` feature each destination row (or sample index) is handed
//! to a worker, so writes never overlap and the call returns only after every
//! worker has finished. Without the feature the same closures run in order.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Runs `f(y, row)` for every row of a row-major buffer of the given width.
pub(crate) fn for_each_row<T, F>(data: &mut [T], width: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    debug_assert!(width > 0);
    #[cfg(feature = "rayon")]
    {
        data.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }

    #[cfg(not(feature = "rayon"))]
    {
        data.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}

/// Evaluates `f` for `0..len` and collects the results in index order.
pub(crate) fn map_indices<T, F>(len: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        (0..len).into_par_iter().map(f).collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        (0..len).map(f).collect()
    }
}

/// Returns the lowest index whose item satisfies `pred`.
pub(crate) fn position_first<T, P>(items: &[T], pred: P) -> Option<usize>
where
    T: Sync,
    P: Fn(&T) -> bool + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        items.par_iter().position_first(pred)
    }

    #[cfg(not(feature = "rayon"))]
    {
        items.iter().position(pred)
    }
}
