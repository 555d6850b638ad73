use core::ops::Range;

use snafu::ensure;

use crate::error::{InvalidArgumentSnafu, Result};

/// Range of `count * unit` bytes starting at `offset`, checked against `len`.
#[inline]
pub(crate) fn window(
    what: &'static str,
    offset: usize,
    count: usize,
    unit: usize,
    len: usize,
) -> Result<Range<usize>> {
    let end = count
        .checked_mul(unit)
        .and_then(|width| offset.checked_add(width))
        .unwrap_or(usize::MAX);
    ensure!(end <= len, InvalidArgumentSnafu { what, end, len });
    Ok(offset..end)
}
