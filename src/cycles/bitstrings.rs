//! Exhaustive binary vectors of a fixed length.

use crate::error::{Result, RouteGenError};

/// Longest vector [`BitStrings`] can enumerate.
pub const MAX_BITS: usize = 63;

/// Iterator over all `2^n` binary vectors of length `n`.
///
/// Vectors come in counting order: the `v`-th item is the binary expansion
/// of `v` with the most significant bit at position 0. This matches a
/// decision recursion that tries `false` before `true` at each position.
/// The iterator holds no shared state and can be cloned or restarted freely.
///
/// # Examples
///
/// ```
/// use u_routegen::cycles::BitStrings;
///
/// let all: Vec<Vec<bool>> = BitStrings::new(2).unwrap().collect();
/// assert_eq!(all, vec![
///     vec![false, false],
///     vec![false, true],
///     vec![true, false],
///     vec![true, true],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct BitStrings {
    width: usize,
    next: u64,
    end: u64,
}

impl BitStrings {
    /// Creates the enumeration for vectors of length `width`.
    ///
    /// Fails with `InvalidParameter` above [`MAX_BITS`].
    pub fn new(width: usize) -> Result<Self> {
        if width > MAX_BITS {
            return Err(RouteGenError::InvalidParameter(format!(
                "cannot enumerate {width}-bit vectors (limit {MAX_BITS}); reduce the region size"
            )));
        }
        Ok(Self {
            width,
            next: 0,
            end: 1u64 << width,
        })
    }

    /// Length of every yielded vector.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Binary expansion of `value` as a vector of length `width`.
    pub fn decode(value: u64, width: usize) -> Vec<bool> {
        (0..width)
            .map(|i| (value >> (width - 1 - i)) & 1 == 1)
            .collect()
    }
}

impl Iterator for BitStrings {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let bits = Self::decode(self.next, self.width);
        self.next += 1;
        Some(bits)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitStrings {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn value(bits: &[bool]) -> u64 {
        bits.iter().fold(0, |acc, &b| (acc << 1) | u64::from(b))
    }

    #[test]
    fn test_zero_width() {
        let all: Vec<_> = BitStrings::new(0).expect("valid").collect();
        assert_eq!(all, vec![Vec::<bool>::new()]);
    }

    #[test]
    fn test_counts_in_order() {
        for n in 0..=10 {
            let bits_iter = BitStrings::new(n).expect("valid");
            assert_eq!(bits_iter.len(), 1 << n);
            for (expected, bits) in bits_iter.enumerate() {
                assert_eq!(bits.len(), n);
                assert_eq!(value(&bits), expected as u64);
            }
        }
    }

    #[test]
    fn test_distinct() {
        let all: HashSet<Vec<bool>> = BitStrings::new(8).expect("valid").collect();
        assert_eq!(all.len(), 256);
    }

    #[test]
    fn test_restartable() {
        let bits_iter = BitStrings::new(3).expect("valid");
        let a: Vec<_> = bits_iter.clone().collect();
        let b: Vec<_> = bits_iter.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_too_wide() {
        assert!(BitStrings::new(MAX_BITS).is_ok());
        assert!(matches!(
            BitStrings::new(MAX_BITS + 1),
            Err(RouteGenError::InvalidParameter(_))
        ));
    }
}
