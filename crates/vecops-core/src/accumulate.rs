//! Sequential accumulation engine shared by every reducing kernel
//!
//! Every reduction in this crate is a left-to-right fold through one of the
//! combining operators below. Fixing the order fixes how NaN and infinities
//! propagate: the result of a kernel is the result of this fold, never of
//! some reassociated variant of it.
//!
//! # Operators
//!
//! | Operator         | Identity | Step                         |
//! |------------------|----------|------------------------------|
//! | [`SumOp`]        | `0`      | `acc + x`                    |
//! | [`ProductOp`]    | `1`      | `acc * x`                    |
//! | [`MaxMagnitudeOp`] | `0`    | NaN-sticky `max(acc, x)`     |
//!
//! Absolute values and differences are mappings applied to the input
//! iterator before the fold, so `l1_norm` is `SumOp` over `|s_i - t_i|`.

use num_traits::Float;

/// Length over which a multi-sequence kernel operates
///
/// Kernels given sequences of differing length work on the shortest common
/// prefix and leave everything beyond it untouched. Mismatched lengths are
/// never an error.
///
/// ```rust
/// use vecops_core::accumulate::common_prefix_len;
///
/// assert_eq!(common_prefix_len([3, 1]), 1);
/// assert_eq!(common_prefix_len([4, 3, 5]), 3);
/// assert_eq!(common_prefix_len::<0>([]), 0);
/// ```
#[inline]
pub fn common_prefix_len<const N: usize>(lens: [usize; N]) -> usize {
    lens.into_iter().min().unwrap_or(0)
}

/// A combining operator for sequential folds
pub trait Combine<T: Float> {
    /// Value returned for empty input
    fn identity() -> T;

    /// One fold step
    fn combine(acc: T, x: T) -> T;

    /// Fold `values` left to right starting from the identity
    #[inline]
    fn fold<I>(values: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        Self::fold_from(Self::identity(), values)
    }

    /// Fold `values` left to right starting from `init`
    #[inline]
    fn fold_from<I>(init: T, values: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().fold(init, Self::combine)
    }

    /// Running prefix accumulation of `src` into `dst`
    ///
    /// Writes `dst[i] = src[0] ⊕ src[1] ⊕ ... ⊕ src[i]` for the common prefix
    /// and returns that prefix of `dst`. The first output is a copy of
    /// `src[0]` rather than `identity ⊕ src[0]`, so a leading `-0.0` survives
    /// a running sum. Each later term is combined with the previous partial
    /// result, so a NaN at position k reaches every output after k.
    fn scan<'a>(dst: &'a mut [T], src: &[T]) -> &'a mut [T] {
        let n = common_prefix_len([dst.len(), src.len()]);
        let (out, src) = (&mut dst[..n], &src[..n]);
        if let Some((&first, rest)) = src.split_first() {
            let mut acc = first;
            out[0] = acc;
            for (d, &s) in out[1..].iter_mut().zip(rest) {
                acc = Self::combine(acc, s);
                *d = acc;
            }
        }
        out
    }
}

/// Addition
#[derive(Clone, Copy, Debug, Default)]
pub struct SumOp;

impl<T: Float> Combine<T> for SumOp {
    #[inline]
    fn identity() -> T {
        T::zero()
    }

    #[inline]
    fn combine(acc: T, x: T) -> T {
        acc + x
    }
}

/// Multiplication
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductOp;

impl<T: Float> Combine<T> for ProductOp {
    #[inline]
    fn identity() -> T {
        T::one()
    }

    #[inline]
    fn combine(acc: T, x: T) -> T {
        acc * x
    }
}

/// Maximum over non-negative magnitudes with NaN propagation
///
/// The identity is `0`, so this operator is only meaningful for inputs that
/// are magnitudes (`|x|`) or NaN. A NaN wins at the first position where it
/// appears and is never replaced afterwards, not even by a later NaN.
/// `Float::max` would instead discard the NaN.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxMagnitudeOp;

impl<T: Float> Combine<T> for MaxMagnitudeOp {
    #[inline]
    fn identity() -> T {
        T::zero()
    }

    #[inline]
    fn combine(acc: T, x: T) -> T {
        if acc.is_nan() {
            acc
        } else if x.is_nan() || x > acc {
            x
        } else {
            acc
        }
    }
}

/// Overflow-safe Euclidean norm of a sequence of values
///
/// Tracks `scale * sqrt(ssq)` with `scale` the largest magnitude seen so
/// far, so squares of large values never overflow. Zeros are skipped, a NaN
/// returns NaN immediately and an infinite magnitude makes the result `+inf`.
pub fn scaled_l2<T, I>(values: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut scale = T::zero();
    let mut ssq = T::one();
    for v in values {
        if v == T::zero() {
            continue;
        }
        let abs = v.abs();
        if abs.is_nan() {
            return T::nan();
        }
        if scale < abs {
            let s = scale / abs;
            ssq = T::one() + ssq * s * s;
            scale = abs;
        } else {
            let s = abs / scale;
            ssq = ssq + s * s;
        }
    }
    if scale.is_infinite() {
        return T::infinity();
    }
    scale * ssq.sqrt()
}
