//! Sign checks for [`Decimal`] that read the way they are spoken.

use rust_decimal::Decimal;

/// Sign predicates on [`Decimal`].
///
/// Zero is neither positive nor negative, whatever its scale or sign bit.
///
/// ```
/// use extrautils_collections::DecimalExt;
/// use rust_decimal::Decimal;
///
/// let zero = Decimal::new(0, 3);
/// assert!(!zero.is_positive());
/// assert!(zero.positive_or_zero());
/// assert!(Decimal::new(-15, 1).is_negative());
/// ```
pub trait DecimalExt {
    fn is_positive(&self) -> bool;
    fn is_negative(&self) -> bool;
    fn positive_or_zero(&self) -> bool;
    fn negative_or_zero(&self) -> bool;
}

impl DecimalExt for Decimal {
    fn is_positive(&self) -> bool {
        !self.is_zero() && self.is_sign_positive()
    }

    fn is_negative(&self) -> bool {
        !self.is_zero() && self.is_sign_negative()
    }

    fn positive_or_zero(&self) -> bool {
        self.is_zero() || self.is_sign_positive()
    }

    fn negative_or_zero(&self) -> bool {
        self.is_zero() || self.is_sign_negative()
    }
}
