//! A value that may or may not have been set.

use std::fmt;

use crate::error::ValueError;

const NOT_SET: &str = "###-VALUE NOT SET-###";

/// Holds a value or nothing.
///
/// Unlike a bare `Option<T>`, the wrapped type can itself be optional, so
/// "set to nothing" (`OptionalValue::of(None)`) and "never set"
/// (`OptionalValue::empty()`) stay distinct.
///
/// ```
/// use extrautils_values::OptionalValue;
///
/// let null: OptionalValue<Option<i32>> = OptionalValue::of(None);
/// let unset: OptionalValue<Option<i32>> = OptionalValue::empty();
///
/// assert!(null.is_set());
/// assert!(!unset.is_set());
/// assert_ne!(null, unset);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OptionalValue<T> {
    inner: Option<T>,
}

impl<T> OptionalValue<T> {
    /// A wrapper holding nothing.
    pub const fn empty() -> Self {
        OptionalValue { inner: None }
    }

    /// A wrapper holding `value`.
    pub const fn of(value: T) -> Self {
        OptionalValue { inner: Some(value) }
    }

    /// Whether a value has been set.
    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// The held value, or [`ValueError::NoValue`].
    pub fn value(&self) -> Result<&T, ValueError> {
        self.inner.as_ref().ok_or(ValueError::NoValue)
    }

    /// Consumes the wrapper, returning the held value or [`ValueError::NoValue`].
    pub fn into_value(self) -> Result<T, ValueError> {
        self.inner.ok_or(ValueError::NoValue)
    }

    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    pub fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(inner: Option<T>) -> Self {
        OptionalValue { inner }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => write!(f, "OptionalValue({:?})", value),
            None => write!(f, "OptionalValue({})", NOT_SET),
        }
    }
}

impl<T: fmt::Display> fmt::Display for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => write!(f, "OptionalValue({})", value),
            None => write!(f, "OptionalValue({})", NOT_SET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_set() {
        assert!(OptionalValue::of("").is_set());
        assert!(OptionalValue::<Option<i32>>::of(None).is_set());
        assert!(!OptionalValue::<i32>::empty().is_set());
    }

    #[test]
    fn value() {
        assert_eq!(OptionalValue::of(0).value(), Ok(&0));
        assert_eq!(OptionalValue::<Option<i32>>::of(None).value(), Ok(&None));
        assert_eq!(OptionalValue::of(7).into_value(), Ok(7));
    }

    #[test]
    fn unset_value_is_an_error() {
        let err = OptionalValue::<i32>::empty().value().unwrap_err();
        assert_eq!(err, ValueError::NoValue);
        assert_eq!(err.to_string(), "there is no value available");
    }

    #[test]
    fn equality() {
        assert_eq!(OptionalValue::of("a"), OptionalValue::of("a"));
        assert_ne!(OptionalValue::of("a"), OptionalValue::of("b"));
        assert_eq!(
            OptionalValue::<Option<&str>>::of(None),
            OptionalValue::of(None)
        );
        assert_eq!(OptionalValue::<i32>::empty(), OptionalValue::empty());
        assert_ne!(OptionalValue::of(None::<i32>), OptionalValue::empty());
    }

    #[test]
    fn formatting() {
        assert_eq!(OptionalValue::of(3).to_string(), "OptionalValue(3)");
        assert_eq!(
            format!("{:?}", OptionalValue::<Option<i32>>::of(None)),
            "OptionalValue(None)"
        );
        assert_eq!(
            OptionalValue::<i32>::empty().to_string(),
            "OptionalValue(###-VALUE NOT SET-###)"
        );
    }

    #[test]
    fn option_conversions() {
        let value: OptionalValue<i32> = Some(4).into();
        assert_eq!(value.as_option(), Some(&4));
        assert_eq!(value.into_option(), Some(4));
        assert!(!OptionalValue::<i32>::from(None).is_set());
        assert_eq!(OptionalValue::<u8>::default(), OptionalValue::empty());
    }
}
