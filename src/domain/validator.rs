//! Generic validation contract

/// Checks a value and reports the first rule it violates
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, value: &T) -> Result<(), Self::Error>;
}
