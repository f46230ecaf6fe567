pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies a decoded-data invariant, failing with `MalformedData` when the
/// predicate does not hold. The failure message names the offending element
/// and the violated condition.
#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_data(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_data(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        malformed(name, condition)
    }
}

#[cold]
pub fn malformed(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::MalformedData {
        message: format!("'{name}' violates {condition}"),
    }
    .into())
}
