//! Argument list construction.

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// Each expression is converted with `Value::from`.
///
/// ```ignore
/// let args = args!["hello", 1, true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn builds_mixed_lists() {
        let built = args!["hello", 1, true, ()];
        assert_eq!(
            built,
            vec![
                Value::from("hello"),
                Value::Number(1.0),
                Value::Bool(true),
                Value::Undefined
            ]
        );
    }

    #[test]
    fn empty_list() {
        assert!(args![].is_empty());
    }
}
