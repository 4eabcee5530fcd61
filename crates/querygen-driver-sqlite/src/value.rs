use rusqlite::types::ValueRef;

use std::fmt::Write;

/// Renders a SQLite value as the text the generator compares against.
pub(crate) fn to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(v) => v.to_string(),
        ValueRef::Real(v) => v.to_string(),
        ValueRef::Text(v) => String::from_utf8_lossy(v).into_owned(),
        ValueRef::Blob(v) => {
            let mut hex = String::with_capacity(v.len() * 2);
            for byte in v {
                // Writing to a `String` cannot fail
                let _ = write!(hex, "{byte:02x}");
            }
            hex
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textualize() {
        assert_eq!(to_text(ValueRef::Null), "NULL");
        assert_eq!(to_text(ValueRef::Integer(-42)), "-42");
        assert_eq!(to_text(ValueRef::Real(1.5)), "1.5");
        assert_eq!(to_text(ValueRef::Text(b"hello")), "hello");
        assert_eq!(to_text(ValueRef::Blob(&[0x00, 0xAB, 0x10])), "00ab10");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(to_text(ValueRef::Text(&[b'a', 0xFF])), "a\u{FFFD}");
    }
}
