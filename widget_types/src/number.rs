//! Serialization of widget numbers.
//!
//! The dashboard expects bare numbers without padding: `12.3`, `10`,
//! never `12.30` or `10.0`. Values are normalised and then written from
//! their exact decimal text, never through a binary float. JSON gets a
//! number token; formats without a number type get the text itself, see
//! [`as_text`].

use std::cell::Cell;

use rust_decimal::Decimal;
use serde::ser::{Error, Serialize, Serializer};

thread_local! {
    static AS_TEXT: Cell<bool> = const { Cell::new(false) };
}

/// Runs `f` with decimals written as plain strings.
///
/// Serializers other than `serde_json`, such as XML ones, have no way to
/// take a number verbatim, so encoders for them wrap their work in this.
pub fn as_text<R>(f: impl FnOnce() -> R) -> R {
    struct Restore(bool);

    impl Drop for Restore {
        fn drop(&mut self) {
            AS_TEXT.set(self.0);
        }
    }

    let _restore = Restore(AS_TEXT.replace(true));
    f()
}

/// `serialize_with` helper for a single decimal field.
///
/// # Errors
///
/// Returns the serializer's error if writing fails.
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Plain(*value).serialize(serializer)
}

/// `serialize_with` helper for a sequence of decimals.
///
/// # Errors
///
/// Returns the serializer's error if writing fails.
pub fn serialize_seq<S>(
    values: &[Decimal],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().copied().map(Plain))
}

struct Plain(Decimal);

impl Serialize for Plain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.0.normalize().to_string();

        if AS_TEXT.get() {
            return serializer.serialize_str(&text);
        }

        let number: serde_json::Number = text.parse().map_err(|e| {
            S::Error::custom(format!("decimal {text} is not a JSON number: {e}"))
        })?;
        number.serialize(serializer)
    }
}
