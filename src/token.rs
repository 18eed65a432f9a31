//! Typed parsing of fixed-vocabulary text tokens
//!
//! Instructions arrive with free-text direction and currency fields. Each
//! category owns its own symbol set; [`coerce`] applies the shared
//! normalisation (trim, uppercase) before handing the token over.

/// A closed set of symbols that raw instruction text can be coerced into.
pub trait TokenCategory: Sized + Copy {
    /// Human readable category name, used in rejection messages
    const CATEGORY: &'static str;

    /// Match an already normalised (trimmed, uppercase) token
    fn from_token(token: &str) -> Option<Self>;
}

/// Coerce raw text into a category value.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn coerce<T: TokenCategory>(raw: &str) -> Option<T> {
    let token = raw.trim().to_ascii_uppercase();
    if token.is_empty() {
        return None;
    }
    T::from_token(&token)
}
