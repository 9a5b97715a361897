//! Column label conversion

use crate::error::{Error, Result};

/// Convert a column label to its 1-based index (`A` = 1, `Z` = 26, `AA` = 27)
///
/// Labels are case-insensitive. Note the result is 1-based while sheet
/// coordinates are 0-based; subtract one before passing it to a [`Sheet`].
///
/// [`Sheet`]: crate::Sheet
pub fn column_index(label: &str) -> Result<u32> {
    if label.is_empty() {
        return Err(Error::InvalidColumnLabel(label.to_string()));
    }

    let mut index: u32 = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnLabel(label.to_string()));
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        index = index
            .checked_mul(26)
            .and_then(|i| i.checked_add(digit))
            .ok_or_else(|| Error::InvalidColumnLabel(label.to_string()))?;
    }

    Ok(index)
}

/// Convert a 1-based column index back to its label (1 = `A`, 27 = `AA`)
///
/// Returns an empty string for 0.
pub fn column_label(index: u32) -> String {
    let mut result = String::new();
    let mut n = index;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}
