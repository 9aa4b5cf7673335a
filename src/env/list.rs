// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `name=value` list and its accessors.
//!
//! ```text
//! entries: ["a=9", "b=2", "url=http://x?y=z"]
//!            ^ index_of("a") == Some(0)
//!
//! get("url") → "http://x?y=z"   (split after the "url=" prefix only)
//! ```

use std::any::Any;
use std::fmt;
use std::io;

use super::pool::EnvPool;
use super::value::{Value, parse_bool};
use crate::error::EnvError;

/// An ordered list of `name=value` entries.
///
/// Iteration order is insertion order. Lookups are linear scans that match
/// the first entry starting with `name=`.
///
/// # Thread Safety
/// `EnvList` is `Send` and `Sync` but has no internal locking; mutation takes
/// `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvList {
    entries: Vec<String>,
}

/// Returns the value part of `entry` if it belongs to `name`.
fn value_of<'a>(entry: &'a str, name: &str) -> Option<&'a str> {
    entry.strip_prefix(name)?.strip_prefix('=')
}

impl EnvList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Creates a list from raw entries, kept verbatim and in order.
    ///
    /// Unlike [`put`](Self::put), this does not merge duplicate names.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the position of the first entry for `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| value_of(entry, name).is_some())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Gets the string value for `name`, or `""` if not found.
    ///
    /// A missing name and an empty value both read as `""`.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find_map(|entry| value_of(entry, name))
            .unwrap_or_default()
    }

    /// Gets the value for `name` as a boolean.
    ///
    /// Returns `false` if not found or not a boolean literal (see
    /// [`parse_bool`]).
    #[must_use]
    pub fn get_bool(&self, name: &str) -> bool {
        parse_bool(self.get(name)).unwrap_or(false)
    }

    /// Gets the value for `name` as a float, or `0.0` if not found or invalid.
    #[must_use]
    pub fn get_float(&self, name: &str) -> f64 {
        self.get(name).parse().unwrap_or(0.0)
    }

    /// Gets the value for `name` as a base-10 integer, or `0` if not found or
    /// invalid.
    #[must_use]
    pub fn get_int(&self, name: &str) -> i64 {
        self.get(name).parse().unwrap_or(0)
    }

    /// Inserts `name=value`, or replaces the first entry for `name` in place.
    pub fn put(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
        let name = name.as_ref();
        let entry = format!("{name}={}", value.as_ref());

        if let Some(index) = self.index_of(name) {
            tracing::trace!(name, index, "replacing env entry");
            self.entries[index] = entry;
        } else {
            tracing::trace!(name, index = self.entries.len(), "appending env entry");
            self.entries.push(entry);
        }

        self
    }

    /// Converts `value` to its canonical string and puts it under `name`.
    pub fn set_value(&mut self, name: impl AsRef<str>, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        self.put(name, value.to_string())
    }

    /// Converts a value of any type and puts it under `name`.
    ///
    /// Supported types are `bool`, `u8`, `u32`, `u64`, `i32`, `i64`, `f32`,
    /// `f64`, `String`, `&'static str` and [`Value`]. A `u8` is stored as the
    /// character with that code point, so `65u8` becomes `"A"`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnsupportedType`] for any other type. The list is
    /// left unchanged.
    pub fn set<T: Any>(&mut self, name: &str, value: &T) -> Result<(), EnvError> {
        let Some(value) = Value::from_any(value) else {
            let type_name = std::any::type_name::<T>();
            tracing::warn!(name, type_name, "unsupported env value type");
            return Err(EnvError::UnsupportedType {
                name: name.to_owned(),
                type_name: type_name.to_owned(),
            });
        };

        self.put(name, value.to_string());
        Ok(())
    }

    /// Empties the value for `name`.
    ///
    /// The entry is kept (or created) with an empty value, so
    /// [`contains`](Self::contains) stays true afterwards.
    pub fn unset(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.put(name, "")
    }

    /// Prints every entry to stdout as `<index> = <name>=<value>`.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Writes every entry as `<index> = <name>=<value>`, one per line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Returns an iterator over the raw entries.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Returns an iterator over `(name, value)` pairs, split at the first `=`.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| entry.split_once('=').unwrap_or((entry.as_str(), "")))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }

    /// Returns this list to the shared pool.
    pub fn free(self) {
        EnvPool::shared().release(self);
    }
}

impl fmt::Display for EnvList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{index} = {entry}")?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for EnvList {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<String> for EnvList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for EnvList {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a EnvList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
