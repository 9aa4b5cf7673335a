// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed values and their canonical string forms.
//!
//! ```text
//! Bool  true → "true"          Byte  65u8 → "A" (code point, not digits)
//! U32/U64/I32/I64 → base-10    F32/F64 1.0 → "1", 1.01 → "1.01"
//! usize/isize → U64/I64        Str   as-is
//! ```

use std::any::Any;
use std::fmt;

/// A value with a known string conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Rendered as the single character with this code point.
    Byte(u8),
    U32(u32),
    U64(u64),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
}

impl Value {
    /// Converts a value of any type into a [`Value`], if the type is supported.
    ///
    /// Returns `None` for types outside the supported set.
    #[must_use]
    pub fn from_any<T: Any>(value: &T) -> Option<Self> {
        let any = value as &dyn Any;

        macro_rules! downcast_copy {
            ($($ty:ty => $variant:ident),+ $(,)?) => {
                $(
                    if let Some(v) = any.downcast_ref::<$ty>() {
                        return Some(Self::$variant(*v));
                    }
                )+
            };
        }

        downcast_copy! {
            bool => Bool,
            u8 => Byte,
            u32 => U32,
            u64 => U64,
            i32 => I32,
            i64 => I64,
            f32 => F32,
            f64 => F64,
        }

        // Platform-width integers widen to their 64-bit variants.
        if let Some(v) = any.downcast_ref::<usize>() {
            return u64::try_from(*v).ok().map(Self::U64);
        }
        if let Some(v) = any.downcast_ref::<isize>() {
            return i64::try_from(*v).ok().map(Self::I64);
        }

        if let Some(v) = any.downcast_ref::<String>() {
            return Some(Self::Str(v.clone()));
        }
        if let Some(v) = any.downcast_ref::<&'static str>() {
            return Some(Self::Str((*v).to_owned()));
        }
        any.downcast_ref::<Self>().cloned()
    }

    /// Short name of the variant's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Byte(_) => "byte",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{}", char::from(*v)),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )+
    };
}

impl_from_primitive! {
    bool => Bool,
    u8 => Byte,
    u32 => U32,
    u64 => U64,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

/// Parses a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and
/// `0`, `f`, `F`, `FALSE`, `false`, `False`.
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
