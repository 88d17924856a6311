//! Strongly typed 8-bit color channels.
//!
//! [`Red`], [`Green`] and [`Blue`] share a representation (one `u8`) but are
//! distinct nominal types. A red value can never be added to, subtracted
//! from or compared with a green one: those operators simply do not exist,
//! so mixing channels is a compile error rather than a silent bug.
//!
//! ```compile_fail
//! use clearpng_core::{Green, Red};
//!
//! let same = Red::new(10) == Green::new(10);
//! ```
//!
//! ```compile_fail
//! use clearpng_core::{Blue, Red};
//!
//! let mixed = Red::new(10) + Blue::new(10);
//! ```
//!
//! Where channel identity has to be checked at runtime (for example in
//! generic code), [`same_channel`] compares kind and value and is always
//! `false` across kinds.
//!
//! # Arithmetic
//!
//! `+`, `-`, `+=` and `-=` compute in `i32` and saturate into `[0, 255]`:
//!
//! ```rust
//! use clearpng_core::Red;
//!
//! assert_eq!(Red::new(100) + Red::new(220), Red::new(255));
//! assert_eq!(Red::new(100) - Red::new(220), Red::new(0));
//! ```
//!
//! # Construction
//!
//! [`Red::new`] and friends store the raw value unchecked, and
//! [`Red::set`] replaces it without clamping. Use `TryFrom<i32>` when the
//! input is a wide integer that may be out of range.

use crate::clamp::clamp_channel;
use crate::error::Error;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Identifies which primary a channel type carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Red primary.
    Red,
    /// Green primary.
    Green,
    /// Blue primary.
    Blue,
}

impl ChannelKind {
    /// Lowercase name of the channel.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common interface of the channel types.
///
/// The scalar representation is the associated [`Value`](Channel::Value)
/// type; all channels in this crate use `u8`.
pub trait Channel: Copy + Default + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    /// Underlying scalar type.
    type Value: Copy + PartialEq + fmt::Debug;

    /// Which primary this type represents.
    const KIND: ChannelKind;

    /// Wraps a raw value without validation.
    fn from_value(value: Self::Value) -> Self;

    /// Returns the raw value.
    fn value(self) -> Self::Value;

    /// Replaces the raw value without clamping.
    fn set_value(&mut self, value: Self::Value);
}

/// Compares two channels of possibly different kinds.
///
/// Returns `true` only when both are the same kind and hold the same value.
///
/// ```rust
/// use clearpng_core::{same_channel, Green, Red};
///
/// assert!(same_channel(Red::new(7), Red::new(7)));
/// assert!(!same_channel(Red::new(7), Green::new(7)));
/// ```
#[inline]
pub fn same_channel<A, B>(a: A, b: B) -> bool
where
    A: Channel,
    B: Channel<Value = A::Value>,
{
    A::KIND == B::KIND && a.value() == b.value()
}

macro_rules! channel {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $short:literal) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u8);

        impl $name {
            /// Zero intensity.
            pub const MIN: Self = Self(0);
            /// Full intensity.
            pub const MAX: Self = Self(u8::MAX);

            /// Wraps a raw value. The value is stored as-is.
            #[inline]
            pub const fn new(value: u8) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            #[inline]
            pub const fn get(self) -> u8 {
                self.0
            }

            /// Replaces the raw value without clamping.
            #[inline]
            pub fn set(&mut self, value: u8) {
                self.0 = value;
            }
        }

        impl Channel for $name {
            type Value = u8;
            const KIND: ChannelKind = ChannelKind::$kind;

            #[inline]
            fn from_value(value: u8) -> Self {
                Self(value)
            }

            #[inline]
            fn value(self) -> u8 {
                self.0
            }

            #[inline]
            fn set_value(&mut self, value: u8) {
                self.0 = value;
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(clamp_channel(i32::from(self.0) + i32::from(rhs.0)))
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(clamp_channel(i32::from(self.0) - i32::from(rhs.0)))
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl From<$name> for u8 {
            #[inline]
            fn from(channel: $name) -> u8 {
                channel.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = Error;

            fn try_from(value: i32) -> Result<Self, Error> {
                u8::try_from(value)
                    .map(Self)
                    .map_err(|_| Error::ChannelOutOfRange {
                        channel: ChannelKind::$kind,
                        value,
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($short, "({})"), self.0)
            }
        }
    };
}

channel!(
    /// Red channel intensity.
    Red,
    Red,
    "R"
);

channel!(
    /// Green channel intensity.
    Green,
    Green,
    "G"
);

channel!(
    /// Blue channel intensity.
    Blue,
    Blue,
    "B"
);
