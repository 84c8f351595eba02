use std::fmt;
use std::marker::PhantomData;

use bitvec::prelude::*;

use crate::error::{CseError, Result};

/// Static metadata for one flag: its programmatic name and the literal
/// token the API expects on the wire.
///
/// The bit position is not stored here; it is the descriptor's index in
/// its table, so declaration order is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDescriptor {
    pub name: &'static str,
    pub token: &'static str,
}

/// A named table of flag descriptors backing one [`FlagSet`] type.
///
/// Implementations are generated with [`define_flags!`](crate::define_flags);
/// bit `i` of the set corresponds to `DESCRIPTORS[i]`.
pub trait FlagTable: 'static {
    const DESCRIPTORS: &'static [FlagDescriptor];
}

/// A set of named boolean flags packed into one bit vector, scoped to the
/// descriptor table `T`.
///
/// Each instance owns its own bits; there is no shared state between
/// instances, so they are freely movable across threads as plain values.
pub struct FlagSet<T: FlagTable> {
    bits: BitVec,
    _table: PhantomData<T>,
}

impl<T: FlagTable> FlagSet<T> {
    /// Returns the set with every flag disabled.
    pub fn none() -> Self {
        Self {
            bits: BitVec::repeat(false, T::DESCRIPTORS.len()),
            _table: PhantomData,
        }
    }

    /// Returns the set with every flag enabled.
    pub fn all() -> Self {
        Self {
            bits: BitVec::repeat(true, T::DESCRIPTORS.len()),
            _table: PhantomData,
        }
    }

    /// Starts from [`none`](Self::none) and applies each `(name, enabled)`
    /// pair in order.
    ///
    /// Fails with [`CseError::UnknownFlag`] if any name is not registered
    /// in the table.
    pub fn from_flags<'a, I>(flags: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut set = Self::none();
        for (name, enabled) in flags {
            set.set(name, enabled)?;
        }
        Ok(set)
    }

    /// Number of flags registered for this type.
    pub fn flag_count() -> usize {
        T::DESCRIPTORS.len()
    }

    /// Reads a single flag by name.
    pub fn get(&self, name: &str) -> Result<bool> {
        Ok(self.bits[Self::position(name)?])
    }

    /// Writes a single flag by name.
    ///
    /// An unregistered name fails with [`CseError::UnknownFlag`] rather
    /// than silently doing nothing, so a typo in caller code surfaces at
    /// the offending call.
    pub fn set(&mut self, name: &str, enabled: bool) -> Result<()> {
        let index = Self::position(name)?;
        self.bits.set(index, enabled);
        Ok(())
    }

    /// Yields one `(name, enabled)` pair per descriptor, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        T::DESCRIPTORS
            .iter()
            .zip(self.bits.iter().by_vals())
            .map(|(descriptor, enabled)| (descriptor.name, enabled))
    }

    /// True iff no flag is enabled.
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// True iff every registered flag is enabled.
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Converts the current flag state to a query-parameter value.
    ///
    /// Returns `None` when nothing or everything is enabled: the API treats
    /// an absent parameter as "any", so both extremes collapse to omission.
    /// Otherwise the shorter of two encodings is chosen: a `|`-joined list
    /// of the enabled tokens, or, when strictly more than half the flags
    /// are enabled, a negated `-(...)` list of the disabled tokens. At an
    /// exact half split the positive list wins.
    pub fn to_query_param(&self) -> Option<String> {
        if self.bits.not_any() || self.bits.all() {
            return None;
        }

        let enabled = self.bits.count_ones();
        if enabled * 2 > T::DESCRIPTORS.len() {
            let tokens = self.tokens_where(false);
            Some(format!("-({})", tokens.join("|")))
        } else {
            Some(self.tokens_where(true).join("|"))
        }
    }

    /// Parses a value produced by [`to_query_param`](Self::to_query_param)
    /// back into a flag set.
    ///
    /// A `-(...)` wrapper selects the negated interpretation; tokens not in
    /// the table fail with [`CseError::UnknownFlag`].
    pub fn from_query_param(value: &str) -> Result<Self> {
        let negated = value
            .strip_prefix("-(")
            .and_then(|rest| rest.strip_suffix(')'));

        let (body, listed) = match negated {
            Some(inner) => (inner, false),
            None => (value, true),
        };

        let mut set = if listed { Self::none() } else { Self::all() };
        for token in body.split('|') {
            let index = T::DESCRIPTORS
                .iter()
                .position(|descriptor| descriptor.token == token)
                .ok_or_else(|| CseError::UnknownFlag(token.to_owned()))?;
            set.bits.set(index, listed);
        }
        Ok(set)
    }

    /// Checks the descriptor table for registration mistakes: an empty
    /// table, or a name or wire token bound twice.
    ///
    /// Fails with [`CseError::Configuration`]. The built-in tables are
    /// static and covered by tests; callers defining their own tables can
    /// run this once at startup.
    pub fn verify_table() -> Result<()> {
        let descriptors = T::DESCRIPTORS;
        if descriptors.is_empty() {
            return Err(CseError::Configuration("flag table is empty".to_owned()));
        }
        for (index, descriptor) in descriptors.iter().enumerate() {
            for earlier in &descriptors[..index] {
                if earlier.name == descriptor.name {
                    return Err(CseError::Configuration(format!(
                        "flag name {:?} registered twice",
                        descriptor.name
                    )));
                }
                if earlier.token == descriptor.token {
                    return Err(CseError::Configuration(format!(
                        "wire token {:?} registered twice",
                        descriptor.token
                    )));
                }
            }
        }
        Ok(())
    }

    fn position(name: &str) -> Result<usize> {
        T::DESCRIPTORS
            .iter()
            .position(|descriptor| descriptor.name == name)
            .ok_or_else(|| CseError::UnknownFlag(name.to_owned()))
    }

    fn tokens_where(&self, enabled: bool) -> Vec<&'static str> {
        T::DESCRIPTORS
            .iter()
            .zip(self.bits.iter().by_vals())
            .filter(|(_, bit)| *bit == enabled)
            .map(|(descriptor, _)| descriptor.token)
            .collect()
    }
}

impl<T: FlagTable> Clone for FlagSet<T> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            _table: PhantomData,
        }
    }
}

impl<T: FlagTable> Default for FlagSet<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: FlagTable> PartialEq for FlagSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: FlagTable> Eq for FlagSet<T> {}

impl<T: FlagTable> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (name, enabled) in self.iter() {
            if enabled {
                set.entry(&name);
            }
        }
        set.finish()
    }
}

/// Generates a flag table type and its [`FlagSet`] alias from a literal
/// list of `name => "token"` pairs. Bit positions follow list order.
///
/// ```
/// cse_client::define_flags! {
///     /// Toppings supported by the kitchen.
///     pub Toppings(ToppingsTable) {
///         cheese => "top_ch",
///         olives => "top_ol",
///     }
/// }
///
/// let toppings = Toppings::from_flags([("cheese", true)]).unwrap();
/// assert_eq!(toppings.to_query_param().as_deref(), Some("top_ch"));
/// ```
#[macro_export]
macro_rules! define_flags {
    (
        $(#[$meta:meta])*
        $vis:vis $alias:ident($table:ident) {
            $($name:ident => $token:literal),+ $(,)?
        }
    ) => {
        #[doc = concat!("Descriptor table backing [`", stringify!($alias), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $table;

        impl $crate::flags::bitfield::FlagTable for $table {
            const DESCRIPTORS: &'static [$crate::flags::bitfield::FlagDescriptor] = &[
                $($crate::flags::bitfield::FlagDescriptor {
                    name: stringify!($name),
                    token: $token,
                }),+
            ];
        }

        $(#[$meta])*
        $vis type $alias = $crate::flags::bitfield::FlagSet<$table>;
    };
}
