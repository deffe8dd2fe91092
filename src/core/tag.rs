//! Payload-free variant tags.
//!
//! Every state enum driven by a [`Machine`](crate::engine::Machine) has a
//! companion tag enum with the same variant names and no data. Tags are what
//! the dispatcher compares to detect a variant change, and what the exit hook
//! receives once the old payload has been consumed.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A discriminant-only companion of a sum type.
///
/// Tags are plain `Copy` values. They identify which variant is held without
/// carrying (or granting access to) the variant's payload.
///
/// # Example
///
/// ```rust
/// use tagfsm::core::VariantTag;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorTag {
///     Open,
///     Closed,
///     Jammed,
/// }
///
/// impl VariantTag for DoorTag {
///     const VARIANTS: &'static [Self] = &[Self::Open, Self::Closed, Self::Jammed];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert_eq!(DoorTag::Jammed.name(), "Jammed");
/// assert!(DoorTag::Jammed.is_error());
/// assert!(!DoorTag::Open.is_final());
/// ```
pub trait VariantTag:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every variant of the closed set, in declaration order.
    const VARIANTS: &'static [Self];

    /// Variant name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this variant is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this variant models a failure.
    ///
    /// Domains represent failure as an explicit variant rather than aborting
    /// a dispatch; this flag lets drivers recognise it.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// A sum type that can report which variant it holds.
///
/// Implementations must be total, pure and O(1): a single `match` mapping each
/// variant to its tag. The [`tagged_enum!`](crate::tagged_enum) macro
/// generates both the tag enum and this impl.
pub trait Tagged {
    /// The companion tag type.
    type Tag: VariantTag;

    /// Extract the tag of the held variant, ignoring its payload.
    fn tag(&self) -> Self::Tag;

    /// Name of the held variant.
    fn variant_name(&self) -> &'static str {
        self.tag().name()
    }
}

/// Extract the tag of `value`.
///
/// Free-function form of [`Tagged::tag`].
pub fn tag_of<T: Tagged>(value: &T) -> T::Tag {
    value.tag()
}
