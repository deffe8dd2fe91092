//! Macros for declaring tagged sum types.

/// Declare an enum together with its payload-free tag enum.
///
/// Variants may be unit, tuple or struct-like. The macro emits:
///
/// - the enum itself, with the given attributes;
/// - a tag enum with the same variant names, deriving `Clone`, `Copy`,
///   `PartialEq`, `Eq`, `Hash`, `Debug`, `Serialize` and `Deserialize`;
/// - [`Tagged`](crate::core::Tagged) for the enum and
///   [`VariantTag`](crate::core::VariantTag) for the tag.
///
/// Optional `final:` and `error:` clauses flag terminal and failure variants.
///
/// # Example
///
/// ```
/// use tagfsm::tagged_enum;
/// use tagfsm::core::{Tagged, VariantTag};
///
/// tagged_enum! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Upload => UploadTag {
///         Pending,
///         Sending { sent: u64, total: u64 },
///         Failed(String),
///         Done,
///     }
///     final: [Done, Failed]
///     error: [Failed]
/// }
///
/// let upload = Upload::Sending { sent: 10, total: 100 };
/// assert_eq!(upload.tag(), UploadTag::Sending);
/// assert_eq!(upload.variant_name(), "Sending");
/// assert!(UploadTag::Failed.is_error());
/// assert!(UploadTag::Done.is_final());
/// assert_eq!(UploadTag::VARIANTS.len(), 4);
/// ```
#[macro_export]
macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $tag:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple_ty:ty),* $(,)? ) )?
                $( { $( $(#[$field_meta:meta])* $field:ident : $field_ty:ty ),* $(,)? } )?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple_ty),* ) )?
                $( { $( $(#[$field_meta])* $field : $field_ty ),* } )?
            ),*
        }

        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::__serde::Serialize,
            $crate::__serde::Deserialize,
        )]
        #[serde(crate = "tagfsm::__serde")]
        $vis enum $tag {
            $($variant),*
        }

        impl $crate::core::Tagged for $name {
            type Tag = $tag;

            fn tag(&self) -> $tag {
                match self {
                    $(Self::$variant { .. } => $tag::$variant),*
                }
            }
        }

        impl $crate::core::VariantTag for $tag {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
