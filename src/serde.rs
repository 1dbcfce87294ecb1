// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`SpillVec`](crate::SpillVec) and [`Span`](crate::Span).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize** (`SpillVec` only): from any sequence. Elements fill the
//!   inline buffer first and spill to the heap as needed. The sequence's
//!   size hint is reserved up front, capped at 1 MiB so a
//!   hostile length prefix cannot force a huge allocation.
//!
//! ### Trait bounds
//!
//! Deserializing needs an allocator to start from, so it requires
//! `A: Default` in addition to `T: Deserialize<'de>`.

// Crate imports
use crate::{allocator::Allocator, span::Span, vec::SpillVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

fn serialize_slice<T: Serialize, S: Serializer>(sl: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(sl.len()))?;
    for item in sl {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize, const N: usize, A: Allocator> Serialize for SpillVec<T, N, A> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

impl<T: Serialize, const N: usize> Serialize for Span<'_, T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

/// The most a size hint may reserve before any element has been read.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

fn cautious_hint<T>(hint: usize) -> usize {
    hint.min(MAX_PREALLOC_BYTES / core::mem::size_of::<T>().max(1))
}

struct VecVisitor<T, const N: usize, A>(PhantomData<(T, A)>);

impl<'de, T, const N: usize, A> de::Visitor<'de> for VecVisitor<T, N, A>
where
    T: Deserialize<'de>,
    A: Allocator + Default,
{
    type Value = SpillVec<T, N, A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence ({N} elements inline)")
    }

    fn visit_seq<S: de::SeqAccess<'de>>(self, mut a: S) -> Result<Self::Value, S::Error> {
        let mut out = SpillVec::<T, N, A>::default();
        if let Some(hint) = a.size_hint() {
            out.try_reserve(cautious_hint::<T>(hint))
                .map_err(de::Error::custom)?;
        }
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize, A> Deserialize<'de> for SpillVec<T, N, A>
where
    T: Deserialize<'de>,
    A: Allocator + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N, A>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{VecVisitor, MAX_PREALLOC_BYTES};
    use crate::{Global, Span, SpillVec};
    use alloc::string::String;
    use core::marker::PhantomData;
    use serde::de::{value, DeserializeSeed, IntoDeserializer, SeqAccess, Visitor};

    /// Yields `left` counting down, while claiming an enormous length.
    struct OverstatedSeq {
        left: u32,
    }

    impl<'de> SeqAccess<'de> for OverstatedSeq {
        type Error = value::Error;

        fn next_element_seed<S: DeserializeSeed<'de>>(
            &mut self,
            seed: S,
        ) -> Result<Option<S::Value>, Self::Error> {
            if self.left == 0 {
                return Ok(None);
            }
            self.left -= 1;
            seed.deserialize(self.left.into_deserializer()).map(Some)
        }

        fn size_hint(&self) -> Option<usize> {
            Some(usize::MAX / 2)
        }
    }

    #[test]
    fn test_size_hint_is_capped() {
        let v = VecVisitor::<u32, 2, Global>(PhantomData)
            .visit_seq(OverstatedSeq { left: 3 })
            .unwrap();
        assert_eq!(v, [2, 1, 0]);
        assert!(v.capacity() <= MAX_PREALLOC_BYTES / 4);
    }

    #[test]
    fn test_serde_roundtrip_json() {
        let v: SpillVec<i32, 5> = SpillVec::from([1, 2, 3]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: SpillVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, [1, 2, 3]);
        assert!(back.is_inlined());
    }

    #[test]
    fn test_deserialize_spills_past_inline_capacity() {
        let back: SpillVec<String, 2> = serde_json::from_str(r#"["a","b","c","d"]"#).unwrap();
        assert!(back.is_on_heap());
        assert_eq!(back, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: SpillVec<i32, 4> = SpillVec::default();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: SpillVec<i32, 4> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serialize_span() {
        let data = [1u8, 2, 3, 4];
        let s = Span::new(&data[1..3]);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[2,3]");
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        let err = serde_json::from_str::<SpillVec<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence (4 elements inline)"),
            "unexpected error message: {msg}"
        );
    }

    #[test]
    fn test_nested_struct() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Row {
            name: String,
            cells: SpillVec<u16, 3>,
        }
        let row = Row {
            name: String::from("r"),
            cells: SpillVec::from([1, 2, 3, 4]),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"name":"r","cells":[1,2,3,4]}"#);
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
