//! The record descriptor interface the traversal engine operates over.
//!
//! A `Record` exposes its fields as an ordered descriptor list instead of
//! relying on runtime reflection: each descriptor pairs static metadata with
//! an accessor into the live value. The [`record!`](crate::record) macro
//! generates both the struct and this impl; hand-written impls are equally
//! valid for generated or foreign types.

use crate::coerce::Decode;
use crate::encode::Encode;
use crate::meta::FieldMeta;

/// A structured value whose fields the engine can traverse.
///
/// Both methods must yield descriptors in declaration order, and only for
/// fields that are meant to be externally settable — leaving a field out is
/// how a type keeps it private to itself.
pub trait Record {
    /// Read-only descriptors, for outbound traversal.
    fn fields(&self) -> Vec<FieldRef<'_>>;

    /// Mutable descriptors, for inbound traversal.
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Mutable view of one described field.
pub struct FieldMut<'a> {
    pub meta: &'static FieldMeta,
    pub target: Target<'a>,
}

/// Where an inbound value lands.
pub enum Target<'a> {
    /// A leaf slot, coerced via [`Decode`].
    Value(&'a mut dyn Decode),
    /// An embedded sub-record, recursed into with the same source. Its own
    /// lookup key, if any, is never consulted.
    Record(&'a mut dyn Record),
}

/// Read-only view of one described field.
pub struct FieldRef<'a> {
    pub meta: &'static FieldMeta,
    pub target: TargetRef<'a>,
}

/// What an outbound traversal reads.
pub enum TargetRef<'a> {
    /// A leaf slot, boxed via [`Encode`].
    Value(&'a dyn Encode),
    /// An embedded sub-record, recursed into with the same sink.
    Record(&'a dyn Record),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        left: String,
        right: u32,
    }

    static LEFT: FieldMeta = FieldMeta {
        name: "left",
        type_name: "String",
        tags: &[("env", "LEFT")],
    };
    static RIGHT: FieldMeta = FieldMeta {
        name: "right",
        type_name: "u32",
        tags: &[("env", "RIGHT")],
    };

    // Hand-written descriptor impl, as a foreign type would provide.
    impl Record for Pair {
        fn fields(&self) -> Vec<FieldRef<'_>> {
            vec![
                FieldRef {
                    meta: &LEFT,
                    target: TargetRef::Value(&self.left),
                },
                FieldRef {
                    meta: &RIGHT,
                    target: TargetRef::Value(&self.right),
                },
            ]
        }

        fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
            vec![
                FieldMut {
                    meta: &LEFT,
                    target: Target::Value(&mut self.left),
                },
                FieldMut {
                    meta: &RIGHT,
                    target: Target::Value(&mut self.right),
                },
            ]
        }
    }

    #[test]
    fn descriptors_come_back_in_declaration_order() {
        let pair = Pair {
            left: String::new(),
            right: 0,
        };
        let names: Vec<&str> = pair.fields().iter().map(|f| f.meta.name).collect();
        assert_eq!(names, ["left", "right"]);
    }

    #[test]
    fn mutable_descriptors_reach_the_live_value() {
        let mut pair = Pair {
            left: String::new(),
            right: 0,
        };
        for field in pair.fields_mut() {
            if let Target::Value(slot) = field.target {
                if field.meta.name == "right" {
                    slot.decode("42").unwrap();
                }
            }
        }
        assert_eq!(pair.right, 42);
    }
}
