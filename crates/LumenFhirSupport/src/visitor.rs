//! Traversal protocol for the generated object model.
//!
//! Each model object implements [`Visitable`] and contains the logic for
//! invoking the corresponding callbacks for itself and all of its members,
//! in schema declaration order. At each node the visitor controls traversal
//! with the return values indicated in the following sketch, which every
//! generated `accept` reproduces verbatim:
//!
//! ```text
//! if visitor.pre_visit(self) {
//!     visitor.visit_start(name, index, self);
//!     if visitor.visit(name, index, self) {
//!         // visit children in declaration order
//!     }
//!     visitor.visit_end(name, index, self);
//!     visitor.post_visit(self);
//! }
//! ```
//!
//! Repeating fields are visited element by element with their index,
//! bracketed by [`Visitor::visit_list_start`] / [`Visitor::visit_list_end`].
//! Raw scalar slots that are not elements in their own right (a resource's
//! `id`, an extension's `url`) surface through [`Visitor::visit_value`].
//! A visitor that panics propagates to the caller; the traversal framework
//! performs no recovery.

use rust_decimal::Decimal;

/// A borrowed view of a primitive payload.
///
/// Collapses the original per-type callback overloads into a single closed
/// enum: consumers match on the variant instead of relying on dynamic
/// dispatch. Partial-precision temporals are surfaced in their canonical
/// literal form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Boolean(bool),
    Integer(i32),
    Integer64(i64),
    PositiveInt(u32),
    UnsignedInt(u32),
    Decimal(Decimal),
    String(&'a str),
    Code(&'a str),
    Uri(&'a str),
    Url(&'a str),
    Canonical(&'a str),
    Markdown(&'a str),
    Id(&'a str),
    Base64Binary(&'a [u8]),
    Date(&'a str),
    DateTime(&'a str),
    Time(&'a str),
    Instant(&'a str),
    Xhtml(&'a str),
}

impl<'a> Value<'a> {
    /// The textual payload, if this value is string-shaped.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s)
            | Value::Code(s)
            | Value::Uri(s)
            | Value::Url(s)
            | Value::Canonical(s)
            | Value::Markdown(s)
            | Value::Id(s)
            | Value::Date(s)
            | Value::DateTime(s)
            | Value::Time(s)
            | Value::Instant(s)
            | Value::Xhtml(s) => Some(s),
            _ => None,
        }
    }
}

/// A node in the object graph that can be traversed.
pub trait Visitable {
    /// The FHIR type name of this node (e.g. `"Account"`, `"string"`).
    fn type_name(&self) -> &'static str;

    /// Whether any child slot of this node is populated.
    fn has_children(&self) -> bool;

    /// Whether this node carries a primitive payload.
    fn has_value(&self) -> bool {
        false
    }

    /// The primitive payload, for leaf element types.
    fn value(&self) -> Option<Value<'_>> {
        None
    }

    /// Run the traversal protocol for this node under the given element
    /// name and (for repeating fields) index.
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor);
}

/// Callback interface implemented by generic consumers of the model.
///
/// All methods have defaults so an implementation only overrides what it
/// needs; by default every node is accepted and descended into. Overriding
/// [`Visitor::visit_children`] flips the default descent decision for every
/// node at once, the same knob the original traversal framework exposed.
pub trait Visitor {
    /// Default descent decision used by the blanket [`Visitor::visit`].
    fn visit_children(&self) -> bool {
        true
    }

    /// Returning `false` skips this node entirely: no start, no children,
    /// no end, no post.
    fn pre_visit(&mut self, node: &dyn Visitable) -> bool {
        let _ = node;
        true
    }

    fn visit_start(&mut self, name: &str, index: Option<usize>, node: &dyn Visitable) {
        let _ = (name, index, node);
    }

    /// Returning `false` skips this node's children; `visit_end` and
    /// `post_visit` still fire.
    fn visit(&mut self, name: &str, index: Option<usize>, node: &dyn Visitable) -> bool {
        let _ = (name, index, node);
        self.visit_children()
    }

    fn visit_end(&mut self, name: &str, index: Option<usize>, node: &dyn Visitable) {
        let _ = (name, index, node);
    }

    fn post_visit(&mut self, node: &dyn Visitable) {
        let _ = node;
    }

    /// Fired before the elements of a repeating field, even when empty.
    fn visit_list_start(&mut self, name: &str, len: usize) {
        let _ = (name, len);
    }

    fn visit_list_end(&mut self, name: &str, len: usize) {
        let _ = (name, len);
    }

    /// Fired for raw scalar slots that are not elements of their own
    /// (resource `id`, extension `url`).
    fn visit_value(&mut self, name: &str, value: Value<'_>) {
        let _ = (name, value);
    }
}

/// Visit every element of a repeating field in order, with indices.
pub fn accept_all<T: Visitable>(list: &[T], name: &str, visitor: &mut dyn Visitor) {
    visitor.visit_list_start(name, list.len());
    for (index, item) in list.iter().enumerate() {
        item.accept(name, Some(index), visitor);
    }
    visitor.visit_list_end(name, list.len());
}

/// Visit an optional singleton child, skipping it when absent.
pub fn accept_opt<T: Visitable>(node: &Option<T>, name: &str, visitor: &mut dyn Visitor) {
    if let Some(node) = node {
        node.accept(name, None, visitor);
    }
}

/// Collects the element names of one level of an object graph, in
/// traversal order.
///
/// Singleton children are recorded at `visit_start`, repeating fields at
/// `visit_list_start` (so empty lists still appear), and raw scalar slots
/// at `visit_value`. Useful for asserting that traversal follows schema
/// declaration order.
#[derive(Debug, Default)]
pub struct NameCollectingVisitor {
    depth: usize,
    names: Vec<String>,
}

impl NameCollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected child names, in the order they were visited.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Visitor for NameCollectingVisitor {
    fn visit_start(&mut self, name: &str, index: Option<usize>, _node: &dyn Visitable) {
        if self.depth == 1 && index.is_none() {
            self.names.push(name.to_string());
        }
        self.depth += 1;
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) {
        self.depth -= 1;
    }

    fn visit_list_start(&mut self, name: &str, _len: usize) {
        if self.depth == 1 {
            self.names.push(name.to_string());
        }
    }

    fn visit_value(&mut self, name: &str, _value: Value<'_>) {
        if self.depth == 1 {
            self.names.push(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        text: &'static str,
    }

    impl Visitable for Leaf {
        fn type_name(&self) -> &'static str {
            "string"
        }

        fn has_children(&self) -> bool {
            false
        }

        fn has_value(&self) -> bool {
            true
        }

        fn value(&self) -> Option<Value<'_>> {
            Some(Value::String(self.text))
        }

        fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
            if visitor.pre_visit(self) {
                visitor.visit_start(name, index, self);
                visitor.visit(name, index, self);
                visitor.visit_end(name, index, self);
                visitor.post_visit(self);
            }
        }
    }

    struct Node {
        first: Option<Leaf>,
        rest: Vec<Leaf>,
    }

    impl Visitable for Node {
        fn type_name(&self) -> &'static str {
            "Node"
        }

        fn has_children(&self) -> bool {
            self.first.is_some() || !self.rest.is_empty()
        }

        fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
            if visitor.pre_visit(self) {
                visitor.visit_start(name, index, self);
                if visitor.visit(name, index, self) {
                    accept_opt(&self.first, "first", visitor);
                    accept_all(&self.rest, "rest", visitor);
                }
                visitor.visit_end(name, index, self);
                visitor.post_visit(self);
            }
        }
    }

    fn sample() -> Node {
        Node {
            first: Some(Leaf { text: "a" }),
            rest: vec![Leaf { text: "b" }, Leaf { text: "c" }],
        }
    }

    #[test]
    fn test_name_collection_in_declaration_order() {
        let node = sample();
        let mut collector = NameCollectingVisitor::new();
        node.accept("Node", None, &mut collector);
        assert_eq!(collector.names(), &["first".to_string(), "rest".to_string()]);
    }

    #[test]
    fn test_empty_list_still_bracketed() {
        let node = Node {
            first: None,
            rest: Vec::new(),
        };
        let mut collector = NameCollectingVisitor::new();
        node.accept("Node", None, &mut collector);
        assert_eq!(collector.names(), &["rest".to_string()]);
    }

    #[test]
    fn test_visit_false_skips_children_but_fires_end() {
        struct SkipChildren {
            starts: Vec<String>,
            ends: Vec<String>,
        }

        impl Visitor for SkipChildren {
            fn visit_children(&self) -> bool {
                false
            }

            fn visit_start(&mut self, name: &str, _index: Option<usize>, _node: &dyn Visitable) {
                self.starts.push(name.to_string());
            }

            fn visit_end(&mut self, name: &str, _index: Option<usize>, _node: &dyn Visitable) {
                self.ends.push(name.to_string());
            }
        }

        let node = sample();
        let mut visitor = SkipChildren {
            starts: Vec::new(),
            ends: Vec::new(),
        };
        node.accept("Node", None, &mut visitor);
        assert_eq!(visitor.starts, vec!["Node".to_string()]);
        assert_eq!(visitor.ends, vec!["Node".to_string()]);
    }

    #[test]
    fn test_pre_visit_false_skips_node_entirely() {
        struct SkipAll {
            started: bool,
        }

        impl Visitor for SkipAll {
            fn pre_visit(&mut self, _node: &dyn Visitable) -> bool {
                false
            }

            fn visit_start(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) {
                self.started = true;
            }
        }

        let node = sample();
        let mut visitor = SkipAll { started: false };
        node.accept("Node", None, &mut visitor);
        assert!(!visitor.started);
    }

    #[test]
    fn test_list_elements_carry_indices() {
        struct IndexRecorder {
            indices: Vec<Option<usize>>,
        }

        impl Visitor for IndexRecorder {
            fn visit_start(&mut self, name: &str, index: Option<usize>, _node: &dyn Visitable) {
                if name == "rest" {
                    self.indices.push(index);
                }
            }
        }

        let node = sample();
        let mut visitor = IndexRecorder {
            indices: Vec::new(),
        };
        node.accept("Node", None, &mut visitor);
        assert_eq!(visitor.indices, vec![Some(0), Some(1)]);
    }
}
