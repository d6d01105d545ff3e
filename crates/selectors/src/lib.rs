//! Selectors Level 3 subset — element matching for tree queries.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! Implements the forms needed to inspect rendered view trees:
//! - Type, class, id, and attribute selectors
//! - Combinators: descendant, child, adjacent sibling, general sibling
//! - Comma-separated selector lists
//!
//! The crate is independent of any concrete tree: matching goes through
//! the [`ElementAdapter`] trait, which the tree layer implements.

mod matcher;
mod parser;

pub use matcher::{matches_complex, matches_compound, matches_selector_list};
pub use parser::{parse_complex_selector, parse_selector_list};

/// An adapter that abstracts tree access for selector matching.
/// Implement this for your document layer.
pub trait ElementAdapter {
    type Handle: Copy + Eq;

    /// Parent element if any.
    fn parent(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Previous sibling element, skipping non-element siblings.
    fn previous_sibling_element(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Tag name in ASCII lowercase (per HTML parsing conventions).
    fn tag_name(&self, element: Self::Handle) -> &str;

    /// Returns Some(id) if the element has an id attribute, else None.
    fn element_id(&self, element: Self::Handle) -> Option<&str>;

    /// True if the element carries the given class token.
    fn has_class(&self, element: Self::Handle, class: &str) -> bool;

    /// Returns the attribute value if present.
    fn attr(&self, element: Self::Handle, name: &str) -> Option<&str>;
}

/// Simple selectors (subset).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Type selector, e.g. `li`.
    Type(String),
    /// Class selector, e.g. `.selected`.
    Class(String),
    /// ID selector, e.g. `#main`.
    Id(String),
    /// Attribute selector: `[name]` tests presence, `[name=value]` equality.
    Attr { name: String, value: Option<String> },
    /// Universal selector `*`; matches every element.
    Universal,
}

/// A compound selector is a sequence of simple selectors with no
/// combinators between them, all of which must match one element.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

/// Combinators between compounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

/// A complex selector, stored right-to-left: the element under test must
/// match `subject`, and each `context` entry must be reachable from it
/// through its combinator, walking toward the root.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ComplexSelector {
    /// The rightmost compound.
    pub subject: CompoundSelector,
    /// Compounds left of the subject, ordered right-to-left, each paired
    /// with the combinator linking it toward the subject.
    pub context: Vec<(Combinator, CompoundSelector)>,
}

/// A comma-separated group of selectors; matching any member matches the
/// group.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}
