//! Selector matching engine.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::{
    Combinator, ComplexSelector, CompoundSelector, ElementAdapter, SelectorList, SimpleSelector,
};

/// Match a selector list against an element.
pub fn matches_selector_list<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    list: &SelectorList,
) -> bool {
    list.selectors
        .iter()
        .any(|complex| matches_complex(adapter, element, complex))
}

/// Match a complex selector against an element.
///
/// Right-to-left strategy: the element itself must match the subject
/// compound, then each context compound is located by walking its
/// combinator toward the root. The walk takes the nearest match at every
/// step and does not backtrack.
pub fn matches_complex<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    complex: &ComplexSelector,
) -> bool {
    if complex.subject.simples.is_empty() {
        return false;
    }
    if !matches_compound(adapter, element, &complex.subject) {
        return false;
    }

    let mut anchor = element;
    for (combinator, compound) in &complex.context {
        match find_toward_root(adapter, *combinator, compound, anchor) {
            Some(next) => anchor = next,
            None => return false,
        }
    }
    true
}

/// Match a compound selector against a single element: every simple
/// selector in the sequence must hold.
pub fn matches_compound<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    compound: &CompoundSelector,
) -> bool {
    compound
        .simples
        .iter()
        .all(|simple| matches_simple(adapter, element, simple))
}

fn matches_simple<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    simple: &SimpleSelector,
) -> bool {
    match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(type_name) => adapter.tag_name(element) == type_name.as_str(),
        SimpleSelector::Class(class_name) => adapter.has_class(element, class_name.as_str()),
        SimpleSelector::Id(id_value) => adapter
            .element_id(element)
            .is_some_and(|value| value == id_value.as_str()),
        SimpleSelector::Attr { name, value } => match value {
            None => adapter.attr(element, name.as_str()).is_some(),
            Some(expected) => adapter
                .attr(element, name.as_str())
                .is_some_and(|actual| actual == expected.as_str()),
        },
    }
}

/// Resolve one combinator step from `from` toward the root, returning the
/// nearest element matching `compound`.
fn find_toward_root<A: ElementAdapter>(
    adapter: &A,
    combinator: Combinator,
    compound: &CompoundSelector,
    from: A::Handle,
) -> Option<A::Handle> {
    match combinator {
        Combinator::Child => adapter
            .parent(from)
            .filter(|parent| matches_compound(adapter, *parent, compound)),
        Combinator::Descendant => {
            let mut current = adapter.parent(from);
            while let Some(candidate) = current {
                if matches_compound(adapter, candidate, compound) {
                    return Some(candidate);
                }
                current = adapter.parent(candidate);
            }
            None
        }
        Combinator::AdjacentSibling => adapter
            .previous_sibling_element(from)
            .filter(|sibling| matches_compound(adapter, *sibling, compound)),
        Combinator::GeneralSibling => {
            let mut current = adapter.previous_sibling_element(from);
            while let Some(candidate) = current {
                if matches_compound(adapter, candidate, compound) {
                    return Some(candidate);
                }
                current = adapter.previous_sibling_element(candidate);
            }
            None
        }
    }
}
