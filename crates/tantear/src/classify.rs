//! Node classification: structural predicates over tree candidates.
//!
//! Every candidate is exactly one of host, composite, or unknown at the
//! moment it is inspected. Classification is a pure function of current
//! shape with no caching, so concurrent test cases can classify the same
//! tree freely.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::node::{ComponentType, HostObject, NodeKind, PublicInstance, RenderedNode};

/// Closed set of candidate classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeClass {
    /// Element-like host object.
    Host,
    /// Instance of a component type exposing `render` and `set_state`.
    Composite,
    /// Neither host nor composite.
    Unknown,
}

/// Classify a candidate into exactly one [`NodeClass`].
///
/// # Panics
///
/// Panics when the candidate is neither a host instance nor carries a
/// `type` to read capabilities from. That is a caller-contract violation
/// (classifying a malformed node), not a recoverable condition.
#[must_use]
pub fn classify(candidate: &PublicInstance) -> NodeClass {
    if is_dom_component(candidate) {
        return NodeClass::Host;
    }
    let stateful = match candidate {
        PublicInstance::Node(node) => match &node.kind {
            Some(NodeKind::Component(component)) => component.is_stateful(),
            // A string type has no capabilities to expose.
            Some(NodeKind::Tag(_)) => false,
            None => panic!("cannot classify a candidate with no type"),
        },
        // A non-element host object (text node, comment) has no type value.
        PublicInstance::Dom(_) => panic!("cannot classify a candidate with no type"),
    };
    if stateful {
        NodeClass::Composite
    } else {
        NodeClass::Unknown
    }
}

/// Validity check for element descriptors (the discriminant capability).
#[must_use]
pub const fn is_element(node: &RenderedNode) -> bool {
    node.element
}

/// Valid element descriptor whose `type` is the given component, compared
/// by identity.
#[must_use]
pub fn is_element_of_type(node: &RenderedNode, component: &Rc<ComponentType>) -> bool {
    is_element(node)
        && node
            .component_type()
            .is_some_and(|own| Rc::ptr_eq(own, component))
}

/// Host-instance check: the candidate is an element-like host object.
#[must_use]
pub fn is_dom_component(candidate: &PublicInstance) -> bool {
    candidate.as_dom().is_some_and(HostObject::is_element_like)
}

/// Valid element descriptor with a string-typed (host) `type`.
#[must_use]
pub fn is_dom_component_element(node: &RenderedNode) -> bool {
    is_element(node) && matches!(&node.kind, Some(NodeKind::Tag(_)))
}

/// Composite-instance check: not a host instance, and the candidate's type
/// exposes both `render` and `set_state` capabilities.
///
/// # Panics
///
/// Panics when the candidate has no `type` at all; see [`classify`].
#[must_use]
pub fn is_composite_component(candidate: &PublicInstance) -> bool {
    classify(candidate) == NodeClass::Composite
}

/// Composite instance of exactly the given component type (identity).
///
/// # Panics
///
/// Panics when the candidate has no `type` at all; see [`classify`].
#[must_use]
pub fn is_composite_component_with_type(
    candidate: &PublicInstance,
    component: &Rc<ComponentType>,
) -> bool {
    if !is_composite_component(candidate) {
        return false;
    }
    candidate
        .as_node()
        .and_then(|node| node.component_type())
        .is_some_and(|own| Rc::ptr_eq(own, component))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_candidate(tag: &str) -> PublicInstance {
        PublicInstance::of(&Rc::new(RenderedNode::host(tag)))
    }

    fn composite_candidate(component: &Rc<ComponentType>) -> PublicInstance {
        PublicInstance::of(&Rc::new(RenderedNode::component(component)))
    }

    mod classify_tests {
        use super::*;

        #[test]
        fn test_host_node_classifies_host() {
            assert_eq!(classify(&host_candidate("div")), NodeClass::Host);
        }

        #[test]
        fn test_stateful_component_classifies_composite() {
            let app = ComponentType::stateful("App");
            assert_eq!(classify(&composite_candidate(&app)), NodeClass::Composite);
        }

        #[test]
        fn test_functional_component_classifies_unknown() {
            let widget = ComponentType::functional("Widget");
            assert_eq!(classify(&composite_candidate(&widget)), NodeClass::Unknown);
        }

        #[test]
        fn test_unmounted_host_descriptor_classifies_unknown() {
            let node = Rc::new(RenderedNode::host("div").without_dom());
            assert_eq!(classify(&PublicInstance::of(&node)), NodeClass::Unknown);
        }

        #[test]
        #[should_panic(expected = "no type")]
        fn test_untyped_node_panics() {
            let node = Rc::new(RenderedNode::untyped());
            let _ = classify(&PublicInstance::of(&node));
        }

        #[test]
        #[should_panic(expected = "no type")]
        fn test_non_element_host_object_panics() {
            let text = Rc::new(HostObject::element("span").with_node_type(3));
            let _ = classify(&PublicInstance::Dom(text));
        }

        #[test]
        fn test_exclusivity() {
            let app = ComponentType::stateful("App");
            for candidate in [host_candidate("div"), composite_candidate(&app)] {
                let host = is_dom_component(&candidate);
                let composite = is_composite_component(&candidate);
                assert!(!(host && composite));
            }
        }
    }

    mod element_tests {
        use super::*;

        #[test]
        fn test_is_element_reads_discriminant() {
            assert!(is_element(&RenderedNode::host("div")));
            assert!(!is_element(&RenderedNode::host("div").invalid()));
        }

        #[test]
        fn test_is_element_of_type_requires_identity() {
            let app = ComponentType::stateful("App");
            let other = ComponentType::stateful("App");
            let node = RenderedNode::component(&app);
            assert!(is_element_of_type(&node, &app));
            assert!(!is_element_of_type(&node, &other));
        }

        #[test]
        fn test_is_element_of_type_rejects_invalid_descriptor() {
            let app = ComponentType::stateful("App");
            let node = RenderedNode::component(&app).invalid();
            assert!(!is_element_of_type(&node, &app));
        }

        #[test]
        fn test_is_dom_component_element() {
            let app = ComponentType::stateful("App");
            assert!(is_dom_component_element(&RenderedNode::host("div")));
            assert!(!is_dom_component_element(&RenderedNode::component(&app)));
            assert!(!is_dom_component_element(
                &RenderedNode::host("div").invalid()
            ));
        }
    }

    mod composite_tests {
        use super::*;

        #[test]
        fn test_host_candidate_is_never_composite() {
            assert!(!is_composite_component(&host_candidate("div")));
        }

        #[test]
        fn test_with_type_requires_same_allocation() {
            let app = ComponentType::stateful("App");
            let other = ComponentType::stateful("App");
            let candidate = composite_candidate(&app);
            assert!(is_composite_component_with_type(&candidate, &app));
            assert!(!is_composite_component_with_type(&candidate, &other));
        }

        #[test]
        fn test_with_type_rejects_functional() {
            let widget = ComponentType::functional("Widget");
            let candidate = composite_candidate(&widget);
            assert!(!is_composite_component_with_type(&candidate, &widget));
        }
    }
}
