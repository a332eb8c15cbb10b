//! Singleton finders: exactly-one-match wrappers over scry queries.

use std::rc::Rc;

use crate::node::{ComponentType, PublicInstance, RenderedNode};
use crate::query::{
    scry_rendered_components_with_type, scry_rendered_dom_components_with_class,
    scry_rendered_dom_components_with_tag, ClassNames,
};
use crate::result::{TantearError, TantearResult};

/// Run a scry and enforce the at-most-one-match contract.
///
/// More than one match is an [`TantearError::AmbiguousMatch`]. Zero matches
/// yields `Ok(None)`: only ambiguity is checked, absence is not — a
/// longstanding contract callers rely on, kept as observed.
fn find_one_of(
    label: &str,
    option: String,
    scry: impl FnOnce() -> TantearResult<Vec<PublicInstance>>,
) -> TantearResult<Option<PublicInstance>> {
    let all = scry()?;
    if all.len() > 1 {
        return Err(TantearError::AmbiguousMatch {
            count: all.len(),
            label: label.to_string(),
            option,
        });
    }
    Ok(all.into_iter().next())
}

/// The single host instance under `root` carrying all of `class_names`.
///
/// # Errors
///
/// [`TantearError::AmbiguousMatch`] when more than one host instance
/// matches; [`TantearError::InvalidArgument`] when `root` is itself a host
/// instance. Zero matches is `Ok(None)`.
pub fn find_rendered_dom_components_with_class(
    root: Option<&Rc<RenderedNode>>,
    class_names: impl Into<ClassNames>,
) -> TantearResult<Option<PublicInstance>> {
    let class_names = class_names.into();
    find_one_of("class", class_names.to_string(), || {
        scry_rendered_dom_components_with_class(root, class_names.clone())
    })
}

/// The single host instance under `root` with the given tag
/// (case-insensitive).
///
/// # Errors
///
/// [`TantearError::AmbiguousMatch`] when more than one host instance
/// matches; [`TantearError::InvalidArgument`] when `root` is itself a host
/// instance. Zero matches is `Ok(None)`.
pub fn find_rendered_dom_components_with_tag(
    root: Option<&Rc<RenderedNode>>,
    tag_name: &str,
) -> TantearResult<Option<PublicInstance>> {
    find_one_of("tag", tag_name.to_string(), || {
        scry_rendered_dom_components_with_tag(root, tag_name)
    })
}

/// The single composite instance under `root` of exactly the given
/// component type.
///
/// # Errors
///
/// [`TantearError::AmbiguousMatch`] when more than one instance matches;
/// [`TantearError::InvalidArgument`] when `root` is itself a host instance.
/// Zero matches is `Ok(None)`.
pub fn find_rendered_component_with_type(
    root: Option<&Rc<RenderedNode>>,
    component: &Rc<ComponentType>,
) -> TantearResult<Option<PublicInstance>> {
    find_one_of("component", component.name.clone(), || {
        scry_rendered_components_with_type(root, component)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// App → div { span, span, p.only }
    fn fixture() -> Rc<RenderedNode> {
        let app = ComponentType::stateful("App");
        let tree = RenderedNode::host("div")
            .with_child("0", RenderedNode::host("span"))
            .with_child("1", RenderedNode::host("span"))
            .with_child(
                "2",
                RenderedNode::host("p").with_dom(
                    crate::node::HostObject::element("p").with_class("only"),
                ),
            );
        Rc::new(RenderedNode::composite(&app, tree))
    }

    mod ambiguity_tests {
        use super::*;

        #[test]
        fn test_two_matches_is_ambiguous() {
            let root = fixture();
            let err = find_rendered_dom_components_with_tag(Some(&root), "span").unwrap_err();
            match err {
                TantearError::AmbiguousMatch {
                    count,
                    label,
                    option,
                } => {
                    assert_eq!(count, 2);
                    assert_eq!(label, "tag");
                    assert_eq!(option, "span");
                }
                other => panic!("expected AmbiguousMatch, got {other:?}"),
            }
        }

        #[test]
        fn test_ambiguous_display_carries_diagnostics() {
            let root = fixture();
            let err = find_rendered_dom_components_with_tag(Some(&root), "span").unwrap_err();
            let message = err.to_string();
            assert!(message.contains("found 2"));
            assert!(message.contains("tag: span"));
        }
    }

    mod single_match_tests {
        use super::*;

        #[test]
        fn test_by_tag() {
            let root = fixture();
            let found = find_rendered_dom_components_with_tag(Some(&root), "p")
                .unwrap()
                .unwrap();
            assert_eq!(found.as_dom().unwrap().tag_name, "p");
        }

        #[test]
        fn test_by_class() {
            let root = fixture();
            let found = find_rendered_dom_components_with_class(Some(&root), "only")
                .unwrap()
                .unwrap();
            assert_eq!(found.as_dom().unwrap().class_name.as_deref(), Some("only"));
        }

        #[test]
        fn test_by_component_type() {
            let app = ComponentType::stateful("App");
            let widget = ComponentType::stateful("Widget");
            let tree = RenderedNode::host("div").with_child(
                "0",
                RenderedNode::composite(&widget, RenderedNode::host("p")),
            );
            let root = Rc::new(RenderedNode::composite(&app, tree));

            let found = find_rendered_component_with_type(Some(&root), &widget)
                .unwrap()
                .unwrap();
            assert!(found.as_node().is_some());
        }
    }

    mod zero_match_tests {
        use super::*;

        #[test]
        fn test_zero_matches_is_none_not_error() {
            let root = fixture();
            let found = find_rendered_dom_components_with_tag(Some(&root), "section").unwrap();
            assert!(found.is_none());
        }

        #[test]
        fn test_zero_matches_by_class() {
            let root = fixture();
            let found = find_rendered_dom_components_with_class(Some(&root), "missing").unwrap();
            assert!(found.is_none());
        }
    }

    mod label_tests {
        use super::*;

        #[test]
        fn test_class_label_joins_names() {
            let app = ComponentType::stateful("App");
            let classed = |class: &str| {
                RenderedNode::host("div").with_dom(
                    crate::node::HostObject::element("div").with_class(class),
                )
            };
            let tree = RenderedNode::host("main")
                .with_child("0", classed("a b"))
                .with_child("1", classed("a b"));
            let root = Rc::new(RenderedNode::composite(&app, tree));

            let err = find_rendered_dom_components_with_class(Some(&root), ["a", "b"])
                .unwrap_err();
            assert!(err.to_string().contains("class: a,b"));
        }
    }
}
