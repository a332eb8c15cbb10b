//! Query library: scry queries returning every match in the tree.
//!
//! Each query builds a predicate over the walker's candidate binding and
//! delegates to [`find_all_in_rendered_tree`]. Class and tag queries match
//! host instances; the component-type query classifies the candidate
//! itself.

use std::fmt;
use std::rc::Rc;

use crate::classify::{is_composite_component_with_type, is_dom_component};
use crate::node::{ComponentType, PublicInstance, RenderedNode};
use crate::result::TantearResult;
use crate::walker::find_all_in_rendered_tree;

/// One or more class names required by a class query.
///
/// Converts from a single name or a sequence of names; every listed name
/// must appear in a candidate's class token list for it to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    /// The required names, in the order given.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl From<&str> for ClassNames {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for ClassNames {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for ClassNames {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<&[&str]> for ClassNames {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassNames {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(ToString::to_string).collect())
    }
}

/// Every host instance under `root` whose class token list contains all of
/// `class_names`.
///
/// The token list is read from the `className` property when the host
/// exposes one, falling back to the raw `class` attribute (namespaced
/// hosts), and split on runs of whitespace. Membership is exact-token,
/// order-independent, duplicates ignored.
///
/// # Errors
///
/// Returns [`crate::TantearError::InvalidArgument`] when `root` is itself a
/// host instance.
pub fn scry_rendered_dom_components_with_class(
    root: Option<&Rc<RenderedNode>>,
    class_names: impl Into<ClassNames>,
) -> TantearResult<Vec<PublicInstance>> {
    let class_names = class_names.into();
    find_all_in_rendered_tree(root, &|candidate| {
        if !is_dom_component(candidate) {
            return false;
        }
        let Some(dom) = candidate.as_dom() else {
            return false;
        };
        let class_value = match &dom.class_name {
            Some(value) => value.as_str(),
            // SVG, probably.
            None => dom.attribute("class").unwrap_or(""),
        };
        class_names
            .names()
            .iter()
            .all(|name| class_value.split_whitespace().any(|token| token == name))
    })
}

/// Every host instance under `root` whose tag equals `tag_name`,
/// case-insensitively.
///
/// # Errors
///
/// Returns [`crate::TantearError::InvalidArgument`] when `root` is itself a
/// host instance.
pub fn scry_rendered_dom_components_with_tag(
    root: Option<&Rc<RenderedNode>>,
    tag_name: &str,
) -> TantearResult<Vec<PublicInstance>> {
    find_all_in_rendered_tree(root, &|candidate| {
        candidate
            .as_dom()
            .is_some_and(|dom| dom.is_element_like() && dom.tag_name.eq_ignore_ascii_case(tag_name))
    })
}

/// Every composite instance under `root` of exactly the given component
/// type (identity comparison).
///
/// # Errors
///
/// Returns [`crate::TantearError::InvalidArgument`] when `root` is itself a
/// host instance.
///
/// # Panics
///
/// Panics when the tree contains a non-host candidate with no `type`; see
/// [`is_composite_component_with_type`].
pub fn scry_rendered_components_with_type(
    root: Option<&Rc<RenderedNode>>,
    component: &Rc<ComponentType>,
) -> TantearResult<Vec<PublicInstance>> {
    find_all_in_rendered_tree(root, &|candidate| {
        is_composite_component_with_type(candidate, component)
    })
}
