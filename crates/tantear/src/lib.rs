//! Tantear: introspection and querying for rendered component trees.
//!
//! Tantear (Spanish: "to probe, to feel out") reads an already-rendered
//! component tree — a mix of host-backed nodes and composite component
//! instances — and answers structural queries from test code: every host
//! node with a set of classes, every node with a tag, every instance of a
//! component type, or exactly one of each.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Query        │    │ Tree         │    │ Singleton    │
//! │ Library      │───►│ Walker       │───►│ Finder       │
//! │ (predicates) │    │ (pre-order)  │    │ (exactly 1)  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! The toolkit never renders, diffs, or mutates anything. Every query is a
//! pure, synchronous, single-pass read of the tree it is handed, holds no
//! state across calls, and either completes or fails with a
//! [`TantearError`].
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use tantear::{
//!     find_rendered_dom_components_with_tag, scry_rendered_dom_components_with_class,
//!     ComponentType, RenderedNode,
//! };
//!
//! let app = ComponentType::stateful("App");
//! let tree = RenderedNode::host("div")
//!     .with_child("0", RenderedNode::host("span"))
//!     .with_child("1", RenderedNode::host("button"));
//! let root = Rc::new(RenderedNode::composite(&app, tree));
//!
//! let buttons = find_rendered_dom_components_with_tag(Some(&root), "button")?;
//! assert!(buttons.is_some());
//!
//! let highlighted = scry_rendered_dom_components_with_class(Some(&root), "highlight")?;
//! assert!(highlighted.is_empty());
//! # Ok::<(), tantear::TantearError>(())
//! ```

#![warn(missing_docs)]

mod classify;
mod finder;
mod node;
mod query;
mod result;
mod walker;

pub use classify::{
    classify, is_composite_component, is_composite_component_with_type, is_dom_component,
    is_dom_component_element, is_element, is_element_of_type, NodeClass,
};
pub use finder::{
    find_rendered_component_with_type, find_rendered_dom_components_with_class,
    find_rendered_dom_components_with_tag,
};
pub use node::{ComponentType, HostObject, NodeKind, PublicInstance, RenderedNode};
pub use query::{
    scry_rendered_components_with_type, scry_rendered_dom_components_with_class,
    scry_rendered_dom_components_with_tag, ClassNames,
};
pub use result::{TantearError, TantearResult};
pub use walker::{find_all_in_rendered_tree, InstancePredicate};
