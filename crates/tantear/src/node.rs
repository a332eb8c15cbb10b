//! Data model for rendered component trees.
//!
//! A rendered tree is heterogeneous: host nodes carry a concrete
//! host-environment object (tag name, class attribute, ...), composite
//! nodes carry the component type they were produced from, and either may
//! point back at the element descriptor that originated it. The renderer
//! reuses one shape for the render-time descriptor and the mounted
//! instance, so both roles live on [`RenderedNode`].
//!
//! Nothing here is cached or mutated by queries: classification and
//! traversal read the current shape every time.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A concrete host-environment object (DOM-element-like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostObject {
    /// Host node type; [`HostObject::ELEMENT_NODE`] means element-like.
    pub node_type: u32,
    /// Tag name as reported by the host environment.
    pub tag_name: String,
    /// `className` property, when the host exposes one. Namespaced
    /// (XML-style) hosts do not, and carry a `class` attribute instead.
    pub class_name: Option<String>,
    /// Raw attributes, in insertion order.
    pub attributes: Vec<(String, String)>,
}

impl HostObject {
    /// Node type of element-like host objects.
    pub const ELEMENT_NODE: u32 = 1;

    /// Create an element-like host object with the given tag.
    #[must_use]
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            node_type: Self::ELEMENT_NODE,
            tag_name: tag_name.into(),
            class_name: None,
            attributes: Vec::new(),
        }
    }

    /// Set the `className` property.
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add a raw attribute (e.g. `class` on a namespaced host).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Override the host node type (text nodes, comments, ...).
    #[must_use]
    pub fn with_node_type(mut self, node_type: u32) -> Self {
        self.node_type = node_type;
        self
    }

    /// Read a raw attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Structural element check: element node type and a non-empty tag.
    #[must_use]
    pub fn is_element_like(&self) -> bool {
        self.node_type == Self::ELEMENT_NODE && !self.tag_name.is_empty()
    }
}

/// A component type: the function/class value composite nodes are produced
/// from.
///
/// Type equality is identity, not structure: two `Rc<ComponentType>` values
/// denote the same type only when they are the same allocation, mirroring
/// reference equality on the original type value. Keep the `Rc` around and
/// clone it wherever the type is referenced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentType {
    /// Display name, used in diagnostics.
    pub name: String,
    /// Whether the type exposes a `render` capability.
    pub has_render: bool,
    /// Whether the type exposes a `set_state` capability.
    pub has_set_state: bool,
}

impl ComponentType {
    /// A stateful component type: exposes both `render` and `set_state`.
    #[must_use]
    pub fn stateful(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            has_render: true,
            has_set_state: true,
        })
    }

    /// A functional component type: no instance capabilities.
    #[must_use]
    pub fn functional(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            has_render: false,
            has_set_state: false,
        })
    }

    /// Whether instances of this type behave as composite components.
    #[must_use]
    pub const fn is_stateful(&self) -> bool {
        self.has_render && self.has_set_state
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The descriptor `type` value: a host tag name or a component type.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Host element descriptor (string-typed).
    Tag(String),
    /// Composite element descriptor (function-typed).
    Component(Rc<ComponentType>),
}

impl NodeKind {
    /// Whether this is the function-typed (component) form.
    #[must_use]
    pub const fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }
}

/// A node of a rendered tree.
///
/// One shape serves both roles the renderer gives it: `element` is the
/// descriptor validity discriminant, `dom` is the host backing attached at
/// mount time, `vnode` points back at the descriptor a composite node's
/// output is reached through, and `children` holds the materialized child
/// instances of a host node, keyed by slot identifier.
#[derive(Debug, Clone)]
pub struct RenderedNode {
    /// Validity discriminant for element descriptors.
    pub element: bool,
    /// The descriptor `type`; `None` models an absent type.
    pub kind: Option<NodeKind>,
    /// Host backing; present on host nodes, absent on composite nodes.
    pub dom: Option<Rc<HostObject>>,
    /// Originating descriptor; present on composite component output.
    pub vnode: Option<Rc<RenderedNode>>,
    /// Child instances keyed by slot identifier, visited in insertion
    /// order. Slot keys are implementation-defined and not contiguous.
    pub children: Vec<(String, Rc<RenderedNode>)>,
}

impl RenderedNode {
    /// A host node backed by an element-like host object of the same tag.
    #[must_use]
    pub fn host(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        Self {
            element: true,
            kind: Some(NodeKind::Tag(tag_name.clone())),
            dom: Some(Rc::new(HostObject::element(tag_name))),
            vnode: None,
            children: Vec::new(),
        }
    }

    /// A bare component instance of the given type, with no host backing
    /// and no rendered output attached.
    #[must_use]
    pub fn component(component: &Rc<ComponentType>) -> Self {
        Self {
            element: true,
            kind: Some(NodeKind::Component(Rc::clone(component))),
            dom: None,
            vnode: None,
            children: Vec::new(),
        }
    }

    /// A mounted composite component: an instance of `component` whose
    /// rendered `output` hangs off the originating descriptor, the way the
    /// renderer attaches a composite's output to its element.
    #[must_use]
    pub fn composite(component: &Rc<ComponentType>, output: Self) -> Self {
        let vnode = Self {
            element: true,
            kind: Some(NodeKind::Component(Rc::clone(component))),
            dom: output.dom,
            vnode: output.vnode,
            children: output.children,
        };
        Self::component(component).with_vnode(vnode)
    }

    /// A node with no `type` at all (malformed input; composite
    /// classification panics on it).
    #[must_use]
    pub fn untyped() -> Self {
        Self {
            element: false,
            kind: None,
            dom: None,
            vnode: None,
            children: Vec::new(),
        }
    }

    /// Replace the host backing.
    #[must_use]
    pub fn with_dom(mut self, dom: HostObject) -> Self {
        self.dom = Some(Rc::new(dom));
        self
    }

    /// Drop the host backing (a descriptor that never mounted).
    #[must_use]
    pub fn without_dom(mut self) -> Self {
        self.dom = None;
        self
    }

    /// Attach the originating descriptor.
    #[must_use]
    pub fn with_vnode(mut self, vnode: Self) -> Self {
        self.vnode = Some(Rc::new(vnode));
        self
    }

    /// Append a child instance under the given slot key.
    #[must_use]
    pub fn with_child(mut self, slot: impl Into<String>, child: Self) -> Self {
        self.children.push((slot.into(), Rc::new(child)));
        self
    }

    /// Mark the node as failing the element-descriptor validity check.
    #[must_use]
    pub fn invalid(mut self) -> Self {
        self.element = false;
        self
    }

    /// The component type this node was produced from, when function-typed.
    #[must_use]
    pub fn component_type(&self) -> Option<&Rc<ComponentType>> {
        match &self.kind {
            Some(NodeKind::Component(component)) => Some(component),
            _ => None,
        }
    }

    /// Whether this node is a host instance: its host backing exists and is
    /// element-like.
    #[must_use]
    pub fn is_host_instance(&self) -> bool {
        self.dom.as_deref().is_some_and(HostObject::is_element_like)
    }
}

/// The public face of a rendered node: what traversal predicates receive
/// and what match results contain.
///
/// Host-backed nodes expose their host object; every other node is exposed
/// as itself, which is what lets component-type queries classify composite
/// instances directly.
///
/// Equality is identity (same allocation), matching reference equality on
/// the underlying values.
#[derive(Debug, Clone)]
pub enum PublicInstance {
    /// Host backing of a mounted host node.
    Dom(Rc<HostObject>),
    /// A node with no host backing, exposed as itself.
    Node(Rc<RenderedNode>),
}

impl PublicInstance {
    /// Bind a node to its public instance.
    #[must_use]
    pub fn of(node: &Rc<RenderedNode>) -> Self {
        match &node.dom {
            Some(dom) => Self::Dom(Rc::clone(dom)),
            None => Self::Node(Rc::clone(node)),
        }
    }

    /// The host object, when this is a host-backed instance.
    #[must_use]
    pub fn as_dom(&self) -> Option<&HostObject> {
        match self {
            Self::Dom(dom) => Some(dom),
            Self::Node(_) => None,
        }
    }

    /// The underlying node, when exposed as itself.
    #[must_use]
    pub const fn as_node(&self) -> Option<&Rc<RenderedNode>> {
        match self {
            Self::Dom(_) => None,
            Self::Node(node) => Some(node),
        }
    }
}

impl PartialEq for PublicInstance {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Dom(a), Self::Dom(b)) => Rc::ptr_eq(a, b),
            (Self::Node(a), Self::Node(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
