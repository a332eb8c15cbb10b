//! Depth-first traversal over rendered trees.
//!
//! Recursion is asymmetric by design: host nodes descend through their
//! materialized children map (the instances, already resolved), while
//! composite nodes descend through their originating descriptor, because a
//! composite's rendered output is reached by re-entering the descriptor one
//! level down. A composite node therefore contributes at most one further
//! recursive step.

use std::rc::Rc;

use crate::classify::{is_dom_component, is_element};
use crate::node::{NodeKind, PublicInstance, RenderedNode};
use crate::result::{TantearError, TantearResult};

/// Boolean predicate over a candidate public instance. The lifetime lets
/// query predicates borrow from their enclosing call.
pub type InstancePredicate<'a> = dyn Fn(&PublicInstance) -> bool + 'a;

/// Pre-order depth-first collection of matching candidates.
pub(crate) fn find_all_in_tree(
    inst: Option<&Rc<RenderedNode>>,
    test: &InstancePredicate<'_>,
) -> Vec<PublicInstance> {
    let Some(inst) = inst else {
        return Vec::new();
    };
    let public_instance = PublicInstance::of(inst);
    let mut ret = if test(&public_instance) {
        vec![public_instance.clone()]
    } else {
        Vec::new()
    };
    if is_dom_component(&public_instance) {
        for (_slot, child) in &inst.children {
            ret.extend(find_all_in_tree(Some(child), test));
        }
    } else if let Some(vnode) = &inst.vnode {
        if is_element(vnode) && vnode.kind.as_ref().is_some_and(NodeKind::is_component) {
            ret.extend(find_all_in_tree(Some(vnode), test));
        }
    }
    ret
}

/// Collect every candidate under `root` that satisfies `test`, in
/// depth-first pre-order.
///
/// An absent root yields an empty match list, not an error.
///
/// # Errors
///
/// Returns [`TantearError::InvalidArgument`] when `root` is itself a host
/// instance; callers must pass a composite or root-level node, not a bare
/// host node.
pub fn find_all_in_rendered_tree(
    root: Option<&Rc<RenderedNode>>,
    test: &InstancePredicate<'_>,
) -> TantearResult<Vec<PublicInstance>> {
    let Some(root) = root else {
        return Ok(Vec::new());
    };
    if root.is_host_instance() {
        return Err(TantearError::InvalidArgument {
            message: "findAllInRenderedTree(...): instance must be a composite component"
                .to_string(),
        });
    }
    let matches = find_all_in_tree(Some(root), test);
    tracing::trace!(matches = matches.len(), "rendered-tree query complete");
    Ok(matches)
}
