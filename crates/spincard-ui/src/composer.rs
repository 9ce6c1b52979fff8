//! Builds the node tree for one composition pass.
//!
//! Widgets emit nodes into a thread-local composer while the content closure
//! runs. Ids are handed out in emission order, so a screen that composes the
//! same shape twice gives every node the same id both times.

use std::cell::RefCell;

use spincard_core::NodeId;

use crate::layout::{Alignment, MeasurePolicy};
use crate::modifier::Modifier;

pub const ROOT_NODE_ID: NodeId = 0;

/// A composed node: what to measure and draw, before layout.
#[derive(Debug)]
pub struct LayoutNode {
    pub id: NodeId,
    pub modifier: Modifier,
    pub policy: MeasurePolicy,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }
}

struct Composer {
    next_id: NodeId,
    stack: Vec<Vec<LayoutNode>>,
}

thread_local! {
    static COMPOSER: RefCell<Option<Composer>> = const { RefCell::new(None) };
}

/// Runs `content` and returns what it emitted under a root that fills the
/// available space.
pub fn compose(content: impl FnOnce()) -> LayoutNode {
    let fresh = Composer {
        next_id: ROOT_NODE_ID + 1,
        stack: vec![Vec::new()],
    };
    let previous = COMPOSER.with(|slot| slot.replace(Some(fresh)));
    content();
    let finished = COMPOSER.with(|slot| slot.replace(previous));
    let children = finished
        .and_then(|mut composer| composer.stack.pop())
        .unwrap_or_default();

    LayoutNode {
        id: ROOT_NODE_ID,
        modifier: Modifier::empty().fill_max_size(),
        policy: MeasurePolicy::Box {
            alignment: Alignment::TOP_START,
        },
        children,
    }
}

pub fn is_composing() -> bool {
    COMPOSER.with(|slot| slot.borrow().is_some())
}

/// Emits a node whose children are whatever `content` emits.
pub fn emit_node(modifier: Modifier, policy: MeasurePolicy, content: impl FnOnce()) -> NodeId {
    let id = COMPOSER.with(|slot| {
        slot.borrow_mut().as_mut().map(|composer| {
            let id = composer.next_id;
            composer.next_id += 1;
            composer.stack.push(Vec::new());
            id
        })
    });
    let Some(id) = id else {
        log::warn!("node emitted outside of a composition was dropped");
        return ROOT_NODE_ID;
    };

    content();

    COMPOSER.with(|slot| {
        if let Some(composer) = slot.borrow_mut().as_mut() {
            let children = composer.stack.pop().unwrap_or_default();
            let node = LayoutNode {
                id,
                modifier,
                policy,
                children,
            };
            if let Some(parent) = composer.stack.last_mut() {
                parent.push(node);
            }
        }
    });
    id
}
