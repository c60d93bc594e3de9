//! First-match-wins descent over a [`Tree`].
//!
//! Starting at the root, the children of the current node are probed in
//! declared order. The first child whose signature accepts the buffer
//! becomes the current node and the scan restarts from its children; later
//! siblings are never probed and the walk never backtracks. When no child
//! matches, the current node is the answer. The root always matches, so the
//! result is never empty.

use std::panic::{self, AssertUnwindSafe};

use tracing::{trace, warn};

use crate::tree::{Node, NodeId, Tree};

/// Walk `tree` for `buf` and return the deepest matching node.
///
/// With `isolate_faults` set, a signature that panics is treated as a
/// non-match instead of unwinding through the caller.
pub(crate) fn traverse(tree: &Tree, buf: &[u8], isolate_faults: bool) -> NodeId {
    let mut current = tree.root();

    'descend: loop {
        for &child in tree.node(current).children() {
            if probe(tree.node(child), buf, isolate_faults) {
                trace!(mime = tree.node(child).mime(), "signature matched");
                current = child;
                continue 'descend;
            }
        }
        return current;
    }
}

#[inline]
fn probe(node: &Node, buf: &[u8], isolate_faults: bool) -> bool {
    if !isolate_faults {
        return node.signature().matches(buf);
    }

    match panic::catch_unwind(AssertUnwindSafe(|| node.signature().matches(buf))) {
        Ok(matched) => matched,
        Err(_) => {
            warn!(
                mime = node.mime(),
                extension = node.extension(),
                len = buf.len(),
                "signature panicked, treating as no match"
            );
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeBuilder;
    use crate::tree::signature::{any, never};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_first_matching_sibling_wins() {
        let build = |swap: bool| {
            let mut b = TreeBuilder::new();
            let a = b.node("application/x-a", "a", any);
            let z = b.node("application/x-z", "z", any);
            let order = if swap { [z, a] } else { [a, z] };
            let root = b.node_with("application/octet-stream", "", any, order).unwrap();
            b.build(root).unwrap()
        };

        assert_eq!(build(false).detect(b"x").extension(), "a");
        assert_eq!(build(true).detect(b"x").extension(), "z");
    }

    #[test]
    fn test_later_siblings_are_not_probed() {
        let probes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&probes);

        let mut b = TreeBuilder::new();
        let hit = b.node("application/x-hit", "hit", any);
        let after = b.node("application/x-after", "after", move |_: &[u8]| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let root = b.node_with("application/octet-stream", "", any, [hit, after]).unwrap();
        let tree = b.build(root).unwrap();

        assert_eq!(tree.detect(b"data").extension(), "hit");
        assert_eq!(probes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_no_backtracking_after_descent() {
        // `outer` matches but none of its children do; the sibling `other`
        // would match too, yet the walk stays at `outer`.
        let mut b = TreeBuilder::new();
        let inner = b.node("application/x-inner", "inner", never);
        let outer = b.node_with("application/x-outer", "outer", any, [inner]).unwrap();
        let other = b.node("application/x-other", "other", any);
        let root = b.node_with("application/octet-stream", "", any, [outer, other]).unwrap();
        let tree = b.build(root).unwrap();

        assert_eq!(tree.detect(b"data").extension(), "outer");
    }

    #[test]
    fn test_descends_to_deepest_match() {
        let mut b = TreeBuilder::new();
        let leaf = b.node("application/x-leaf", "leaf", |buf: &[u8]| buf.len() > 2);
        let mid = b
            .node_with("application/x-mid", "mid", |buf: &[u8]| buf.len() > 1, [leaf])
            .unwrap();
        let root = b.node_with("application/octet-stream", "", any, [mid]).unwrap();
        let tree = b.build(root).unwrap();

        assert_eq!(tree.detect(b"").extension(), "");
        assert_eq!(tree.detect(b"ab").extension(), "mid");
        assert_eq!(tree.detect(b"abc").extension(), "leaf");
    }

    #[test]
    fn test_panicking_signature_is_isolated() {
        let mut b = TreeBuilder::new();
        let broken = b.node("application/x-broken", "bad", |buf: &[u8]| buf[1024] == 0);
        let fine = b.node("application/x-fine", "ok", any);
        let root = b.node_with("application/octet-stream", "", any, [broken, fine]).unwrap();
        let tree = b.build(root).unwrap();

        let id = traverse(&tree, b"short", true);
        assert_eq!(tree.node(id).extension(), "ok");
    }

    #[test]
    #[should_panic]
    fn test_panics_propagate_without_isolation() {
        let mut b = TreeBuilder::new();
        let broken = b.node("application/x-broken", "bad", |buf: &[u8]| buf[1024] == 0);
        let root = b.node_with("application/octet-stream", "", any, [broken]).unwrap();
        let tree = b.build(root).unwrap();

        traverse(&tree, b"short", false);
    }
}
