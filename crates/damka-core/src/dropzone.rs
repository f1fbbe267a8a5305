use crate::movegen::{MoveTree, NodeId, ROOT};
use crate::types::Square;

/// Reduces a move tree to the squares the stone may legally be dropped on.
///
/// Without a capturing child at the root the targets are the root's direct
/// child landings. With one, only terminal leaves of capture chains
/// qualify: a started chain must run until no further capture exists, so
/// intermediate landings are never legal stopping points. Pure function of
/// the tree; the result is sorted and free of duplicates.
pub fn drop_zones(tree: &MoveTree) -> Vec<Square> {
    let mut zones = Vec::new();
    if tree.root_has_capture() {
        collect_chain_leaves(tree, ROOT, &mut zones);
    } else {
        zones.extend(
            tree.root()
                .children
                .iter()
                .map(|&child| tree.node(child).landing),
        );
    }
    zones.sort_unstable();
    zones.dedup();
    zones
}

fn collect_chain_leaves(tree: &MoveTree, from: NodeId, zones: &mut Vec<Square>) {
    for &child in &tree.node(from).children {
        let node = tree.node(child);
        if node.captured.is_none() {
            continue;
        }
        if node.children.is_empty() {
            zones.push(node.landing);
        } else {
            collect_chain_leaves(tree, child, zones);
        }
    }
}
