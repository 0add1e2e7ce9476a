use super::*;
use approx::assert_relative_eq;
use std::f32::consts::{FRAC_PI_2, PI};

const EPS: f32 = 1e-4;

fn assert_vec_eq(actual: Vec2, expected: Vec2) {
    assert_relative_eq!(actual.x, expected.x, epsilon = EPS);
    assert_relative_eq!(actual.y, expected.y, epsilon = EPS);
}

/// Prüft rekursiv `child.tail == parent.head` für alle Kanten.
fn assert_chain_consistent(tree: &VectorTree) {
    for id in tree.ids() {
        let node = tree.node(id).expect("ID aus ids() muss existieren");
        for &child in node.children() {
            assert_vec_eq(tree.tail_position(child).unwrap(), node.head());
        }
    }
}

/// Baut die Standard-Topologie: 0→{1,2}, 1→{3,4}, 2→{5,6}, 6→{7}
fn robohand_tree() -> (VectorTree, Vec<NodeId>) {
    let mut tree = VectorTree::new();
    let ids: Vec<NodeId> = (0..8).map(|_| tree.add_node(30.0, 0.0)).collect();
    for (parent, child) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6), (6, 7)] {
        tree.attach_child(ids[parent], ids[child]).unwrap();
    }
    (tree, ids)
}

#[test]
fn test_two_segment_scenario_straight_then_rotated() {
    let mut tree = VectorTree::new();
    let root = tree.add_node(30.0, 0.0);
    let child = tree.add_node(30.0, 0.0);
    tree.attach_child(root, child).unwrap();

    assert_vec_eq(tree.head_position(root).unwrap(), Vec2::new(30.0, 0.0));
    assert_vec_eq(tree.tail_position(child).unwrap(), Vec2::new(30.0, 0.0));
    assert_vec_eq(tree.head_position(child).unwrap(), Vec2::new(60.0, 0.0));

    tree.set_angle(root, FRAC_PI_2).unwrap();

    assert_vec_eq(tree.head_position(root).unwrap(), Vec2::new(0.0, 30.0));
    assert_vec_eq(tree.tail_position(child).unwrap(), Vec2::new(0.0, 30.0));
    assert_relative_eq!(tree.node(child).unwrap().angle(), FRAC_PI_2, epsilon = EPS);
    assert_vec_eq(tree.head_position(child).unwrap(), Vec2::new(0.0, 60.0));
}

#[test]
fn test_attach_positions_child_at_parent_head() {
    let mut tree = VectorTree::new();
    let parent = tree.add_node(10.0, 0.0);
    let child = tree.add_node(5.0, 0.0);
    tree.set_tail_position(parent, Vec2::new(100.0, 50.0)).unwrap();

    tree.attach_child(parent, child).unwrap();

    assert_eq!(tree.node(parent).unwrap().children(), &[child]);
    assert_eq!(tree.node(child).unwrap().parent(), Some(parent));
    assert_vec_eq(tree.tail_position(child).unwrap(), Vec2::new(110.0, 50.0));
}

#[test]
fn test_attach_unknown_child_is_invalid_argument_and_leaves_children_unchanged() {
    let mut tree = VectorTree::new();
    let parent = tree.add_node(10.0, 0.0);
    let child = tree.add_node(10.0, 0.0);
    tree.attach_child(parent, child).unwrap();

    let missing = NodeId(42);
    let result = tree.attach_child(parent, missing);

    assert_eq!(result, Err(TreeError::UnknownNode(missing)));
    assert_eq!(tree.node(parent).unwrap().children(), &[child]);
}

#[test]
fn test_attach_to_unknown_parent_fails() {
    let mut tree = VectorTree::new();
    let child = tree.add_node(10.0, 0.0);

    assert_eq!(
        tree.attach_child(NodeId(7), child),
        Err(TreeError::UnknownNode(NodeId(7)))
    );
    assert_eq!(tree.node(child).unwrap().parent(), None);
}

#[test]
fn test_attach_self_is_rejected_as_cycle() {
    let mut tree = VectorTree::new();
    let node = tree.add_node(10.0, 0.0);

    assert_eq!(
        tree.attach_child(node, node),
        Err(TreeError::Cycle {
            parent: node,
            child: node
        })
    );
    assert!(tree.node(node).unwrap().children().is_empty());
}

#[test]
fn test_attach_ancestor_is_rejected_as_cycle() {
    let (mut tree, ids) = robohand_tree();

    let result = tree.attach_child(ids[7], ids[0]);

    assert_eq!(
        result,
        Err(TreeError::Cycle {
            parent: ids[7],
            child: ids[0]
        })
    );
    assert!(tree.node(ids[7]).unwrap().children().is_empty());
    assert_eq!(tree.node(ids[0]).unwrap().parent(), None);
}

#[test]
fn test_attach_already_owned_child_is_rejected() {
    let (mut tree, ids) = robohand_tree();

    let result = tree.attach_child(ids[5], ids[3]);

    assert_eq!(
        result,
        Err(TreeError::AlreadyAttached {
            child: ids[3],
            parent: ids[1]
        })
    );
    assert!(tree.node(ids[5]).unwrap().children().is_empty());
}

#[test]
fn test_detach_removes_child_and_is_noop_when_absent() {
    let (mut tree, ids) = robohand_tree();
    let before = tree.tail_position(ids[7]).unwrap();

    assert_eq!(tree.detach_child(ids[6], ids[7]), Ok(true));
    assert!(tree.node(ids[6]).unwrap().children().is_empty());
    assert_eq!(tree.node(ids[7]).unwrap().parent(), None);
    assert_eq!(tree.tail_position(ids[7]).unwrap(), before);

    assert_eq!(tree.detach_child(ids[6], ids[7]), Ok(false));
    assert_eq!(tree.detach_child(ids[0], ids[7]), Ok(false));
    assert_eq!(tree.node(ids[0]).unwrap().children(), &[ids[1], ids[2]]);
}

#[test]
fn test_detached_child_no_longer_follows_parent() {
    let mut tree = VectorTree::new();
    let parent = tree.add_node(10.0, 0.0);
    let child = tree.add_node(10.0, 0.0);
    tree.attach_child(parent, child).unwrap();
    tree.detach_child(parent, child).unwrap();

    tree.set_length(parent, 50.0).unwrap();

    assert_vec_eq(tree.tail_position(child).unwrap(), Vec2::new(10.0, 0.0));
}

#[test]
fn test_set_tail_moves_whole_subtree() {
    let (mut tree, ids) = robohand_tree();
    let old_heads: Vec<Vec2> = ids.iter().map(|&id| tree.head_position(id).unwrap()).collect();

    let offset = Vec2::new(400.0, 300.0);
    tree.set_tail_position(ids[0], offset).unwrap();

    for (i, &id) in ids.iter().enumerate() {
        assert_vec_eq(tree.head_position(id).unwrap(), old_heads[i] + offset);
    }
    assert_chain_consistent(&tree);
}

#[test]
fn test_set_length_repositions_but_does_not_rotate_children() {
    let (mut tree, ids) = robohand_tree();
    tree.set_angle(ids[2], 0.3).unwrap();
    let angles: Vec<f32> = ids.iter().map(|&id| tree.node(id).unwrap().angle()).collect();

    tree.set_length(ids[0], 80.0).unwrap();

    assert_vec_eq(tree.head_position(ids[0]).unwrap(), Vec2::new(80.0, 0.0));
    for (i, &id) in ids.iter().enumerate() {
        assert_relative_eq!(tree.node(id).unwrap().angle(), angles[i]);
    }
    assert_chain_consistent(&tree);
}

#[test]
fn test_rotation_delta_propagates_to_all_descendants() {
    let (mut tree, ids) = robohand_tree();
    tree.set_angle(ids[6], 0.5).unwrap();
    tree.set_angle(ids[3], -0.25).unwrap();
    let before: Vec<f32> = ids.iter().map(|&id| tree.node(id).unwrap().angle()).collect();

    let delta = PI / 36.0;
    tree.set_angle(ids[2], before[2] + delta).unwrap();

    // Teilbaum von 2: {2, 5, 6, 7}
    for i in [2, 5, 6, 7] {
        assert_relative_eq!(
            tree.node(ids[i]).unwrap().angle(),
            before[i] + delta,
            epsilon = EPS
        );
    }
    // Außerhalb des Teilbaums unverändert
    for i in [0, 1, 3, 4] {
        assert_relative_eq!(tree.node(ids[i]).unwrap().angle(), before[i]);
    }
    // Relativwinkel 6→7 bleibt erhalten
    let relative = tree.node(ids[7]).unwrap().angle() - tree.node(ids[6]).unwrap().angle();
    assert_relative_eq!(relative, before[7] - before[6], epsilon = EPS);
    assert_chain_consistent(&tree);
}

#[test]
fn test_angles_are_not_normalized() {
    let mut tree = VectorTree::new();
    let node = tree.add_node(10.0, 0.0);

    tree.set_angle(node, 5.0 * PI).unwrap();

    assert_relative_eq!(tree.node(node).unwrap().angle(), 5.0 * PI);
    assert_vec_eq(tree.head_position(node).unwrap(), Vec2::new(-10.0, 0.0));
}

#[test]
fn test_mutating_unknown_node_fails() {
    let mut tree = VectorTree::new();
    let missing = NodeId(0);

    assert_eq!(
        tree.set_tail_position(missing, Vec2::ONE),
        Err(TreeError::UnknownNode(missing))
    );
    assert_eq!(tree.set_length(missing, 1.0), Err(TreeError::UnknownNode(missing)));
    assert_eq!(tree.set_angle(missing, 1.0), Err(TreeError::UnknownNode(missing)));
    assert_eq!(tree.detach_child(missing, missing), Err(TreeError::UnknownNode(missing)));
    assert!(tree.segment(missing).is_none());
}
