//! Scene node hierarchy
//!
//! Nodes live in a flat arena owned by the [`crate::Scene`]. The root is always
//! at index 0, every node is stored before its children, and parent links are
//! [`NodeId`]s assigned when a node is created, so no fix-up pass is needed and
//! the links survive serialization unchanged.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::{
    error::{Error, Result},
    metadata::Metadata,
    sys,
    types::{Matrix4x4, ai_string_to_string, from_ai_matrix4x4},
};

/// Index of a node in its scene's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An owned scene node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) transformation: Matrix4x4,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) mesh_indices: Vec<u32>,
    pub(crate) metadata: Metadata,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transform relative to the parent node
    pub fn transformation(&self) -> Matrix4x4 {
        self.transformation
    }

    /// `None` only for the root
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    /// Indices into [`crate::Scene::meshes`]
    pub fn mesh_indices(&self) -> &[u32] {
        &self.mesh_indices
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Copy the native hierarchy below `root` into a preorder arena.
///
/// The walk uses an explicit stack and rejects a node reached twice, so a
/// corrupted graph cannot recurse forever.
///
/// # Safety
/// `root` and every node reachable through `mChildren` must be valid.
pub(crate) unsafe fn copy_hierarchy(root: &sys::aiNode) -> Result<Vec<Node>> {
    let mut arena: Vec<Node> = Vec::new();
    let mut seen: HashSet<*const sys::aiNode> = HashSet::new();
    let mut stack: Vec<(&sys::aiNode, Option<NodeId>)> = vec![(root, None)];

    while let Some((raw, parent)) = stack.pop() {
        if !seen.insert(raw as *const sys::aiNode) {
            return Err(Error::invalid_scene(format!(
                "node `{}` is reachable twice",
                ai_string_to_string(&raw.mName)
            )));
        }
        let id = NodeId(u32::try_from(arena.len()).map_err(|_| {
            Error::invalid_scene("node count exceeds u32::MAX")
        })?);

        let name = ai_string_to_string(&raw.mName);
        let mesh_indices = unsafe {
            crate::ffi::copy_required(raw.mMeshes, raw.mNumMeshes as usize, "node meshes", |i| *i)?
        };
        let metadata = unsafe { Metadata::from_raw(raw.mMetaData)? };
        let children = unsafe {
            crate::ffi::copy_pointer_array(
                raw.mChildren,
                raw.mNumChildren as usize,
                "node children",
                |child| Ok(child as *const sys::aiNode),
            )?
        };

        arena.push(Node {
            name,
            transformation: from_ai_matrix4x4(raw.mTransformation),
            parent,
            children: Vec::with_capacity(children.len()),
            mesh_indices,
            metadata,
        });
        if let Some(parent) = parent {
            arena[parent.index()].children.push(id);
        }

        // Reverse so children pop, and therefore get ids, in source order.
        for child in children.into_iter().rev() {
            stack.push((unsafe { &*child }, Some(id)));
        }
    }

    Ok(arena)
}

/// Check the invariants [`copy_hierarchy`] establishes: a single parentless
/// root at index 0, consistent parent and child links, and every node
/// reachable from the root exactly once.
pub(crate) fn validate_arena(nodes: &[Node]) -> std::result::Result<(), String> {
    if nodes.is_empty() {
        return Ok(());
    }
    if nodes[0].parent.is_some() {
        return Err("root node has a parent".to_string());
    }

    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            let Some(parent) = node.parent else {
                return Err(format!("node {index} has no parent"));
            };
            let Some(parent_node) = nodes.get(parent.index()) else {
                return Err(format!("node {index} has out-of-range parent {}", parent.0));
            };
            if !parent_node.children.iter().any(|c| c.index() == index) {
                return Err(format!("node {index} is missing from its parent's children"));
            }
        }
        for child in &node.children {
            match nodes.get(child.index()) {
                Some(c) if c.parent.map(NodeId::index) == Some(index) => {}
                Some(_) => return Err(format!("child {} does not point back to {index}", child.0)),
                None => return Err(format!("node {index} has out-of-range child {}", child.0)),
            }
        }
    }

    let mut visited = vec![false; nodes.len()];
    let mut stack = vec![NodeId::ROOT];
    while let Some(id) = stack.pop() {
        if std::mem::replace(&mut visited[id.index()], true) {
            return Err(format!("node {} is reachable twice", id.0));
        }
        stack.extend(nodes[id.index()].children.iter().copied());
    }
    if let Some(orphan) = visited.iter().position(|v| !v) {
        return Err(format!("node {orphan} is not reachable from the root"));
    }
    Ok(())
}

/// Deserialize a node arena and reject it unless [`validate_arena`] passes,
/// so a decoded [`crate::Scene`] upholds the same invariants as a copied one.
pub(crate) fn deserialize_arena<'de, D>(deserializer: D) -> std::result::Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    let nodes = Vec::<Node>::deserialize(deserializer)?;
    validate_arena(&nodes).map_err(|why| D::Error::custom(format!("corrupt node hierarchy: {why}")))?;
    Ok(nodes)
}

/// A node together with the arena it lives in, for navigation
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    nodes: &'a [Node],
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(nodes: &'a [Node], id: NodeId) -> Option<Self> {
        nodes.get(id.index()).map(|_| Self { nodes, id })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'a Node {
        &self.nodes[self.id.index()]
    }

    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.and_then(|p| Self::new(self.nodes, p))
    }

    /// Children in source order
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + 'a {
        let nodes = self.nodes;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef { nodes, id })
    }

    /// Parent, grandparent, ... up to and including the root
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        std::iter::successors(self.parent(), |n| n.parent())
    }

    /// Number of edges to the root
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Depth-first search of this subtree, this node included.
    pub fn find_node(&self, name: &str) -> Option<NodeRef<'a>> {
        let mut stack = vec![*self];
        while let Some(current) = stack.pop() {
            if current.node().name == name {
                return Some(current);
            }
            let children: Vec<_> = current.children().collect();
            stack.extend(children.into_iter().rev());
        }
        None
    }

    /// Product of every transform from the root down to this node
    pub fn world_transformation(&self) -> Matrix4x4 {
        self.ancestors()
            .fold(self.node().transformation, |acc, a| a.node().transformation * acc)
    }

    pub(crate) fn write_tree(&self, out: &mut String) {
        let mut stack = vec![(*self, 0usize)];
        while let Some((current, depth)) = stack.pop() {
            let node = current.node();
            let _ = write!(out, "{:indent$}{}", "", node.name, indent = depth * 2);
            if !node.mesh_indices.is_empty() {
                let _ = write!(out, " meshes={:?}", node.mesh_indices);
            }
            out.push('\n');
            let children: Vec<_> = current.children().collect();
            stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
        }
    }
}

impl std::ops::Deref for NodeRef<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::types::Vector3D;

    fn sample() -> Vec<Node> {
        // root -> [arm -> [hand], leg]
        let hand = node("hand", vec![1], vec![]);
        let arm = node("arm", vec![], vec![hand]);
        let leg = node("leg", vec![0], vec![]);
        let root = node("root", vec![], vec![arm, leg]);
        unsafe {
            (*arm).mTransformation = sys::aiMatrix4x4::translation(1.0, 0.0, 0.0);
            (*hand).mTransformation = sys::aiMatrix4x4::translation(0.0, 2.0, 0.0);
        }
        wire_parents(root);
        unsafe { copy_hierarchy(&*root) }.unwrap()
    }

    #[test]
    fn test_preorder_with_parent_links() {
        let nodes = sample();
        let names: Vec<_> = nodes.iter().map(|n| n.name()).collect();
        assert_eq!(names, ["root", "arm", "hand", "leg"]);
        assert_eq!(nodes[0].parent_id(), None);
        assert_eq!(nodes[1].parent_id(), Some(NodeId(0)));
        assert_eq!(nodes[2].parent_id(), Some(NodeId(1)));
        assert_eq!(nodes[3].parent_id(), Some(NodeId(0)));
        assert_eq!(nodes[0].child_ids(), [NodeId(1), NodeId(3)]);
        assert_eq!(nodes[2].mesh_indices(), [1]);
        assert!(validate_arena(&nodes).is_ok());
    }

    #[test]
    fn test_find_node_searches_whole_subtree() {
        let nodes = sample();
        let root = NodeRef::new(&nodes, NodeId::ROOT).unwrap();
        let hand = root.find_node("hand").unwrap();
        assert_eq!(hand.id(), NodeId(2));
        assert_eq!(hand.depth(), 2);
        assert!(root.find_node("tail").is_none());

        let ancestors: Vec<_> = hand.ancestors().map(|n| n.name().to_string()).collect();
        assert_eq!(ancestors, ["arm", "root"]);
        assert!(hand.ancestors().last().unwrap().is_root());
    }

    #[test]
    fn test_world_transformation_accumulates() {
        let nodes = sample();
        let hand = NodeRef::new(&nodes, NodeId(2)).unwrap();
        let world = hand.world_transformation();
        assert_eq!(world.transform_point3(Vector3D::ZERO), Vector3D::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let child = node("child", vec![], vec![]);
        let root = node("root", vec![], vec![child]);
        unsafe {
            (*child).mNumChildren = 1;
            (*child).mChildren = leak_slice(vec![root]);
        }
        let err = unsafe { copy_hierarchy(&*root) }.unwrap_err();
        assert!(matches!(err, Error::InvalidScene { .. }));
    }

    #[test]
    fn test_validate_arena_detects_broken_links() {
        let mut nodes = sample();
        nodes[2].parent = Some(NodeId(3));
        assert!(validate_arena(&nodes).is_err());

        let mut nodes = sample();
        nodes[0].children.push(NodeId(9));
        assert!(validate_arena(&nodes).is_err());
    }

    #[test]
    fn test_write_tree_indents_by_depth() {
        let nodes = sample();
        let mut out = String::new();
        NodeRef::new(&nodes, NodeId::ROOT).unwrap().write_tree(&mut out);
        assert_eq!(out, "root\n  arm\n    hand meshes=[1]\n  leg meshes=[0]\n");
    }
}
