use std::collections::{HashMap, HashSet};

use leptos::*;

use crate::api::HierarchyNode;

/// One node of the employee hierarchy with its subordinates attached.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub node: HierarchyNode,
    pub children: Vec<TreeNode>,
}

/// Builds the tree from the service's flat `{id, pid}` list. Nodes whose
/// parent id is absent from the list become roots, so a truncated
/// hierarchy still renders. Parent cycles are broken at the first
/// revisited node.
pub fn build_tree(nodes: &[HierarchyNode]) -> Vec<TreeNode> {
    let ids: HashSet<i64> = nodes.iter().map(|n| n.id).collect();
    let mut children_of: HashMap<i64, Vec<&HierarchyNode>> = HashMap::new();
    let mut roots: Vec<&HierarchyNode> = Vec::new();
    for node in nodes {
        match node.pid {
            Some(pid) if ids.contains(&pid) && pid != node.id => {
                children_of.entry(pid).or_default().push(node);
            }
            _ => roots.push(node),
        }
    }

    let mut visited = HashSet::new();
    let mut tree: Vec<TreeNode> = roots
        .iter()
        .filter_map(|root| attach(root, &children_of, &mut visited))
        .collect();
    // A parent cycle leaves its members unreachable from any root; promote
    // the first unvisited member and let the visit set cut the loop.
    for node in nodes {
        if !visited.contains(&node.id) {
            if let Some(subtree) = attach(node, &children_of, &mut visited) {
                tree.push(subtree);
            }
        }
    }
    tree
}

fn attach(
    node: &HierarchyNode,
    children_of: &HashMap<i64, Vec<&HierarchyNode>>,
    visited: &mut HashSet<i64>,
) -> Option<TreeNode> {
    if !visited.insert(node.id) {
        return None;
    }
    let children = children_of
        .get(&node.id)
        .map(|kids| {
            kids.iter()
                .filter_map(|kid| attach(kid, children_of, visited))
                .collect()
        })
        .unwrap_or_default();
    Some(TreeNode {
        node: node.clone(),
        children,
    })
}

fn render_node(tree: &TreeNode) -> View {
    let node = &tree.node;
    let title = node.title.clone().unwrap_or_else(|| "-".into());
    let img = node.img.clone();
    let children = if tree.children.is_empty() {
        ().into_view()
    } else {
        view! {
            <ul class="ml-6 mt-2 space-y-2 border-l border-border pl-4">
                {tree.children.iter().map(render_node).collect_view()}
            </ul>
        }
        .into_view()
    };
    view! {
        <li>
            <div class="flex items-center gap-3">
                {img.map(|src| view! {
                    <img src=src class="h-8 w-8 rounded-full object-cover" alt="" />
                })}
                <div>
                    <p class="text-sm font-medium text-fg">{node.name.clone()}</p>
                    <p class="text-xs text-fg-muted">{title}</p>
                </div>
            </div>
            {children}
        </li>
    }
    .into_view()
}

#[component]
pub fn OrgTree(nodes: Vec<HierarchyNode>) -> impl IntoView {
    let roots = build_tree(&nodes);
    view! {
        <ul class="space-y-2">
            {roots.iter().map(render_node).collect_view()}
        </ul>
    }
}
