//! # Tree Mutations
//!
//! Pure recursive edits over the page tree.
//!
//! Every edit takes the current top-level elements and returns a fresh
//! sequence; the input is never touched. Untouched siblings keep their
//! relative order.
//!
//! ## Semantics
//!
//! ### Insert
//! - Appends to the end of the container whose id matches
//! - Leaf nodes cannot receive children; targeting one is a no-op
//!
//! ### Update
//! - Replaces the whole node whose id matches (no field merge)
//!
//! ### Remove
//! - Drops the matching node together with all of its descendants,
//!   at any depth, in one pass
//!
//! A target id that matches nothing leaves the tree unchanged and is
//! reported through [`TreeEdit::matched`] rather than as an error.

use crate::element::{Content, Element, ElementKind};
use crate::errors::TreeError;
use std::collections::HashSet;

/// Result of a structural edit
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEdit {
    /// The rebuilt top-level elements
    pub elements: Vec<Element>,

    /// Whether any node matched the edit's target
    pub matched: bool,
}

/// Append `element` to the children of the container `container_id`
pub fn insert(elements: &[Element], container_id: &str, element: &Element) -> TreeEdit {
    let mut matched = false;
    let elements = insert_into(elements, container_id, element, &mut matched);
    TreeEdit { elements, matched }
}

fn insert_into(
    elements: &[Element],
    container_id: &str,
    element: &Element,
    matched: &mut bool,
) -> Vec<Element> {
    elements
        .iter()
        .map(|node| match &node.content {
            Content::Children(children) if node.id == container_id => {
                *matched = true;
                let mut children = children.clone();
                children.push(element.clone());
                with_content(node, Content::Children(children))
            }
            Content::Children(children) => with_content(
                node,
                Content::Children(insert_into(children, container_id, element, matched)),
            ),
            Content::Leaf(_) => node.clone(),
        })
        .collect()
}

/// Replace the node whose id equals `element.id` with `element`
pub fn update(elements: &[Element], element: &Element) -> TreeEdit {
    let mut matched = false;
    let elements = update_in(elements, element, &mut matched);
    TreeEdit { elements, matched }
}

fn update_in(elements: &[Element], element: &Element, matched: &mut bool) -> Vec<Element> {
    elements
        .iter()
        .map(|node| {
            if node.id == element.id {
                *matched = true;
                return element.clone();
            }

            match &node.content {
                Content::Children(children) => {
                    with_content(node, Content::Children(update_in(children, element, matched)))
                }
                Content::Leaf(_) => node.clone(),
            }
        })
        .collect()
}

/// Remove the node `id` and everything beneath it
pub fn remove(elements: &[Element], id: &str) -> TreeEdit {
    let mut matched = false;
    let elements = remove_from(elements, id, &mut matched);
    TreeEdit { elements, matched }
}

fn remove_from(elements: &[Element], id: &str, matched: &mut bool) -> Vec<Element> {
    elements
        .iter()
        .filter_map(|node| {
            if node.id == id {
                *matched = true;
                return None;
            }

            Some(match &node.content {
                Content::Children(children) => {
                    with_content(node, Content::Children(remove_from(children, id, matched)))
                }
                Content::Leaf(_) => node.clone(),
            })
        })
        .collect()
}

/// Copy a node's own fields around new content
fn with_content(node: &Element, content: Content) -> Element {
    Element {
        id: node.id.clone(),
        kind: node.kind,
        name: node.name.clone(),
        styles: node.styles.clone(),
        content,
    }
}

/// Pre-order walk over every node in the tree
pub fn descendants(elements: &[Element]) -> Descendants<'_> {
    Descendants {
        stack: elements.iter().rev().map(|e| (e, 0)).collect(),
    }
}

/// Iterator returned by [`descendants`], yielding `(node, depth)`
pub struct Descendants<'a> {
    stack: Vec<(&'a Element, usize)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (&'a Element, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack
                .extend(children.iter().rev().map(|child| (child, depth + 1)));
        }
        Some((node, depth))
    }
}

/// Find a node anywhere in the tree
pub fn find<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    descendants(elements).map(|(node, _)| node).find(|node| node.id == id)
}

/// Find the container that directly holds `id`.
///
/// Walks from the top; top-level nodes have no parent.
pub fn find_parent<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    descendants(elements)
        .map(|(node, _)| node)
        .find(|node| {
            node.children()
                .map(|children| children.iter().any(|child| child.id == id))
                .unwrap_or(false)
        })
}

pub fn contains(elements: &[Element], id: &str) -> bool {
    find(elements, id).is_some()
}

/// Every id in pre-order
pub fn ids(elements: &[Element]) -> Vec<&str> {
    descendants(elements).map(|(node, _)| node.id.as_str()).collect()
}

/// Total number of nodes
pub fn count(elements: &[Element]) -> usize {
    descendants(elements).count()
}

/// Number of levels (0 for an empty sequence)
pub fn depth(elements: &[Element]) -> usize {
    descendants(elements)
        .map(|(_, depth)| depth + 1)
        .max()
        .unwrap_or(0)
}

/// Check the tree invariants on externally supplied elements.
pub fn validate(elements: &[Element]) -> Result<(), TreeError> {
    let roots = descendants(elements)
        .filter(|(node, _)| node.kind == Some(ElementKind::Body))
        .count();

    match roots {
        0 => return Err(TreeError::MissingRoot),
        1 => {}
        n => return Err(TreeError::MultipleRoots(n)),
    }

    let first = elements.first().ok_or(TreeError::MissingRoot)?;
    if !first.is_root() {
        return Err(TreeError::RootNotOutermost);
    }
    if !first.is_container() {
        return Err(TreeError::RootNotContainer);
    }

    let mut seen = HashSet::new();
    for (node, _) in descendants(elements) {
        if node.id.is_empty() {
            return Err(TreeError::EmptyId);
        }
        if !seen.insert(node.id.as_str()) {
            return Err(TreeError::DuplicateId(node.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::LeafPayload;

    fn text(id: &str) -> Element {
        let mut payload = LeafPayload::new();
        payload.insert("innerText".to_string(), id.into());
        Element::leaf(id, ElementKind::Text, "Text", payload)
    }

    fn container(id: &str, children: Vec<Element>) -> Element {
        Element::container(id, ElementKind::Container, "Container").with_children(children)
    }

    /// __body
    /// ├── a (container)
    /// │   ├── a1 (text)
    /// │   └── b (container)
    /// │       └── b1 (text)
    /// └── t (text)
    fn sample() -> Vec<Element> {
        vec![Element::root().with_children(vec![
            container("a", vec![text("a1"), container("b", vec![text("b1")])]),
            text("t"),
        ])]
    }

    #[test]
    fn test_insert_appends_to_root() {
        let edit = insert(&sample(), "__body", &text("new"));
        assert!(edit.matched);
        let root = &edit.elements[0];
        let ids: Vec<_> = root.children().unwrap().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "t", "new"]);
    }

    #[test]
    fn test_insert_nested_preserves_siblings() {
        let before = sample();
        let edit = insert(&before, "b", &text("b2"));
        assert!(edit.matched);

        let b = find(&edit.elements, "b").unwrap();
        let ids: Vec<_> = b.children().unwrap().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);

        assert_eq!(find(&edit.elements, "t"), find(&before, "t"));
        assert_eq!(find(&edit.elements, "a1"), find(&before, "a1"));
    }

    #[test]
    fn test_insert_into_leaf_is_noop() {
        let before = sample();
        let edit = insert(&before, "a1", &text("x"));
        assert!(!edit.matched);
        assert_eq!(edit.elements, before);
    }

    #[test]
    fn test_insert_into_empty_container() {
        let tree = vec![Element::root().with_children(vec![container("empty", vec![])])];
        let edit = insert(&tree, "empty", &text("x"));
        assert!(edit.matched);
        assert_eq!(find_parent(&edit.elements, "x").unwrap().id, "empty");
    }

    #[test]
    fn test_insert_does_not_mutate_input() {
        let before = sample();
        let snapshot = before.clone();
        let _ = insert(&before, "b", &text("b2"));
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_update_replaces_whole_node() {
        let mut replacement = text("b1");
        replacement.name = "Renamed".to_string();
        replacement.styles.insert("color".to_string(), "red".into());

        let edit = update(&sample(), &replacement);
        assert!(edit.matched);
        assert_eq!(find(&edit.elements, "b1"), Some(&replacement));
    }

    #[test]
    fn test_update_container_can_swap_children() {
        let replacement = container("a", vec![text("z")]);
        let edit = update(&sample(), &replacement);
        assert!(edit.matched);
        assert!(!contains(&edit.elements, "a1"));
        assert!(!contains(&edit.elements, "b"));
        assert!(contains(&edit.elements, "z"));
    }

    #[test]
    fn test_update_missing_is_noop() {
        let before = sample();
        let edit = update(&before, &text("ghost"));
        assert!(!edit.matched);
        assert_eq!(edit.elements, before);
    }

    #[test]
    fn test_remove_nested_leaf() {
        let edit = remove(&sample(), "b1");
        assert!(edit.matched);
        let b = find(&edit.elements, "b").unwrap();
        assert_eq!(b.children().unwrap().len(), 0);
        assert!(contains(&edit.elements, "a"));
    }

    #[test]
    fn test_remove_container_drops_descendants() {
        let edit = remove(&sample(), "a");
        assert!(edit.matched);
        for id in ["a", "a1", "b", "b1"] {
            assert!(!contains(&edit.elements, id), "{} should be gone", id);
        }
        assert_eq!(ids(&edit.elements), vec!["__body", "t"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let before = sample();
        let edit = remove(&before, "ghost");
        assert!(!edit.matched);
        assert_eq!(edit.elements, before);
    }

    #[test]
    fn test_descendants_preorder_with_depth() {
        let tree = sample();
        let visited: Vec<_> = descendants(&tree)
            .map(|(node, depth)| (node.id.as_str(), depth))
            .collect();
        assert_eq!(
            visited,
            vec![("__body", 0), ("a", 1), ("a1", 2), ("b", 2), ("b1", 3), ("t", 1)]
        );
    }

    #[test]
    fn test_find_parent() {
        let tree = sample();
        assert_eq!(find_parent(&tree, "b1").unwrap().id, "b");
        assert_eq!(find_parent(&tree, "t").unwrap().id, "__body");
        assert!(find_parent(&tree, "__body").is_none());
        assert!(find_parent(&tree, "ghost").is_none());
    }

    #[test]
    fn test_count_and_depth() {
        assert_eq!(count(&sample()), 6);
        assert_eq!(depth(&sample()), 4);
        assert_eq!(depth(&[]), 0);
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert_eq!(validate(&sample()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let tree = vec![Element::root().with_children(vec![text("x"), text("x")])];
        assert_eq!(validate(&tree), Err(TreeError::DuplicateId("x".to_string())));
    }

    #[test]
    fn test_validate_root_rules() {
        assert_eq!(validate(&[]), Err(TreeError::MissingRoot));
        assert_eq!(validate(&[text("x")]), Err(TreeError::MissingRoot));
        assert_eq!(
            validate(&[text("x"), Element::root()]),
            Err(TreeError::RootNotOutermost)
        );
        assert_eq!(
            validate(&[Element::root().with_children(vec![Element::root()])]),
            Err(TreeError::MultipleRoots(2))
        );

        let mut leaf_root = Element::root();
        leaf_root.content = Content::Leaf(LeafPayload::new());
        assert_eq!(validate(&[leaf_root]), Err(TreeError::RootNotContainer));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let tree = vec![Element::root().with_children(vec![text("")])];
        assert_eq!(validate(&tree), Err(TreeError::EmptyId));
    }
}
