use mdf_kernel::dom::{Document, NodeId};
use mdf_kernel::markup::{parse_document, render};
use proptest::prelude::*;

/// Builds a tree where node `i + 1` is appended under an earlier node picked by `picks[i]`.
fn build(picks: &[usize]) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new();
    let mut ids = vec![doc.root()];
    for (i, pick) in picks.iter().enumerate() {
        let id = doc.create_element(if i % 3 == 0 { "textarea" } else { "div" });
        let parent = ids[pick % ids.len()];
        doc.append_child(parent, id).unwrap();
        ids.push(id);
    }
    (doc, ids)
}

fn preorder(doc: &Document, id: NodeId, out: &mut Vec<NodeId>) {
    out.push(id);
    for child in doc.children(id) {
        preorder(doc, *child, out);
    }
}

proptest! {
    #[test]
    fn descendants_is_a_preorder_walk(picks in prop::collection::vec(any::<usize>(), 0..40)) {
        let (doc, ids) = build(&picks);
        for id in ids {
            let mut expected = Vec::new();
            preorder(&doc, id, &mut expected);
            prop_assert_eq!(doc.descendants(id).collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn removal_kills_exactly_the_subtree(
        picks in prop::collection::vec(any::<usize>(), 1..40),
        victim in any::<usize>(),
    ) {
        let (mut doc, ids) = build(&picks);
        let victim = ids[1 + victim % (ids.len() - 1)];
        let doomed: Vec<NodeId> = doc.descendants(victim).collect();

        prop_assert_eq!(doc.remove(victim).unwrap(), doomed.len());
        for id in &ids {
            prop_assert_eq!(doc.contains(*id), !doomed.contains(id));
            if doc.contains(*id) {
                prop_assert!(doc.is_attached(*id));
            }
        }
    }

    #[test]
    fn rendered_markup_reparses_to_the_same_markup(picks in prop::collection::vec(any::<usize>(), 0..30)) {
        let (doc, _) = build(&picks);
        let html = render(&doc);
        let reparsed = parse_document(&html).unwrap();
        prop_assert_eq!(render(&reparsed), html);
    }
}
