use super::*;

#[test]
fn siblings_share_parent() {
    let circle = ["Root", "Shape", "Circle"];
    let square = ["Root", "Shape", "Square"];
    assert_eq!(common_ancestor([circle, square]), Ok("Shape"));
}

#[test]
fn single_input_is_itself() {
    assert_eq!(common_ancestor([vec![1, 2, 3]]), Ok(3));
}

#[test]
fn ancestor_and_descendant() {
    let shape = vec!["Root", "Shape"];
    let circle = vec!["Root", "Shape", "Circle"];
    assert_eq!(common_ancestor([shape.clone(), circle.clone()]), Ok("Shape"));
    assert_eq!(common_ancestor([circle, shape]), Ok("Shape"));
}

#[test]
fn identical_inputs() {
    let chain = vec!["Root", "Node", "Expr"];
    assert_eq!(
        common_ancestor([chain.clone(), chain.clone(), chain]),
        Ok("Expr")
    );
}

#[test]
fn three_way_falls_back_to_root() {
    let inputs = [
        vec!["Root", "Shape", "Circle"],
        vec!["Root", "Shape", "Square"],
        vec!["Root", "Color"],
    ];
    assert_eq!(common_ancestor(inputs), Ok("Root"));
}

#[test]
fn empty_input_is_an_error() {
    let inputs: Vec<Vec<u32>> = Vec::new();
    assert_eq!(common_ancestor(inputs), Err(AncestryError::Empty));
}

#[test]
fn disjoint_roots_are_an_error() {
    let inputs = [vec!["A", "B"], vec!["C", "B"]];
    assert_eq!(common_ancestor(inputs), Err(AncestryError::NoCommonRoot));
}

#[test]
fn empty_linearization_has_no_root() {
    let inputs = [vec![], vec!["Root"]];
    assert_eq!(common_ancestor(inputs), Err(AncestryError::NoCommonRoot));
}

#[test]
fn works_over_iterators() {
    let mros = [vec![3, 2, 1, 0], vec![4, 2, 1, 0]];
    let root_first = mros.iter().map(|mro| mro.iter().rev());
    assert_eq!(common_ancestor(root_first), Ok(&2));
}

mod proptest_ancestry {
    use super::super::common_ancestor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn shared_prefix_decides(
            prefix in proptest::collection::vec(0_u32..100, 1..6),
            left in proptest::collection::vec(1000_u32..2000, 0..4),
            right in proptest::collection::vec(2000_u32..3000, 0..4),
        ) {
            let a: Vec<u32> = prefix.iter().chain(&left).copied().collect();
            let b: Vec<u32> = prefix.iter().chain(&right).copied().collect();
            prop_assert_eq!(common_ancestor([a, b]), Ok(*prefix.last().unwrap_or(&0)));
        }
    }
}
