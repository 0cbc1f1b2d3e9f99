// =========================================================================
// FALSIFY-DT: decision tree contract
//
// Each test tries to break one promise of the classifier: determinism,
// purity leaves, the depth bound, gain and entropy bounds, traversal
// correctness and the untrained-model failure.
//
// References:
//   - Breiman et al. (1984) "Classification and Regression Trees"
//   - Quinlan (1986) "Induction of Decision Trees" (entropy criterion)
// =========================================================================

use super::helpers::candidate_thresholds;
use super::*;

fn dp(features: &[f64], label: &str) -> DataPoint {
    DataPoint::new(features.to_vec(), label)
}

/// Small deterministic dataset with overlapping classes.
fn noisy_dataset() -> Vec<DataPoint> {
    let labels = ["red", "green", "blue"];
    (0..30)
        .map(|i| {
            let x = f64::from(i % 7) + f64::from(i % 3) * 0.25;
            let y = f64::from((i * 5) % 11);
            dp(&[x, y, f64::from(i % 2)], labels[(i as usize * 7) % 3])
        })
        .collect()
}

/// Replays the `<=` / `>` walk without using `TreeNode::leaf_for`.
fn replay(node: &TreeNode, features: &[f64]) -> Label {
    match node {
        TreeNode::Leaf(leaf) => leaf.label.clone(),
        TreeNode::Node(n) => {
            if features[n.feature_idx] <= n.threshold {
                replay(&n.left, features)
            } else {
                replay(&n.right, features)
            }
        }
    }
}

/// No internal node may split a pure sample set.
fn assert_no_split_of_pure_partition(node: &TreeNode, data: &[&DataPoint]) {
    if let TreeNode::Node(n) = node {
        let first = &data[0].label;
        assert!(
            data.iter().any(|p| &p.label != first),
            "FALSIFIED DT-PURE: internal node split a pure partition of {first}"
        );
        let (left, right): (Vec<&DataPoint>, Vec<&DataPoint>) = data
            .iter()
            .copied()
            .partition(|p| p.features[n.feature_idx] <= n.threshold);
        assert_no_split_of_pure_partition(&n.left, &left);
        assert_no_split_of_pure_partition(&n.right, &right);
    }
}

/// FALSIFY-DT-001: Deterministic — refitting yields identical predictions
#[test]
fn falsify_dt_001_deterministic() {
    let data = noisy_dataset();

    let mut first = DecisionTree::new().with_max_depth(4);
    first.fit(&data).expect("fit");
    let mut second = DecisionTree::new().with_max_depth(4);
    second.fit(&data).expect("fit");

    assert_eq!(
        first.root(),
        second.root(),
        "FALSIFIED DT-001: two fits produced different trees"
    );
    for point in &data {
        assert_eq!(
            first.predict(&point.features),
            second.predict(&point.features),
            "FALSIFIED DT-001: predictions differ for {:?}",
            point.features
        );
    }
}

/// FALSIFY-DT-002: Pure partitions become single leaves
#[test]
fn falsify_dt_002_pure_partitions_are_leaves() {
    let data = noisy_dataset();
    for max_depth in 1..=6 {
        let mut tree = DecisionTree::new().with_max_depth(max_depth);
        tree.fit(&data).expect("fit");
        let rows: Vec<&DataPoint> = data.iter().collect();
        assert_no_split_of_pure_partition(tree.root().expect("fitted"), &rows);
    }
}

/// FALSIFY-DT-003: Depth bound — longest path has at most max_depth splits
#[test]
fn falsify_dt_003_depth_bound() {
    let data = noisy_dataset();
    for max_depth in 1..=8 {
        let mut tree = DecisionTree::new().with_max_depth(max_depth);
        tree.fit(&data).expect("fit");

        let depth = tree.depth().expect("fitted");
        let n_nodes = tree.n_nodes().expect("fitted");
        assert!(
            depth <= max_depth,
            "FALSIFIED DT-003: depth {depth} > max_depth {max_depth}"
        );
        assert!(
            n_nodes < (1usize << (max_depth + 1)),
            "FALSIFIED DT-003: {n_nodes} nodes exceeds 2^(d+1)-1 for d={max_depth}"
        );
    }
}

/// FALSIFY-DT-004: Gain is never negative and is zero for one-sided splits
#[test]
fn falsify_dt_004_gain_non_negative() {
    let data = noisy_dataset();
    let rows: Vec<&DataPoint> = data.iter().collect();

    for feature_idx in 0..3 {
        for threshold in candidate_thresholds(&rows, feature_idx) {
            let gain = information_gain(&rows, feature_idx, threshold);
            assert!(
                gain >= 0.0,
                "FALSIFIED DT-004: gain {gain} < 0 at feature {feature_idx}, t={threshold}"
            );
        }
        assert_eq!(information_gain(&rows, feature_idx, f64::MAX), 0.0);
        assert_eq!(information_gain(&rows, feature_idx, f64::MIN), 0.0);
    }
}

/// FALSIFY-DT-005: Entropy bounds — 0 <= H <= log2(k), 0 iff pure
#[test]
fn falsify_dt_005_entropy_bounds() {
    let data = noisy_dataset();
    for size in 1..=data.len() {
        let rows: Vec<&DataPoint> = data[..size].iter().collect();
        let mut distinct: Vec<&str> = rows.iter().map(|p| p.label.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();

        let h = entropy(&rows);
        let upper = (distinct.len() as f64).log2();
        assert!(h >= 0.0, "FALSIFIED DT-005: H = {h} < 0");
        assert!(
            h <= upper + 1e-12,
            "FALSIFIED DT-005: H = {h} > log2({}) = {upper}",
            distinct.len()
        );
        assert_eq!(
            h == 0.0,
            distinct.len() == 1,
            "FALSIFIED DT-005: H = {h} with {} labels",
            distinct.len()
        );
    }
}

/// FALSIFY-DT-006: Prediction equals an independent replay of the traversal
#[test]
fn falsify_dt_006_traversal_replay() {
    let data = noisy_dataset();
    let mut tree = DecisionTree::new().with_max_depth(5);
    tree.fit(&data).expect("fit");
    let root = tree.root().expect("fitted");

    for i in 0..50 {
        let query = [f64::from(i) * 0.17, f64::from(i % 13), f64::from(i % 2)];
        assert_eq!(
            tree.predict(&query).expect("fitted"),
            replay(root, &query),
            "FALSIFIED DT-006: traversal mismatch for {query:?}"
        );
    }
}

/// FALSIFY-DT-007: Untrained model never returns a label
#[test]
fn falsify_dt_007_untrained_fails() {
    let tree = DecisionTree::new();
    for query in [&[][..], &[0.0][..], &[1.0, 2.0, 3.0][..]] {
        assert_eq!(
            tree.predict(query),
            Err(ArbolError::UntrainedModel),
            "FALSIFIED DT-007: untrained tree predicted for {query:?}"
        );
    }
}

/// FALSIFY-DT-008: Predictions stay within training labels
#[test]
fn falsify_dt_008_predictions_in_label_set() {
    let data = noisy_dataset();
    let mut tree = DecisionTree::new().with_max_depth(3);
    tree.fit(&data).expect("fit");

    for point in &data {
        let label = tree.predict(&point.features).expect("fitted");
        assert!(
            data.iter().any(|p| label == p.label.as_str()),
            "FALSIFIED DT-008: predicted {label}, not a training label"
        );
    }
}
