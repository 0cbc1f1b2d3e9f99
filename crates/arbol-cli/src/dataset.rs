//! Built-in bug-severity dataset used by `arbol demo`.

use arbol::DataPoint;

/// Feature names, in vector order.
pub(crate) const FEATURE_NAMES: [&str; 5] = [
    "Users affected",
    "Customer facing",
    "Core functionality",
    "Error reports/hour",
    "Similar bugs (30d)",
];

/// Boolean-valued features (rendered as Yes/No).
const FLAG_FEATURES: [usize; 2] = [1, 2];

/// A bug to triage with the trained model.
pub(crate) struct SampleBug {
    pub(crate) description: &'static str,
    pub(crate) features: [f64; 5],
}

/// Historical bug reports labelled by severity.
pub(crate) fn bug_reports() -> Vec<DataPoint> {
    vec![
        DataPoint::new(vec![1000.0, 1.0, 1.0, 50.0, 2.0], "Critical"),
        DataPoint::new(vec![500.0, 1.0, 1.0, 30.0, 0.0], "Critical"),
        DataPoint::new(vec![100.0, 1.0, 0.0, 5.0, 1.0], "Major"),
        DataPoint::new(vec![50.0, 0.0, 1.0, 2.0, 2.0], "Major"),
        DataPoint::new(vec![10.0, 0.0, 0.0, 1.0, 0.0], "Minor"),
        DataPoint::new(vec![5.0, 0.0, 0.0, 1.0, 1.0], "Minor"),
    ]
}

pub(crate) fn sample_bugs() -> [SampleBug; 3] {
    [
        SampleBug {
            description: "Login system error",
            features: [800.0, 1.0, 1.0, 40.0, 0.0],
        },
        SampleBug {
            description: "UI formatting issue in admin panel",
            features: [20.0, 0.0, 0.0, 1.0, 1.0],
        },
        SampleBug {
            description: "Search results pagination bug",
            features: [150.0, 1.0, 0.0, 8.0, 2.0],
        },
    ]
}

/// Human-readable value of feature `idx`.
pub(crate) fn describe_value(idx: usize, value: f64) -> String {
    if FLAG_FEATURES.contains(&idx) {
        if value > 0.0 { "Yes" } else { "No" }.to_string()
    } else {
        value.to_string()
    }
}
