//! Core tests for config, evaluator, and evaluation reports

use crate::error::EvalError;
use crate::eval::classification::{ConfusionCounts, Label};
use crate::eval::evaluator::*;
use crate::eval::roc::RocPoint;
use std::io::Write;
use std::path::Path;

#[test]
fn test_eval_config_default() {
    let config = EvalConfig::default();
    assert_eq!(config.threshold, 0.5);
    assert_eq!(config.positive_label, 1);
    assert_eq!(config.negative_label, 0);
    assert_eq!(config.class_names, ["negative".to_string(), "positive".to_string()]);
    assert!(!config.parallel);
    assert!(config.validate().is_ok());
}

#[test]
fn test_eval_config_from_yaml_partial() {
    let yaml = "threshold: 0.3\nclass_names: [regular, low-calorie]\n";
    let config = EvalConfig::from_yaml(yaml, Path::new("eval.yaml")).unwrap();

    assert_eq!(config.threshold, 0.3);
    assert_eq!(config.positive_label, 1);
    assert_eq!(config.class_names[1], "low-calorie");
}

#[test]
fn test_eval_config_rejects_unknown_field() {
    let err = EvalConfig::from_yaml("treshold: 0.3\n", Path::new("eval.yaml")).unwrap_err();
    match err {
        EvalError::ConfigParsing { path, message } => {
            assert_eq!(path, Path::new("eval.yaml"));
            assert!(message.contains("treshold"));
        }
        other => panic!("Expected ConfigParsing, got {other:?}"),
    }
}

#[test]
fn test_eval_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "positive_label: -1").unwrap();
    writeln!(file, "negative_label: 1").unwrap();

    let config = EvalConfig::from_file(file.path()).unwrap();
    assert_eq!(config.encoding().decode_one(0, -1).unwrap(), Label::Positive);
}

#[test]
fn test_eval_config_missing_file() {
    let err = EvalConfig::from_file("/nonexistent/eval.yaml").unwrap_err();
    assert!(matches!(err, EvalError::Io { .. }));
}

#[test]
fn test_eval_config_validate_threshold() {
    let config = EvalConfig {
        threshold: f64::NAN,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn test_eval_config_parallel_reflects_build() {
    let config = EvalConfig {
        parallel: true,
        ..Default::default()
    };
    assert_eq!(config.parallel_effective(), cfg!(feature = "parallel"));
    assert_eq!(
        config.parallel_warning().is_some(),
        !cfg!(feature = "parallel")
    );

    let sequential = EvalConfig::default();
    assert!(!sequential.parallel_effective());
    assert!(sequential.parallel_warning().is_none());
}

#[test]
fn test_evaluate_predictions_scenario() {
    let evaluator = ClassificationEvaluator::default();
    let report = evaluator
        .evaluate_predictions(&[1, 1, 0, 0], &[1, 0, 0, 0])
        .unwrap();

    assert_eq!(report.counts, ConfusionCounts::new(1, 0, 2, 1));
    assert_eq!(report.accuracy, Some(0.75));
    assert_eq!(report.precision(), Some(1.0));
    assert_eq!(report.recall(), Some(0.5));
    assert_eq!(report.false_positive_rate(), Some(0.0));
    assert!(report.roc.is_none());
    assert!(report.auc.is_none());
    assert!(report.threshold.is_none());
}

#[test]
fn test_evaluate_predictions_single_class_is_undefined_not_error() {
    let evaluator = ClassificationEvaluator::default();
    let report = evaluator.evaluate_predictions(&[1], &[1]).unwrap();

    assert_eq!(report.recall(), Some(1.0));
    assert_eq!(report.false_positive_rate(), None);
    assert_eq!(report.class(Label::Negative).recall, None);
    assert_eq!(report.macro_avg.recall, None);
}

#[test]
fn test_evaluate_scores_scenario() {
    let evaluator = ClassificationEvaluator::default();
    let report = evaluator
        .evaluate_scores(&[1, 1, 0, 0], &[0.9, 0.6, 0.4, 0.1])
        .unwrap();

    assert_eq!(report.counts, ConfusionCounts::new(2, 0, 2, 0));
    assert_eq!(report.accuracy, Some(1.0));
    assert_eq!(report.threshold, Some(0.5));
    assert_eq!(report.auc, Some(1.0));

    let roc = report.roc.as_ref().unwrap();
    assert_eq!(roc.points().first(), Some(&RocPoint::ORIGIN));
    assert_eq!(roc.points().last(), Some(&RocPoint::new(1.0, 1.0)));
    assert_eq!(roc.len(), 5);
}

#[test]
fn test_evaluate_scores_custom_threshold() {
    let config = EvalConfig {
        threshold: 0.05,
        ..Default::default()
    };
    let evaluator = ClassificationEvaluator::new(config).unwrap();
    let report = evaluator
        .evaluate_scores(&[1, 1, 0, 0], &[0.9, 0.6, 0.4, 0.1])
        .unwrap();

    // Everything is predicted positive
    assert_eq!(report.counts, ConfusionCounts::new(2, 2, 0, 0));
    assert_eq!(report.false_positive_rate(), Some(1.0));
    assert_eq!(report.auc, Some(1.0));
}

#[test]
fn test_evaluate_scores_degenerate_fails_whole_call() {
    let evaluator = ClassificationEvaluator::default();
    let err = evaluator.evaluate_scores(&[0], &[0.2]).unwrap_err();
    assert!(matches!(
        err,
        EvalError::DegenerateLabels {
            class: Label::Negative,
            count: 1
        }
    ));
}

#[test]
fn test_evaluate_scores_invalid_label() {
    let evaluator = ClassificationEvaluator::default();
    let err = evaluator.evaluate_scores(&[1, 2], &[0.2, 0.3]).unwrap_err();
    assert!(matches!(err, EvalError::InvalidLabel { index: 1, value: 2 }));
}

#[test]
fn test_evaluate_predictions_with_scores_keeps_given_predictions() {
    let evaluator = ClassificationEvaluator::default();
    let report = evaluator
        .evaluate_predictions_with_scores(&[1, 1, 0, 0], &[1, 0, 0, 0], &[0.9, 0.6, 0.4, 0.1])
        .unwrap();

    // Thresholding the scores at 0.5 would give tp = 2
    assert_eq!(report.counts, ConfusionCounts::new(1, 0, 2, 1));
    assert_eq!(report.auc, Some(1.0));
    assert!(report.roc.is_some());
    assert!(report.threshold.is_none());
    assert!(!report.to_string().contains("Decision threshold"));
}

#[test]
fn test_evaluate_predictions_with_scores_checks_predictions() {
    let evaluator = ClassificationEvaluator::default();

    let err = evaluator
        .evaluate_predictions_with_scores(&[1, 0], &[7, 0, 0], &[0.9, 0.1])
        .unwrap_err();
    assert!(matches!(err, EvalError::ShapeMismatch { labels: 2, values: 3 }));

    let err = evaluator
        .evaluate_predictions_with_scores(&[1, 0], &[7, 0], &[0.9, 0.1])
        .unwrap_err();
    assert!(matches!(err, EvalError::InvalidLabel { index: 0, value: 7 }));

    let err = evaluator
        .evaluate_predictions_with_scores(&[1, 0], &[1, 0], &[0.9])
        .unwrap_err();
    assert!(matches!(err, EvalError::ShapeMismatch { labels: 2, values: 1 }));
}

#[test]
fn test_roc_only() {
    let evaluator = ClassificationEvaluator::default();
    let (curve, auc) = evaluator.roc(&[1, 0, 1, 0], &[0.5; 4]).unwrap();

    assert_eq!(curve.len(), 2);
    assert_eq!(auc, 0.5);
}

#[test]
fn test_report_display() {
    let config = EvalConfig {
        class_names: ["regular".into(), "low-calorie".into()],
        ..Default::default()
    };
    let evaluator = ClassificationEvaluator::new(config).unwrap();
    let report = evaluator
        .evaluate_scores(&[1, 0, 1, 0], &[0.8, 0.3, 0.4, 0.6])
        .unwrap();
    let text = report.to_string();

    assert!(text.contains("low-calorie"));
    assert!(text.contains("regular"));
    assert!(text.contains("macro avg"));
    assert!(text.contains("Confusion Matrix"));
    assert!(text.contains("Decision threshold: 0.5"));
    assert!(text.contains("AUC: 0.7500"));
}

#[test]
fn test_report_json() {
    let evaluator = ClassificationEvaluator::default();
    let report = evaluator
        .evaluate_scores(&[1, 1, 0, 0], &[0.9, 0.6, 0.4, 0.1])
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["auc"], 1.0);
    assert_eq!(json["counts"]["fn"], 0);
    assert_eq!(json["positive"]["support"], 2);
    assert_eq!(json["roc"]["points"][1]["true_positive_rate"], 0.5);
}

#[test]
fn test_report_json_undefined_is_null() {
    let evaluator = ClassificationEvaluator::default();
    let report = evaluator.evaluate_predictions(&[0], &[0]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert!(json["positive"]["recall"].is_null());
    assert!(json["auc"].is_null());
}

#[test]
fn test_report_yaml() {
    let evaluator = ClassificationEvaluator::default();
    let report = evaluator.evaluate_predictions(&[1, 0], &[1, 1]).unwrap();
    let yaml = report.to_yaml().unwrap();

    assert!(yaml.contains("accuracy: 0.5"));
    assert!(yaml.contains("class_names"));
}

#[test]
fn test_evaluate_is_deterministic() {
    let evaluator = ClassificationEvaluator::default();
    let labels = [1, 0, 0, 1, 1, 0, 1];
    let scores = [0.12, 0.87, 0.33, 0.33, 0.91, 0.05, 0.6];

    let a = evaluator.evaluate_scores(&labels, &scores).unwrap();
    let b = evaluator.evaluate_scores(&labels, &scores).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}
