use super::common::*;

use crate::screening::artifacts::ScalingError;
use crate::screening::domain::{FeatureField, FeatureRecord};
use crate::screening::scaling::FeatureScalerAdapter;

#[test]
fn age_is_restored_and_other_columns_keep_scaler_output() {
    let adapter = FeatureScalerAdapter::new(bundle_with(
        RecordingClassifier::returning(0),
        AffineScaler,
    ));
    let record = FeatureRecord::from_values(SCENARIO_ROW);

    let scaled = adapter.scale(&record).expect("scales");

    assert_eq!(scaled.get(FeatureField::Age), 22.0);
    for field in FeatureField::ordered() {
        if field == FeatureField::Age {
            continue;
        }
        assert_eq!(
            scaled.get(field),
            record.get(field) * 10.0 + 1.0,
            "{field} should carry the scaler output"
        );
    }
}

#[test]
fn demo_scaler_standardizes_everything_but_age() {
    let adapter = FeatureScalerAdapter::new(demo_bundle());
    let record = FeatureRecord::from_values(SCENARIO_ROW);

    let scaled = adapter.scale(&record).expect("scales");

    assert_eq!(scaled.get(FeatureField::Age), 22.0);
    assert!((scaled.get(FeatureField::Gender) - 1.0).abs() < 1e-9);
    assert!((scaled.get(FeatureField::StudyHours) - (8.0 - 6.4) / 3.7).abs() < 1e-9);
}

#[test]
fn truncated_scaler_output_is_a_column_count_error() {
    let adapter = FeatureScalerAdapter::new(bundle_with(
        RecordingClassifier::returning(0),
        TruncatingScaler,
    ));

    match adapter.scale(&FeatureRecord::from_values(SCENARIO_ROW)) {
        Err(ScalingError::ColumnCount { expected, found }) => {
            assert_eq!(expected, FeatureField::COUNT);
            assert_eq!(found, FeatureField::COUNT - 1);
        }
        other => panic!("expected column count error, got {other:?}"),
    }
}

#[test]
fn scaler_errors_propagate() {
    let adapter = FeatureScalerAdapter::new(bundle_with(
        RecordingClassifier::returning(0),
        MisfitScaler,
    ));

    let result = adapter.scale(&FeatureRecord::from_values(SCENARIO_ROW));
    assert!(matches!(
        result,
        Err(ScalingError::ColumnCount { expected: 12, found: 10 })
    ));
}
