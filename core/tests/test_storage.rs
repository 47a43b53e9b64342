// core/tests/test_storage.rs
use std::fs;
use std::path::PathBuf;

use workout_core::{load_packages, parse_packages, Package, WorkoutError};

fn tmp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("workout_core_{}_{}", std::process::id(), name))
}

#[test]
fn test_load_packages_from_file() {
    let path = tmp_path("packages.json");
    fs::write(
        &path,
        r#"[
            {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]},
            {"workout_type": "RUN", "data": [15000, 1.5, 75.2]}
        ]"#,
    )
    .unwrap();

    let packages = load_packages(&path).expect("load_packages failed");
    let _ = fs::remove_file(&path);

    assert_eq!(
        packages,
        vec![
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 1.5, 75.2]),
        ]
    );
}

#[test]
fn test_malformed_input_reports_path() {
    let err = parse_packages(r#"[{"workout_type": "RUN", "data": [1, "x", 3]}]"#).unwrap_err();
    match &err {
        WorkoutError::Json(inner) => {
            let path = inner.path().to_string();
            assert!(path.contains("data"), "path was {path}");
        }
        other => panic!("expected Json error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("malformed session input at"));
}

#[test]
fn test_missing_file() {
    let err = load_packages(tmp_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, WorkoutError::Io(_)));
    assert_eq!(err.kind(), "io");
}

#[test]
fn test_trailing_content_rejected() {
    // to lister etter hverandre (f.eks. konkatenert eller halvskrevet fil)
    let err = parse_packages(
        r#"[{"workout_type":"RUN","data":[15000,1,75]}] [{"workout_type":"XYZ""#,
    )
    .unwrap_err();
    assert!(matches!(err, WorkoutError::TrailingInput(_)), "got {err:?}");
    assert_eq!(err.kind(), "json");

    // etterfølgende mellomrom er greit
    assert_eq!(parse_packages("[]\n  \n").unwrap().len(), 0);
}

#[test]
fn test_trailing_content_fails_load() {
    let path = tmp_path("trailing.json");
    fs::write(&path, r#"[{"workout_type": "RUN", "data": [15000, 1, 75]}] garbage"#).unwrap();
    let result = load_packages(&path);
    let _ = fs::remove_file(&path);
    assert!(matches!(result, Err(WorkoutError::TrailingInput(_))));
}

#[test]
fn test_empty_list() {
    assert!(parse_packages("[]").unwrap().is_empty());
}
