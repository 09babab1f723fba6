use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

const HEADER: &str = "age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal,target";

/// Two well separated groups, alternating labels.
fn cohort_csv(rows: usize) -> String {
    let mut lines = vec![HEADER.to_string()];
    for i in 0..rows {
        let line = if i % 2 == 0 {
            format!("{},1,2,150,280,0,1,110,1,3.0,1,2,3,1", 60 + i % 10)
        } else {
            format!("{},0,0,120,200,0,0,170,0,0.5,2,0,2,0", 40 + i % 10)
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn cardia(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cardia"))
        .current_dir(dir)
        .env_remove("CARDIA_LOG")
        .args(args)
        .output()
        .expect("binary should run")
}

fn json(dir: &Path, args: &[&str]) -> Value {
    let mut full = args.to_vec();
    full.extend(["--format", "raw"]);
    let out = cardia(dir, &full);
    assert!(
        out.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout should be json")
}

fn project() -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("heart.csv"), cohort_csv(40)).unwrap();
    json(temp.path(), &["init"]);
    temp
}

#[test]
fn commands_outside_a_project_point_at_init() {
    let temp = tempfile::tempdir().unwrap();
    let out = cardia(temp.path(), &["train"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("cardia error: "), "{stderr}");
    assert!(stderr.contains("cardia init"), "{stderr}");
}

#[test]
fn import_predict_save_and_list() {
    let temp = project();
    let dir = temp.path();

    let import = json(dir, &["import", "heart.csv"]);
    assert_eq!(import["imported"], 40);
    assert_eq!(import["preview"].as_array().unwrap().len(), 5);
    assert!(import["training"]["test_accuracy"].as_f64().unwrap() >= 0.9);

    let predict = json(
        dir,
        &[
            "predict", "--age", "66", "--sex", "1", "--cp", "2", "--trestbps", "150", "--chol",
            "280", "--restecg", "1", "--thalach", "110", "--exang", "1", "--oldpeak", "3.0",
            "--slope", "1", "--ca", "2", "--thal", "3", "--save", "--name", "Ada",
        ],
    );
    assert_eq!(predict["predicted"], "disease");
    assert_eq!(predict["message"], "Ada has heart disease.");
    assert_eq!(predict["saved"]["name"], "Ada");

    let listed = json(dir, &["prediction", "list", "--label", "disease"]);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["age"], 66);
}

#[test]
fn filter_and_count_read_the_imported_rows() {
    let temp = project();
    let dir = temp.path();
    json(dir, &["import", "heart.csv"]);

    assert_eq!(json(dir, &["data", "count"])["count"], 40);
    let old = json(dir, &["data", "filter", "age", ">=", "60", "--limit", "100"]);
    assert_eq!(old.as_array().unwrap().len(), 20);
    assert!(old.as_array().unwrap().iter().all(|row| row["target"] == "disease"));
}

#[test]
fn invalid_form_value_is_reported_as_invalid_input() {
    let temp = project();
    let dir = temp.path();
    json(dir, &["import", "heart.csv"]);

    let out = cardia(dir, &["predict", "--age", "500"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("cardia error: invalid input: "), "{stderr}");
}

#[test]
fn duplicate_student_is_a_constraint_violation() {
    let temp = project();
    let dir = temp.path();

    let args = ["student", "add", "--name", "Ada", "--email", "ada@example.com"];
    json(dir, &args);
    let out = cardia(dir, &args);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("cardia error: constraint violation: "), "{stderr}");

    let students = json(dir, &["student", "list"]);
    assert_eq!(students.as_array().unwrap().len(), 1);

    let missing = json(dir, &["student", "delete", "99"]);
    assert_eq!(missing["outcome"], "not_found");
}

#[test]
fn export_then_import_table_restores_rows() {
    let temp = project();
    let dir = temp.path();
    json(dir, &["course", "add", "--name", "Cardiology", "--duration", "6 weeks"]);

    let exported = json(dir, &["export", "out", "--table", "courses"]);
    assert_eq!(exported[0]["rows"], 1);

    json(dir, &["course", "delete", "1"]);
    assert_eq!(json(dir, &["course", "list"]).as_array().unwrap().len(), 0);

    let imported = json(dir, &["import-table", "courses", "out/courses.csv"]);
    assert_eq!(imported["rows"], 1);
    let courses = json(dir, &["course", "list"]);
    assert_eq!(courses[0]["name"], "Cardiology");
    assert_eq!(courses[0]["duration"], "6 weeks");
}
