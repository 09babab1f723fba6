use cardia_core::entities::{Features, NewCourse, NewStudent, Observation};
use cardia_core::enums::Diagnosis;
use cardia_db::error::DatabaseError;
use cardia_db::{CardiaService, ExportTable, Scenario};
use pretty_assertions::assert_eq;

async fn clinical() -> CardiaService {
    CardiaService::new_local(":memory:", Scenario::Clinical)
        .await
        .unwrap()
}

fn rows() -> Vec<Observation> {
    vec![
        Observation::new(
            Features {
                age: 63,
                sex: 1,
                cp: 3,
                trestbps: 145,
                chol: 233,
                fbs: 1,
                thalach: 150,
                oldpeak: 2.3,
                thal: 1,
                ..Features::default()
            },
            Diagnosis::Disease,
        ),
        Observation::new(
            Features {
                age: 41,
                oldpeak: 0.1,
                ..Features::default()
            },
            Diagnosis::NoDisease,
        ),
    ]
}

async fn export(svc: &CardiaService, table: ExportTable) -> String {
    let mut buf = Vec::new();
    svc.export_table(table, &mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn heart_data_export_has_header_and_exact_values() {
    let svc = clinical().await;
    svc.bulk_load(&rows()).await.unwrap();
    let csv = export(&svc, ExportTable::HeartData).await;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal,target"
    );
    assert_eq!(lines.next().unwrap(), "1,63,1,3,145,233,1,0,150,0,2.3,0,0,1,1");
    assert_eq!(lines.next().unwrap(), "2,41,0,0,120,150,0,0,140,0,0.1,0,0,1,0");
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn clinical_roundtrip_reproduces_rows() {
    let source = clinical().await;
    source.bulk_load(&rows()).await.unwrap();
    source
        .save_prediction("Ada, Countess", &Features::default(), Diagnosis::Disease)
        .await
        .unwrap();
    let heart = export(&source, ExportTable::HeartData).await;
    let predictions = export(&source, ExportTable::Predictions).await;

    let target = clinical().await;
    let version = target.dataset_version().await.unwrap();
    assert_eq!(target.import_table(ExportTable::HeartData, heart.as_bytes()).await.unwrap(), 2);
    assert_eq!(
        target
            .import_table(ExportTable::Predictions, predictions.as_bytes())
            .await
            .unwrap(),
        1
    );

    assert_eq!(export(&target, ExportTable::HeartData).await, heart);
    assert_eq!(export(&target, ExportTable::Predictions).await, predictions);
    assert_eq!(target.training_rows().await.unwrap(), rows());
    assert!(target.dataset_version().await.unwrap() > version);
    assert_eq!(
        target.list_predictions(None, 10).await.unwrap(),
        source.list_predictions(None, 10).await.unwrap()
    );
}

#[tokio::test]
async fn registry_roundtrip_through_files() {
    let source = CardiaService::new_local(":memory:", Scenario::Registry)
        .await
        .unwrap();
    let student = source
        .add_student(&NewStudent {
            name: "Grace".into(),
            email: "grace@example.edu".into(),
            roll_no: None,
            department: Some("Math".into()),
        })
        .await
        .unwrap();
    let course = source
        .add_course(&NewCourse {
            name: "Rust".into(),
            duration: None,
        })
        .await
        .unwrap();
    source.enroll(student.id, course.id, None).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let exported = source.export_all(dir.path()).await.unwrap();
    assert_eq!(
        exported.iter().map(|e| e.table).collect::<Vec<_>>(),
        vec![ExportTable::Students, ExportTable::Courses, ExportTable::Enrollments]
    );

    let target = CardiaService::new_local(":memory:", Scenario::Registry)
        .await
        .unwrap();
    for file in &exported {
        let reader = std::fs::File::open(&file.path).unwrap();
        assert_eq!(target.import_table(file.table, reader).await.unwrap(), file.rows);
    }
    assert_eq!(target.get_student(student.id).await.unwrap(), student);
    assert_eq!(
        target.list_enrollments(10).await.unwrap(),
        source.list_enrollments(10).await.unwrap()
    );
}

#[tokio::test]
async fn import_rejects_a_foreign_header_and_keeps_rows() {
    let svc = clinical().await;
    svc.bulk_load(&rows()).await.unwrap();
    let err = svc
        .import_table(ExportTable::HeartData, "age,sex\n1,0\n".as_bytes())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Import { line: 1, .. }));
    assert_eq!(svc.count_observations().await.unwrap(), 2);
}

#[tokio::test]
async fn import_is_all_or_nothing() {
    let svc = clinical().await;
    svc.bulk_load(&rows()).await.unwrap();
    let mut csv = export(&svc, ExportTable::HeartData).await;
    csv.push_str("3,999,0,0,120,150,0,0,140,0,1,0,0,1,0\n");

    let err = svc
        .import_table(ExportTable::HeartData, csv.as_bytes())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Constraint { .. }));
    assert_eq!(svc.count_observations().await.unwrap(), 2);
}

#[tokio::test]
async fn registry_tables_are_not_exported_from_the_clinical_store() {
    let svc = clinical().await;
    let mut buf = Vec::new();
    assert!(matches!(
        svc.export_table(ExportTable::Students, &mut buf).await,
        Err(DatabaseError::InvalidState(_))
    ));
}

#[tokio::test]
async fn import_rejects_an_unreadable_timestamp_and_keeps_rows() {
    let svc = clinical().await;
    svc.save_prediction("Ada", &Features::default(), Diagnosis::Disease)
        .await
        .unwrap();
    let mut csv = export(&svc, ExportTable::Predictions).await;
    csv.push_str("2,Grace,30,0,0,120,150,0,0,140,0,1,0,0,1,0,yesterday\n");

    let err = svc
        .import_table(ExportTable::Predictions, csv.as_bytes())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Import { line: 3, .. }), "{err:?}");
    assert_eq!(err.category(), cardia_core::errors::ErrorCategory::Validation);
    assert_eq!(svc.list_predictions(None, 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn import_rejects_a_non_iso_enrollment_date() {
    let svc = CardiaService::new_local(":memory:", Scenario::Registry)
        .await
        .unwrap();
    let students = "id,name,email,roll_no,department\n1,Grace,grace@example.edu,,\n";
    let courses = "id,name,duration\n1,Rust,\n";
    svc.import_table(ExportTable::Students, students.as_bytes())
        .await
        .unwrap();
    svc.import_table(ExportTable::Courses, courses.as_bytes())
        .await
        .unwrap();

    let enrollments = "id,student_id,course_id,enrollment_date\n1,1,1,01/09/2024\n";
    let err = svc
        .import_table(ExportTable::Enrollments, enrollments.as_bytes())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Import { line: 2, .. }), "{err:?}");
    assert!(svc.list_enrollments(10).await.unwrap().is_empty());
}
