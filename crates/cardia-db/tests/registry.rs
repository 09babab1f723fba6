use cardia_core::entities::{NewCourse, NewStudent};
use cardia_core::enums::Mutation;
use cardia_db::error::DatabaseError;
use cardia_db::updates::student::StudentUpdateBuilder;
use cardia_db::{CardiaService, ConstraintKind, Scenario};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

async fn registry() -> CardiaService {
    CardiaService::new_local(":memory:", Scenario::Registry)
        .await
        .unwrap()
}

fn student(name: &str, email: &str, roll_no: Option<&str>) -> NewStudent {
    NewStudent {
        name: name.into(),
        email: email.into(),
        roll_no: roll_no.map(String::from),
        department: Some("Physics".into()),
    }
}

#[tokio::test]
async fn duplicate_email_is_a_unique_violation_and_count_is_unchanged() {
    let svc = registry().await;
    svc.add_student(&student("Grace", "grace@example.edu", Some("R1")))
        .await
        .unwrap();
    let before = svc.count_students().await.unwrap();

    let err = svc
        .add_student(&student("Grace H.", "grace@example.edu", Some("R2")))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DatabaseError::Constraint {
            kind: ConstraintKind::Unique,
            ..
        }
    ));
    assert_eq!(svc.count_students().await.unwrap(), before);
}

#[tokio::test]
async fn duplicate_roll_number_is_rejected_but_missing_ones_are_not() {
    let svc = registry().await;
    svc.add_student(&student("A", "a@example.edu", Some("R1"))).await.unwrap();
    assert!(svc.add_student(&student("B", "b@example.edu", Some("R1"))).await.is_err());

    svc.add_student(&student("C", "c@example.edu", None)).await.unwrap();
    svc.add_student(&student("D", "d@example.edu", Some("  "))).await.unwrap();
    assert_eq!(svc.count_students().await.unwrap(), 3);
}

#[tokio::test]
async fn blank_required_fields_are_validation_errors() {
    let svc = registry().await;
    let err = svc
        .add_student(&student("  ", "x@example.edu", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Validation(_)));
    assert_eq!(svc.count_students().await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_a_missing_id_is_not_found_and_changes_nothing() {
    let svc = registry().await;
    svc.add_student(&student("A", "a@example.edu", None)).await.unwrap();

    assert_eq!(svc.delete_student(42).await.unwrap(), Mutation::NotFound);
    assert_eq!(svc.count_students().await.unwrap(), 1);
    assert!(matches!(
        svc.get_student(42).await,
        Err(DatabaseError::NotFound { table: "students", id: 42 })
    ));
}

#[tokio::test]
async fn update_student_fields() {
    let svc = registry().await;
    let added = svc
        .add_student(&student("A", "a@example.edu", Some("R1")))
        .await
        .unwrap();

    let update = StudentUpdateBuilder::new()
        .department("Chemistry")
        .roll_no("")
        .build();
    assert_eq!(svc.update_student(added.id, update).await.unwrap(), Mutation::Applied);

    let reloaded = svc.get_student(added.id).await.unwrap();
    assert_eq!(reloaded.department.as_deref(), Some("Chemistry"));
    assert_eq!(reloaded.roll_no, None);

    let missing = StudentUpdateBuilder::new().name("Nobody").build();
    assert_eq!(svc.update_student(999, missing).await.unwrap(), Mutation::NotFound);
}

#[tokio::test]
async fn enrollment_report_joins_names() {
    let svc = registry().await;
    let grace = svc
        .add_student(&student("Grace", "grace@example.edu", None))
        .await
        .unwrap();
    let rust = svc
        .add_course(&NewCourse {
            name: "Rust".into(),
            duration: Some("6 weeks".into()),
        })
        .await
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let enrollment = svc.enroll(grace.id, rust.id, Some(date)).await.unwrap();

    let reports = svc.list_enrollments(10).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id, enrollment.id);
    assert_eq!(reports[0].student_name, "Grace");
    assert_eq!(reports[0].course_name, "Rust");
    assert_eq!(reports[0].enrollment_date, date);
}

#[tokio::test]
async fn enrollment_constraints() {
    let svc = registry().await;
    let grace = svc
        .add_student(&student("Grace", "grace@example.edu", None))
        .await
        .unwrap();
    let course = svc
        .add_course(&NewCourse {
            name: "Databases".into(),
            duration: None,
        })
        .await
        .unwrap();

    let missing_course = svc.enroll(grace.id, 999, None).await.unwrap_err();
    assert!(matches!(
        missing_course,
        DatabaseError::Constraint {
            kind: ConstraintKind::ForeignKey,
            ..
        }
    ));

    svc.enroll(grace.id, course.id, None).await.unwrap();
    let repeated = svc.enroll(grace.id, course.id, None).await.unwrap_err();
    assert!(matches!(
        repeated,
        DatabaseError::Constraint {
            kind: ConstraintKind::Unique,
            ..
        }
    ));
    assert_eq!(svc.count_enrollments().await.unwrap(), 1);

    let referenced = svc.delete_student(grace.id).await.unwrap_err();
    assert!(matches!(
        referenced,
        DatabaseError::Constraint {
            kind: ConstraintKind::ForeignKey,
            ..
        }
    ));
    assert_eq!(svc.count_students().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_enrollment_then_course() {
    let svc = registry().await;
    let grace = svc
        .add_student(&student("Grace", "grace@example.edu", None))
        .await
        .unwrap();
    let course = svc
        .add_course(&NewCourse {
            name: "Databases".into(),
            duration: None,
        })
        .await
        .unwrap();
    let enrollment = svc.enroll(grace.id, course.id, None).await.unwrap();
    assert_eq!(svc.get_course(course.id).await.unwrap(), course);
    assert_eq!(svc.count_courses().await.unwrap(), 1);

    assert_eq!(svc.delete_enrollment(enrollment.id).await.unwrap(), Mutation::Applied);
    assert_eq!(svc.delete_course(course.id).await.unwrap(), Mutation::Applied);
    assert_eq!(svc.delete_course(course.id).await.unwrap(), Mutation::NotFound);
    assert!(svc.list_courses(10).await.unwrap().is_empty());
    assert!(matches!(
        svc.get_course(course.id).await,
        Err(DatabaseError::NotFound { table: "courses", .. })
    ));
}
