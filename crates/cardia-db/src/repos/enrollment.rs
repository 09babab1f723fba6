//! Enrollment repository and the enrollment report join.

use chrono::{NaiveDate, Utc};

use cardia_core::entities::{Enrollment, EnrollmentReport};
use cardia_core::enums::Mutation;

use crate::Scenario;
use crate::error::DatabaseError;
use crate::helpers::{parse_date, scalar_i64};
use crate::service::CardiaService;

fn row_to_report(row: &libsql::Row) -> Result<EnrollmentReport, DatabaseError> {
    Ok(EnrollmentReport {
        id: row.get::<i64>(0)?,
        student_id: row.get::<i64>(1)?,
        student_name: row.get::<String>(2)?,
        course_id: row.get::<i64>(3)?,
        course_name: row.get::<String>(4)?,
        enrollment_date: parse_date(&row.get::<String>(5)?)?,
    })
}

impl CardiaService {
    /// Enroll a student in a course, dated today (UTC) unless `date` is given.
    ///
    /// A missing student or course is a foreign-key `Constraint` error; a
    /// repeated pair is a unique `Constraint` error.
    pub async fn enroll(
        &self,
        student_id: i64,
        course_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<Enrollment, DatabaseError> {
        self.require(Scenario::Registry)?;
        let enrollment_date = date.unwrap_or_else(|| Utc::now().date_naive());
        self.db()
            .conn()
            .execute(
                "INSERT INTO enrollments (student_id, course_id, enrollment_date) VALUES (?1, ?2, ?3)",
                libsql::params![
                    student_id,
                    course_id,
                    enrollment_date.format("%Y-%m-%d").to_string()
                ],
            )
            .await?;

        Ok(Enrollment {
            id: self.db().conn().last_insert_rowid(),
            student_id,
            course_id,
            enrollment_date,
        })
    }

    /// Enrollments joined with student and course names, in id order.
    pub async fn list_enrollments(&self, limit: u32) -> Result<Vec<EnrollmentReport>, DatabaseError> {
        self.require(Scenario::Registry)?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT e.id, e.student_id, s.name, e.course_id, c.name, e.enrollment_date
                 FROM enrollments e
                 JOIN students s ON s.id = e.student_id
                 JOIN courses c ON c.id = e.course_id
                 ORDER BY e.id LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;

        let mut reports = Vec::new();
        while let Some(row) = rows.next().await? {
            reports.push(row_to_report(&row)?);
        }
        Ok(reports)
    }

    pub async fn count_enrollments(&self) -> Result<i64, DatabaseError> {
        self.require(Scenario::Registry)?;
        scalar_i64(self.db().conn(), "SELECT COUNT(*) FROM enrollments", ()).await
    }

    pub async fn delete_enrollment(&self, id: i64) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Registry)?;
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM enrollments WHERE id = ?1", [id])
            .await?;
        Ok(Mutation::from_rows(affected))
    }
}
