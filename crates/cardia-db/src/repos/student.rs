//! Student repository.

use cardia_core::entities::{NewStudent, Student, non_blank};
use cardia_core::enums::Mutation;
use cardia_core::errors::require_non_empty;

use crate::Scenario;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, scalar_i64};
use crate::service::CardiaService;
use crate::updates::student::StudentUpdate;

const TABLE: &str = "students";

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        email: row.get::<String>(2)?,
        roll_no: get_opt_string(row, 3)?,
        department: get_opt_string(row, 4)?,
    })
}

impl CardiaService {
    /// Register a student. A duplicate email or roll number is a
    /// `Constraint` error and leaves the table unchanged.
    pub async fn add_student(&self, input: &NewStudent) -> Result<Student, DatabaseError> {
        self.require(Scenario::Registry)?;
        let input = input.normalized()?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO students (name, email, roll_no, department) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    input.name.as_str(),
                    input.email.as_str(),
                    input.roll_no.as_deref(),
                    input.department.as_deref()
                ],
            )
            .await?;

        Ok(Student {
            id: self.db().conn().last_insert_rowid(),
            name: input.name,
            email: input.email,
            roll_no: input.roll_no,
            department: input.department,
        })
    }

    pub async fn get_student(&self, id: i64) -> Result<Student, DatabaseError> {
        self.require(Scenario::Registry)?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, email, roll_no, department FROM students WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound { table: TABLE, id })?;
        row_to_student(&row)
    }

    pub async fn list_students(&self, limit: u32) -> Result<Vec<Student>, DatabaseError> {
        self.require(Scenario::Registry)?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, email, roll_no, department FROM students ORDER BY id LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }
        Ok(students)
    }

    pub async fn count_students(&self) -> Result<i64, DatabaseError> {
        self.require(Scenario::Registry)?;
        scalar_i64(self.db().conn(), "SELECT COUNT(*) FROM students", ()).await
    }

    pub async fn update_student(
        &self,
        id: i64,
        update: StudentUpdate,
    ) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Registry)?;
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(require_non_empty("name", name)?.into());
            idx += 1;
        }
        if let Some(ref email) = update.email {
            sets.push(format!("email = ?{idx}"));
            params.push(require_non_empty("email", email)?.into());
            idx += 1;
        }
        if let Some(ref roll_no) = update.roll_no {
            sets.push(format!("roll_no = ?{idx}"));
            params.push(non_blank(Some(roll_no.as_str())).into());
            idx += 1;
        }
        if let Some(ref department) = update.department {
            sets.push(format!("department = ?{idx}"));
            params.push(non_blank(Some(department.as_str())).into());
            idx += 1;
        }

        if sets.is_empty() {
            return match self.get_student(id).await {
                Ok(_) => Ok(Mutation::Applied),
                Err(DatabaseError::NotFound { .. }) => Ok(Mutation::NotFound),
                Err(error) => Err(error),
            };
        }

        params.push(id.into());
        let sql = format!("UPDATE students SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(Mutation::from_rows(affected))
    }

    /// Remove a student. Fails with a foreign-key `Constraint` error while
    /// the student still has enrollments.
    pub async fn delete_student(&self, id: i64) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Registry)?;
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM students WHERE id = ?1", [id])
            .await?;
        Ok(Mutation::from_rows(affected))
    }
}
