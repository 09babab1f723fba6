//! Course repository.

use cardia_core::entities::{Course, NewCourse};
use cardia_core::enums::Mutation;

use crate::Scenario;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, scalar_i64};
use crate::service::CardiaService;

const TABLE: &str = "courses";

fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        duration: get_opt_string(row, 2)?,
    })
}

impl CardiaService {
    pub async fn add_course(&self, input: &NewCourse) -> Result<Course, DatabaseError> {
        self.require(Scenario::Registry)?;
        let input = input.normalized()?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO courses (name, duration) VALUES (?1, ?2)",
                libsql::params![input.name.as_str(), input.duration.as_deref()],
            )
            .await?;

        Ok(Course {
            id: self.db().conn().last_insert_rowid(),
            name: input.name,
            duration: input.duration,
        })
    }

    pub async fn get_course(&self, id: i64) -> Result<Course, DatabaseError> {
        self.require(Scenario::Registry)?;
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name, duration FROM courses WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound { table: TABLE, id })?;
        row_to_course(&row)
    }

    pub async fn list_courses(&self, limit: u32) -> Result<Vec<Course>, DatabaseError> {
        self.require(Scenario::Registry)?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, duration FROM courses ORDER BY id LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    pub async fn count_courses(&self) -> Result<i64, DatabaseError> {
        self.require(Scenario::Registry)?;
        scalar_i64(self.db().conn(), "SELECT COUNT(*) FROM courses", ()).await
    }

    /// Fails with a foreign-key `Constraint` error while enrollments reference it.
    pub async fn delete_course(&self, id: i64) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Registry)?;
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM courses WHERE id = ?1", [id])
            .await?;
        Ok(Mutation::from_rows(affected))
    }
}
