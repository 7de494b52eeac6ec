// src/persist/local.rs
//! SQLite-backed project store.
//!
//! One `projects` table; document and styles are stored as JSON columns in
//! their wire shape, so a row is readable by anything that speaks the
//! project record format. The database file is created on first open and
//! migrated in place.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::info;

use crate::error::{Error, Result};
use crate::persist::ProjectStore;
use crate::types::{Project, ProjectMetadata, ResumeDocument, StyleSettings};

pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    /// Opens (creating if needed) the database at `path` and runs
    /// migrations.
    pub async fn open(path: &std::path::Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(Error::persistence)?;
        }
        let url = format!("sqlite:{}?mode=rwc", path.display());
        let pool = SqlitePool::connect(&url).await.map_err(Error::persistence)?;
        info!("project database opened: {}", path.display());

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// In-memory database, for tests and throwaway sessions. Pinned to a
    /// single connection: every pooled connection to `:memory:` would
    /// otherwise get its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(Error::persistence)?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                template TEXT NOT NULL,
                resume TEXT NOT NULL,
                styles TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(Error::persistence)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_updated_at ON projects(updated_at);")
            .execute(&self.pool)
            .await
            .map_err(Error::persistence)?;

        Ok(())
    }

    fn row_to_project(row: &sqlx::sqlite::SqliteRow) -> Result<Project> {
        let resume_json: String = row.get("resume");
        let styles_json: String = row.get("styles");
        let template: String = row.get("template");

        let resume: ResumeDocument =
            serde_json::from_str(&resume_json).map_err(Error::persistence)?;
        let styles: StyleSettings =
            serde_json::from_str(&styles_json).map_err(Error::persistence)?;

        Ok(Project {
            id: row.get("id"),
            name: row.get("name"),
            template: template.parse()?,
            resume,
            styles,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

impl ProjectStore for LocalStore {
    async fn load_project(&self, id: &str) -> Result<Project> {
        let row = sqlx::query("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::persistence)?;

        match row {
            Some(row) => Self::row_to_project(&row),
            None => Err(Error::not_found(format!("project {id}"))),
        }
    }

    async fn save_project(&self, project: &Project) -> Result<()> {
        let resume = serde_json::to_string(&project.resume).map_err(Error::persistence)?;
        let styles = serde_json::to_string(&project.styles).map_err(Error::persistence)?;

        sqlx::query(
            r#"
            INSERT INTO projects (id, name, template, resume, styles, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                template = excluded.template,
                resume = excluded.resume,
                styles = excluded.styles,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&project.id)
        .bind(&project.name)
        .bind(project.template.as_str())
        .bind(&resume)
        .bind(&styles)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(Error::persistence)?;

        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::persistence)?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(format!("project {id}")));
        }
        Ok(())
    }

    async fn list_metadata(&self) -> Result<Vec<ProjectMetadata>> {
        let rows = sqlx::query(
            "SELECT id, name, template, updated_at FROM projects ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::persistence)?;

        rows.iter()
            .map(|row| {
                let template: String = row.get("template");
                Ok(ProjectMetadata {
                    id: row.get("id"),
                    name: row.get("name"),
                    template: template.parse()?,
                    updated_at: row.get("updated_at"),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SectionField, TemplateKind};

    #[tokio::test]
    async fn test_save_then_load_roundtrips() {
        let store = LocalStore::in_memory().await.unwrap();
        let mut project = Project::new(TemplateKind::Modern, Some("Mine".to_string()));
        project
            .resume
            .set_section_field("summary", SectionField::Content, "line one\nline two");

        store.save_project(&project).await.unwrap();
        let loaded = store.load_project(&project.id).await.unwrap();
        assert_eq!(loaded, project);
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let store = LocalStore::in_memory().await.unwrap();
        let mut project = Project::new(TemplateKind::Classic, None);
        store.save_project(&project).await.unwrap();

        project.name = "Renamed".to_string();
        project.touch();
        store.save_project(&project).await.unwrap();

        let loaded = store.load_project(&project.id).await.unwrap();
        assert_eq!(loaded.name, "Renamed");
        assert_eq!(store.list_metadata().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let store = LocalStore::in_memory().await.unwrap();
        let err = store.load_project("project-nope").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_and_reports_missing() {
        let store = LocalStore::in_memory().await.unwrap();
        let project = Project::new(TemplateKind::Creative, None);
        store.save_project(&project).await.unwrap();

        store.delete_project(&project.id).await.unwrap();
        let err = store.delete_project(&project.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_listing_orders_by_recency() {
        let store = LocalStore::in_memory().await.unwrap();
        let mut older = Project::new(TemplateKind::Classic, Some("older".to_string()));
        let mut newer = Project::new(TemplateKind::Modern, Some("newer".to_string()));
        older.updated_at = 1_000;
        newer.updated_at = 2_000;
        store.save_project(&older).await.unwrap();
        store.save_project(&newer).await.unwrap();

        let listing = store.list_metadata().await.unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].name, "newer");
        assert_eq!(listing[1].name, "older");
        assert_eq!(listing[0].template, TemplateKind::Modern);
    }

    #[tokio::test]
    async fn test_open_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("projects.db");
        let store = LocalStore::open(&path).await.unwrap();
        let project = Project::new(TemplateKind::Classic, None);
        store.save_project(&project).await.unwrap();
        assert!(path.exists());
    }
}
