use async_trait::async_trait;
use cite_core::model::{CitationFormatRecord, CitationSettings};

use crate::repository::{SettingsRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{map_cite_format_row, position_to_i64};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl SettingsRepository for SqliteRepository {
    async fn load_settings(&self) -> Result<CitationSettings, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT name, format, command, template, csl_style, brackets
            FROM cite_formats
            ORDER BY position ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(conn)?;

        let formats = rows
            .iter()
            .map(map_cite_format_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CitationSettings::new(formats))
    }

    async fn save_settings(&self, settings: &CitationSettings) -> Result<(), StorageError> {
        let mut tx = self.pool().begin().await.map_err(conn)?;

        sqlx::query("DELETE FROM cite_formats")
            .execute(&mut *tx)
            .await
            .map_err(conn)?;

        for (position, format) in settings.cite_formats().iter().enumerate() {
            let record = CitationFormatRecord::from(format.clone());
            sqlx::query(
                r"
                INSERT INTO cite_formats (
                    position,
                    name,
                    format,
                    command,
                    template,
                    csl_style,
                    brackets
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
            )
            .bind(position_to_i64(position)?)
            .bind(record.name.as_str())
            .bind(record.format.value())
            .bind(record.command.as_deref())
            .bind(record.template.as_deref())
            .bind(record.csl_style.as_deref())
            .bind(record.brackets.map(i64::from))
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        }

        tx.commit().await.map_err(conn)?;
        tracing::debug!(count = settings.cite_formats().len(), "saved citation formats");
        Ok(())
    }
}
