use color_eyre::Result;

use super::Db;
use crate::models::Catalog;

/// Sample catalog bundled with the binary: six categories, nineteen questions.
pub const SAMPLE_CATALOG: &str = include_str!("../../seed/trivia.json");

impl Db {
    /// Load a catalog into an empty database in one transaction.
    /// Returns `false` without writing anything when categories already exist.
    pub async fn seed(&self, catalog: &Catalog) -> Result<bool> {
        if self.categories_count().await? > 0 {
            tracing::info!("catalog already present, skipping seed");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for category in &catalog.categories {
            sqlx::query("INSERT INTO categories (id, name) VALUES (?1, ?2)")
                .bind(category.id)
                .bind(&category.name)
                .execute(&mut *tx)
                .await?;
        }

        for q in &catalog.questions {
            sqlx::query(
                "INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(q.id)
            .bind(&q.question)
            .bind(&q.answer)
            .bind(q.category)
            .bind(q.difficulty)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            categories = catalog.categories.len(),
            questions = catalog.questions.len(),
            "catalog seeded"
        );
        Ok(true)
    }
}
