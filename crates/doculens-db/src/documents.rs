use doculens_core::models::{Document, NewDocument, UpdateDocument};
use doculens_core::AppError;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Optional filters for document listings. All present filters are ANDed.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub status: Option<String>,
    pub doc_type: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring match over title and description.
    pub query: Option<String>,
}

/// Repository for the `documents` table.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewDocument) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents
                (title, "type", category, status, description, file_url, file_size, project, extracted_text)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.doc_type)
        .bind(&new.category)
        .bind(&new.status)
        .bind(&new.description)
        .bind(&new.file_url)
        .bind(new.file_size)
        .bind(&new.project)
        .bind(&new.extracted_text)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(document_id = %document.id, "Inserted document record");
        Ok(document)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(document)
    }

    /// Newest-first page of documents matching `filter`.
    pub async fn list(
        &self,
        filter: &DocumentFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Document>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM documents");
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let documents = builder
            .build_query_as::<Document>()
            .fetch_all(&self.pool)
            .await?;
        Ok(documents)
    }

    /// Total number of documents matching `filter`.
    pub async fn count(&self, filter: &DocumentFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM documents");
        Self::apply_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn update(
        &self,
        id: Uuid,
        update: &UpdateDocument,
    ) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            UPDATE documents SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                status = COALESCE($4, status),
                description = COALESCE($5, description),
                project = COALESCE($6, project),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.category)
        .bind(&update.status)
        .bind(&update.description)
        .bind(&update.project)
        .fetch_optional(&self.pool)
        .await?;
        Ok(document)
    }

    /// Delete a record; returns false when no row matched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Most recently uploaded documents.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Document>, AppError> {
        let documents = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(documents)
    }

    /// Document counts grouped by status.
    pub async fn status_counts(&self) -> Result<Vec<(String, i64)>, AppError> {
        let counts = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM documents GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    /// Total document count and summed file size in bytes.
    pub async fn storage_totals(&self) -> Result<(i64, i64), AppError> {
        let totals = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COALESCE(SUM(file_size), 0)::BIGINT FROM documents",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(totals)
    }

    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &DocumentFilter) {
        let mut has_clause = false;

        if let Some(status) = &filter.status {
            separator(builder, &mut has_clause);
            builder.push("status = ").push_bind(status.clone());
        }
        if let Some(doc_type) = &filter.doc_type {
            separator(builder, &mut has_clause);
            builder.push("\"type\" = ").push_bind(doc_type.clone());
        }
        if let Some(category) = &filter.category {
            separator(builder, &mut has_clause);
            builder.push("category = ").push_bind(category.clone());
        }
        if let Some(query) = &filter.query {
            let pattern = format!("%{}%", query);
            separator(builder, &mut has_clause);
            builder
                .push("(title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}

/// Push " WHERE " before the first clause and " AND " before the rest.
fn separator(builder: &mut QueryBuilder<'_, Postgres>, has_clause: &mut bool) {
    builder.push(if *has_clause { " AND " } else { " WHERE " });
    *has_clause = true;
}
