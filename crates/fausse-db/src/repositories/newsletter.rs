//! PostgreSQL implementation of NewsletterRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use fausse_core::entities::NewsletterSubscriber;
use fausse_core::error::DomainError;
use fausse_core::traits::{NewsletterRepository, RepoResult};

use crate::models::NewsletterSubscriberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of NewsletterRepository
#[derive(Clone)]
pub struct PgNewsletterRepository {
    pool: PgPool,
}

impl PgNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Mirror the subscription state on the customer with the same email, if any
async fn sync_customer_flag(
    conn: &mut PgConnection,
    email: &str,
    subscribed: bool,
) -> RepoResult<()> {
    sqlx::query(
        r"
        UPDATE customers
        SET newsletter_signup = $2, updated_at = NOW()
        WHERE LOWER(email) = LOWER($1)
        ",
    )
    .bind(email)
    .bind(subscribed)
    .execute(conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

#[async_trait]
impl NewsletterRepository for PgNewsletterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<NewsletterSubscriber>> {
        let result = sqlx::query_as::<_, NewsletterSubscriberModel>(
            r"
            SELECT id, email, is_active, created_at, updated_at
            FROM newsletter_subscribers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(NewsletterSubscriber::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<NewsletterSubscriber>> {
        let result = sqlx::query_as::<_, NewsletterSubscriberModel>(
            r"
            SELECT id, email, is_active, created_at, updated_at
            FROM newsletter_subscribers
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(NewsletterSubscriber::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<NewsletterSubscriber>> {
        let rows = sqlx::query_as::<_, NewsletterSubscriberModel>(
            r"
            SELECT id, email, is_active, created_at, updated_at
            FROM newsletter_subscribers
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(NewsletterSubscriber::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, email: &str) -> RepoResult<NewsletterSubscriber> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, NewsletterSubscriberModel>(
            r"
            INSERT INTO newsletter_subscribers (email, is_active)
            VALUES ($1, TRUE)
            RETURNING id, email, is_active, created_at, updated_at
            ",
        )
        .bind(email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadySubscribed))?;

        sync_customer_flag(&mut *tx, email, true).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(NewsletterSubscriber::from(row))
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<NewsletterSubscriber> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, NewsletterSubscriberModel>(
            r"
            UPDATE newsletter_subscribers
            SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, is_active, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(active)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::SubscriberNotFound(id))?;

        sync_customer_flag(&mut *tx, &row.email, active).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(NewsletterSubscriber::from(row))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM newsletter_subscribers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
