//! SQLite implementation of LedgerStore.
//!
//! Normalized three-table schema: `persons`, `ledger_groups` and `payments`.
//! Payments reference both parents through foreign keys and disappear with
//! their group. Amounts are stored as integer cents.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::foundation::{GroupId, Money, PaymentId, PersonId};
use crate::domain::ledger::{
    validate_name, Group, LedgerError, NewPayment, PaymentEntry, PaymentRecord, PaymentsByGroup,
    Person,
};
use crate::ports::{LedgerStore, LedgerStoreFactory};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS persons (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ledger_groups (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS payments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        person_id INTEGER NOT NULL REFERENCES persons(id) ON DELETE CASCADE,
        group_id INTEGER NOT NULL REFERENCES ledger_groups(id) ON DELETE CASCADE,
        amount_cents INTEGER NOT NULL CHECK (amount_cents >= 0),
        time TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_payments_group_time ON payments(group_id, time)",
];

/// SQLite implementation of LedgerStore.
#[derive(Clone)]
pub struct SqliteLedgerStore {
    pool: SqlitePool,
}

impl SqliteLedgerStore {
    /// Creates a store over an already migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>, LedgerError> {
        self.pool.begin().await.map_err(|e| {
            LedgerError::storage(format!("Failed to begin transaction: {}", e))
        })
    }
}

fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> LedgerError {
    move |e| {
        error!("{}: {}", context, e);
        LedgerError::storage(format!("{}: {}", context, e))
    }
}

async fn commit(tx: Transaction<'static, Sqlite>) -> Result<(), LedgerError> {
    tx.commit()
        .await
        .map_err(db_error("Failed to commit transaction"))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

#[async_trait]
impl LedgerStore for SqliteLedgerStore {
    async fn create_group(&self, name: &str) -> Result<Group, LedgerError> {
        validate_name("name", name)?;

        let mut tx = self.begin().await?;

        let result = sqlx::query("INSERT INTO ledger_groups (name) VALUES (?)")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    LedgerError::duplicate_group(name)
                } else {
                    db_error("Failed to insert group")(e)
                }
            })?;

        commit(tx).await?;

        let group = Group {
            id: GroupId::new(result.last_insert_rowid()),
            name: name.to_string(),
        };
        info!(group_id = %group.id, name = %group.name, "Group created");
        Ok(group)
    }

    async fn get_group(&self, id: GroupId) -> Result<Group, LedgerError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM ledger_groups WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("Failed to fetch group"))?;

        row.map(|(id, name)| Group {
            id: GroupId::new(id),
            name,
        })
        .ok_or(LedgerError::GroupNotFound(id))
    }

    async fn find_group_by_name(&self, name: &str) -> Result<Option<Group>, LedgerError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM ledger_groups WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("Failed to fetch group"))?;

        Ok(row.map(|(id, name)| Group {
            id: GroupId::new(id),
            name,
        }))
    }

    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM ledger_groups ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("Failed to list groups"))?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Group {
                id: GroupId::new(id),
                name,
            })
            .collect())
    }

    async fn rename_group(&self, id: GroupId, new_name: &str) -> Result<Group, LedgerError> {
        validate_name("name", new_name)?;

        let mut tx = self.begin().await?;

        let result = sqlx::query("UPDATE ledger_groups SET name = ? WHERE id = ?")
            .bind(new_name)
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    LedgerError::duplicate_group(new_name)
                } else {
                    db_error("Failed to rename group")(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::GroupNotFound(id));
        }

        commit(tx).await?;

        info!(group_id = %id, name = %new_name, "Group renamed");
        Ok(Group {
            id,
            name: new_name.to_string(),
        })
    }

    async fn remove_group(&self, id: GroupId) -> Result<(), LedgerError> {
        let mut tx = self.begin().await?;

        let result = sqlx::query("DELETE FROM ledger_groups WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete group"))?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::GroupNotFound(id));
        }

        commit(tx).await?;

        info!(group_id = %id, "Group removed");
        Ok(())
    }

    async fn record_payment(&self, payment: &NewPayment) -> Result<PaymentRecord, LedgerError> {
        let mut tx = self.begin().await?;

        sqlx::query("INSERT OR IGNORE INTO persons (name) VALUES (?)")
            .bind(payment.person())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to upsert person"))?;

        sqlx::query("INSERT OR IGNORE INTO ledger_groups (name) VALUES (?)")
            .bind(payment.group())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to upsert group"))?;

        let (person_id,): (i64,) = sqlx::query_as("SELECT id FROM persons WHERE name = ?")
            .bind(payment.person())
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("Failed to resolve person"))?;

        let (group_id,): (i64,) = sqlx::query_as("SELECT id FROM ledger_groups WHERE name = ?")
            .bind(payment.group())
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("Failed to resolve group"))?;

        let result = sqlx::query(
            r#"
            INSERT INTO payments (person_id, group_id, amount_cents, time)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(person_id)
        .bind(group_id)
        .bind(payment.amount().cents())
        .bind(payment.time())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to insert payment"))?;

        commit(tx).await?;

        let record = PaymentRecord {
            id: PaymentId::new(result.last_insert_rowid()),
            person: payment.person().to_string(),
            group: payment.group().to_string(),
            amount: payment.amount(),
            time: payment.time().to_string(),
        };
        info!(
            payment_id = %record.id,
            person = %record.person,
            group = %record.group,
            amount = %record.amount,
            "Payment recorded"
        );
        Ok(record)
    }

    async fn remove_payment(&self, id: PaymentId) -> Result<(), LedgerError> {
        let mut tx = self.begin().await?;

        let result = sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete payment"))?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::PaymentNotFound(id));
        }

        commit(tx).await?;

        info!(payment_id = %id, "Payment removed");
        Ok(())
    }

    async fn list_persons(&self) -> Result<Vec<Person>, LedgerError> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM persons ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list persons"))?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Person {
                id: PersonId::new(id),
                name,
            })
            .collect())
    }

    async fn list_all_payments(&self) -> Result<PaymentsByGroup, LedgerError> {
        let rows: Vec<(i64, String, String, i64, String)> = sqlx::query_as(
            r#"
            SELECT pm.id, g.name, p.name, pm.amount_cents, pm.time
            FROM payments pm
            JOIN persons p ON pm.person_id = p.id
            JOIN ledger_groups g ON pm.group_id = g.id
            ORDER BY g.name, pm.time, pm.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list payments"))?;

        let mut result = PaymentsByGroup::new();
        for (id, group, person, cents, time) in rows {
            result.entry(group).or_default().push(PaymentEntry {
                id: PaymentId::new(id),
                person,
                amount: Money::from_cents(cents),
                time,
            });
        }
        Ok(result)
    }
}

/// Shares one connection pool between per-request store handles.
#[derive(Clone)]
pub struct SqliteStoreFactory {
    pool: SqlitePool,
}

impl SqliteStoreFactory {
    /// Connects to `url`, creating the database file when missing, and
    /// applies the schema.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, LedgerError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| LedgerError::storage(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(db_error("Failed to connect to SQLite"))?;

        info!(url = %url, "SQLite ledger opened");
        Self::with_pool(pool).await
    }

    /// Private in-memory database, for tests and throwaway runs.
    ///
    /// Limited to a single connection that is never recycled, since every
    /// new connection would see an empty database.
    pub async fn in_memory() -> Result<Self, LedgerError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| LedgerError::storage(format!("Invalid database URL: {}", e)))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(db_error("Failed to open in-memory SQLite"))?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, LedgerError> {
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl LedgerStoreFactory for SqliteStoreFactory {
    fn open(&self) -> Arc<dyn LedgerStore> {
        Arc::new(SqliteLedgerStore::new(self.pool.clone()))
    }

    fn backend_name(&self) -> &'static str {
        "relational"
    }
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), LedgerError> {
    debug!("Applying ledger schema");
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(db_error("Migration failed"))?;
    }
    Ok(())
}
