//! Create the schema: users, galaxies, planets, characters and favorites.
//! Tables are created in foreign-key dependency order with `CREATE TABLE IF NOT EXISTS`,
//! so applying twice is a no-op.

use crate::config::DatabaseBackend;
use crate::error::AppError;
use crate::model::{EMAIL_MAX_LEN, NAME_MAX_LEN, PASSWORD_MAX_LEN, TEXT_MAX_LEN};
use sqlx::AnyPool;

#[derive(Clone, Copy, Debug)]
enum ColumnType {
    /// Auto-incrementing primary key.
    Identity,
    BigInt,
    Double,
    Varchar(usize),
}

struct ColumnDef {
    name: &'static str,
    type_: ColumnType,
    nullable: bool,
}

struct ForeignKey {
    column: &'static str,
    references: &'static str,
    on_delete_cascade: bool,
}

struct TableDef {
    name: &'static str,
    columns: Vec<ColumnDef>,
    unique: Vec<Vec<&'static str>>,
    foreign_keys: Vec<ForeignKey>,
    check: Vec<(&'static str, &'static str)>,
}

fn col(name: &'static str, type_: ColumnType, nullable: bool) -> ColumnDef {
    ColumnDef { name, type_, nullable }
}

fn fk(column: &'static str, references: &'static str, on_delete_cascade: bool) -> ForeignKey {
    ForeignKey {
        column,
        references,
        on_delete_cascade,
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn type_str(t: ColumnType, backend: DatabaseBackend) -> String {
    match (t, backend) {
        (ColumnType::Identity, DatabaseBackend::Postgres) => {
            "BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY".into()
        }
        (ColumnType::Identity, DatabaseBackend::Sqlite) => "INTEGER PRIMARY KEY AUTOINCREMENT".into(),
        (ColumnType::BigInt, DatabaseBackend::Postgres) => "BIGINT".into(),
        (ColumnType::BigInt, DatabaseBackend::Sqlite) => "INTEGER".into(),
        (ColumnType::Double, DatabaseBackend::Postgres) => "DOUBLE PRECISION".into(),
        (ColumnType::Double, DatabaseBackend::Sqlite) => "REAL".into(),
        (ColumnType::Varchar(n), _) => format!("VARCHAR({})", n),
    }
}

fn schema() -> Vec<TableDef> {
    use ColumnType::*;
    vec![
        TableDef {
            name: "users",
            columns: vec![
                col("id", Identity, false),
                col("email", Varchar(EMAIL_MAX_LEN), false),
                col("password", Varchar(PASSWORD_MAX_LEN), false),
            ],
            unique: vec![vec!["email"]],
            foreign_keys: vec![],
            check: vec![],
        },
        TableDef {
            name: "galaxies",
            columns: vec![
                col("id", Identity, false),
                col("name", Varchar(NAME_MAX_LEN), false),
                col("coordinate_center_x", Double, false),
                col("coordinate_center_y", Double, false),
            ],
            unique: vec![vec!["name"]],
            foreign_keys: vec![],
            check: vec![],
        },
        TableDef {
            name: "planets",
            columns: vec![
                col("id", Identity, false),
                col("name", Varchar(NAME_MAX_LEN), false),
                col("description", Varchar(TEXT_MAX_LEN), true),
                col("galaxy_id", BigInt, false),
            ],
            unique: vec![vec!["name"]],
            foreign_keys: vec![fk("galaxy_id", "galaxies", false)],
            check: vec![],
        },
        TableDef {
            name: "characters",
            columns: vec![
                col("id", Identity, false),
                col("name", Varchar(NAME_MAX_LEN), false),
                col("gender", Varchar(TEXT_MAX_LEN), true),
            ],
            unique: vec![vec!["name"]],
            foreign_keys: vec![],
            check: vec![],
        },
        TableDef {
            name: "favorites",
            columns: vec![
                col("id", Identity, false),
                col("user_id", BigInt, false),
                col("planet_id", BigInt, true),
                col("character_id", BigInt, true),
            ],
            unique: vec![vec!["user_id", "planet_id"], vec!["user_id", "character_id"]],
            foreign_keys: vec![
                fk("user_id", "users", true),
                fk("planet_id", "planets", true),
                fk("character_id", "characters", true),
            ],
            check: vec![(
                "favorites_single_target",
                "(planet_id IS NULL) <> (character_id IS NULL)",
            )],
        },
    ]
}

fn create_table_sql(t: &TableDef, backend: DatabaseBackend) -> String {
    let mut defs: Vec<String> = Vec::new();
    for c in &t.columns {
        let mut def = format!("{} {}", quote(c.name), type_str(c.type_, backend));
        if !c.nullable && !matches!(c.type_, ColumnType::Identity) {
            def.push_str(" NOT NULL");
        }
        defs.push(def);
    }
    for u in &t.unique {
        let cols: Vec<String> = u.iter().map(|s| quote(s)).collect();
        defs.push(format!("UNIQUE ({})", cols.join(", ")));
    }
    for f in &t.foreign_keys {
        let mut def = format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            quote(f.column),
            quote(f.references),
            quote("id")
        );
        if f.on_delete_cascade {
            def.push_str(" ON DELETE CASCADE");
        }
        defs.push(def);
    }
    for (name, expression) in &t.check {
        defs.push(format!("CONSTRAINT {} CHECK ({})", quote(name), expression));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        quote(t.name),
        defs.join(",\n    ")
    )
}

/// DDL statements for the whole schema, in dependency order.
pub fn schema_statements(backend: DatabaseBackend) -> Vec<String> {
    schema().iter().map(|t| create_table_sql(t, backend)).collect()
}

pub async fn apply_migrations(pool: &AnyPool, backend: DatabaseBackend) -> Result<(), AppError> {
    let statements = schema_statements(backend);
    let mut tx = pool.begin().await?;
    for sql in &statements {
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(tables = statements.len(), ?backend, "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FavoriteTarget;
    use crate::service::FavoriteService;
    use axum::http::StatusCode;

    #[test]
    fn tables_are_ordered_by_dependency() {
        let names: Vec<&str> = schema().iter().map(|t| t.name).collect();
        assert_eq!(names, ["users", "galaxies", "planets", "characters", "favorites"]);
    }

    #[test]
    fn sqlite_uses_autoincrement_and_real() {
        let sql = schema_statements(DatabaseBackend::Sqlite);
        assert!(sql[1].contains("\"id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql[1].contains("\"coordinate_center_x\" REAL NOT NULL"));
    }

    #[test]
    fn postgres_uses_identity_and_double_precision() {
        let sql = schema_statements(DatabaseBackend::Postgres);
        assert!(sql[0].contains("BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY"));
        assert!(sql[1].contains("DOUBLE PRECISION NOT NULL"));
    }

    #[test]
    fn planet_requires_galaxy() {
        let sql = schema_statements(DatabaseBackend::Postgres);
        assert!(sql[2].contains("\"galaxy_id\" BIGINT NOT NULL"));
        assert!(sql[2].contains("FOREIGN KEY (\"galaxy_id\") REFERENCES \"galaxies\" (\"id\")"));
    }

    #[test]
    fn favorite_pairs_are_unique() {
        let sql = schema_statements(DatabaseBackend::Sqlite);
        assert!(sql[4].contains("UNIQUE (\"user_id\", \"planet_id\")"));
        assert!(sql[4].contains("UNIQUE (\"user_id\", \"character_id\")"));
        assert!(sql[4].contains("ON DELETE CASCADE"));
    }

    #[tokio::test]
    async fn applying_twice_is_idempotent() {
        let pool = crate::store::connect_in_memory().await.unwrap();
        apply_migrations(&pool, DatabaseBackend::Sqlite).await.unwrap();
        apply_migrations(&pool, DatabaseBackend::Sqlite).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM planets")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    async fn insert_favorite(pool: &AnyPool, sql: &str) -> AppError {
        let err = sqlx::query(sql).execute(pool).await.unwrap_err();
        AppError::Db(err)
    }

    #[tokio::test]
    async fn favorite_without_target_violates_check() {
        let pool = crate::test_support::seeded_pool().await;
        let err = insert_favorite(&pool, "INSERT INTO favorites (user_id) VALUES (1)").await;
        assert_eq!(
            err.status_and_code(),
            (StatusCode::UNPROCESSABLE_ENTITY, "constraint_violation")
        );
        assert_eq!(err.public_message(), "record violates a table constraint");

        let err = insert_favorite(
            &pool,
            "INSERT INTO favorites (user_id, planet_id, character_id) VALUES (1, 1, 1)",
        )
        .await;
        assert_eq!(err.status_and_code().1, "constraint_violation");
    }

    #[tokio::test]
    async fn favorite_with_dangling_reference_is_rejected() {
        let pool = crate::test_support::seeded_pool().await;
        let err = insert_favorite(&pool, "INSERT INTO favorites (user_id, planet_id) VALUES (1, 999)").await;
        assert_eq!(
            err.status_and_code(),
            (StatusCode::UNPROCESSABLE_ENTITY, "constraint_violation")
        );
        assert_eq!(err.public_message(), "referenced record does not exist");
    }

    #[tokio::test]
    async fn deleting_a_user_removes_their_favorites() {
        let pool = crate::test_support::seeded_pool().await;
        FavoriteService::add(&pool, 1, FavoriteTarget::Planet(2)).await.unwrap();
        FavoriteService::add(&pool, 1, FavoriteTarget::Character(1)).await.unwrap();
        FavoriteService::add(&pool, 2, FavoriteTarget::Planet(2)).await.unwrap();

        sqlx::query("DELETE FROM users WHERE id = 1").execute(&pool).await.unwrap();

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE user_id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
        assert_eq!(FavoriteService::list_for_user(&pool, 2).await.unwrap().len(), 1);
    }
}
