//! Initial database migration.
//!
//! Creates the member and administrator registries, the reference tables,
//! and the contribution and computed-interest row tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: REGISTRIES
        // ============================================================
        db.execute_unprepared(MEMBERS_SQL).await?;
        db.execute_unprepared(ADMIN_USERS_SQL).await?;

        // ============================================================
        // PART 2: REFERENCE DATA
        // ============================================================
        db.execute_unprepared(OFFICES_SQL).await?;
        db.execute_unprepared(CONTRIBUTION_TYPES_SQL).await?;

        // ============================================================
        // PART 3: ROW DATA
        // ============================================================
        db.execute_unprepared(CONTRIBUTIONS_SQL).await?;
        db.execute_unprepared(COMPUTED_INTERESTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const MEMBERS_SQL: &str = r"
CREATE TABLE members (
    sap_id BIGINT PRIMARY KEY,
    email VARCHAR(255) NOT NULL UNIQUE,
    full_name VARCHAR(255),
    pension_id BIGINT
);

CREATE INDEX idx_members_email ON members(email);
";

const ADMIN_USERS_SQL: &str = r"
CREATE TABLE admin_users (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    email VARCHAR(255) NOT NULL UNIQUE
);

CREATE INDEX idx_admin_users_email ON admin_users(email);
";

const OFFICES_SQL: &str = r"
CREATE TABLE offices (
    id BIGINT PRIMARY KEY,
    name VARCHAR(255) NOT NULL
);
";

const CONTRIBUTION_TYPES_SQL: &str = r"
CREATE TABLE contribution_types (
    id BIGINT PRIMARY KEY,
    name VARCHAR(255) NOT NULL
);
";

const CONTRIBUTIONS_SQL: &str = r"
CREATE TABLE contributions (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    sap_id BIGINT NOT NULL REFERENCES members(sap_id) ON DELETE CASCADE,
    amount NUMERIC(18, 2),
    for_period INTEGER,
    in_period INTEGER,
    office_id BIGINT REFERENCES offices(id),
    contribution_type_id BIGINT REFERENCES contribution_types(id)
);

CREATE INDEX idx_contributions_sap_type ON contributions(sap_id, contribution_type_id);
CREATE INDEX idx_contributions_sap_for_period ON contributions(sap_id, for_period DESC);
";

const COMPUTED_INTERESTS_SQL: &str = r"
CREATE TABLE computed_interests (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    sap_id BIGINT NOT NULL REFERENCES members(sap_id) ON DELETE CASCADE,
    year_month INTEGER NOT NULL,
    interest NUMERIC(18, 2) NOT NULL
);

CREATE INDEX idx_computed_interests_sap_period ON computed_interests(sap_id, year_month DESC);
";

const DROP_ALL_SQL: &str = r"
-- Order matters due to foreign key constraints
DROP TABLE IF EXISTS computed_interests CASCADE;
DROP TABLE IF EXISTS contributions CASCADE;
DROP TABLE IF EXISTS contribution_types CASCADE;
DROP TABLE IF EXISTS offices CASCADE;
DROP TABLE IF EXISTS admin_users CASCADE;
DROP TABLE IF EXISTS members CASCADE;
";
