//! Database seeder for Pensio development and testing.
//!
//! Seeds members, an administrator, offices, contribution types, and a run of
//! contribution and interest rows for local development and testing purposes.
//!
//! Usage: cargo run --bin seeder

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::str::FromStr;

use pensio_db::entities::{
    admin_users, computed_interests, contribution_types, contributions, members, offices,
};

/// SAP ID of the development member with the reference statement.
const JANE_SAP_ID: i64 = 1001;
/// SAP ID of the second development member.
const SAM_SAP_ID: i64 = 1002;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = pensio_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding members...");
    seed_members(&db).await;

    println!("Seeding administrator...");
    seed_administrator(&db).await;

    println!("Seeding offices...");
    seed_offices(&db).await;

    println!("Seeding contribution types...");
    seed_contribution_types(&db).await;

    println!("Seeding contributions...");
    seed_contributions(&db).await;

    println!("Seeding computed interests...");
    seed_computed_interests(&db).await;

    println!("Seeding complete!");
}

/// Seeds two members for development.
async fn seed_members(db: &DatabaseConnection) {
    let rows = [
        (JANE_SAP_ID, "jane@fund.example", "Jane Pensioner", 900_101),
        (SAM_SAP_ID, "sam@fund.example", "Sam Saver", 900_202),
    ];

    for (sap_id, email, full_name, pension_id) in rows {
        if members::Entity::find_by_id(sap_id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Member {sap_id} already exists, skipping...");
            continue;
        }

        let member = members::ActiveModel {
            sap_id: Set(sap_id),
            email: Set(email.to_string()),
            full_name: Set(Some(full_name.to_string())),
            pension_id: Set(Some(pension_id)),
        };

        if let Err(e) = member.insert(db).await {
            eprintln!("Failed to insert member {sap_id}: {e}");
        } else {
            println!("  Created member {sap_id}: {email}");
        }
    }
}

/// Seeds the development administrator.
async fn seed_administrator(db: &DatabaseConnection) {
    let email = "admin@fund.example";

    if admin_users::Entity::find()
        .filter(admin_users::Column::Email.eq(email))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Administrator already exists, skipping...");
        return;
    }

    let admin = admin_users::ActiveModel {
        email: Set(email.to_string()),
        ..Default::default()
    };

    if let Err(e) = admin.insert(db).await {
        eprintln!("Failed to insert administrator: {e}");
    } else {
        println!("  Created administrator: {email}");
    }
}

/// Seeds the recording offices.
async fn seed_offices(db: &DatabaseConnection) {
    let rows = [(1_i64, "Head Office"), (2_i64, "Regional Office")];

    for (id, name) in rows {
        if offices::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Office {name} already exists, skipping...");
            continue;
        }

        let office = offices::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        };

        if let Err(e) = office.insert(db).await {
            eprintln!("Failed to insert office {name}: {e}");
        } else {
            println!("  Created office: {name}");
        }
    }
}

/// Seeds the contribution types that define the statement accounts.
async fn seed_contribution_types(db: &DatabaseConnection) {
    let rows = [
        (1_i64, "EMPLOYEE"),
        (2_i64, "EMPLOYER"),
        (3_i64, "VOLUNTARY"),
    ];

    for (id, name) in rows {
        if contribution_types::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Contribution type {name} already exists, skipping...");
            continue;
        }

        let contribution_type = contribution_types::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        };

        if let Err(e) = contribution_type.insert(db).await {
            eprintln!("Failed to insert contribution type {name}: {e}");
        } else {
            println!("  Created contribution type: {name}");
        }
    }
}

/// Seeds a half year of monthly contributions for both members.
async fn seed_contributions(db: &DatabaseConnection) {
    if contributions::Entity::find()
        .filter(contributions::Column::SapId.eq(JANE_SAP_ID))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Contributions already exist, skipping...");
        return;
    }

    // (sap_id, contribution_type_id, amount, period)
    let mut rows = Vec::new();
    for month in 1..=6 {
        let period = 202_400 + month;
        rows.push((JANE_SAP_ID, 1_i64, "100.00", period));
        rows.push((JANE_SAP_ID, 2_i64, "50.00", period));
    }
    rows.push((SAM_SAP_ID, 1_i64, "999.00", 202_403));

    let mut inserted = 0;
    for (sap_id, type_id, amount, period) in rows {
        let contribution = contributions::ActiveModel {
            sap_id: Set(sap_id),
            amount: Set(Some(Decimal::from_str(amount).unwrap())),
            for_period: Set(Some(period)),
            in_period: Set(Some(period)),
            office_id: Set(Some(1)),
            contribution_type_id: Set(Some(type_id)),
            ..Default::default()
        };

        if let Err(e) = contribution.insert(db).await {
            eprintln!("Failed to insert contribution: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} contributions");
}

/// Seeds year-end computed interest rows.
async fn seed_computed_interests(db: &DatabaseConnection) {
    if computed_interests::Entity::find()
        .filter(computed_interests::Column::SapId.eq(JANE_SAP_ID))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Computed interests already exist, skipping...");
        return;
    }

    let rows = [
        (JANE_SAP_ID, 202_312, "2.00"),
        (JANE_SAP_ID, 202_412, "3.00"),
        (SAM_SAP_ID, 202_412, "12.40"),
    ];

    let mut inserted = 0;
    for (sap_id, year_month, interest) in rows {
        let row = computed_interests::ActiveModel {
            sap_id: Set(sap_id),
            year_month: Set(year_month),
            interest: Set(Decimal::from_str(interest).unwrap()),
            ..Default::default()
        };

        if let Err(e) = row.insert(db).await {
            eprintln!("Failed to insert computed interest: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} computed interest rows");
}
