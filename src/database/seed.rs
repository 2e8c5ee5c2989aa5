use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, Set, TransactionTrait};

use super::connector::DB;
use super::entities::{personaje, planeta};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub personajes: usize,
    pub planetas: usize,
}

// name, gender, hair_color, birth_year, height, mass
const PERSONAJES: &[(&str, &str, &str, &str, i32, i32)] = &[
    ("Luke Skywalker", "male", "blond", "19BBY", 172, 77),
    ("C-3PO", "n/a", "n/a", "112BBY", 167, 75),
    ("R2-D2", "n/a", "n/a", "33BBY", 96, 32),
    ("Darth Vader", "male", "none", "41.9BBY", 202, 136),
    ("Leia Organa", "female", "brown", "19BBY", 150, 49),
    ("Obi-Wan Kenobi", "male", "auburn, white", "57BBY", 182, 77),
];

// name, diameter, rotation_period, orbital_period, gravity, population, climate
const PLANETAS: &[(&str, i32, i32, i32, &str, i64, &str)] = &[
    ("Tatooine", 10465, 23, 304, "1 standard", 200_000, "arid"),
    ("Alderaan", 12500, 24, 364, "1 standard", 2_000_000_000, "temperate"),
    ("Hoth", 7200, 23, 549, "1.1 standard", 0, "frozen"),
    ("Dagobah", 8900, 23, 341, "N/A", 0, "murky"),
    ("Naboo", 12120, 26, 312, "1 standard", 4_500_000_000, "temperate"),
    ("Coruscant", 12240, 24, 368, "1 standard", 1_000_000_000_000, "temperate"),
];

/// Inserts the starter characters and planets. A table that already has rows is left alone.
pub async fn seed_reference_data(db: &DB) -> Result<SeedReport, DbErr> {
    let mut report = SeedReport::default();
    let txn = db.begin().await?;

    if personaje::Entity::find().count(&txn).await? == 0 {
        for (name, gender, hair_color, birth_year, height, mass) in PERSONAJES {
            personaje::ActiveModel {
                name: Set(name.to_string()),
                gender: Set(gender.to_string()),
                hair_color: Set(hair_color.to_string()),
                birth_year: Set(birth_year.to_string()),
                height: Set(*height),
                mass: Set(*mass),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            report.personajes += 1;
        }
    } else {
        log::info!("personaje already populated, skipping");
    }

    if planeta::Entity::find().count(&txn).await? == 0 {
        for (name, diameter, rotation_period, orbital_period, gravity, population, climate) in
            PLANETAS
        {
            planeta::ActiveModel {
                name: Set(name.to_string()),
                diameter: Set(*diameter),
                rotation_period: Set(*rotation_period),
                orbital_period: Set(*orbital_period),
                gravity: Set(gravity.to_string()),
                population: Set(*population),
                climate: Set(climate.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            report.planetas += 1;
        }
    } else {
        log::info!("planeta already populated, skipping");
    }

    txn.commit().await?;
    Ok(report)
}
