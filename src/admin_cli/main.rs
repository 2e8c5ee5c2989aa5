use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value as JsonValue;

use starwars_api::api::validation::{
    MAX_GENERO_LEN, MAX_NAME_LEN, ensure_max_len, validate_email,
};
use starwars_api::config::Config;
use starwars_api::database::{
    self, CharacterRepository, DB, PlanetRepository, SeaOrmStore,
    UserRepository, entities::favoritos,
};
use starwars_api::models::{Favorite, NewUser};

use sea_orm::{EntityTrait, QueryOrder};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, verbatim_doc_comment)]
/// Command line utility for administering the Star Wars API database.
/// Creates and drops the schema, seeds reference data, adds users and dumps tables.
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Database commands.
    Db {
        #[command(subcommand)]
        db_command: DbCommand,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TableName {
    Usuario,
    Personaje,
    Planeta,
    Favoritos,
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Creates the usuario, personaje, planeta and favoritos tables if missing.
    Init,
    /// Inserts the starter characters and planets into empty tables.
    Seed,
    /// Inserts a user. The password is stored as a bcrypt hash.
    AddUser {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        genero: String,
    },
    /// Prints every row of a table as JSON, serialized the same way the API does.
    Query {
        #[arg(short, long, value_enum)]
        table: TableName,
    },
    /// Drops all four tables. Use with care!
    Wipe,
}

async fn get_db_connection(config: &Config) -> Result<DB, Box<dyn std::error::Error>> {
    let settings = config.database_settings()?;
    Ok(database::connect_with_settings(&settings).await?)
}

fn print_json<T: serde::Serialize>(rows: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    let pretty = serde_json::to_string_pretty(rows)?;
    println!("{}", pretty);
    Ok(())
}

async fn query_table(store: &SeaOrmStore, table: TableName) -> Result<(), Box<dyn std::error::Error>> {
    match table {
        TableName::Usuario => print_json(&store.list_users().await?),
        TableName::Personaje => print_json(&store.list_characters().await?),
        TableName::Planeta => print_json(&store.list_planets().await?),
        TableName::Favoritos => {
            // Includes favorites without an owner, which no API route exposes.
            let rows: Vec<Favorite> = favoritos::Entity::find()
                .order_by_asc(favoritos::Column::Id)
                .all(store.connection())
                .await?
                .into_iter()
                .map(Favorite::from)
                .collect();
            print_json(&rows)
        }
    }
}

async fn add_user(
    store: &SeaOrmStore,
    new_user: NewUser,
) -> Result<(), Box<dyn std::error::Error>> {
    if !ensure_max_len(&new_user.name, MAX_NAME_LEN) {
        return Err(format!("name must be at most {} characters", MAX_NAME_LEN).into());
    }
    if !validate_email(&new_user.email) {
        return Err(format!("invalid email: {}", new_user.email).into());
    }
    if !ensure_max_len(&new_user.genero, MAX_GENERO_LEN) {
        return Err(format!("genero must be at most {} characters", MAX_GENERO_LEN).into());
    }
    if new_user.password.is_empty() {
        return Err("password must not be empty".into());
    }

    // bcrypt output is 60 characters, within the 80-character column.
    let hashed = bcrypt::hash(&new_user.password, bcrypt::DEFAULT_COST)?;
    let user = store
        .create_user(NewUser {
            password: hashed,
            ..new_user
        })
        .await?;

    let stored = store.get_user(user.id).await?;
    let value: JsonValue = serde_json::to_value(&stored)?;
    println!("Created user: {}", value);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let db = get_db_connection(&config).await?;

    match cli.command {
        Commands::Db { db_command } => match db_command {
            DbCommand::Init => {
                database::create_schema(&db).await?;
                println!("Schema ready: {}", database::schema::TABLES.join(", "));
            }
            DbCommand::Seed => {
                database::create_schema(&db).await?;
                let report = database::seed_reference_data(&db).await?;
                println!(
                    "Inserted {} personajes and {} planetas.",
                    report.personajes, report.planetas
                );
            }
            DbCommand::AddUser {
                name,
                email,
                password,
                genero,
            } => {
                let store = SeaOrmStore::new(db);
                add_user(
                    &store,
                    NewUser {
                        name,
                        email,
                        password,
                        genero,
                    },
                )
                .await?;
            }
            DbCommand::Query { table } => {
                let store = SeaOrmStore::new(db);
                query_table(&store, table).await?;
            }
            DbCommand::Wipe => {
                database::drop_schema(&db).await?;
                println!("Dropped tables: {}", database::schema::TABLES.join(", "));
            }
        },
    }

    Ok(())
}
