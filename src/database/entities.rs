//! SeaORM table definitions. Column and table names follow the legacy schema.

// --- Usuario ---
pub mod usuario {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "usuario")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub name: String,
        #[sea_orm(unique, column_type = "String(StringLen::N(120))")]
        pub email: String,
        #[sea_orm(column_type = "String(StringLen::N(80))")]
        pub password: String,
        #[sea_orm(column_type = "String(StringLen::N(80))")]
        pub genero: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::favoritos::Entity")]
        Favoritos,
    }

    impl Related<super::favoritos::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Favoritos.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Personaje ---
pub mod personaje {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "personaje")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub name: String,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub gender: String,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub hair_color: String,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub birth_year: String,
        pub height: i32,
        pub mass: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Planeta ---
pub mod planeta {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "planeta")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub name: String,
        pub diameter: i32,
        pub rotation_period: i32,
        pub orbital_period: i32,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub gravity: String,
        // Coruscant alone overflows i32.
        pub population: i64,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub climate: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Favoritos ---
pub mod favoritos {
    use sea_orm::entity::prelude::*;

    /// Character and planet are stored by name, not by key.
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "favoritos")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub personaje_name: String,
        #[sea_orm(column_type = "String(StringLen::N(250))")]
        pub planeta_name: String,
        pub usuario_id: Option<i32>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::usuario::Entity",
            from = "Column::UsuarioId",
            to = "super::usuario::Column::Id"
        )]
        Usuario,
    }

    impl Related<super::usuario::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Usuario.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
