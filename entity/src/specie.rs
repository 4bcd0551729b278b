use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "specie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub classification: String,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub language: Option<String>,
    pub planet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::species_characters::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::species_characters::Relation::Specie.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_species::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_species::Relation::Specie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
