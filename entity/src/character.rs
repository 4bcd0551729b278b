use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: String,
    pub gender: String,
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

impl Related<super::specie::Entity> for Entity {
    fn to() -> RelationDef {
        super::species_characters::Relation::Specie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::species_characters::Relation::Character.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_characters::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_characters::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
