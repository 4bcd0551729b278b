use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub episode_id: i32,
    pub producer: String,
    pub director: String,
    pub release_date: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub opening: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_characters::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_characters::Relation::Film.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planets::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planets::Relation::Film.def().rev())
    }
}

impl Related<super::specie::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_species::Relation::Specie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_species::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
