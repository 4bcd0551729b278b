use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: i64,
    pub climate: Option<String>,
    pub terrain: String,
    pub surface_water: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::specie::Entity")]
    Specie,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::specie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specie.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planets::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planets::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
