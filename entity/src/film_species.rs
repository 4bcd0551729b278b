use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "film_species")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub specie_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::specie::Entity",
        from = "Column::SpecieId",
        to = "super::specie::Column::Id"
    )]
    Specie,
    #[sea_orm(
        belongs_to = "super::film::Entity",
        from = "Column::FilmId",
        to = "super::film::Column::Id"
    )]
    Film,
}

impl ActiveModelBehavior for ActiveModel {}
