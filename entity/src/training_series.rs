use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "training_series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rule: String,
    pub timezone: String,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub until: Option<DateTimeUtc>,
    pub count: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::training::Entity")]
    Training,
}

impl Related<super::training::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Training.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
