use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "training")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub series_id: Option<i32>,
    pub sequence: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub detached: bool,
    pub group_detached: bool,
    pub pre_questionnaire_id: Option<i32>,
    pub post_questionnaire_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training_series::Entity",
        from = "Column::SeriesId",
        to = "super::training_series::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TrainingSeries,
    #[sea_orm(
        belongs_to = "super::questionnaire::Entity",
        from = "Column::PreQuestionnaireId",
        to = "super::questionnaire::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PreQuestionnaire,
    #[sea_orm(
        belongs_to = "super::questionnaire::Entity",
        from = "Column::PostQuestionnaireId",
        to = "super::questionnaire::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PostQuestionnaire,
    #[sea_orm(has_many = "super::training_group::Entity")]
    TrainingGroup,
    #[sea_orm(has_many = "super::training_notification::Entity")]
    TrainingNotification,
}

impl Related<super::training_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingSeries.def()
    }
}

impl Related<super::training_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingGroup.def()
    }
}

impl Related<super::training_notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingNotification.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::training_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::training_group::Relation::Training.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
