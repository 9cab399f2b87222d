use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct QuestionnaireRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuestionnaireRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a questionnaire exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Questionnaire::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }
}
