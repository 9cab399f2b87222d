pub use super::club::Entity as Club;
pub use super::group::Entity as Group;
pub use super::group_member::Entity as GroupMember;
pub use super::questionnaire::Entity as Questionnaire;
pub use super::training::Entity as Training;
pub use super::training_group::Entity as TrainingGroup;
pub use super::training_notification::Entity as TrainingNotification;
pub use super::training_series::Entity as TrainingSeries;
pub use super::user::Entity as User;
