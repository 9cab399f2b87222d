pub mod training_reminders;
