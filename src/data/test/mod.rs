mod group;
mod notification;
mod series;
mod training;
