mod camp;
mod feedback;
mod registration;
mod user;
