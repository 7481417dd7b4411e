mod auth;
mod jwt;
