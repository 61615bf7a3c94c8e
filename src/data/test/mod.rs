mod member;
mod player;
mod server;
