mod api;
mod download;
mod layout;
