pub mod api;
pub mod app;
pub mod models;
pub mod services;

#[cfg(test)]
mod test;
