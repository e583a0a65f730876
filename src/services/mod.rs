pub mod movers_service;

pub use movers_service::MoversService;
