mod page_routes;

pub use page_routes::page_routes;
