// One table layout + row accumulator per domain

pub mod cash_flow;
pub mod costs;
pub mod equipment;
pub mod maintenance;
pub mod roi;
pub mod sales;
pub mod stock;
