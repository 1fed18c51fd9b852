pub mod admin;
pub mod client;
pub mod contract;
pub mod dashboard;
pub mod design;
pub mod dispatch;
pub mod entity;
pub mod lead;
pub mod lookups;
pub mod product;
pub mod project;
pub mod shared;
pub mod task;
pub mod vendor;
