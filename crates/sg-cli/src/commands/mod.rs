pub mod catalog;
pub mod check;
pub mod consult;
pub mod dispatch;
pub mod paths;
