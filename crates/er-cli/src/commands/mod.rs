pub mod answer;
pub mod business;
pub mod decode;
pub mod dispatch;
pub mod encode;
pub mod report;
pub mod restore;
pub mod select;
pub mod shared;
pub mod state;
pub mod value;
pub mod year;
