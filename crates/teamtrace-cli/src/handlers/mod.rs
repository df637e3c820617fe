pub mod export;
pub mod view;
