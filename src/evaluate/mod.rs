pub mod intercept;
pub mod roll;
mod sample;
