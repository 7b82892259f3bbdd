pub mod averages;
pub mod clean;
pub mod corr;
pub mod data;
pub mod extremes;
pub mod genre_runtime;
pub mod monthly;
pub mod plot;
pub mod report;
pub mod tags;
pub mod top;
pub mod yearly;
