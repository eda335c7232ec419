pub mod animator;
pub mod ease;
pub mod run;
