mod lighting;
mod runner;
