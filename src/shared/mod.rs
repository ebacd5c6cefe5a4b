// src/shared/mod.rs

// Declara o submódulo de inicialização dos logs
pub mod logger;
