// src/lib.rs

// Módulo do cardápio (item base, sobremesa e erros)
pub mod cardapio;
// Módulo shared (logs)
pub mod shared;

pub use cardapio::cardapio_erros::{ErroCardapio, Resultado};
pub use cardapio::item_cardapio_structs::{ItemCardapio, ItemDoCardapio};
pub use cardapio::sobremesa_structs::Sobremesa;
pub use shared::logger::iniciar_logger;
