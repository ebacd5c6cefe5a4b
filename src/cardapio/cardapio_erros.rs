// src/cardapio/cardapio_erros.rs

use bigdecimal::BigDecimal;
use thiserror::Error;

/// Erros do módulo de cardápio.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErroCardapio {
    #[error("Preço negativo para o item '{nome}': {preco}")]
    PrecoNegativo { nome: String, preco: BigDecimal },
}

pub type Resultado<T> = std::result::Result<T, ErroCardapio>;
