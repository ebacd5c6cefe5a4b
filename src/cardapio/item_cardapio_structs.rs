// src/cardapio/item_cardapio_structs.rs

use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Estrutura base de qualquer item do cardápio.
/// Guarda apenas o nome e o preço; os tipos específicos (ex.: `Sobremesa`)
/// embutem esta estrutura e acrescentam os próprios campos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCardapio {
    nome: String,
    preco: BigDecimal,
}

impl ItemCardapio {
    /// Cria um novo item. Nenhuma validação é feita sobre o nome ou o preço.
    pub fn novo(nome: impl Into<String>, preco: BigDecimal) -> Self {
        ItemCardapio {
            nome: nome.into(),
            preco,
        }
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn preco(&self) -> &BigDecimal {
        &self.preco
    }

    // Só os tipos do próprio crate alteram o preço (descontos).
    pub(crate) fn definir_preco(&mut self, preco: BigDecimal) {
        self.preco = preco;
    }
}

/// Formatação genérica do item base: "nome: preco".
impl fmt::Display for ItemCardapio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.nome, self.preco)
    }
}

/// Capacidade comum a todos os itens do cardápio.
///
/// Permite guardar itens de tipos diferentes numa mesma coleção
/// (`Vec<Box<dyn ItemDoCardapio>>`). A conversão para texto vem de `Display`,
/// que cada tipo implementa do seu jeito.
pub trait ItemDoCardapio: fmt::Display {
    /// Acesso aos dados do item base (nome e preço).
    fn item(&self) -> &ItemCardapio;

    /// Aplica o desconto próprio do tipo, alterando o preço no lugar.
    fn aplicar_desconto(&mut self);
}
