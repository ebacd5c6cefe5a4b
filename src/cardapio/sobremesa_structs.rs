// src/cardapio/sobremesa_structs.rs

use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::cardapio_erros::{ErroCardapio, Resultado};
use super::item_cardapio_structs::{ItemCardapio, ItemDoCardapio};

/// Estrutura que representa uma sobremesa do cardápio.
/// O nome e o preço ficam no `ItemCardapio` embutido; no JSON os campos
/// aparecem todos no mesmo nível (`flatten`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sobremesa {
    #[serde(flatten)]
    item: ItemCardapio,
    tipo: String,
    tamanho: String,
    descricao: String,
}

/// Fator aplicado ao preço em cada desconto (metade do preço).
fn fator_desconto() -> BigDecimal {
    BigDecimal::new(5.into(), 1)
}

impl Sobremesa {
    /// Cria uma nova sobremesa sem validar nenhum dos valores.
    ///
    /// O argumento `quantidade` é guardado como `tamanho` e só pode ser lido
    /// por [`Sobremesa::tamanho`].
    pub fn nova(
        nome: impl Into<String>,
        preco: BigDecimal,
        tipo: impl Into<String>,
        quantidade: impl Into<String>,
        descricao: impl Into<String>,
    ) -> Self {
        Sobremesa {
            item: ItemCardapio::novo(nome, preco),
            tipo: tipo.into(),
            tamanho: quantidade.into(),
            descricao: descricao.into(),
        }
    }

    /// Igual a [`Sobremesa::nova`], mas recusa preço negativo.
    pub fn nova_validada(
        nome: impl Into<String>,
        preco: BigDecimal,
        tipo: impl Into<String>,
        quantidade: impl Into<String>,
        descricao: impl Into<String>,
    ) -> Resultado<Self> {
        let nome = nome.into();
        if preco < BigDecimal::from(0) {
            warn!(item = %nome, preco = %preco, "sobremesa recusada: preço negativo");
            return Err(ErroCardapio::PrecoNegativo { nome, preco });
        }
        Ok(Sobremesa::nova(nome, preco, tipo, quantidade, descricao))
    }

    pub fn nome(&self) -> &str {
        self.item.nome()
    }

    pub fn preco(&self) -> &BigDecimal {
        self.item.preco()
    }

    pub fn tipo(&self) -> &str {
        &self.tipo
    }

    pub fn tamanho(&self) -> &str {
        &self.tamanho
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    /// Reduz o preço à metade, no lugar.
    /// Chamadas repetidas acumulam (duas chamadas deixam 25% do preço original).
    /// A conta é exata: cada chamada acrescenta uma casa decimal à escala do preço.
    pub fn aplicar_desconto(&mut self) {
        let anterior = self.item.preco().clone();
        let novo = &anterior * &fator_desconto();
        debug!(
            item = %self.item.nome(),
            preco_anterior = %anterior,
            preco_novo = %novo,
            "desconto aplicado"
        );
        self.item.definir_preco(novo);
    }
}

/// A sobremesa é exibida só pelo nome; a formatação do item base não é usada.
impl fmt::Display for Sobremesa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item.nome())
    }
}

impl ItemDoCardapio for Sobremesa {
    fn item(&self) -> &ItemCardapio {
        &self.item
    }

    fn aplicar_desconto(&mut self) {
        Sobremesa::aplicar_desconto(self);
    }
}
