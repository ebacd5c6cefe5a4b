// src/main.rs

use bigdecimal::BigDecimal;
use sabor_express::{iniciar_logger, ItemDoCardapio, Sobremesa};
use tracing::info;

// Demonstração: monta uma sobremesa, aplica o desconto e mostra o resultado.
fn main() -> Result<(), serde_json::Error> {
    iniciar_logger();

    let mut pudim = Sobremesa::nova(
        "Pudim",
        BigDecimal::from(10),
        "Gelada",
        "Pequeno",
        "Pudim de leite",
    );
    info!(item = %pudim, preco = %pudim.preco(), "sobremesa cadastrada");

    // Usa a trait para tratar a sobremesa como um item qualquer do cardápio
    let item: &mut dyn ItemDoCardapio = &mut pudim;
    item.aplicar_desconto();
    info!(item = %item, preco = %item.item().preco(), "preço com desconto");

    println!("{}", serde_json::to_string_pretty(&pudim)?);
    Ok(())
}
