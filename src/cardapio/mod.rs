// src/cardapio/mod.rs

// Declara o submódulo com o item base e a trait comum dos itens do cardápio
pub mod item_cardapio_structs;
// Declara o submódulo da sobremesa
pub mod sobremesa_structs;
// Declara o submódulo com os erros do cardápio
pub mod cardapio_erros;
