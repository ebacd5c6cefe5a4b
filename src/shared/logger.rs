// src/shared/logger.rs

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filtro usado quando `RUST_LOG` não está definida.
const FILTRO_PADRAO: &str = "sabor_express=info";

/// Inicializa os logs da aplicação.
///
/// O filtro vem da variável `RUST_LOG` (ex.: `RUST_LOG=sabor_express=debug`
/// para ver os descontos aplicados); sem ela, usa `sabor_express=info`.
pub fn iniciar_logger() {
    let filtro = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRO_PADRAO));

    // try_init: não falha se outro subscriber já estiver instalado (ex.: testes)
    let _ = tracing_subscriber::registry()
        .with(filtro)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .try_init();
}
