//! Integration tests for GoMarket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gomarket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_restart` - Durable persistence across simulated process restarts
//! - `cart_wire_format` - The persisted blob's encoding contract
//!
//! The library portion only holds shared helpers; the tests themselves live
//! under `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use gomarket_core::{CartLineInput, Price, ProductId};

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a cart line input with deterministic metadata derived from `id`.
#[must_use]
pub fn line_input(id: &str, cents: i64) -> CartLineInput {
    CartLineInput {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://img.example/{id}.png"),
        price: Price::from_cents(cents),
    }
}
