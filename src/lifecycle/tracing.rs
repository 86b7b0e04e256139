//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); actors identify themselves
//! with the `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Created`, `Deleted`, `Shutdown` per session kind
//! - **Intents**: `Action` at debug with the full payload, `Action ok`/`Action failed` at info/warn
//! - **Deferred Responses**: `Deferred` at debug, stale responses discarded at debug
//! - **Silent Failures**: failed category, food, detail and favorite calls at warn
//! - **Orders**: `Order placed` at info, `Order rejected` and the alert at warn
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle, placed orders, silent failures
//! RUST_LOG=info cargo run
//!
//! # Every intent and deferred response with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the catalog calls
//! RUST_LOG=food_catalog::catalog=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="CatalogBrowser"
//! INFO browsing: Created entity_type="CatalogBrowser" id=browser_1 open=1
//! INFO composing:open_food: Created entity_type="OrderComposer" id=composer_1 open=1
//! INFO composing: Action ok entity_type="OrderComposer" id=composer_1
//! INFO Order placed total=70 quantity=2
//! INFO Navigate route=Orders
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
