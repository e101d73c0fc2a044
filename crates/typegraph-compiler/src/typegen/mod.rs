//! Declaration text generation from compiled type expressions.
//!
//! Currently supports TypeScript.
//!
//! ```ignore
//! use typegraph_compiler::typegen::typescript::{Config, Emitter};
//!
//! let mut emitter = Emitter::new(&ctx, &schema, &fragments, Config::default());
//! emitter.emit_resolver_tables(&tables);
//! let output = emitter.finish();
//! ```

pub mod typescript;
