//! Lexer, parser, and AST for **synapse route definitions** (`.routes`).
//!
//! Route files name the anatomical nodes a signal travels through, the nerve
//! modes that may trigger it and the animation settings shared by every route.
//! This crate only understands the syntax; turning a document into a route
//! table is the engine's job.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `RouteDocument`, `Node`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use synapse_routes::parse_str;
//!
//! let src = r#"
//!     Mode sympathetic { color: #ff3366 }
//!     Route "heart" {
//!         modes: sympathetic
//!         nodes: "Hypothalamus" "Spinal_dura" "Heart"
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.nodes.len(), 2);
//! assert_eq!(doc.nodes[1].prop("nodes").unwrap().values.len(), 3);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Node, Prop, RouteDocument, Value};
pub use error::ParseError;
pub use parser::parse_str;
