//! Documentation tooling for a datapack preprocessor language: entry search,
//! deep-link navigation and a boundary to the external compiler.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod navigation;
pub mod sandbox;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;

pub use catalog::DocEntry;
pub use config::Config;
pub use navigation::{HashSync, NavigationEvent, Viewport};
pub use sandbox::{CompileFailure, CompileOutput, CompileRequest, Compiler, ProcessCompiler};
pub use search::matches;
pub use server::{DocsServer, SiteState};
