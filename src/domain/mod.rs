// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that describe a report:
// which chart files we expect, how their names are built,
// and what lines the finished document is made of.
//
// Rules for this layer:
//   - NO file I/O (existence checks go through traits.rs)
//   - NO clap or serde_json types
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they are found on disk.

// Token lists and the shared chart file name builder
pub mod naming;

// Fragments and the assembled LaTeX document
pub mod document;

// The fixed set of document layouts
pub mod layout;

// Core abstractions (traits) that the infra layer implements
pub mod traits;
