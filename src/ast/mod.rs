/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait, the `Statement`/`Expression` sum types and `Program`
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants, plus `BlockStatement`
pub mod ast;
pub mod expressions;
pub mod statements;
