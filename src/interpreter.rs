/// The evaluator module reduces syntax trees to numbers.
///
/// The evaluator walks the tree produced by the parser, evaluates every node
/// with the whitelisted arithmetic for its operator and reports runtime
/// errors such as division by zero or math domain errors.
///
/// # Responsibilities
/// - Evaluates literals, signs and the seven binary operators.
/// - Keeps integers exact and applies floor semantics to `//` and `%`.
/// - Bounds recursion depth.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw text and produces numbers, operators and
/// parentheses with their source offsets. Any other character is rejected
/// here, before parsing starts.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// A recursive descent parser that recognises exactly one arithmetic
/// expression with the usual precedence: `+ -` below `* / // %`, below
/// unary signs, below the right-associative `**`.
pub mod parser;
/// The value module defines the numbers produced by evaluation.
pub mod value;
