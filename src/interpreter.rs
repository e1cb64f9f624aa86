/// The environment module holds the variables of a session.
///
/// Every statement of a session reads and writes the same [`Environment`],
/// so later lines can use the values assigned by earlier ones.
///
/// [`Environment`]: environment::Environment
pub mod environment;
/// The evaluator module holds the operations the parser applies to values.
///
/// The parser calls into the evaluator as soon as an operand or operator
/// has been read: resolving variables in the environment, converting
/// constants to integers and applying the bitwise operators.
///
/// # Responsibilities
/// - Reports unknown variables and constants that overflow.
/// - Implements `~`, `&`, `^` and `|` on `i64`.
pub mod evaluator;
/// The lexer module tokenizes one line of source text.
///
/// The lexer reads a line and produces variables, constants and the
/// single-character operators `= | ^ & ~ ( )`. Spaces and tabs are skipped;
/// any other character is a lexical error.
pub mod lexer;
/// The parser module recognizes and evaluates statements in one pass.
///
/// Each precedence level of the grammar is one function returning the value
/// of what it parsed. From loosest to tightest binding: `|`, `^`, `&`, then
/// the unary `~` and operands.
///
/// # Responsibilities
/// - Runs the tokens of one line as a single assignment statement.
/// - Reports missing variables, `=`, operands and `)`, and leftover tokens.
pub mod parser;
