//! The closed set of tags the compiler accepts.

use std::fmt;

/// A parse-tree tag from the fixed grammar.
///
/// Readers produce free-form strings; the compiler maps them through
/// [`Tag::from_name`] and matches exhaustively, so adding a form here is a
/// compile error everywhere it is not yet handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `begin`: a block of statements.
    Begin,
    /// `var(name)`: read a binding.
    Var,
    /// `def(name)`: create a reference cell.
    Def,
    /// `label(name)`: a jump target inside a block.
    Label,
    /// `goto(label)`: request a jump to a label.
    Goto,
    /// `set(name, expr)`: store into a reference cell.
    Set,
    /// `number(value)`: a numeric literal.
    Number,
    /// `string(value)`: a text literal.
    String,
    /// `if(cond, then[, else])`.
    If,
    /// `function(name, args, body)`: a top-level function definition.
    Function,
    /// `call(fun=name, args...)` or `call(fun_expr, args...)`.
    Call,
}

impl Tag {
    /// Every tag, in grammar order.
    pub const ALL: [Tag; 11] = [
        Tag::Begin,
        Tag::Var,
        Tag::Def,
        Tag::Label,
        Tag::Goto,
        Tag::Set,
        Tag::Number,
        Tag::String,
        Tag::If,
        Tag::Function,
        Tag::Call,
    ];

    /// Look up a tag by its spelling in the parse tree.
    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.as_str() == name)
    }

    /// The spelling of this tag in the parse tree.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Begin => "begin",
            Tag::Var => "var",
            Tag::Def => "def",
            Tag::Label => "label",
            Tag::Goto => "goto",
            Tag::Set => "set",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::If => "if",
            Tag::Function => "function",
            Tag::Call => "call",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
