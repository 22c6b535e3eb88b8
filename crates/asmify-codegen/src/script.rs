//! Builder-call statement forms.
//!
//! The generated script is made of three statement shapes (variable
//! declaration, property assignment, bare call) plus blank separator
//! lines between logical groups. The writer owns the output buffer for
//! one pass and hands it out on [`ScriptWriter::finish`].

/// Accumulates generated statements.
#[derive(Default, Debug)]
pub struct ScriptWriter {
    out: String,
}

impl ScriptWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `var <name> = <value>;`
    pub fn decl(&mut self, name: &str, value: &str) {
        self.stmt(&format!("var {name} = {value}"));
    }

    /// `<recv>.<path> = <value>;`
    pub fn set(&mut self, recv: &str, path: &[&str], value: &str) {
        self.stmt(&format!("{recv}.{} = {value}", path.join(".")));
    }

    /// `<expr>;`
    pub fn stmt(&mut self, expr: &str) {
        self.out.push_str(expr);
        self.out.push_str(";\n");
    }

    /// Blank separator line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// `new <Ctor>(<args>)`
pub fn new_obj(ctor: &str, args: &[&str]) -> String {
    format!("new {ctor}({})", args.join(", "))
}

/// `<recv>.<path>` property read.
pub fn path_get(recv: &str, path: &[&str]) -> String {
    format!("{recv}.{}", path.join("."))
}
