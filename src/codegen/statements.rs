//! Statement rendering
//!
//! | C++                               | Python                              |
//! |-----------------------------------|-------------------------------------|
//! | `int x = e;` / `int x;`           | `x = e` / `x = 0`                   |
//! | `x = e;` / `x++;`                 | `x = e` / `x = x + 1`               |
//! | `if (c) {..} else {..}`           | `if c:` / `else:`                   |
//! | `for (int i = a; i < b; i++)`     | `for i in range(a, b):`             |
//! | `while (c) {..}`                  | `while c:`                          |
//! | `int f(int a) {..}`               | `def f(a):`                         |
//! | `class C { int x; };`             | `class C:` + `__init__` zeroing `x` |
//! | `cout << a << b << endl;`         | `print(a, b, sep='', end='\n')`     |
//! | `return e;`                       | `return e`                          |
//!
//! The `for` upper bound is the right operand of the guard whatever the
//! comparison was, and the step is always +1.

use super::Generator;
use crate::parser::ast::{AstNode, Field, Param};

impl Generator {
    pub(super) fn format_stmt(&self, stmt: &AstNode, depth: usize, out: &mut String) {
        let pad = self.pad(depth);

        match stmt {
            AstNode::Declaration { name, init, .. } => {
                let value = match init {
                    Some(expr) => self.format_expr(expr),
                    None => "0".to_string(),
                };
                out.push_str(&format!("{}{} = {}\n", pad, name, value));
            }
            AstNode::Assignment { name, value, .. } => {
                out.push_str(&format!("{}{} = {}\n", pad, name, self.format_expr(value)));
            }
            AstNode::Increment { name, .. } => {
                out.push_str(&format!("{}{} = {} + 1\n", pad, name, name));
            }
            AstNode::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                out.push_str(&format!("{}if {}:\n", pad, self.format_expr(condition)));
                self.format_block(then_branch, depth + 1, out);
                if let Some(body) = else_branch {
                    out.push_str(&format!("{}else:\n", pad));
                    self.format_block(body, depth + 1, out);
                }
            }
            AstNode::For {
                var,
                init,
                condition,
                body,
                ..
            } => {
                let upper = match &**condition {
                    AstNode::BinaryOp { right, .. } => self.format_expr(right),
                    other => unreachable!("for-loop guard is always a comparison, got {:?}", other),
                };
                out.push_str(&format!(
                    "{}for {} in range({}, {}):\n",
                    pad,
                    var,
                    self.format_expr(init),
                    upper
                ));
                self.format_block(body, depth + 1, out);
            }
            AstNode::While {
                condition, body, ..
            } => {
                out.push_str(&format!("{}while {}:\n", pad, self.format_expr(condition)));
                self.format_block(body, depth + 1, out);
            }
            AstNode::Function {
                name, params, body, ..
            } => {
                out.push_str(&format!("{}def {}({}):\n", pad, name, format_params(params)));
                self.format_block(body, depth + 1, out);
            }
            AstNode::Class { name, fields, .. } => {
                out.push_str(&format!("{}class {}:\n", pad, name));
                self.format_initializer(fields, depth + 1, out);
            }
            AstNode::Output {
                values, newline, ..
            } => {
                let mut args: Vec<String> = values.iter().map(|v| self.format_expr(v)).collect();
                if values.len() > 1 {
                    args.push("sep=''".to_string());
                }
                args.push(if *newline { "end='\\n'" } else { "end=''" }.to_string());
                out.push_str(&format!("{}print({})\n", pad, args.join(", ")));
            }
            AstNode::Return { value, .. } => {
                out.push_str(&format!("{}return {}\n", pad, self.format_expr(value)));
            }
            expr => unreachable!("expression in statement position: {:?}", expr),
        }
    }

    fn format_block(&self, body: &[AstNode], depth: usize, out: &mut String) {
        for stmt in body {
            self.format_stmt(stmt, depth, out);
        }
    }

    /// `def __init__(self):` setting every field to zero; initializers in the
    /// class body are dropped.
    fn format_initializer(&self, fields: &[Field], depth: usize, out: &mut String) {
        let pad = self.pad(depth);
        let inner = self.pad(depth + 1);

        out.push_str(&format!("{}def __init__(self):\n", pad));
        for field in fields {
            out.push_str(&format!("{}self.{} = 0\n", inner, field.name));
        }
    }
}

fn format_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use crate::codegen::{CodegenOptions, Generator};
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::Parser;

    fn generate(source: &str) -> String {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let program = Parser::new(tokens).parse_program().unwrap();
        Generator::new(&CodegenOptions::default()).generate(&program)
    }

    #[test]
    fn test_declarations() {
        assert_eq!(generate("int x = 5;"), "x = 5\n");
        assert_eq!(generate("int x;"), "x = 0\n");
        assert_eq!(generate("float f = 2.5;"), "f = 2.5\n");
    }

    #[test]
    fn test_increment() {
        assert_eq!(generate("count++;"), "count = count + 1\n");
    }

    #[test]
    fn test_if_else() {
        assert_eq!(
            generate("if (x > 0) { y = 1; } else { y = 2; }"),
            "if x > 0:\n    y = 1\nelse:\n    y = 2\n"
        );
    }

    #[test]
    fn test_for_uses_right_operand_as_bound() {
        assert_eq!(
            generate("for (int i = a + 1; i < n * 2; i++) { s = s + i; }"),
            "for i in range(a + 1, n * 2):\n    s = s + i\n"
        );
        assert_eq!(
            generate("for (int i = 10; i > 0; i++) { s = i; }"),
            "for i in range(10, 0):\n    s = i\n"
        );
    }

    #[test]
    fn test_function() {
        assert_eq!(
            generate("int add(int a, int b) { int c = a + b; return c; }"),
            "def add(a, b):\n    c = a + b\n    return c\n"
        );
        assert_eq!(generate("int zero() { return 0; }"), "def zero():\n    return 0\n");
    }

    #[test]
    fn test_class_fields_start_at_zero() {
        assert_eq!(
            generate("class Point { int x; float y = 1.5; };"),
            "class Point:\n    def __init__(self):\n        self.x = 0\n        self.y = 0\n"
        );
    }

    #[test]
    fn test_nested_class_keeps_depth() {
        assert_eq!(
            generate("int f() { class A { int v; }; return 1; }"),
            "def f():\n    class A:\n        def __init__(self):\n            self.v = 0\n    return 1\n"
        );
    }

    #[test]
    fn test_output() {
        assert_eq!(generate("cout << x;"), "print(x, end='')\n");
        assert_eq!(generate("cout << x << endl;"), "print(x, end='\\n')\n");
        assert_eq!(
            generate("cout << \"total: \" << t << endl;"),
            "print(\"total: \", t, sep='', end='\\n')\n"
        );
        assert_eq!(generate("cout << a << b;"), "print(a, b, sep='', end='')\n");
    }
}
