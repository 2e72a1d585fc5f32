use egui_code_editor::Syntax;

/// Resaltado para el snippet según el lenguaje declarado en la solución.
pub fn snippet_syntax(language: Option<&str>) -> Syntax {
    match language.map(str::to_ascii_lowercase).as_deref() {
        Some("python") | Some("py") => python_syntax(),
        Some("rust") | Some("rs") => rust_syntax(),
        _ => generic_syntax(),
    }
}

pub fn python_syntax() -> Syntax {
    Syntax::new("python")
        .with_comment("#")
        .with_comment_multiline(["\"\"\"", "\"\"\""])
        .with_keywords([
            "and", "as", "break", "class", "continue", "def", "del", "elif", "else", "for",
            "from", "if", "import", "in", "is", "lambda", "not", "or", "pass", "return",
            "while", "with", "yield", "None", "True", "False",
        ])
        .with_types(["int", "float", "str", "list", "dict", "set", "tuple", "bool"])
}

pub fn rust_syntax() -> Syntax {
    Syntax::new("rust")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "as", "break", "const", "continue", "else", "enum", "fn", "for", "if", "impl",
            "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
            "self", "Self", "struct", "trait", "use", "where", "while",
        ])
        .with_types([
            "i32", "i64", "u32", "u64", "usize", "f32", "f64", "bool", "char", "str", "String",
            "Vec", "Option", "HashMap",
        ])
}

/// Para snippets sin lenguaje: estilo C/Java/JS.
pub fn generic_syntax() -> Syntax {
    Syntax::new("code")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "if", "else", "for", "while", "return", "break", "continue", "function", "class",
            "new", "const", "let", "var", "public", "private", "static", "switch", "case",
        ])
        .with_types(["int", "long", "double", "float", "char", "boolean", "void", "string"])
}
