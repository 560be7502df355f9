use tree_sitter::Language;

/// Grammar selection for the parser adapter. The TSX grammar is a strict
/// superset used for everything that may contain JSX; plain TypeScript
/// gets its own grammar because the TSX one mis-parses some generics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Tsx,
    TypeScript,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "js" | "jsx" | "tsx" | "mjs" | "cjs" => Some(Self::Tsx),
            "ts" => Some(Self::TypeScript),
            _ => None,
        }
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ext() {
        assert_eq!(Lang::from_ext("jsx"), Some(Lang::Tsx));
        assert_eq!(Lang::from_ext("ts"), Some(Lang::TypeScript));
        assert_eq!(Lang::from_ext("py"), None);
    }
}
