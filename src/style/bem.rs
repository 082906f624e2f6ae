//! BEM classname namespaces
//!
//! `Namespace::new("var", "button")` gives the block `var-button`;
//! `n("element")` and `n("--modifier")` build element and modifier names,
//! and a `$` prefix swaps in the bare namespace (`n("$-box")` is `var-box`).

/// Classname builder for one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    namespace: String,
    component_name: String,
    name: String,
}

impl Namespace {
    pub fn new(namespace: &str, component: &str) -> Self {
        let component_name = format!("{}-{}", namespace, component);
        let name = pascal_case(&component_name);
        Self {
            namespace: namespace.to_string(),
            component_name,
            name,
        }
    }

    /// PascalCase component name, e.g. `VarButton`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Block name, e.g. `var-button`
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn n(&self, suffix: Option<&str>) -> String {
        match suffix {
            None | Some("") => self.component_name.clone(),
            Some(s) if s.starts_with('$') => s.replacen('$', &self.namespace, 1),
            Some(s) if s.starts_with("--") => format!("{}{}", self.component_name, s),
            Some(s) => format!("{}__{}", self.component_name, s),
        }
    }
}

/// Returns a factory producing namespaces under `namespace`
pub fn create_namespace_fn(namespace: &str) -> impl Fn(&str) -> Namespace + '_ {
    move |component: &str| Namespace::new(namespace, component)
}

/// `var-date-picker` -> `VarDatePicker`
fn pascal_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
