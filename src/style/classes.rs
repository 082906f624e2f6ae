//! Conditional classname lists

/// One entry of a classname list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassName<'a> {
    /// Always present
    Static(&'a str),
    /// `truthy` when the condition holds, otherwise `falsy` if given
    Conditional(bool, &'a str, Option<&'a str>),
}

impl<'a> From<&'a str> for ClassName<'a> {
    fn from(name: &'a str) -> Self {
        ClassName::Static(name)
    }
}

impl<'a> From<(bool, &'a str)> for ClassName<'a> {
    fn from((cond, truthy): (bool, &'a str)) -> Self {
        ClassName::Conditional(cond, truthy, None)
    }
}

impl<'a> From<(bool, &'a str, &'a str)> for ClassName<'a> {
    fn from((cond, truthy, falsy): (bool, &'a str, &'a str)) -> Self {
        ClassName::Conditional(cond, truthy, Some(falsy))
    }
}

impl<'a> ClassName<'a> {
    pub fn resolve(&self) -> Option<&'a str> {
        match *self {
            ClassName::Static(name) => Some(name),
            ClassName::Conditional(true, truthy, _) => Some(truthy),
            ClassName::Conditional(false, _, falsy) => falsy,
        }
    }
}

/// Resolve a classname list, keeping order and dropping unmet conditions
pub fn classes<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<ClassName<'a>>,
{
    items
        .into_iter()
        .filter_map(|item| item.into().resolve())
        .map(String::from)
        .collect()
}
