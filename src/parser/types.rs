use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// Reference to a type as it appears in a method signature
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub qualified_name: String,
    #[serde(default)]
    pub simple_name: Option<String>,
    #[serde(default)]
    pub type_arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            simple_name: None,
            type_arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.type_arguments = arguments;
        self
    }

    pub fn simple_name(&self) -> &str {
        self.simple_name
            .as_deref()
            .unwrap_or_else(|| simple_name_of(&self.qualified_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParameterDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub deprecated: bool,
}

impl MethodDescriptor {
    pub fn is_internal_or_deprecated(&self) -> bool {
        self.internal || self.deprecated
    }
}

/// Read-only view of one reflected type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub qualified_name: String,
    #[serde(default)]
    pub simple_name: Option<String>,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub deprecated: bool,
}

impl TypeDescriptor {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let package = package_of(&qualified_name).to_string();
        Self {
            qualified_name,
            simple_name: None,
            superclass: None,
            package,
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            comment: String::new(),
            methods: Vec::new(),
            internal: false,
            deprecated: false,
        }
    }

    pub fn simple_name(&self) -> &str {
        self.simple_name
            .as_deref()
            .unwrap_or_else(|| simple_name_of(&self.qualified_name))
    }

    /// Supertype qualified name, ignoring blank references.
    pub fn superclass_name(&self) -> Option<&str> {
        self.superclass
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn is_public_class(&self) -> bool {
        self.kind == TypeKind::Class && self.visibility == Visibility::Public
    }

    pub fn is_internal_or_deprecated(&self) -> bool {
        self.internal || self.deprecated
    }
}

/// Everything before the last dot of a qualified name.
pub fn package_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(pos) => &qualified_name[..pos],
        None => "",
    }
}

/// Last dotted segment of a qualified name.
pub fn simple_name_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(pos) => &qualified_name[pos + 1..],
        None => qualified_name,
    }
}
