use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

// ── Type descriptors ────────────────────────────────────────────────────────

/// Structural description of a documentable type.
///
/// This is the input language of the schema reflector: a small recursive sum
/// over the shapes that can appear on an API wire format. Anything that does
/// not fit is [`TypeDescriptor::Opaque`] and degrades to a generic object
/// schema rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeDescriptor {
    String,
    Integer,
    Number,
    Boolean,
    /// Ordered collection of one element type.
    Sequence(Box<TypeDescriptor>),
    /// String-keyed map of one value type.
    Mapping(Box<TypeDescriptor>),
    /// A value that may be absent. Unwrapped before schema dispatch.
    Optional(Box<TypeDescriptor>),
    Record(RecordDescriptor),
    /// Unknown or unrepresentable shape.
    Opaque,
}

impl TypeDescriptor {
    pub fn sequence(element: TypeDescriptor) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub fn mapping(value: TypeDescriptor) -> Self {
        Self::Mapping(Box::new(value))
    }

    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Optional(Box::new(inner))
    }
}

/// An ordered list of named fields. Field order is preserved all the way
/// into the generated schema's `properties` object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecordDescriptor {
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// One field of a [`RecordDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Wire-format naming metadata: the serialization name, optionally
    /// followed by comma-separated modifiers (e.g. `"user_id,omitempty"`).
    /// An empty tag or `"-"` suppresses the field entirely.
    pub tag: String,
    pub ty: TypeDescriptor,
    /// Annotation mini-language string, e.g. `"required,min=1,format=email"`.
    pub annotation: String,
    /// Free-text documentation. Wins over `description=` from the annotation.
    pub doc: String,
}

impl FieldDescriptor {
    pub fn new(tag: &str, ty: TypeDescriptor) -> Self {
        Self {
            tag: tag.to_string(),
            ty,
            annotation: String::new(),
            doc: String::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: &str) -> Self {
        self.annotation = annotation.to_string();
        self
    }

    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_string();
        self
    }

    /// The field's externally-visible name: the first tag segment, trailing
    /// modifiers ignored. `None` means the field is absent from the wire
    /// format and must not appear in generated schemas.
    pub fn wire_name(&self) -> Option<&str> {
        let name = self.tag.split(',').next().unwrap_or_default();
        if name.is_empty() || name == "-" {
            None
        } else {
            Some(name)
        }
    }
}

// ── Describe ────────────────────────────────────────────────────────────────

/// Capability interface for types that can expose their structural shape.
///
/// Primitives and std containers get impls below; record shapes are built
/// explicitly with [`RecordDescriptor::with_field`].
pub trait Describe {
    fn descriptor() -> TypeDescriptor;
}

macro_rules! impl_describe {
    ($kind:ident => $($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::$kind
                }
            }
        )*
    };
}

impl_describe!(String => String, &str);
impl_describe!(Integer => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_describe!(Number => f32, f64);
impl_describe!(Boolean => bool);

impl<T: Describe> Describe for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::descriptor())
    }
}

impl<T: Describe> Describe for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::optional(T::descriptor())
    }
}

impl<V: Describe, S> Describe for HashMap<String, V, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::mapping(V::descriptor())
    }
}

impl<V: Describe> Describe for BTreeMap<String, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::mapping(V::descriptor())
    }
}
