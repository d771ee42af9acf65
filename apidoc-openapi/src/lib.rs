pub mod annotation;
mod builder;
mod description;
pub mod schema;

pub use annotation::FieldAnnotation;
pub use builder::{build_spec, generate_openapi};
pub use description::{
    build_api_description, generate_api_description, ApiDescription, ApiEndpoint,
    RequestBodySchema, ResponseSchema,
};
pub use schema::reflect;
