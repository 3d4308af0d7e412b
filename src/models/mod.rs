pub mod fields;
pub mod pokemon;
pub mod timestamps;
pub mod validation;
